// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Handle to a register block at a fixed physical address.

use core::ops::Deref;
use core::ptr::NonNull;

/// A pointer to a memory mapped register block that lives for the whole
/// program.
///
/// The dereference is deferred until use, so a `StaticRef` can sit in a
/// `const` even though the address has no allocation at compile time. All
/// the unsafety of naming an address is taken once, in [`StaticRef::new`].
#[derive(Debug)]
pub struct StaticRef<T> {
    ptr: NonNull<T>,
}

impl<T> StaticRef<T> {
    /// Create a new `StaticRef` from a raw pointer.
    ///
    /// ## Safety
    ///
    /// `ptr` must be non-null, aligned for `T` and point to memory that is a
    /// valid `T` for the rest of the program. For MMIO this means the
    /// address must be the documented base of a block whose layout is `T`.
    pub const unsafe fn new(ptr: *const T) -> StaticRef<T> {
        StaticRef {
            // SAFETY: the caller promises `ptr` is non-null.
            ptr: unsafe { NonNull::new_unchecked(ptr.cast_mut()) },
        }
    }

    /// Address the handle points at.
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const()
    }

    /// Absolute bus address of the block.
    pub fn address(&self) -> usize {
        self.as_ptr() as usize
    }
}

impl<T> Clone for StaticRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StaticRef<T> {}

impl<T> PartialEq for StaticRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for StaticRef<T> {}

impl<T> Deref for StaticRef<T> {
    type Target = T;
    fn deref(&self) -> &T {
        // SAFETY: validity for the program duration was promised by the
        // caller of `StaticRef::new`.
        unsafe { self.ptr.as_ref() }
    }
}

#[cfg(test)]
mod tests {
    use super::StaticRef;

    #[test]
    fn address_is_preserved() {
        const REG: StaticRef<u32> = unsafe { StaticRef::new(0xC3F9_0000 as *const u32) };
        assert_eq!(REG.address(), 0xC3F9_0000);
        let copy = REG;
        assert!(copy == REG);
    }

    #[test]
    fn deref_reads_backing_memory() {
        let backing = std::boxed::Box::new(0x1234_5678u32);
        let handle = unsafe { StaticRef::new(&*backing as *const u32) };
        assert_eq!(*handle, 0x1234_5678);
    }
}
