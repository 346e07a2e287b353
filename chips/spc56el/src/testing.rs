// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Host-side helpers for the layout tests.

use std::alloc::{alloc_zeroed, Layout};
use std::boxed::Box;

/// Zero-filled memory shaped like a register block.
///
/// The register cell types are plain integers inside `UnsafeCell`, so all
/// zeroes is a valid value for every block.
pub(crate) fn zeroed<T>() -> Box<T> {
    let layout = Layout::new::<T>();
    assert!(layout.size() > 0);
    unsafe {
        let ptr = alloc_zeroed(layout).cast::<T>();
        assert!(!ptr.is_null(), "allocation failed");
        Box::from_raw(ptr)
    }
}

/// Byte offset of `field` from the start of `block`.
pub(crate) fn offset_in<B, F>(block: &B, field: &F) -> usize {
    (field as *const F as usize) - (block as *const B as usize)
}

/// Stores `value` into a register the way the hardware would, bypassing the
/// access restrictions of read-only cells.
pub(crate) fn poke<R, V: Copy>(reg: &R, value: V) {
    assert_eq!(core::mem::size_of::<R>(), core::mem::size_of::<V>());
    // SAFETY: register cells are `UnsafeCell`s of plain integers of the
    // checked size.
    unsafe {
        let cell = &*(reg as *const R).cast::<core::cell::UnsafeCell<V>>();
        core::ptr::write_volatile(cell.get(), value);
    }
}

/// Positioned mask of a bit-field, widened to 64 bits.
macro_rules! field_mask {
    ($field:expr) => {{
        let field = $field;
        u64::from(field.mask) << field.shift
    }};
}

/// Checks that the named fields of one register are non-empty, contiguous,
/// inside the register width and pairwise disjoint. Returns the bits left
/// for reserved padding.
pub(crate) fn check_fields(width: u32, fields: &[u64]) -> u64 {
    let full = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
    let mut used = 0u64;
    for (i, &mask) in fields.iter().enumerate() {
        assert_ne!(mask, 0, "field {} is empty", i);
        assert_eq!(mask & !full, 0, "field {} exceeds {} bits", i, width);
        let normalized = mask >> mask.trailing_zeros();
        assert_eq!(
            normalized & (normalized + 1),
            0,
            "field {} is not contiguous",
            i
        );
        assert_eq!(used & mask, 0, "field {} overlaps an earlier field", i);
        used |= mask;
    }
    full & !used
}

/// `check_fields` over a list of `register_bitfields!` fields.
macro_rules! assert_fields {
    ($width:expr; $($field:expr),+ $(,)?) => {
        crate::testing::check_fields($width, &[$(crate::testing::field_mask!($field)),+])
    };
}

pub(crate) use {assert_fields, field_mask};
