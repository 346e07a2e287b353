// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Alternate-width views of register spans.
//!
//! Several blocks let the same bytes be accessed at more than one width. The
//! SIUL output latches, for example, are one byte per pad, but four of them
//! can be written with a single 32-bit store so that four pads change on the
//! same bus cycle. Both granularities are real hardware behavior, so both are
//! kept.
//!
//! A block declares the narrow shape in `register_structs!` and then adds
//! accessor methods for the other shapes with [`alias_views!`]. Each view is
//! checked at compile time:
//!
//! - the view covers exactly as many bytes as the field it reinterprets,
//! - the field offset is a multiple of the wide element alignment,
//! - the block itself is at least that aligned.
//!
//! ```rust,ignore
//! alias_views! {
//!     SiulRegisters {
//!         /// GPDO, four pads per word.
//!         pub fn gpdo_words(&self) -> &[ReadWrite<u32>; 128] =
//!             gpdo as [ReadWrite<u8, GPDO::Register>; 512];
//!     }
//! }
//! ```
//!
//! Which bits of a word belong to which narrow element depends on byte
//! order. The SPC56EL is big-endian, so element 0 of a word is its most
//! significant lane. [`byte_lane_shift`] and [`halfword_lane_shift`] give
//! the shift for the build target so host tests agree with the device.

/// Declares alternate-width accessor methods over a field of a register
/// block.
macro_rules! alias_views {
    (
        $block:ident {
            $(
                $(#[$meta:meta])*
                $vis:vis fn $view:ident(&self) -> &$wide:ty = $field:ident as $narrow:ty;
            )*
        }
    ) => {
        impl $block {
            $(
                $(#[$meta])*
                #[inline]
                $vis fn $view(&self) -> &$wide {
                    let narrow: &$narrow = &self.$field;
                    // SAFETY: both shapes are built from register cells, span
                    // the same bytes and are suitably aligned; the assertions
                    // below reject any declaration where that is not true.
                    unsafe { &*(narrow as *const $narrow).cast::<$wide>() }
                }
            )*
        }

        const _: () = {
            $(
                assert!(
                    core::mem::size_of::<$wide>() == core::mem::size_of::<$narrow>(),
                    "alias view length differs from the aliased field"
                );
                assert!(
                    core::mem::offset_of!($block, $field) % core::mem::align_of::<$wide>() == 0,
                    "aliased field is misaligned for the view"
                );
                assert!(
                    core::mem::align_of::<$block>() >= core::mem::align_of::<$wide>(),
                    "register block alignment is below the view alignment"
                );
            )*
        };
    };
}

/// Shift of byte `index` inside the 32-bit word that contains it.
pub const fn byte_lane_shift(index: usize) -> usize {
    let lane = index % 4;
    if cfg!(target_endian = "big") {
        (3 - lane) * 8
    } else {
        lane * 8
    }
}

/// Shift of halfword `index` inside the 32-bit word that contains it.
pub const fn halfword_lane_shift(index: usize) -> usize {
    let lane = index % 2;
    if cfg!(target_endian = "big") {
        (1 - lane) * 16
    } else {
        lane * 16
    }
}

/// Value of the 32-bit word holding byte `index`, with only that lane set
/// to `value`.
pub const fn byte_in_word(index: usize, value: u8) -> u32 {
    (value as u32) << byte_lane_shift(index)
}

/// Value of the 32-bit word holding halfword `index`, with only that lane
/// set to `value`.
pub const fn halfword_in_word(index: usize, value: u16) -> u32 {
    (value as u32) << halfword_lane_shift(index)
}
