// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Software Watchdog Timer (SWT), one per core.
//!
//! The configuration is soft-locked out of reset. Writing
//! [`UNLOCK_KEY_1`] then [`UNLOCK_KEY_2`] to `SR` clears the soft lock;
//! the watchdog is then serviced by writing [`SERVICE_KEY_1`] then
//! [`SERVICE_KEY_2`], or in keyed service mode the two values produced by
//! [`next_service_key`] from `SK`.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::{Core, SWT_BASE_ADDR};
use crate::static_ref::StaticRef;

pub const UNLOCK_KEY_1: u32 = 0xC520;
pub const UNLOCK_KEY_2: u32 = 0xD928;
pub const SERVICE_KEY_1: u32 = 0xA602;
pub const SERVICE_KEY_2: u32 = 0xB480;

register_structs! {
    pub SwtRegisters {
        /// Control Register
        (0x00 => pub cr: ReadWrite<u32, CR::Register>),
        /// Interrupt Register, write 1 to clear
        (0x04 => pub ir: ReadWrite<u32, IR::Register>),
        /// Time-out Register
        (0x08 => pub to: ReadWrite<u32>),
        /// Window Register
        (0x0C => pub wn: ReadWrite<u32>),
        /// Service Register
        (0x10 => pub sr: ReadWrite<u32, SR::Register>),
        /// Counter Output Register
        (0x14 => pub co: ReadOnly<u32>),
        /// Service Key Register
        (0x18 => pub sk: ReadWrite<u32, SK::Register>),
        (0x1C => @END),
    }
}

/// Key expected after `key` in keyed service mode.
pub const fn next_service_key(key: u16) -> u16 {
    key.wrapping_mul(17).wrapping_add(3)
}

pub const SWT_BASE: [StaticRef<SwtRegisters>; 2] = unsafe {
    [
        StaticRef::new(SWT_BASE_ADDR[0] as *const SwtRegisters),
        StaticRef::new(SWT_BASE_ADDR[1] as *const SwtRegisters),
    ]
};

/// The watchdog of `core`.
pub const fn swt_base(core: Core) -> StaticRef<SwtRegisters> {
    SWT_BASE[core.index()]
}

register_bitfields![u32,
    pub CR [
        MAP0 OFFSET(31) NUMBITS(1) [],
        MAP1 OFFSET(30) NUMBITS(1) [],
        MAP2 OFFSET(29) NUMBITS(1) [],
        MAP3 OFFSET(28) NUMBITS(1) [],
        MAP4 OFFSET(27) NUMBITS(1) [],
        MAP5 OFFSET(26) NUMBITS(1) [],
        MAP6 OFFSET(25) NUMBITS(1) [],
        MAP7 OFFSET(24) NUMBITS(1) [],
        /// Keyed service mode
        KEY OFFSET(9) NUMBITS(1) [],
        /// Reset on invalid access
        RIA OFFSET(8) NUMBITS(1) [],
        /// Window mode
        WND OFFSET(7) NUMBITS(1) [],
        /// Interrupt then reset
        ITR OFFSET(6) NUMBITS(1) [],
        /// Hard lock, cleared only by reset
        HLK OFFSET(5) NUMBITS(1) [],
        /// Soft lock
        SLK OFFSET(4) NUMBITS(1) [],
        /// Clock select, set for the oscillator
        CSL OFFSET(3) NUMBITS(1) [],
        STP OFFSET(2) NUMBITS(1) [],
        FRZ OFFSET(1) NUMBITS(1) [],
        /// Watchdog enable
        WEN OFFSET(0) NUMBITS(1) []
    ],
    pub IR [
        TIF OFFSET(0) NUMBITS(1) []
    ],
    pub SR [
        WSC OFFSET(0) NUMBITS(16) []
    ],
    pub SK [
        SK OFFSET(0) NUMBITS(16) []
    ]
];
