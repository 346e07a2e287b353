// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System Status and Configuration Module (SSCM).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::SSCM_BASE_ADDR;
use crate::static_ref::StaticRef;

register_structs! {
    pub SscmRegisters {
        /// System Status Register
        (0x00 => pub status: ReadOnly<u16, STATUS::Register>),
        /// System Memory Configuration Register
        (0x02 => pub memconfig: ReadOnly<u16, MEMCONFIG::Register>),
        (0x04 => _reserved0),
        /// Error Configuration Register
        (0x06 => pub error: ReadWrite<u16, ERROR::Register>),
        /// Debug Status Port Register
        (0x08 => pub debugport: ReadWrite<u16, DEBUGPORT::Register>),
        (0x0A => _reserved1),
        /// Password Comparison Register High Word
        (0x0C => pub pwcmph: ReadWrite<u32>),
        /// Password Comparison Register Low Word
        (0x10 => pub pwcmpl: ReadWrite<u32>),
        (0x14 => @END),
    }
}

pub const SSCM_BASE: StaticRef<SscmRegisters> =
    unsafe { StaticRef::new(SSCM_BASE_ADDR as *const SscmRegisters) };

register_bitfields![u16,
    pub STATUS [
        /// Lock-step mode, clear in decoupled parallel mode
        LSM OFFSET(15) NUMBITS(1) [],
        NXEN OFFSET(11) NUMBITS(1) [],
        PUB OFFSET(10) NUMBITS(1) [],
        SEC OFFSET(9) NUMBITS(1) [],
        /// Device boot mode
        BMODE OFFSET(5) NUMBITS(3) [],
        ABD OFFSET(3) NUMBITS(1) []
    ],
    pub MEMCONFIG [
        SRAMSIZE OFFSET(11) NUMBITS(5) [],
        IFLASHSIZE OFFSET(6) NUMBITS(5) [],
        IVLD OFFSET(5) NUMBITS(1) [],
        DFLASHSIZE OFFSET(1) NUMBITS(4) [],
        DVLD OFFSET(0) NUMBITS(1) []
    ],
    pub ERROR [
        /// Peripheral bus abort enable
        PAE OFFSET(1) NUMBITS(1) [],
        /// Register bus abort enable
        RAE OFFSET(0) NUMBITS(1) []
    ],
    pub DEBUGPORT [
        DEBUG_MODE OFFSET(0) NUMBITS(3) []
    ]
];
