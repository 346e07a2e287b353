// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Cyclic Redundancy Check unit (CRC).
//!
//! Two independent contexts. Data can be fed to `INP` as bytes,
//! halfwords or words, and the width of the store decides how many bits
//! enter the calculation, so every context register is reachable at all
//! three widths.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::CRC_BASE_ADDR;
use crate::static_ref::StaticRef;

pub const NUM_CONTEXTS: usize = 2;

/// Initial `CSTAT` value for CRC-CCITT.
pub const CCITT_SEED: u32 = 0xFFFF;
/// Initial `CSTAT` value for CRC-32.
pub const CRC32_SEED: u32 = 0xFFFF_FFFF;

register_structs! {
    pub ContextRegisters {
        /// Configuration Register
        (0x0 => pub cfg: ReadWrite<u32, CFG::Register>),
        /// Input Register
        (0x4 => pub inp: ReadWrite<u32>),
        /// Current Status Register, write the seed here
        (0x8 => pub cstat: ReadWrite<u32>),
        /// Output Register
        (0xC => pub outp: ReadOnly<u32>),
        (0x10 => @END),
    },

    pub CrcRegisters {
        (0x00 => pub context: [ContextRegisters; NUM_CONTEXTS]),
        (0x20 => @END),
    }
}

alias_views! {
    ContextRegisters {
        pub fn cfg_bytes(&self) -> &[ReadWrite<u8>; 4] = cfg as ReadWrite<u32, CFG::Register>;
        pub fn cfg_halfwords(&self) -> &[ReadWrite<u16>; 2] = cfg as ReadWrite<u32, CFG::Register>;
        /// `INP` as four byte registers; a byte store feeds 8 bits.
        pub fn inp_bytes(&self) -> &[ReadWrite<u8>; 4] = inp as ReadWrite<u32>;
        /// `INP` as two halfword registers; a halfword store feeds 16 bits.
        pub fn inp_halfwords(&self) -> &[ReadWrite<u16>; 2] = inp as ReadWrite<u32>;
        pub fn cstat_bytes(&self) -> &[ReadWrite<u8>; 4] = cstat as ReadWrite<u32>;
        pub fn cstat_halfwords(&self) -> &[ReadWrite<u16>; 2] = cstat as ReadWrite<u32>;
        pub fn outp_bytes(&self) -> &[ReadOnly<u8>; 4] = outp as ReadOnly<u32>;
        pub fn outp_halfwords(&self) -> &[ReadOnly<u16>; 2] = outp as ReadOnly<u32>;
    }
}

impl CrcRegisters {
    pub fn ctx(&self, n: usize) -> Result<&ContextRegisters, ErrorCode> {
        check_index(n, NUM_CONTEXTS).map(|i| &self.context[i])
    }
}

pub const CRC_BASE: StaticRef<CrcRegisters> =
    unsafe { StaticRef::new(CRC_BASE_ADDR as *const CrcRegisters) };

register_bitfields![u32,
    pub CFG [
        POLYG OFFSET(2) NUMBITS(2) [
            Ccitt = 0,
            Crc32 = 1
        ],
        /// Bit-swap the output
        SWAP OFFSET(1) NUMBITS(1) [],
        /// Invert the output
        INV OFFSET(0) NUMBITS(1) []
    ]
];
