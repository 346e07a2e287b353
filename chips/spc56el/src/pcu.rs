// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Power Control Unit (PCU).
//!
//! `PCONF[n]` selects the modes in which power domain `n` is on;
//! `PSTAT` reports which domains currently are.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::PCU_BASE_ADDR;
use crate::static_ref::StaticRef;

pub const NUM_POWER_DOMAINS: usize = 16;

register_structs! {
    pub PcuRegisters {
        /// Power Domain Configuration Registers
        (0x00 => pub pconf: [ReadWrite<u32, PCONF::Register>; NUM_POWER_DOMAINS]),
        /// Power Domain Status Register
        (0x40 => pub pstat: ReadOnly<u32, PSTAT::Register>),
        (0x44 => _reserved0),
        /// Voltage Regulator Control Register
        (0x80 => pub vctl: ReadWrite<u32, VCTL::Register>),
        (0x84 => @END),
    }
}

impl PcuRegisters {
    pub fn power_domain(&self, n: usize) -> Result<&ReadWrite<u32, PCONF::Register>, ErrorCode> {
        check_index(n, NUM_POWER_DOMAINS).map(|i| &self.pconf[i])
    }
}

pub const PCU_BASE: StaticRef<PcuRegisters> =
    unsafe { StaticRef::new(PCU_BASE_ADDR as *const PcuRegisters) };

register_bitfields![u32,
    pub PCONF [
        STBY0 OFFSET(13) NUMBITS(1) [],
        STOP0 OFFSET(10) NUMBITS(1) [],
        HALT0 OFFSET(8) NUMBITS(1) [],
        RUN3 OFFSET(7) NUMBITS(1) [],
        RUN2 OFFSET(6) NUMBITS(1) [],
        RUN1 OFFSET(5) NUMBITS(1) [],
        RUN0 OFFSET(4) NUMBITS(1) [],
        DRUN OFFSET(3) NUMBITS(1) [],
        SAFE OFFSET(2) NUMBITS(1) [],
        TEST OFFSET(1) NUMBITS(1) [],
        RST OFFSET(0) NUMBITS(1) []
    ],
    pub PSTAT [
        PD15 OFFSET(15) NUMBITS(1) [],
        PD14 OFFSET(14) NUMBITS(1) [],
        PD13 OFFSET(13) NUMBITS(1) [],
        PD12 OFFSET(12) NUMBITS(1) [],
        PD11 OFFSET(11) NUMBITS(1) [],
        PD10 OFFSET(10) NUMBITS(1) [],
        PD9 OFFSET(9) NUMBITS(1) [],
        PD8 OFFSET(8) NUMBITS(1) [],
        PD7 OFFSET(7) NUMBITS(1) [],
        PD6 OFFSET(6) NUMBITS(1) [],
        PD5 OFFSET(5) NUMBITS(1) [],
        PD4 OFFSET(4) NUMBITS(1) [],
        PD3 OFFSET(3) NUMBITS(1) [],
        PD2 OFFSET(2) NUMBITS(1) [],
        PD1 OFFSET(1) NUMBITS(1) [],
        PD0 OFFSET(0) NUMBITS(1) []
    ],
    pub VCTL [
        MASK_LVDHV5 OFFSET(16) NUMBITS(1) []
    ]
];
