// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Reset Generation Module (RGM).
//!
//! Functional (`F*`) and destructive (`D*`) reset event flags, each with
//! its own disable, alternate-reaction and short-sequence registers. The
//! status flags are cleared by writing 1s; boot code clears both status
//! registers with [`CLEAR_ALL`].

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::RGM_BASE_ADDR;
use crate::static_ref::StaticRef;

/// Write-1-to-clear value covering every flag of `FES` or `DES`.
pub const CLEAR_ALL: u16 = 0xFFFF;

register_structs! {
    pub RgmRegisters {
        /// Functional Event Status Register
        (0x00 => pub fes: ReadWrite<u16, FES::Register>),
        /// Destructive Event Status Register
        (0x02 => pub des: ReadWrite<u16, DES::Register>),
        /// Functional Event Reset Disable Register
        (0x04 => pub ferd: ReadWrite<u16, FERD::Register>),
        /// Destructive Event Reset Disable Register
        (0x06 => pub derd: ReadWrite<u16, DERD::Register>),
        (0x08 => _reserved0),
        /// Functional Event Alternate Request Register
        (0x10 => pub fear: ReadWrite<u16, FEAR::Register>),
        /// Destructive Event Alternate Request Register
        (0x12 => pub dear: ReadWrite<u16, DEAR::Register>),
        (0x14 => _reserved1),
        /// Functional Event Short Sequence Register
        (0x18 => pub fess: ReadWrite<u16, FESS::Register>),
        /// STANDBY Reset Sequence Register
        (0x1A => pub stdby: ReadWrite<u16, STDBY::Register>),
        /// Functional Bidirectional Reset Enable Register
        (0x1C => pub fbre: ReadWrite<u16, FBRE::Register>),
        (0x1E => @END),
    }
}

pub const RGM_BASE: StaticRef<RgmRegisters> =
    unsafe { StaticRef::new(RGM_BASE_ADDR as *const RgmRegisters) };

register_bitfields![u16,
    pub FES [
        F_EXR OFFSET(15) NUMBITS(1) [],
        F_CMU1_FHL OFFSET(11) NUMBITS(1) [],
        F_PLL1 OFFSET(9) NUMBITS(1) [],
        F_FLASH OFFSET(8) NUMBITS(1) [],
        F_LVD45 OFFSET(7) NUMBITS(1) [],
        F_CMU0_FHL OFFSET(6) NUMBITS(1) [],
        F_CMU0_OLR OFFSET(5) NUMBITS(1) [],
        F_PLL0 OFFSET(4) NUMBITS(1) [],
        F_CHKSTOP OFFSET(3) NUMBITS(1) [],
        F_SOFT OFFSET(2) NUMBITS(1) [],
        F_CORE OFFSET(1) NUMBITS(1) [],
        F_JTAG OFFSET(0) NUMBITS(1) []
    ],
    pub DES [
        POR OFFSET(15) NUMBITS(1) [],
        F_COMP OFFSET(7) NUMBITS(1) [],
        F_LVD27_IO OFFSET(6) NUMBITS(1) [],
        F_LVD27_FLASH OFFSET(5) NUMBITS(1) [],
        F_LVD27_VREG OFFSET(4) NUMBITS(1) [],
        F_LVD27 OFFSET(3) NUMBITS(1) [],
        F_SWT OFFSET(2) NUMBITS(1) [],
        F_LVD12_PD1 OFFSET(1) NUMBITS(1) [],
        F_LVD12_PD0 OFFSET(0) NUMBITS(1) []
    ],
    pub FERD [
        D_EXR OFFSET(15) NUMBITS(1) [],
        D_CMU1_FHL OFFSET(11) NUMBITS(1) [],
        D_PLL1 OFFSET(9) NUMBITS(1) [],
        D_FLASH OFFSET(8) NUMBITS(1) [],
        D_LVD45 OFFSET(7) NUMBITS(1) [],
        D_CMU0_FHL OFFSET(6) NUMBITS(1) [],
        D_CMU0_OLR OFFSET(5) NUMBITS(1) [],
        D_PLL0 OFFSET(4) NUMBITS(1) [],
        D_CHKSTOP OFFSET(3) NUMBITS(1) [],
        D_SOFT OFFSET(2) NUMBITS(1) [],
        D_CORE OFFSET(1) NUMBITS(1) [],
        D_JTAG OFFSET(0) NUMBITS(1) []
    ],
    pub DERD [
        D_COMP OFFSET(7) NUMBITS(1) [],
        D_LVD27_IO OFFSET(6) NUMBITS(1) [],
        D_LVD27_FLASH OFFSET(5) NUMBITS(1) [],
        D_LVD27_VREG OFFSET(4) NUMBITS(1) [],
        D_LVD27 OFFSET(3) NUMBITS(1) [],
        D_SWT OFFSET(2) NUMBITS(1) [],
        D_LVD12_PD1 OFFSET(1) NUMBITS(1) [],
        D_LVD12_PD0 OFFSET(0) NUMBITS(1) []
    ],
    pub FEAR [
        AR_CMU1_FHL OFFSET(11) NUMBITS(1) [],
        AR_PLL1 OFFSET(9) NUMBITS(1) [],
        AR_FLASH OFFSET(8) NUMBITS(1) [],
        AR_LVD45 OFFSET(7) NUMBITS(1) [],
        AR_CMU0_FHL OFFSET(6) NUMBITS(1) [],
        AR_CMU0_OLR OFFSET(5) NUMBITS(1) [],
        AR_PLL0 OFFSET(4) NUMBITS(1) [],
        AR_CHKSTOP OFFSET(3) NUMBITS(1) [],
        AR_SOFT OFFSET(2) NUMBITS(1) [],
        AR_CORE OFFSET(1) NUMBITS(1) [],
        AR_JTAG OFFSET(0) NUMBITS(1) []
    ],
    pub DEAR [
        AR_COMP OFFSET(7) NUMBITS(1) [],
        AR_LVD27_IO OFFSET(6) NUMBITS(1) [],
        AR_LVD27_FLASH OFFSET(5) NUMBITS(1) [],
        AR_LVD27_VREG OFFSET(4) NUMBITS(1) [],
        AR_LVD27 OFFSET(3) NUMBITS(1) [],
        AR_SWT OFFSET(2) NUMBITS(1) [],
        AR_LVD12_PD1 OFFSET(1) NUMBITS(1) [],
        AR_LVD12_PD0 OFFSET(0) NUMBITS(1) []
    ],
    pub FESS [
        SS_CMU1_FHL OFFSET(11) NUMBITS(1) [],
        SS_PLL1 OFFSET(9) NUMBITS(1) [],
        SS_FLASH OFFSET(8) NUMBITS(1) [],
        SS_LVD45 OFFSET(7) NUMBITS(1) [],
        SS_CMU0_FHL OFFSET(6) NUMBITS(1) [],
        SS_CMU0_OLR OFFSET(5) NUMBITS(1) [],
        SS_PLL0 OFFSET(4) NUMBITS(1) [],
        SS_CHKSTOP OFFSET(3) NUMBITS(1) [],
        SS_SOFT OFFSET(2) NUMBITS(1) [],
        SS_CORE OFFSET(1) NUMBITS(1) [],
        SS_JTAG OFFSET(0) NUMBITS(1) []
    ],
    pub STDBY [
        BOOT OFFSET(7) NUMBITS(1) [],
        DRUND_FLA OFFSET(2) NUMBITS(1) [],
        DRUNC_FLA OFFSET(0) NUMBITS(1) []
    ],
    pub FBRE [
        BE_CMU1_FHL OFFSET(11) NUMBITS(1) [],
        BE_PLL1 OFFSET(9) NUMBITS(1) [],
        BE_FLASH OFFSET(8) NUMBITS(1) [],
        BE_LVD45 OFFSET(7) NUMBITS(1) [],
        BE_CMU0_FHL OFFSET(6) NUMBITS(1) [],
        BE_CMU0_OLR OFFSET(5) NUMBITS(1) [],
        BE_PLL0 OFFSET(4) NUMBITS(1) [],
        BE_CHKSTOP OFFSET(3) NUMBITS(1) [],
        BE_SOFT OFFSET(2) NUMBITS(1) [],
        BE_CORE OFFSET(1) NUMBITS(1) [],
        BE_JTAG OFFSET(0) NUMBITS(1) []
    ]
];
