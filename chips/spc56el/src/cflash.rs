// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Code flash controller (CFLASH).
//!
//! Besides program and erase control, the controller owns the platform
//! flash read path: `PFCR0` sets the wait states and the line buffer and
//! prefetch behaviour of both ports. The array runs behind the system
//! clock, so wait states must be raised before the clock goes up.
//!
//! The lock registers only accept writes after their password has been
//! written to them while the matching enable bit is clear.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::CFLASH_BASE_ADDR;
use crate::static_ref::StaticRef;

pub const NUM_UMISR: usize = 5;

/// Unlocks `LML` for writing.
pub const LML_PASSWORD: u32 = 0xA1A1_1111;
/// Unlocks `HBL` for writing.
pub const HBL_PASSWORD: u32 = 0xB2B2_2222;
/// Unlocks `SLL` for writing.
pub const SLL_PASSWORD: u32 = 0xC3C3_3333;

/// Largest value accepted by the wait state and pipelining fields.
pub const MAX_WAIT_STATES: u32 = 31;

register_structs! {
    pub CflashRegisters {
        /// Module Configuration Register
        (0x00 => pub mcr: ReadWrite<u32, MCR::Register>),
        /// Low/Mid Address Space Block Locking Register
        (0x04 => pub lml: ReadWrite<u32, LML::Register>),
        /// High Address Space Block Locking Register
        (0x08 => pub hbl: ReadWrite<u32, HBL::Register>),
        /// Secondary Low/Mid Address Space Block Locking Register
        (0x0C => pub sll: ReadWrite<u32, SLL::Register>),
        /// Low/Mid Address Space Block Select Register
        (0x10 => pub lms: ReadWrite<u32, LMS::Register>),
        /// High Address Space Block Select Register
        (0x14 => pub hbs: ReadWrite<u32, HBS::Register>),
        /// Address Register
        (0x18 => pub adr: ReadOnly<u32, ADR::Register>),
        /// Platform Flash Configuration Register 0
        (0x1C => pub pfcr0: ReadWrite<u32, PFCR0::Register>),
        /// Platform Flash Configuration Register 1
        (0x20 => pub pfcr1: ReadWrite<u32, PFCR1::Register>),
        /// Platform Flash Access Protection Register
        (0x24 => pub fapr: ReadWrite<u32, FAPR::Register>),
        (0x28 => _reserved0),
        /// User Test Registers
        (0x3C => pub ut0: ReadWrite<u32, UT0::Register>),
        (0x40 => pub ut1: ReadWrite<u32>),
        (0x44 => pub ut2: ReadWrite<u32>),
        /// User Multiple Input Signature Registers
        (0x48 => pub umisr: [ReadWrite<u32>; NUM_UMISR]),
        (0x5C => @END),
    }
}

pub const CFLASH_BASE: StaticRef<CflashRegisters> =
    unsafe { StaticRef::new(CFLASH_BASE_ADDR as *const CflashRegisters) };

register_bitfields![u32,
    pub MCR [
        EDC OFFSET(31) NUMBITS(1) [],
        SIZE OFFSET(24) NUMBITS(3) [],
        LAS OFFSET(20) NUMBITS(3) [],
        MAS OFFSET(16) NUMBITS(1) [],
        EER OFFSET(15) NUMBITS(1) [],
        RWE OFFSET(14) NUMBITS(1) [],
        PEAS OFFSET(11) NUMBITS(1) [],
        DONE OFFSET(10) NUMBITS(1) [],
        PEG OFFSET(9) NUMBITS(1) [],
        PGM OFFSET(4) NUMBITS(1) [],
        PSUS OFFSET(3) NUMBITS(1) [],
        ERS OFFSET(2) NUMBITS(1) [],
        ESUS OFFSET(1) NUMBITS(1) [],
        /// Enable high voltage, starts the program or erase
        EHV OFFSET(0) NUMBITS(1) []
    ],
    pub LML [
        LME OFFSET(31) NUMBITS(1) [],
        TSLK OFFSET(20) NUMBITS(1) [],
        MLK OFFSET(16) NUMBITS(2) [],
        LLK OFFSET(0) NUMBITS(16) []
    ],
    pub HBL [
        HBE OFFSET(31) NUMBITS(1) [],
        HBLOCK OFFSET(0) NUMBITS(8) []
    ],
    pub SLL [
        SLE OFFSET(31) NUMBITS(1) [],
        STSLK OFFSET(20) NUMBITS(1) [],
        SMK OFFSET(16) NUMBITS(2) [],
        SLK OFFSET(0) NUMBITS(16) []
    ],
    pub LMS [
        MSL OFFSET(16) NUMBITS(2) [],
        LSL OFFSET(0) NUMBITS(16) []
    ],
    pub HBS [
        HSL OFFSET(0) NUMBITS(6) []
    ],
    pub ADR [
        ADD OFFSET(3) NUMBITS(20) []
    ],
    pub PFCR0 [
        /// Address pipelining control
        B02_APC OFFSET(27) NUMBITS(5) [],
        /// Write wait state control
        B02_WWSC OFFSET(22) NUMBITS(5) [],
        /// Read wait state control
        B02_RWSC OFFSET(17) NUMBITS(5) [],
        B02_RWWC2 OFFSET(16) NUMBITS(1) [],
        B02_RWWC1 OFFSET(15) NUMBITS(1) [],
        B02_P1_BCFG OFFSET(13) NUMBITS(2) [],
        B02_P1_DPFE OFFSET(12) NUMBITS(1) [],
        B02_P1_IPFE OFFSET(11) NUMBITS(1) [],
        B02_P1_PFLM OFFSET(9) NUMBITS(2) [],
        B02_P1_BFE OFFSET(8) NUMBITS(1) [],
        B02_RWWC0 OFFSET(7) NUMBITS(1) [],
        B02_P0_BCFG OFFSET(5) NUMBITS(2) [],
        B02_P0_DPFE OFFSET(4) NUMBITS(1) [],
        B02_P0_IPFE OFFSET(3) NUMBITS(1) [],
        B02_P0_PFLM OFFSET(1) NUMBITS(2) [],
        B02_P0_BFE OFFSET(0) NUMBITS(1) []
    ],
    pub PFCR1 [
        BK1_APC OFFSET(27) NUMBITS(5) [],
        BK1_WWSC OFFSET(22) NUMBITS(5) [],
        BK1_RWSC OFFSET(17) NUMBITS(5) [],
        BK1_RWWC2 OFFSET(16) NUMBITS(1) [],
        BK1_RWWC1 OFFSET(15) NUMBITS(1) [],
        B1_P1_BFE OFFSET(8) NUMBITS(1) [],
        BK1_RWWC0 OFFSET(7) NUMBITS(1) [],
        B1_P0_BFE OFFSET(0) NUMBITS(1) []
    ],
    pub FAPR [
        ARBM OFFSET(24) NUMBITS(2) [],
        M7PFD OFFSET(23) NUMBITS(1) [],
        M6PFD OFFSET(22) NUMBITS(1) [],
        M5PFD OFFSET(21) NUMBITS(1) [],
        M4PFD OFFSET(20) NUMBITS(1) [],
        M3PFD OFFSET(19) NUMBITS(1) [],
        M2PFD OFFSET(18) NUMBITS(1) [],
        M1PFD OFFSET(17) NUMBITS(1) [],
        M0PFD OFFSET(16) NUMBITS(1) [],
        M7AP OFFSET(14) NUMBITS(2) [],
        M6AP OFFSET(12) NUMBITS(2) [],
        M5AP OFFSET(10) NUMBITS(2) [],
        M4AP OFFSET(8) NUMBITS(2) [],
        M3AP OFFSET(6) NUMBITS(2) [],
        M2AP OFFSET(4) NUMBITS(2) [],
        M1AP OFFSET(2) NUMBITS(2) [],
        M0AP OFFSET(0) NUMBITS(2) []
    ],
    pub UT0 [
        UTE OFFSET(31) NUMBITS(1) [],
        DSI OFFSET(16) NUMBITS(8) [],
        MRE OFFSET(5) NUMBITS(1) [],
        MRV OFFSET(4) NUMBITS(1) [],
        EIE OFFSET(3) NUMBITS(1) [],
        AIS OFFSET(2) NUMBITS(1) [],
        AIE OFFSET(1) NUMBITS(1) [],
        AID OFFSET(0) NUMBITS(1) []
    ]
];


#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, assert_fields};
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(CflashRegisters, pfcr0), 0x1C);
        assert_eq!(offset_of!(CflashRegisters, fapr), 0x24);
        assert_eq!(offset_of!(CflashRegisters, ut0), 0x3C);
        assert_eq!(offset_of!(CflashRegisters, umisr), 0x48);
        assert_eq!(size_of::<CflashRegisters>(), 0x5C);
        assert_eq!(CFLASH_BASE.address(), 0xC3F8_8000);
    }

    #[test]
    fn bitfields() {
        assert_eq!(
            assert_fields!(32;
                MCR::EDC, MCR::SIZE, MCR::LAS, MCR::MAS, MCR::EER, MCR::RWE, MCR::PEAS,
                MCR::DONE, MCR::PEG, MCR::PGM, MCR::PSUS, MCR::ERS, MCR::ESUS, MCR::EHV),
            0x788E_31E0
        );
        assert_eq!(assert_fields!(32; LML::LME, LML::TSLK, LML::MLK, LML::LLK), 0x7FEC_0000);
        assert_eq!(assert_fields!(32; ADR::ADD), 0xFF80_0007);
        assert_eq!(
            assert_fields!(32;
                PFCR0::B02_APC, PFCR0::B02_WWSC, PFCR0::B02_RWSC, PFCR0::B02_RWWC2,
                PFCR0::B02_RWWC1, PFCR0::B02_P1_BCFG, PFCR0::B02_P1_DPFE, PFCR0::B02_P1_IPFE,
                PFCR0::B02_P1_PFLM, PFCR0::B02_P1_BFE, PFCR0::B02_RWWC0, PFCR0::B02_P0_BCFG,
                PFCR0::B02_P0_DPFE, PFCR0::B02_P0_IPFE, PFCR0::B02_P0_PFLM, PFCR0::B02_P0_BFE),
            0
        );
        assert_eq!(
            assert_fields!(32;
                PFCR1::BK1_APC, PFCR1::BK1_WWSC, PFCR1::BK1_RWSC, PFCR1::BK1_RWWC2,
                PFCR1::BK1_RWWC1, PFCR1::B1_P1_BFE, PFCR1::BK1_RWWC0, PFCR1::B1_P0_BFE),
            0x7E7E
        );
        assert_eq!(
            assert_fields!(32; UT0::UTE, UT0::DSI, UT0::MRE, UT0::MRV, UT0::EIE, UT0::AIS,
                UT0::AIE, UT0::AID),
            0x7F00_FFC0
        );
        assert_fields!(32; HBL::HBE, HBL::HBLOCK);
        assert_fields!(32; SLL::SLE, SLL::STSLK, SLL::SMK, SLL::SLK);
        assert_fields!(32; LMS::MSL, LMS::LSL);
        assert_fields!(32; HBS::HSL);
        assert_fields!(32;
            FAPR::ARBM, FAPR::M7PFD, FAPR::M6PFD, FAPR::M5PFD, FAPR::M4PFD, FAPR::M3PFD,
            FAPR::M2PFD, FAPR::M1PFD, FAPR::M0PFD, FAPR::M7AP, FAPR::M6AP, FAPR::M5AP, FAPR::M4AP,
            FAPR::M3AP, FAPR::M2AP, FAPR::M1AP, FAPR::M0AP);
    }

    #[test]
    fn read_wait_states() {
        let flash = testing::zeroed::<CflashRegisters>();
        testing::poke(&flash.pfcr0, 0x1084_0801u32);
        flash
            .pfcr0
            .modify(PFCR0::B02_APC.val(3) + PFCR0::B02_WWSC.val(3) + PFCR0::B02_RWSC.val(3));
        assert_eq!(flash.pfcr0.read(PFCR0::B02_APC), 3);
        assert_eq!(flash.pfcr0.read(PFCR0::B02_RWSC), 3);
        assert_eq!(flash.pfcr0.get(), 0x18C6_0801);
        assert!(flash.pfcr0.is_set(PFCR0::B02_P0_BFE));
        assert!(flash.pfcr0.is_set(PFCR0::B02_P1_IPFE));
    }

    #[test]
    fn unlock_low_blocks() {
        let flash = testing::zeroed::<CflashRegisters>();
        flash.lml.set(LML_PASSWORD);
        assert!(flash.lml.is_set(LML::LME));
        assert_eq!(flash.lml.read(LML::LLK), 0x1111);
        flash.lms.write(LMS::LSL.val(0b11));
        assert_eq!(flash.lms.get(), 0x3);
    }
}
