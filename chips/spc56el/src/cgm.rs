// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Clock Generation Module (CGM): oscillators, the two FMPLLs, the clock
//! monitors and the system and auxiliary clock selectors/dividers.
//!
//! Each clock selector comes with four one-byte dividers that are also
//! addressable as one 32-bit register, e.g. `sc_dc[0]` is `SC_DC0` and
//! `sc_dc0_3()` is `SC_DC0_3`. On the device divider 0 is the most
//! significant byte of the word.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::CGM_BASE_ADDR;
use crate::static_ref::StaticRef;

/// Auxiliary clocks AC0..AC4.
pub const NUM_AUX_CLOCKS: usize = 5;

register_structs! {
    pub FmpllRegisters {
        /// Control Register
        (0x00 => pub cr: ReadWrite<u32, FMPLL_CR::Register>),
        /// Modulation Register
        (0x04 => pub mr: ReadWrite<u32, FMPLL_MR::Register>),
        (0x08 => _reserved0),
        (0x20 => @END),
    },

    pub CmuRegisters {
        /// Control Status Register
        (0x00 => pub csr: ReadWrite<u32, CMU_CSR::Register>),
        /// Frequency Display Register
        (0x04 => pub fdr: ReadOnly<u32, CMU_FDR::Register>),
        /// High Frequency Reference Register
        (0x08 => pub hfrefr: ReadWrite<u32, CMU_HFREFR::Register>),
        /// Low Frequency Reference Register
        (0x0C => pub lfrefr: ReadWrite<u32, CMU_LFREFR::Register>),
        /// Interrupt Status Register
        (0x10 => pub isr: ReadWrite<u32, CMU_ISR::Register>),
        (0x14 => _reserved0),
        /// Measurement Duration Register
        (0x18 => pub mdr: ReadWrite<u32, CMU_MDR::Register>),
        (0x1C => _reserved1),
        (0x20 => @END),
    },

    pub AuxClockRegisters {
        /// Auxiliary Clock Select Control
        (0x00 => pub sc: ReadWrite<u32, SC::Register>),
        /// Auxiliary Clock Dividers 0..3
        (0x04 => pub dc: [ReadWrite<u8, DC::Register>; 4]),
        (0x08 => @END),
    },

    pub CgmRegisters {
        /// Crystal Oscillator Control Register
        (0x000 => pub osc_ctl: ReadWrite<u32, OSC_CTL::Register>),
        (0x004 => _reserved0),
        /// IRC Oscillator Control Register
        (0x060 => pub rc_ctl: ReadWrite<u32, RC_CTL::Register>),
        (0x064 => _reserved1),
        /// FMPLL_0 (system) and FMPLL_1 (motor control)
        (0x0A0 => pub fmpll: [FmpllRegisters; 2]),
        (0x0E0 => _reserved2),
        /// Clock Monitor Units 0..2
        (0x100 => pub cmu: [CmuRegisters; 3]),
        (0x160 => _reserved3),
        /// Output Clock Enable
        (0x370 => pub oc_en: ReadWrite<u32, OC_EN::Register>),
        /// Output Clock Division and Source Select
        (0x374 => pub ocds_sc: ReadWrite<u32, OCDS_SC::Register>),
        /// System Clock Select Status
        (0x378 => pub sc_ss: ReadOnly<u32, SC_SS::Register>),
        /// System Clock Dividers 0..2 (3 is reserved)
        (0x37C => pub sc_dc: [ReadWrite<u8, DC::Register>; 4]),
        /// Auxiliary Clocks 0..4
        (0x380 => pub ac: [AuxClockRegisters; NUM_AUX_CLOCKS]),
        (0x3A8 => _reserved4),
        (0x400 => @END),
    }
}

alias_views! {
    AuxClockRegisters {
        /// `ACn_DC0_3`, all four dividers in one access.
        pub fn dc0_3(&self) -> &ReadWrite<u32, DC0_3::Register> =
            dc as [ReadWrite<u8, DC::Register>; 4];
    }
}

alias_views! {
    CgmRegisters {
        /// `SC_DC0_3`, all system clock dividers in one access.
        pub fn sc_dc0_3(&self) -> &ReadWrite<u32, DC0_3::Register> =
            sc_dc as [ReadWrite<u8, DC::Register>; 4];
    }
}

impl CgmRegisters {
    /// Selector and dividers of auxiliary clock `n`.
    pub fn aux_clock(&self, n: usize) -> Result<&AuxClockRegisters, ErrorCode> {
        check_index(n, NUM_AUX_CLOCKS).map(|i| &self.ac[i])
    }
}

pub const CGM_BASE: StaticRef<CgmRegisters> =
    unsafe { StaticRef::new(CGM_BASE_ADDR as *const CgmRegisters) };

/// FMPLL output frequency for a reference `fin`, given the `CR` divider
/// fields: `fin * NDIV / (IDF + 1) / 2^(ODF + 1)`.
///
/// Divider values wider than their `CR` field, or a result that does not
/// fit in 32 bits, give `INVAL`.
pub const fn fmpll_output(fin: u32, idf: u32, ndiv: u32, odf: u32) -> Result<u32, ErrorCode> {
    if idf > 0xF || ndiv > 0x7F || odf > 0x3 {
        return Err(ErrorCode::INVAL);
    }
    let vco = (fin as u64) * (ndiv as u64) / (idf as u64 + 1);
    let out = vco >> (odf + 1);
    if out > u32::MAX as u64 {
        Err(ErrorCode::INVAL)
    } else {
        Ok(out as u32)
    }
}

register_bitfields![u32,
    pub OSC_CTL [
        /// Crystal oscillator bypass, the EXTAL pin drives the clock
        OSCBYP OFFSET(31) NUMBITS(1) [],
        /// End of count value for the stabilization counter
        EOCV OFFSET(16) NUMBITS(8) [],
        M_OSC OFFSET(15) NUMBITS(1) [],
        OSCDIV OFFSET(8) NUMBITS(5) [],
        I_OSC OFFSET(7) NUMBITS(1) []
    ],
    pub RC_CTL [
        RCTRIM OFFSET(16) NUMBITS(6) [],
        RCDIV OFFSET(8) NUMBITS(5) []
    ],
    pub FMPLL_CR [
        /// Input division factor
        IDF OFFSET(26) NUMBITS(4) [],
        /// Output division factor, divides by 2^(ODF+1)
        ODF OFFSET(24) NUMBITS(2) [],
        /// Loop division factor
        NDIV OFFSET(16) NUMBITS(7) [],
        EN_PLL_SW OFFSET(8) NUMBITS(1) [],
        MODE OFFSET(7) NUMBITS(1) [],
        UNLOCK_ONCE OFFSET(6) NUMBITS(1) [],
        I_LOCK OFFSET(4) NUMBITS(1) [],
        S_LOCK OFFSET(3) NUMBITS(1) [],
        PLL_FAIL_MASK OFFSET(2) NUMBITS(1) [],
        PLL_FAIL_FLAG OFFSET(1) NUMBITS(1) []
    ],
    pub FMPLL_MR [
        STRB_BYPASS OFFSET(31) NUMBITS(1) [],
        SPRD_SEL OFFSET(29) NUMBITS(1) [],
        MOD_PERIOD OFFSET(16) NUMBITS(13) [],
        FM_EN OFFSET(15) NUMBITS(1) [],
        INC_STEP OFFSET(0) NUMBITS(15) []
    ],
    pub CMU_CSR [
        SFM OFFSET(23) NUMBITS(1) [],
        CLKSEL1 OFFSET(8) NUMBITS(2) [],
        RCDIV OFFSET(1) NUMBITS(2) [],
        CME_A OFFSET(0) NUMBITS(1) []
    ],
    pub CMU_FDR [
        FD OFFSET(0) NUMBITS(20) []
    ],
    pub CMU_HFREFR [
        HFREF_A OFFSET(0) NUMBITS(12) []
    ],
    pub CMU_LFREFR [
        LFREF_A OFFSET(0) NUMBITS(12) []
    ],
    pub CMU_ISR [
        FLCI OFFSET(3) NUMBITS(1) [],
        FHHI OFFSET(2) NUMBITS(1) [],
        FLLI OFFSET(1) NUMBITS(1) [],
        OLRI OFFSET(0) NUMBITS(1) []
    ],
    pub CMU_MDR [
        MD OFFSET(0) NUMBITS(20) []
    ],
    pub OC_EN [
        EN OFFSET(0) NUMBITS(1) []
    ],
    pub OCDS_SC [
        SELDIV OFFSET(28) NUMBITS(2) [],
        SELCTL OFFSET(24) NUMBITS(4) []
    ],
    pub SC_SS [
        SELSTAT OFFSET(24) NUMBITS(4) []
    ],
    /// Clock source select, shared by the auxiliary clock selectors.
    pub SC [
        SELCTL OFFSET(24) NUMBITS(4) [
            Irc = 0,
            Xosc = 1,
            Fmpll0 = 4,
            Fmpll1 = 5
        ]
    ],
    pub DC0_3 [
        DE0 OFFSET(31) NUMBITS(1) [],
        DIV0 OFFSET(24) NUMBITS(4) [],
        DE1 OFFSET(23) NUMBITS(1) [],
        DIV1 OFFSET(16) NUMBITS(4) [],
        DE2 OFFSET(15) NUMBITS(1) [],
        DIV2 OFFSET(8) NUMBITS(4) [],
        DE3 OFFSET(7) NUMBITS(1) [],
        DIV3 OFFSET(0) NUMBITS(4) []
    ]
];

register_bitfields![u8,
    /// One clock divider. The output is the input divided by `DIV + 1`.
    pub DC [
        /// Divider enable
        DE OFFSET(7) NUMBITS(1) [],
        DIV OFFSET(0) NUMBITS(4) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::byte_in_word;
    use crate::chip_config::{Device, Spc56elConfig};
    use crate::testing::{self, assert_fields};
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};

    #[test]
    fn layout() {
        assert_eq!(size_of::<FmpllRegisters>(), 0x20);
        assert_eq!(size_of::<CmuRegisters>(), 0x20);
        assert_eq!(size_of::<AuxClockRegisters>(), 0x08);
        assert_eq!(offset_of!(CgmRegisters, rc_ctl), 0x060);
        assert_eq!(offset_of!(CgmRegisters, fmpll), 0x0A0);
        assert_eq!(offset_of!(CgmRegisters, cmu), 0x100);
        assert_eq!(offset_of!(CgmRegisters, oc_en), 0x370);
        assert_eq!(offset_of!(CgmRegisters, sc_ss), 0x378);
        assert_eq!(offset_of!(CgmRegisters, sc_dc), 0x37C);
        assert_eq!(offset_of!(CgmRegisters, ac), 0x380);
        assert_eq!(size_of::<CgmRegisters>(), 0x400);

        let cgm = testing::zeroed::<CgmRegisters>();
        assert_eq!(testing::offset_in(&*cgm, &cgm.fmpll[1].cr), 0x0C0);
        assert_eq!(testing::offset_in(&*cgm, &cgm.fmpll[1].mr), 0x0C4);
        assert_eq!(testing::offset_in(&*cgm, &cgm.ac[2].sc), 0x390);
        assert_eq!(testing::offset_in(&*cgm, &cgm.ac[4].dc), 0x3A4);
        assert_eq!(CGM_BASE.address(), 0xC3FE_0000);
    }

    #[test]
    fn bitfields() {
        assert_fields!(32;
            DC0_3::DE0, DC0_3::DIV0, DC0_3::DE1, DC0_3::DIV1,
            DC0_3::DE2, DC0_3::DIV2, DC0_3::DE3, DC0_3::DIV3);
        assert_eq!(assert_fields!(8; DC::DE, DC::DIV), 0x70);
        assert_fields!(32;
            FMPLL_CR::IDF, FMPLL_CR::ODF, FMPLL_CR::NDIV, FMPLL_CR::EN_PLL_SW,
            FMPLL_CR::MODE, FMPLL_CR::UNLOCK_ONCE, FMPLL_CR::I_LOCK,
            FMPLL_CR::S_LOCK, FMPLL_CR::PLL_FAIL_MASK, FMPLL_CR::PLL_FAIL_FLAG);
        assert_fields!(32;
            FMPLL_MR::STRB_BYPASS, FMPLL_MR::SPRD_SEL, FMPLL_MR::MOD_PERIOD,
            FMPLL_MR::FM_EN, FMPLL_MR::INC_STEP);
        assert_fields!(32;
            OSC_CTL::OSCBYP, OSC_CTL::EOCV, OSC_CTL::M_OSC, OSC_CTL::OSCDIV, OSC_CTL::I_OSC);
        assert_fields!(32; RC_CTL::RCTRIM, RC_CTL::RCDIV);
        assert_fields!(32; CMU_CSR::SFM, CMU_CSR::CLKSEL1, CMU_CSR::RCDIV, CMU_CSR::CME_A);
        assert_fields!(32; CMU_FDR::FD);
        assert_fields!(32; CMU_HFREFR::HFREF_A);
        assert_fields!(32; CMU_LFREFR::LFREF_A);
        assert_fields!(32; CMU_ISR::FLCI, CMU_ISR::FHHI, CMU_ISR::FLLI, CMU_ISR::OLRI);
        assert_fields!(32; CMU_MDR::MD);
        assert_fields!(32; OC_EN::EN);
        assert_fields!(32; OCDS_SC::SELDIV, OCDS_SC::SELCTL);
        assert_fields!(32; SC_SS::SELSTAT);
        assert_fields!(32; SC::SELCTL);
    }

    #[test]
    fn divider_byte_and_word_views() {
        let cgm = testing::zeroed::<CgmRegisters>();
        // System clock divider 0: enabled, divide by 2.
        cgm.sc_dc[0].write(DC::DE::SET + DC::DIV.val(1));
        assert_eq!(cgm.sc_dc0_3().get(), byte_in_word(0, 0x81));

        // Both dividers of AC0 written as one word.
        let ac0 = cgm.aux_clock(0).unwrap();
        ac0.dc0_3().set(byte_in_word(0, 0x80) | byte_in_word(1, 0x83));
        assert_eq!(ac0.dc[0].read(DC::DE), 1);
        assert_eq!(ac0.dc[0].read(DC::DIV), 0);
        assert_eq!(ac0.dc[1].read(DC::DIV), 3);
        assert_eq!(ac0.dc[2].get(), 0);
        assert_eq!(cgm.aux_clock(5).err(), Some(ErrorCode::INVAL));
    }

    #[test]
    #[cfg(target_endian = "big")]
    fn word_fields_match_device_lanes() {
        let cgm = testing::zeroed::<CgmRegisters>();
        cgm.sc_dc0_3().write(DC0_3::DE0::SET + DC0_3::DIV0.val(1));
        assert_eq!(cgm.sc_dc[0].get(), 0x81);
    }

    #[test]
    fn pll_output() {
        // 40 MHz crystal, IDF=3, NDIV=48, ODF=1: 120 MHz system clock.
        assert_eq!(fmpll_output(Device::XOSC_FREQ, 3, 48, 1), Ok(120_000_000));
        assert_eq!(fmpll_output(Device::XOSC_FREQ, 0, 32, 2), Ok(160_000_000));
        assert_eq!(fmpll_output(Device::IRC_FREQ, 0, 64, 3), Ok(64_000_000));
    }

    #[test]
    fn pll_dividers_out_of_field() {
        assert_eq!(fmpll_output(Device::XOSC_FREQ, 3, 48, 63), Err(ErrorCode::INVAL));
        assert_eq!(fmpll_output(Device::XOSC_FREQ, 3, 48, 4), Err(ErrorCode::INVAL));
        assert_eq!(fmpll_output(Device::XOSC_FREQ, 16, 48, 1), Err(ErrorCode::INVAL));
        assert_eq!(fmpll_output(Device::XOSC_FREQ, 3, 128, 1), Err(ErrorCode::INVAL));
        assert_eq!(fmpll_output(u32::MAX, 0, 127, 0), Err(ErrorCode::INVAL));
        assert_eq!(fmpll_output(Device::XOSC_FREQ, 0xF, 0x7F, 0x3), Ok(19_843_750));
    }
}
