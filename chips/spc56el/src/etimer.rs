// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Enhanced Motor Control Timers eTimer_0, eTimer_1 and eTimer_2.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::ETIMER_BASE_ADDR;
use crate::static_ref::StaticRef;

/// Counter channels implemented per module. The layout reserves room for
/// eight.
pub const NUM_CHANNELS: usize = 6;

pub const NUM_DMA_REQUESTS: usize = 4;

register_structs! {
    pub ChannelRegisters {
        /// Compare Registers 1 and 2
        (0x00 => pub comp1: ReadWrite<u16>),
        (0x02 => pub comp2: ReadWrite<u16>),
        /// Capture Registers 1 and 2
        (0x04 => pub capt1: ReadOnly<u16>),
        (0x06 => pub capt2: ReadOnly<u16>),
        /// Load Register
        (0x08 => pub load: ReadWrite<u16>),
        /// Hold Register
        (0x0A => pub hold: ReadOnly<u16>),
        /// Counter Register
        (0x0C => pub cntr: ReadWrite<u16>),
        /// Control Registers 1..3
        (0x0E => pub ctrl: ReadWrite<u16, CTRL::Register>),
        (0x10 => pub ctrl2: ReadWrite<u16, CTRL2::Register>),
        (0x12 => pub ctrl3: ReadWrite<u16, CTRL3::Register>),
        /// Status Register, write 1 to clear
        (0x14 => pub sts: ReadWrite<u16, STS::Register>),
        /// Interrupt and DMA Enable Register
        (0x16 => pub intdma: ReadWrite<u16, INTDMA::Register>),
        /// Comparator Load Registers 1 and 2
        (0x18 => pub cmpld1: ReadWrite<u16>),
        (0x1A => pub cmpld2: ReadWrite<u16>),
        /// Compare and Capture Control Register
        (0x1C => pub ccctrl: ReadWrite<u16, CCCTRL::Register>),
        /// Input Filter Register
        (0x1E => pub filt: ReadWrite<u16, FILT::Register>),
        (0x20 => @END),
    },

    pub EtimerRegisters {
        (0x000 => pub channel: [ChannelRegisters; 8]),
        /// Watchdog Time-out Low and High Word Registers
        (0x100 => pub wdtol: ReadWrite<u16>),
        (0x102 => pub wdtoh: ReadWrite<u16>),
        /// Fault Control Register
        (0x104 => pub fctrl: ReadWrite<u16, FCTRL::Register>),
        /// Fault Status Register
        (0x106 => pub fsts: ReadWrite<u16, FSTS::Register>),
        /// Fault Filter Register
        (0x108 => pub ffilt: ReadWrite<u16, FFILT::Register>),
        (0x10A => _reserved0),
        /// Channel Enable Register
        (0x10C => pub enbl: ReadWrite<u16, ENBL::Register>),
        (0x10E => _reserved1),
        /// DMA Request Select Registers
        (0x110 => pub dreq: [ReadWrite<u16, DREQ::Register>; NUM_DMA_REQUESTS]),
        (0x118 => @END),
    }
}

impl EtimerRegisters {
    pub fn counter(&self, n: usize) -> Result<&ChannelRegisters, ErrorCode> {
        check_index(n, NUM_CHANNELS).map(|i| &self.channel[i])
    }

    /// DMA request selector `n`.
    pub fn dma_request(&self, n: usize) -> Result<&ReadWrite<u16, DREQ::Register>, ErrorCode> {
        check_index(n, NUM_DMA_REQUESTS).map(|i| &self.dreq[i])
    }
}

pub const ETIMER0_BASE: StaticRef<EtimerRegisters> =
    unsafe { StaticRef::new(ETIMER_BASE_ADDR[0] as *const EtimerRegisters) };
pub const ETIMER1_BASE: StaticRef<EtimerRegisters> =
    unsafe { StaticRef::new(ETIMER_BASE_ADDR[1] as *const EtimerRegisters) };
pub const ETIMER2_BASE: StaticRef<EtimerRegisters> =
    unsafe { StaticRef::new(ETIMER_BASE_ADDR[2] as *const EtimerRegisters) };

register_bitfields![u16,
    pub CTRL [
        CNTMODE OFFSET(13) NUMBITS(3) [
            Stopped = 0,
            PrimaryRising = 1,
            PrimaryBothEdges = 2,
            PrimaryGated = 3,
            Quadrature = 4,
            PrimaryWithDirection = 5,
            SecondaryTrigger = 6,
            Cascaded = 7
        ],
        /// Primary count source, e.g. 0b11000 + n for the IP bus clock
        /// divided by 2^n
        PRISRC OFFSET(8) NUMBITS(5) [],
        ONCE OFFSET(7) NUMBITS(1) [],
        /// Count until compare, then reinitialize
        LENGTH OFFSET(6) NUMBITS(1) [],
        DIR OFFSET(5) NUMBITS(1) [],
        SECSRC OFFSET(0) NUMBITS(5) []
    ],
    pub CTRL2 [
        OEN OFFSET(15) NUMBITS(1) [],
        RDNT OFFSET(14) NUMBITS(1) [],
        INPUT OFFSET(13) NUMBITS(1) [],
        VAL OFFSET(12) NUMBITS(1) [],
        FORCE OFFSET(11) NUMBITS(1) [],
        COFRC OFFSET(10) NUMBITS(1) [],
        COINIT OFFSET(8) NUMBITS(2) [],
        SIPS OFFSET(7) NUMBITS(1) [],
        PIPS OFFSET(6) NUMBITS(1) [],
        OPS OFFSET(5) NUMBITS(1) [],
        MSTR OFFSET(4) NUMBITS(1) [],
        OUTMODE OFFSET(0) NUMBITS(4) []
    ],
    pub CTRL3 [
        STPEN OFFSET(15) NUMBITS(1) [],
        ROC OFFSET(13) NUMBITS(2) [],
        FMODE OFFSET(12) NUMBITS(1) [],
        FDIS OFFSET(8) NUMBITS(4) [],
        C2FCNT OFFSET(5) NUMBITS(3) [],
        C1FCNT OFFSET(2) NUMBITS(3) [],
        DBGEN OFFSET(0) NUMBITS(2) []
    ],
    pub STS [
        WDF OFFSET(9) NUMBITS(1) [],
        RCF OFFSET(8) NUMBITS(1) [],
        ICF2 OFFSET(7) NUMBITS(1) [],
        ICF1 OFFSET(6) NUMBITS(1) [],
        IEHF OFFSET(5) NUMBITS(1) [],
        IELF OFFSET(4) NUMBITS(1) [],
        TOF OFFSET(3) NUMBITS(1) [],
        TCF2 OFFSET(2) NUMBITS(1) [],
        TCF1 OFFSET(1) NUMBITS(1) [],
        TCF OFFSET(0) NUMBITS(1) []
    ],
    pub INTDMA [
        ICF2DE OFFSET(15) NUMBITS(1) [],
        ICF1DE OFFSET(14) NUMBITS(1) [],
        CMPLD2DE OFFSET(13) NUMBITS(1) [],
        CMPLD1DE OFFSET(12) NUMBITS(1) [],
        WDFIE OFFSET(9) NUMBITS(1) [],
        RCFIE OFFSET(8) NUMBITS(1) [],
        ICF2IE OFFSET(7) NUMBITS(1) [],
        ICF1IE OFFSET(6) NUMBITS(1) [],
        IEHFIE OFFSET(5) NUMBITS(1) [],
        IELFIE OFFSET(4) NUMBITS(1) [],
        TOFIE OFFSET(3) NUMBITS(1) [],
        TCF2IE OFFSET(2) NUMBITS(1) [],
        TCF1IE OFFSET(1) NUMBITS(1) [],
        TCFIE OFFSET(0) NUMBITS(1) []
    ],
    pub CCCTRL [
        CLC2 OFFSET(13) NUMBITS(3) [],
        CLC1 OFFSET(10) NUMBITS(3) [],
        CMPMODE OFFSET(8) NUMBITS(2) [],
        CPT2MODE OFFSET(6) NUMBITS(2) [],
        CPT1MODE OFFSET(4) NUMBITS(2) [],
        CFWM OFFSET(2) NUMBITS(2) [],
        ONESHOT OFFSET(1) NUMBITS(1) [],
        ARM OFFSET(0) NUMBITS(1) []
    ],
    pub FILT [
        FILTCNT OFFSET(8) NUMBITS(3) [],
        FILTPER OFFSET(0) NUMBITS(8) []
    ],
    pub FCTRL [
        FTEST OFFSET(12) NUMBITS(1) [],
        FIE OFFSET(8) NUMBITS(4) [],
        FLVL OFFSET(0) NUMBITS(4) []
    ],
    pub FSTS [
        FFPIN OFFSET(8) NUMBITS(4) [],
        FFLAG OFFSET(0) NUMBITS(4) []
    ],
    pub FFILT [
        FFILTCNT OFFSET(8) NUMBITS(3) [],
        FFILTPER OFFSET(0) NUMBITS(8) []
    ],
    pub ENBL [
        ENBL OFFSET(0) NUMBITS(8) []
    ],
    pub DREQ [
        DREQ OFFSET(0) NUMBITS(5) []
    ]
];


#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, assert_fields};
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(ChannelRegisters, ctrl), 0x0E);
        assert_eq!(offset_of!(ChannelRegisters, intdma), 0x16);
        assert_eq!(offset_of!(ChannelRegisters, filt), 0x1E);
        assert_eq!(size_of::<ChannelRegisters>(), 0x20);
        assert_eq!(offset_of!(EtimerRegisters, wdtol), 0x100);
        assert_eq!(offset_of!(EtimerRegisters, enbl), 0x10C);
        assert_eq!(offset_of!(EtimerRegisters, dreq), 0x110);
        assert_eq!(size_of::<EtimerRegisters>(), 0x118);

        let etimer = testing::zeroed::<EtimerRegisters>();
        assert_eq!(testing::offset_in(&*etimer, &etimer.channel[5].ccctrl), 0xBC);
        assert_eq!(ETIMER0_BASE.address(), 0xFFE1_8000);
        assert_eq!(ETIMER2_BASE.address(), 0xFFE2_0000);
    }

    #[test]
    fn bitfields() {
        assert_fields!(16;
            CTRL::CNTMODE, CTRL::PRISRC, CTRL::ONCE, CTRL::LENGTH, CTRL::DIR,
            CTRL::SECSRC);
        assert_fields!(16;
            CTRL2::OEN, CTRL2::RDNT, CTRL2::INPUT, CTRL2::VAL, CTRL2::FORCE,
            CTRL2::COFRC, CTRL2::COINIT, CTRL2::SIPS, CTRL2::PIPS, CTRL2::OPS,
            CTRL2::MSTR, CTRL2::OUTMODE);
        assert_fields!(16;
            CCCTRL::CLC2, CCCTRL::CLC1, CCCTRL::CMPMODE, CCCTRL::CPT2MODE,
            CCCTRL::CPT1MODE, CCCTRL::CFWM, CCCTRL::ONESHOT, CCCTRL::ARM);
        assert_eq!(
            assert_fields!(16;
                STS::WDF, STS::RCF, STS::ICF2, STS::ICF1, STS::IEHF, STS::IELF,
                STS::TOF, STS::TCF2, STS::TCF1, STS::TCF),
            0xFC00
        );
        assert_fields!(16;
            CTRL3::STPEN, CTRL3::ROC, CTRL3::FMODE, CTRL3::FDIS, CTRL3::C2FCNT, CTRL3::C1FCNT,
            CTRL3::DBGEN);
        assert_fields!(16;
            INTDMA::ICF2DE, INTDMA::ICF1DE, INTDMA::CMPLD2DE, INTDMA::CMPLD1DE, INTDMA::WDFIE,
            INTDMA::RCFIE, INTDMA::ICF2IE, INTDMA::ICF1IE, INTDMA::IEHFIE, INTDMA::IELFIE,
            INTDMA::TOFIE, INTDMA::TCF2IE, INTDMA::TCF1IE, INTDMA::TCFIE);
        assert_fields!(16; FILT::FILTCNT, FILT::FILTPER);
        assert_fields!(16; FCTRL::FTEST, FCTRL::FIE, FCTRL::FLVL);
        assert_fields!(16; FSTS::FFPIN, FSTS::FFLAG);
        assert_fields!(16; FFILT::FFILTCNT, FFILT::FFILTPER);
        assert_fields!(16; ENBL::ENBL);
        assert_fields!(16; DREQ::DREQ);
    }

    #[test]
    fn counter_setup() {
        let etimer = testing::zeroed::<EtimerRegisters>();
        let ch = etimer.counter(2).unwrap();
        ch.ctrl.write(CTRL::CNTMODE::PrimaryRising + CTRL::PRISRC.val(0b11000) + CTRL::LENGTH::SET);
        assert_eq!(ch.ctrl.get(), 0x3840);
        etimer.enbl.write(ENBL::ENBL.val(1 << 2));
        assert_eq!(etimer.enbl.get(), 0x0004);
        assert!(etimer.counter(NUM_CHANNELS).is_err());
        assert!(etimer.dma_request(3).is_ok());
        assert_eq!(etimer.dma_request(4).err(), Some(ErrorCode::INVAL));
    }
}
