// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Cross Triggering Unit (CTU_0).
//!
//! The CTU turns PWM and timer events into ADC conversion commands. Eight
//! triggers each own one byte of `THCR1`/`THCR2` (handler enables) and one
//! byte of `CLCR1`/`CLCR2` (index of the first command in the command
//! list), trigger 0 in the least significant byte of the first register.
//! Conversion results land in four FIFOs.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::CTU_BASE_ADDR;
use crate::static_ref::StaticRef;

pub const NUM_TRIGGERS: usize = 8;
/// Entries of the command list.
pub const NUM_COMMANDS: usize = 24;
pub const NUM_FIFOS: usize = 4;

register_structs! {
    pub CtuRegisters {
        /// Trigger Generator Subunit Input Selection Register
        (0x00 => pub tgsisr: ReadWrite<u32>),
        /// Trigger Generator Subunit Control Register
        (0x04 => pub tgscr: ReadWrite<u16, TGSCR::Register>),
        /// Trigger Compare Registers
        (0x06 => pub tcr: [ReadWrite<u16>; NUM_TRIGGERS]),
        /// TGS Counter Compare Register
        (0x16 => pub tgsccr: ReadWrite<u16>),
        /// TGS Counter Reload Register
        (0x18 => pub tgscrr: ReadWrite<u16>),
        (0x1A => _reserved0),
        /// Commands List Control Register 1, triggers 0..3
        (0x1C => pub clcr1: ReadWrite<u32, CLCR1::Register>),
        /// Commands List Control Register 2, triggers 4..7
        (0x20 => pub clcr2: ReadWrite<u32, CLCR2::Register>),
        /// Trigger Handler Control Register 1, triggers 0..3
        (0x24 => pub thcr1: ReadWrite<u32, THCR1::Register>),
        /// Trigger Handler Control Register 2, triggers 4..7
        (0x28 => pub thcr2: ReadWrite<u32, THCR2::Register>),
        /// Commands List Registers
        (0x2C => pub clr: [ReadWrite<u16, CLR::Register>; NUM_COMMANDS]),
        (0x5C => _reserved1),
        /// FIFO DMA Control Register
        (0x6C => pub cr: ReadWrite<u16, CR::Register>),
        (0x6E => _reserved2),
        /// FIFO Control Register
        (0x70 => pub fcr: ReadWrite<u32, FCR::Register>),
        /// FIFO Threshold Register
        (0x74 => pub th1: ReadWrite<u32, TH1::Register>),
        (0x78 => _reserved3),
        /// FIFO Status Register
        (0x7C => pub status: ReadOnly<u32, STATUS::Register>),
        /// FIFO Right-aligned Data Registers
        (0x80 => pub fra: [ReadOnly<u32, FRA::Register>; NUM_FIFOS]),
        (0x90 => _reserved4),
        /// FIFO Left-aligned Data Registers
        (0xA0 => pub fla: [ReadOnly<u32, FLA::Register>; NUM_FIFOS]),
        (0xB0 => _reserved5),
        /// Error Flag Register
        (0xC0 => pub ctuefr: ReadWrite<u16, CTUEFR::Register>),
        /// Interrupt Flag Register
        (0xC2 => pub ctuifr: ReadWrite<u16, CTUIFR::Register>),
        /// Interrupt/DMA Register
        (0xC4 => pub ctuir: ReadWrite<u16, CTUIR::Register>),
        /// Control ON-Time Register
        (0xC6 => pub cotr: ReadWrite<u16, COTR::Register>),
        /// Control Register
        (0xC8 => pub ctucr: ReadWrite<u16, CTUCR::Register>),
        /// Digital Filter Register
        (0xCA => pub ctufilter: ReadWrite<u16, CTUFILTER::Register>),
        /// Power Control Register
        (0xCC => pub ctupcr: ReadWrite<u16, CTUPCR::Register>),
        (0xCE => _reserved6),
        (0xD0 => @END),
    }
}

/// Where a trigger's byte sits in the paired `THCR`/`CLCR` registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerSlot {
    /// 0 for `THCR1`/`CLCR1`, 1 for `THCR2`/`CLCR2`.
    pub register: usize,
    /// Shift of the trigger's byte within the register.
    pub shift: usize,
}

/// Register and byte of trigger `trigger` in the handler and command-list
/// control registers.
pub const fn trigger_slot(trigger: usize) -> Result<TriggerSlot, ErrorCode> {
    match check_index(trigger, NUM_TRIGGERS) {
        Ok(t) => Ok(TriggerSlot {
            register: t / 4,
            shift: (t % 4) * 8,
        }),
        Err(e) => Err(e),
    }
}

/// Shift of FIFO `fifo`'s four flag bits in `FCR` and `STATUS`.
///
/// Within the nibble: bit 0 full, bit 1 empty, bit 2 overflow, bit 3
/// overrun.
pub const fn fifo_flags_shift(fifo: usize) -> Result<usize, ErrorCode> {
    match check_index(fifo, NUM_FIFOS) {
        Ok(f) => Ok(f * 4),
        Err(e) => Err(e),
    }
}

impl CtuRegisters {
    pub fn command(&self, index: usize) -> Result<&ReadWrite<u16, CLR::Register>, ErrorCode> {
        check_index(index, NUM_COMMANDS).map(|i| &self.clr[i])
    }

    /// Right-aligned result FIFO `fifo`.
    pub fn fifo_right(&self, fifo: usize) -> Result<&ReadOnly<u32, FRA::Register>, ErrorCode> {
        check_index(fifo, NUM_FIFOS).map(|i| &self.fra[i])
    }
}

pub const CTU_BASE: StaticRef<CtuRegisters> =
    unsafe { StaticRef::new(CTU_BASE_ADDR as *const CtuRegisters) };

register_bitfields![u16,
    pub TGSCR [
        ETTM OFFSET(8) NUMBITS(1) [],
        PRES OFFSET(6) NUMBITS(2) [],
        MRSSM OFFSET(1) NUMBITS(5) [],
        TGSM OFFSET(0) NUMBITS(1) []
    ],
    pub CLR [
        CIR OFFSET(15) NUMBITS(1) [],
        FC OFFSET(14) NUMBITS(1) [],
        CMS OFFSET(13) NUMBITS(1) [],
        FIFO OFFSET(10) NUMBITS(2) [],
        SU OFFSET(5) NUMBITS(1) [],
        CH OFFSET(0) NUMBITS(4) []
    ],
    pub CR [
        DMAEN3 OFFSET(3) NUMBITS(1) [],
        DMAEN2 OFFSET(2) NUMBITS(1) [],
        DMAEN1 OFFSET(1) NUMBITS(1) [],
        DMAEN0 OFFSET(0) NUMBITS(1) []
    ],
    pub CTUEFR [
        ETOE OFFSET(8) NUMBITS(1) [],
        T1OE OFFSET(7) NUMBITS(1) [],
        T0OE OFFSET(6) NUMBITS(1) [],
        ADCOE OFFSET(5) NUMBITS(1) [],
        TGSOSM OFFSET(4) NUMBITS(1) [],
        MRSO OFFSET(3) NUMBITS(1) [],
        ICE OFFSET(2) NUMBITS(1) [],
        SMTO OFFSET(1) NUMBITS(1) [],
        MRSRE OFFSET(0) NUMBITS(1) []
    ],
    pub CTUIFR [
        ADC OFFSET(9) NUMBITS(1) [],
        T7 OFFSET(8) NUMBITS(1) [],
        T6 OFFSET(7) NUMBITS(1) [],
        T5 OFFSET(6) NUMBITS(1) [],
        T4 OFFSET(5) NUMBITS(1) [],
        T3 OFFSET(4) NUMBITS(1) [],
        T2 OFFSET(3) NUMBITS(1) [],
        T1 OFFSET(2) NUMBITS(1) [],
        T0 OFFSET(1) NUMBITS(1) [],
        MRS OFFSET(0) NUMBITS(1) []
    ],
    pub CTUIR [
        T7IE OFFSET(15) NUMBITS(1) [],
        T6IE OFFSET(14) NUMBITS(1) [],
        T5IE OFFSET(13) NUMBITS(1) [],
        T4IE OFFSET(12) NUMBITS(1) [],
        T3IE OFFSET(11) NUMBITS(1) [],
        T2IE OFFSET(10) NUMBITS(1) [],
        T1IE OFFSET(9) NUMBITS(1) [],
        T0IE OFFSET(8) NUMBITS(1) [],
        MRSDMAE OFFSET(2) NUMBITS(1) [],
        MRSIE OFFSET(1) NUMBITS(1) [],
        IEE OFFSET(0) NUMBITS(1) []
    ],
    pub COTR [
        COTR OFFSET(0) NUMBITS(8) []
    ],
    pub CTUCR [
        T7SG OFFSET(15) NUMBITS(1) [],
        T6SG OFFSET(14) NUMBITS(1) [],
        T5SG OFFSET(13) NUMBITS(1) [],
        T4SG OFFSET(12) NUMBITS(1) [],
        T3SG OFFSET(11) NUMBITS(1) [],
        T2SG OFFSET(10) NUMBITS(1) [],
        T1SG OFFSET(9) NUMBITS(1) [],
        T0SG OFFSET(8) NUMBITS(1) [],
        CTUADCRESET OFFSET(7) NUMBITS(1) [],
        CTUODIS OFFSET(6) NUMBITS(1) [],
        FILTERENABLE OFFSET(5) NUMBITS(1) [],
        CGRE OFFSET(4) NUMBITS(1) [],
        FGRE OFFSET(3) NUMBITS(1) [],
        MRSSG OFFSET(2) NUMBITS(1) [],
        GRE OFFSET(1) NUMBITS(1) [],
        TGSISRRE OFFSET(0) NUMBITS(1) []
    ],
    pub CTUFILTER [
        FILTERVALUE OFFSET(0) NUMBITS(8) []
    ],
    pub CTUPCR [
        MDIS OFFSET(0) NUMBITS(1) []
    ]
];

register_bitfields![u32,
    pub CLCR1 [
        T3INDEX OFFSET(24) NUMBITS(5) [],
        T2INDEX OFFSET(16) NUMBITS(5) [],
        T1INDEX OFFSET(8) NUMBITS(5) [],
        T0INDEX OFFSET(0) NUMBITS(5) []
    ],
    pub CLCR2 [
        T7INDEX OFFSET(24) NUMBITS(5) [],
        T6INDEX OFFSET(16) NUMBITS(5) [],
        T5INDEX OFFSET(8) NUMBITS(5) [],
        T4INDEX OFFSET(0) NUMBITS(5) []
    ],
    pub THCR1 [
        T3E OFFSET(28) NUMBITS(1) [],
        T3ETE OFFSET(27) NUMBITS(1) [],
        T3T1E OFFSET(26) NUMBITS(1) [],
        T3T0E OFFSET(25) NUMBITS(1) [],
        T3ADCE OFFSET(24) NUMBITS(1) [],
        T2E OFFSET(20) NUMBITS(1) [],
        T2ETE OFFSET(19) NUMBITS(1) [],
        T2T1E OFFSET(18) NUMBITS(1) [],
        T2T0E OFFSET(17) NUMBITS(1) [],
        T2ADCE OFFSET(16) NUMBITS(1) [],
        T1E OFFSET(12) NUMBITS(1) [],
        T1ETE OFFSET(11) NUMBITS(1) [],
        T1T1E OFFSET(10) NUMBITS(1) [],
        T1T0E OFFSET(9) NUMBITS(1) [],
        T1ADCE OFFSET(8) NUMBITS(1) [],
        T0E OFFSET(4) NUMBITS(1) [],
        T0ETE OFFSET(3) NUMBITS(1) [],
        T0T1E OFFSET(2) NUMBITS(1) [],
        T0T0E OFFSET(1) NUMBITS(1) [],
        T0ADCE OFFSET(0) NUMBITS(1) []
    ],
    pub THCR2 [
        T7E OFFSET(28) NUMBITS(1) [],
        T7ETE OFFSET(27) NUMBITS(1) [],
        T7T1E OFFSET(26) NUMBITS(1) [],
        T7T0E OFFSET(25) NUMBITS(1) [],
        T7ADCE OFFSET(24) NUMBITS(1) [],
        T6E OFFSET(20) NUMBITS(1) [],
        T6ETE OFFSET(19) NUMBITS(1) [],
        T6T1E OFFSET(18) NUMBITS(1) [],
        T6T0E OFFSET(17) NUMBITS(1) [],
        T6ADCE OFFSET(16) NUMBITS(1) [],
        T5E OFFSET(12) NUMBITS(1) [],
        T5ETE OFFSET(11) NUMBITS(1) [],
        T5T1E OFFSET(10) NUMBITS(1) [],
        T5T0E OFFSET(9) NUMBITS(1) [],
        T5ADCE OFFSET(8) NUMBITS(1) [],
        T4E OFFSET(4) NUMBITS(1) [],
        T4ETE OFFSET(3) NUMBITS(1) [],
        T4T1E OFFSET(2) NUMBITS(1) [],
        T4T0E OFFSET(1) NUMBITS(1) [],
        T4ADCE OFFSET(0) NUMBITS(1) []
    ],
    pub FCR [
        FIFO_OVERRUN_EN3 OFFSET(15) NUMBITS(1) [],
        FIFO_OVERFLOW_EN3 OFFSET(14) NUMBITS(1) [],
        FIFO_EMPTY_EN3 OFFSET(13) NUMBITS(1) [],
        FIFO_FULL_EN3 OFFSET(12) NUMBITS(1) [],
        FIFO_OVERRUN_EN2 OFFSET(11) NUMBITS(1) [],
        FIFO_OVERFLOW_EN2 OFFSET(10) NUMBITS(1) [],
        FIFO_EMPTY_EN2 OFFSET(9) NUMBITS(1) [],
        FIFO_FULL_EN2 OFFSET(8) NUMBITS(1) [],
        FIFO_OVERRUN_EN1 OFFSET(7) NUMBITS(1) [],
        FIFO_OVERFLOW_EN1 OFFSET(6) NUMBITS(1) [],
        FIFO_EMPTY_EN1 OFFSET(5) NUMBITS(1) [],
        FIFO_FULL_EN1 OFFSET(4) NUMBITS(1) [],
        FIFO_OVERRUN_EN0 OFFSET(3) NUMBITS(1) [],
        FIFO_OVERFLOW_EN0 OFFSET(2) NUMBITS(1) [],
        FIFO_EMPTY_EN0 OFFSET(1) NUMBITS(1) [],
        FIFO_FULL_EN0 OFFSET(0) NUMBITS(1) []
    ],
    pub TH1 [
        THRESHOLD3 OFFSET(24) NUMBITS(8) [],
        THRESHOLD2 OFFSET(16) NUMBITS(8) [],
        THRESHOLD1 OFFSET(8) NUMBITS(8) [],
        THRESHOLD0 OFFSET(0) NUMBITS(8) []
    ],
    pub STATUS [
        FIFO_OVERRUN3 OFFSET(15) NUMBITS(1) [],
        FIFO_OVERFLOW3 OFFSET(14) NUMBITS(1) [],
        FIFO_EMPTY3 OFFSET(13) NUMBITS(1) [],
        FIFO_FULL3 OFFSET(12) NUMBITS(1) [],
        FIFO_OVERRUN2 OFFSET(11) NUMBITS(1) [],
        FIFO_OVERFLOW2 OFFSET(10) NUMBITS(1) [],
        FIFO_EMPTY2 OFFSET(9) NUMBITS(1) [],
        FIFO_FULL2 OFFSET(8) NUMBITS(1) [],
        FIFO_OVERRUN1 OFFSET(7) NUMBITS(1) [],
        FIFO_OVERFLOW1 OFFSET(6) NUMBITS(1) [],
        FIFO_EMPTY1 OFFSET(5) NUMBITS(1) [],
        FIFO_FULL1 OFFSET(4) NUMBITS(1) [],
        FIFO_OVERRUN0 OFFSET(3) NUMBITS(1) [],
        FIFO_OVERFLOW0 OFFSET(2) NUMBITS(1) [],
        FIFO_EMPTY0 OFFSET(1) NUMBITS(1) [],
        FIFO_FULL0 OFFSET(0) NUMBITS(1) []
    ],
    pub FRA [
        NCH OFFSET(16) NUMBITS(5) [],
        DATA OFFSET(0) NUMBITS(10) []
    ],
    pub FLA [
        NCH OFFSET(16) NUMBITS(5) [],
        DATA OFFSET(6) NUMBITS(10) []
    ]
];
