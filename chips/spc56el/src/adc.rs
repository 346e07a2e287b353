// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! 12-bit SAR Analog-to-Digital Converters ADC_0 and ADC_1.
//!
//! Both converters share one layout. Channel-indexed registers (`CEOCFR`,
//! `CIMR`, `DMAR`, `PSR`, `CTR`, `NCMR`, `JCMR`) come in groups of 32
//! channels; this device only implements group 0 (the precision channels),
//! and within it the low [`NUM_CHANNELS`] bits.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::ADC_BASE_ADDR;
use crate::static_ref::StaticRef;

/// Precision input channels per converter.
pub const NUM_CHANNELS: usize = 16;

/// Analog watchdogs per converter.
pub const NUM_WATCHDOGS: usize = 4;

register_structs! {
    pub AdcRegisters {
        /// Main Configuration Register
        (0x000 => pub mcr: ReadWrite<u32, MCR::Register>),
        /// Main Status Register
        (0x004 => pub msr: ReadOnly<u32, MSR::Register>),
        (0x008 => _reserved0),
        /// Interrupt Status Register, write 1 to clear
        (0x010 => pub isr: ReadWrite<u32, ISR::Register>),
        /// Channel Pending Registers, one bit per channel
        (0x014 => pub ceocfr: [ReadWrite<u32>; 3]),
        /// Interrupt Mask Register
        (0x020 => pub imr: ReadWrite<u32, ISR::Register>),
        /// Channel Interrupt Mask Registers
        (0x024 => pub cimr: [ReadWrite<u32>; 3]),
        /// Watchdog Threshold Interrupt Status Register
        (0x030 => pub wtisr: ReadWrite<u32, WTISR::Register>),
        /// Watchdog Threshold Interrupt Mask Register
        (0x034 => pub wtimr: ReadWrite<u32, WTISR::Register>),
        (0x038 => _reserved1),
        /// DMA Enable Register
        (0x040 => pub dmae: ReadWrite<u32, DMAE::Register>),
        /// DMA Channel Select Registers
        (0x044 => pub dmar: [ReadWrite<u32>; 3]),
        /// Threshold Control Registers
        (0x050 => pub trc: [ReadWrite<u32, TRC::Register>; NUM_WATCHDOGS]),
        /// Threshold Registers
        (0x060 => pub thrhlr: [ReadWrite<u32, THRHLR::Register>; NUM_WATCHDOGS]),
        /// Alternate Threshold Registers
        (0x070 => pub thralt: [ReadWrite<u32, THRHLR::Register>; NUM_WATCHDOGS]),
        /// Presampling Control Register
        (0x080 => pub pscr: ReadWrite<u32, PSCR::Register>),
        /// Presampling Registers
        (0x084 => pub psr: [ReadWrite<u32>; 3]),
        (0x090 => _reserved2),
        /// Conversion Timing Registers
        (0x094 => pub ctr: [ReadWrite<u32, CTR::Register>; 3]),
        (0x0A0 => _reserved3),
        /// Normal Conversion Mask Registers
        (0x0A4 => pub ncmr: [ReadWrite<u32>; 3]),
        (0x0B0 => _reserved4),
        /// Injected Conversion Mask Registers
        (0x0B4 => pub jcmr: [ReadWrite<u32>; 3]),
        /// Offset Word Register
        (0x0C0 => pub offwr: ReadWrite<u32, OFFWR::Register>),
        /// Decode Signals Delay Register
        (0x0C4 => pub dsdr: ReadWrite<u32, DSDR::Register>),
        /// Power Down Exit Delay Register
        (0x0C8 => pub pdedr: ReadWrite<u32, PDEDR::Register>),
        (0x0CC => _reserved5),
        (0x0F0 => pub tctlr: ReadWrite<u32>),
        (0x0F4 => _reserved6),
        /// Channel Data Registers
        (0x100 => pub cdr: [ReadOnly<u32, CDR::Register>; 96]),
        (0x280 => @END),
    }
}

impl AdcRegisters {
    /// Conversion result register of precision channel `channel`.
    pub fn channel_data(&self, channel: usize) -> Result<&ReadOnly<u32, CDR::Register>, ErrorCode> {
        check_index(channel, NUM_CHANNELS).map(|i| &self.cdr[i])
    }
}

/// Bit of `channel` in the group-0 channel-mask registers (`NCMR0`,
/// `JCMR0`, `CIMR0`, `CEOCFR0`, `DMAR0`, `PSR0`).
pub const fn channel_mask(channel: usize) -> Result<u32, ErrorCode> {
    match check_index(channel, NUM_CHANNELS) {
        Ok(i) => Ok(1 << i),
        Err(e) => Err(e),
    }
}

pub const ADC0_BASE: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(ADC_BASE_ADDR[0] as *const AdcRegisters) };
pub const ADC1_BASE: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(ADC_BASE_ADDR[1] as *const AdcRegisters) };

register_bitfields![u32,
    pub MCR [
        /// Overwrite enable for unread results
        OWREN OFFSET(31) NUMBITS(1) [],
        /// Write left-aligned
        WLSIDE OFFSET(30) NUMBITS(1) [],
        MODE OFFSET(29) NUMBITS(1) [
            OneShot = 0,
            Scan = 1
        ],
        EDGLEV OFFSET(28) NUMBITS(1) [],
        TRGEN OFFSET(27) NUMBITS(1) [],
        EDGE OFFSET(26) NUMBITS(1) [],
        XSTRTEN OFFSET(25) NUMBITS(1) [],
        /// Start normal conversion chain
        NSTART OFFSET(24) NUMBITS(1) [],
        JTRGEN OFFSET(22) NUMBITS(1) [],
        JEDGE OFFSET(21) NUMBITS(1) [],
        /// Start injected conversion chain
        JSTART OFFSET(20) NUMBITS(1) [],
        /// Cross-triggering unit enable
        CTUEN OFFSET(17) NUMBITS(1) [],
        /// Analog clock equals the bus clock rather than half of it
        ADCLKSEL OFFSET(8) NUMBITS(1) [],
        ABORTCHAIN OFFSET(7) NUMBITS(1) [],
        ABORT OFFSET(6) NUMBITS(1) [],
        ACK0 OFFSET(5) NUMBITS(1) [],
        OFFREFRESH OFFSET(4) NUMBITS(1) [],
        OFFCANC OFFSET(3) NUMBITS(1) [],
        /// Power down
        PWDN OFFSET(0) NUMBITS(1) []
    ],
    pub MSR [
        NSTART OFFSET(24) NUMBITS(1) [],
        JABORT OFFSET(23) NUMBITS(1) [],
        JSTART OFFSET(20) NUMBITS(1) [],
        CTUSTART OFFSET(16) NUMBITS(1) [],
        /// Channel under conversion
        CHADDR OFFSET(9) NUMBITS(7) [],
        ACK0 OFFSET(5) NUMBITS(1) [],
        OFFREFRESH OFFSET(4) NUMBITS(1) [],
        OFFCANC OFFSET(3) NUMBITS(1) [],
        ADCSTATUS OFFSET(0) NUMBITS(3) [
            Idle = 0,
            PowerDown = 1,
            Wait = 2,
            Calibrate = 3,
            Convert = 4,
            Done = 6
        ]
    ],
    /// Shared by `ISR` (flags) and `IMR` (masks).
    pub ISR [
        OFFCANCOVR OFFSET(6) NUMBITS(1) [],
        EOFFSET OFFSET(5) NUMBITS(1) [],
        /// End of CTU conversion
        EOCTU OFFSET(4) NUMBITS(1) [],
        /// End of injected chain
        JEOC OFFSET(3) NUMBITS(1) [],
        /// End of injected channel
        JECH OFFSET(2) NUMBITS(1) [],
        /// End of normal chain
        EOC OFFSET(1) NUMBITS(1) [],
        /// End of normal channel
        ECH OFFSET(0) NUMBITS(1) []
    ],
    pub WTISR [
        WDG3H OFFSET(7) NUMBITS(1) [],
        WDG2H OFFSET(6) NUMBITS(1) [],
        WDG1H OFFSET(5) NUMBITS(1) [],
        WDG0H OFFSET(4) NUMBITS(1) [],
        WDG3L OFFSET(3) NUMBITS(1) [],
        WDG2L OFFSET(2) NUMBITS(1) [],
        WDG1L OFFSET(1) NUMBITS(1) [],
        WDG0L OFFSET(0) NUMBITS(1) []
    ],
    pub DMAE [
        DCLR OFFSET(1) NUMBITS(1) [],
        DMAEN OFFSET(0) NUMBITS(1) []
    ],
    pub TRC [
        THREN OFFSET(15) NUMBITS(1) [],
        THRINV OFFSET(14) NUMBITS(1) [],
        THROP OFFSET(13) NUMBITS(1) [],
        /// Channel guarded by this watchdog
        THRCH OFFSET(0) NUMBITS(7) []
    ],
    pub THRHLR [
        THRH OFFSET(16) NUMBITS(12) [],
        THRL OFFSET(0) NUMBITS(12) []
    ],
    pub PSCR [
        PREVAL2 OFFSET(5) NUMBITS(2) [],
        PREVAL1 OFFSET(3) NUMBITS(2) [],
        PREVAL0 OFFSET(1) NUMBITS(2) [],
        PREONCE OFFSET(0) NUMBITS(1) []
    ],
    pub CTR [
        INPLATCH OFFSET(15) NUMBITS(1) [],
        OFFSHIFT OFFSET(12) NUMBITS(2) [],
        INPCMP OFFSET(9) NUMBITS(2) [],
        /// Sampling phase duration in ADC clock cycles
        INPSAMP OFFSET(0) NUMBITS(8) []
    ],
    pub OFFWR [
        OFFSETLOAD OFFSET(16) NUMBITS(1) [],
        OFFSETWORD OFFSET(0) NUMBITS(8) []
    ],
    pub DSDR [
        DSD OFFSET(0) NUMBITS(8) []
    ],
    pub PDEDR [
        PDED OFFSET(0) NUMBITS(8) []
    ],
    pub CDR [
        /// New data not yet read
        VALID OFFSET(19) NUMBITS(1) [],
        /// Data overwritten before it was read
        OVERW OFFSET(18) NUMBITS(1) [],
        RESULT OFFSET(16) NUMBITS(2) [
            Normal = 0,
            Injected = 1,
            Ctu = 2
        ],
        CDATA OFFSET(0) NUMBITS(12) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, assert_fields};
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::Readable;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(AdcRegisters, isr), 0x010);
        assert_eq!(offset_of!(AdcRegisters, ceocfr), 0x014);
        assert_eq!(offset_of!(AdcRegisters, dmae), 0x040);
        assert_eq!(offset_of!(AdcRegisters, trc), 0x050);
        assert_eq!(offset_of!(AdcRegisters, thralt), 0x070);
        assert_eq!(offset_of!(AdcRegisters, ctr), 0x094);
        assert_eq!(offset_of!(AdcRegisters, ncmr), 0x0A4);
        assert_eq!(offset_of!(AdcRegisters, jcmr), 0x0B4);
        assert_eq!(offset_of!(AdcRegisters, pdedr), 0x0C8);
        assert_eq!(offset_of!(AdcRegisters, cdr), 0x100);
        assert_eq!(size_of::<AdcRegisters>(), 0x280);
        assert_eq!(ADC0_BASE.address(), 0xFFE0_0000);
        assert_eq!(ADC1_BASE.address(), 0xFFE0_4000);
    }

    #[test]
    fn bitfields() {
        assert_fields!(32;
            MCR::OWREN, MCR::WLSIDE, MCR::MODE, MCR::EDGLEV, MCR::TRGEN,
            MCR::EDGE, MCR::XSTRTEN, MCR::NSTART, MCR::JTRGEN, MCR::JEDGE,
            MCR::JSTART, MCR::CTUEN, MCR::ADCLKSEL, MCR::ABORTCHAIN,
            MCR::ABORT, MCR::ACK0, MCR::OFFREFRESH, MCR::OFFCANC, MCR::PWDN);
        assert_fields!(32;
            MSR::NSTART, MSR::JABORT, MSR::JSTART, MSR::CTUSTART, MSR::CHADDR,
            MSR::ACK0, MSR::OFFREFRESH, MSR::OFFCANC, MSR::ADCSTATUS);
        assert_eq!(
            assert_fields!(32; CDR::VALID, CDR::OVERW, CDR::RESULT, CDR::CDATA),
            0xFFF0_F000
        );
        assert_fields!(32; CTR::INPLATCH, CTR::OFFSHIFT, CTR::INPCMP, CTR::INPSAMP);
        assert_fields!(32;
            ISR::OFFCANCOVR, ISR::EOFFSET, ISR::EOCTU, ISR::JEOC, ISR::JECH, ISR::EOC, ISR::ECH);
        assert_fields!(32;
            WTISR::WDG3H, WTISR::WDG2H, WTISR::WDG1H, WTISR::WDG0H, WTISR::WDG3L, WTISR::WDG2L,
            WTISR::WDG1L, WTISR::WDG0L);
        assert_fields!(32; DMAE::DCLR, DMAE::DMAEN);
        assert_fields!(32; TRC::THREN, TRC::THRINV, TRC::THROP, TRC::THRCH);
        assert_fields!(32; THRHLR::THRH, THRHLR::THRL);
        assert_fields!(32; PSCR::PREVAL2, PSCR::PREVAL1, PSCR::PREVAL0, PSCR::PREONCE);
        assert_fields!(32; OFFWR::OFFSETLOAD, OFFWR::OFFSETWORD);
        assert_fields!(32; DSDR::DSD);
        assert_fields!(32; PDEDR::PDED);
    }

    #[test]
    fn channel_data() {
        let adc = testing::zeroed::<AdcRegisters>();
        testing::poke(&adc.cdr[5], 0x000A_0ABCu32);
        let cdr = adc.channel_data(5).unwrap();
        assert_eq!(cdr.read(CDR::VALID), 1);
        assert_eq!(cdr.read(CDR::RESULT), 2);
        assert_eq!(cdr.read(CDR::CDATA), 0xABC);
        assert_eq!(adc.channel_data(NUM_CHANNELS).err(), Some(ErrorCode::INVAL));
    }

    #[test]
    fn channel_masks() {
        assert_eq!(channel_mask(0), Ok(0x0001));
        assert_eq!(channel_mask(15), Ok(0x8000));
        assert_eq!(channel_mask(16), Err(ErrorCode::INVAL));
    }
}
