// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System Integration Unit Lite (SIUL): pad configuration, GPIO and
//! external interrupts.
//!
//! Pads are numbered `port * 16 + pin`, port A being 0. The same number
//! indexes `pcr`, `gpdo` and `gpdi`.
//!
//! GPIO data can be reached at three granularities, all of which are
//! hardware accesses in their own right:
//!
//! | View | Width | Covers |
//! |------|-------|--------|
//! | `gpdo[n]` / `gpdi[n]` | 8 bit | one pad |
//! | `gpdo_words()[n / 4]` | 32 bit | four consecutive pads |
//! | `pgpdo_ports()[port]` | 16 bit | one port, pin 0 in bit 15 |
//! | `pgpdo[port / 2]` | 32 bit | two ports |
//!
//! `mpgpdo` writes a port under a mask and is the only way to change some
//! pins of a port without a read-modify-write race against other writers.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::alias::byte_lane_shift;
use crate::chip_config::{Device, Spc56elConfig};
use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::SIUL_BASE_ADDR;
use crate::static_ref::StaticRef;

register_structs! {
    pub SiulRegisters {
        (0x0000 => _reserved0),
        /// MCU ID Register 1
        (0x0004 => pub midr1: ReadOnly<u32, MIDR1::Register>),
        /// MCU ID Register 2
        (0x0008 => pub midr2: ReadOnly<u32, MIDR2::Register>),
        (0x000C => _reserved1),
        /// Interrupt Status Flag Register, bit n for external interrupt n
        (0x0014 => pub isr: ReadWrite<u32>),
        /// Interrupt Request Enable Register
        (0x0018 => pub irer: ReadWrite<u32>),
        (0x001C => _reserved2),
        /// Interrupt Rising-Edge Event Enable Register
        (0x0028 => pub ireer: ReadWrite<u32>),
        /// Interrupt Falling-Edge Event Enable Register
        (0x002C => pub ifeer: ReadWrite<u32>),
        /// Interrupt Filter Enable Register
        (0x0030 => pub ifer: ReadWrite<u32>),
        (0x0034 => _reserved3),
        /// Pad Configuration Registers
        (0x0040 => pub pcr: [ReadWrite<u16, PCR::Register>; 512]),
        (0x0440 => _reserved4),
        /// Pad Selection for Multiplexed Inputs
        (0x0500 => pub psmi: [ReadWrite<u8, PSMI::Register>; 256]),
        /// GPIO Pad Data Output Registers
        (0x0600 => pub gpdo: [ReadWrite<u8, GPDO::Register>; 512]),
        /// GPIO Pad Data Input Registers
        (0x0800 => pub gpdi: [ReadOnly<u8, GPDI::Register>; 512]),
        (0x0A00 => _reserved5),
        /// Parallel GPIO Pad Data Out, two ports per register
        (0x0C00 => pub pgpdo: [ReadWrite<u32>; 16]),
        /// Parallel GPIO Pad Data In, two ports per register
        (0x0C40 => pub pgpdi: [ReadOnly<u32>; 16]),
        /// Masked Parallel GPIO Pad Data Out, one port per register
        (0x0C80 => pub mpgpdo: [WriteOnly<u32, MPGPDO::Register>; 32]),
        (0x0D00 => _reserved6),
        /// Interrupt Filter Maximum Counter Registers
        (0x1000 => pub ifmc: [ReadWrite<u32, IFMC::Register>; 32]),
        /// Interrupt Filter Clock Prescaler Register
        (0x1080 => pub ifcpr: ReadWrite<u32, IFCPR::Register>),
        (0x1084 => @END),
    }
}

alias_views! {
    SiulRegisters {
        /// Output latches, four pads per word.
        pub fn gpdo_words(&self) -> &[ReadWrite<u32>; 128] =
            gpdo as [ReadWrite<u8, GPDO::Register>; 512];
        /// Input levels, four pads per word.
        pub fn gpdi_words(&self) -> &[ReadOnly<u32>; 128] =
            gpdi as [ReadOnly<u8, GPDI::Register>; 512];
        /// Input multiplexer selections, four per word.
        pub fn psmi_words(&self) -> &[ReadWrite<u32>; 64] =
            psmi as [ReadWrite<u8, PSMI::Register>; 256];
        /// Pad configuration, two pads per word.
        pub fn pcr_pairs(&self) -> &[ReadWrite<u32>; 256] =
            pcr as [ReadWrite<u16, PCR::Register>; 512];
        /// Parallel output data, one port per halfword.
        pub fn pgpdo_ports(&self) -> &[ReadWrite<u16>; 32] =
            pgpdo as [ReadWrite<u32>; 16];
        /// Parallel input data, one port per halfword.
        pub fn pgpdi_ports(&self) -> &[ReadOnly<u16>; 32] =
            pgpdi as [ReadOnly<u32>; 16];
    }
}

impl SiulRegisters {
    /// Pad configuration register of `pad`, if the pad is bonded out.
    pub fn pad(&self, pad: usize) -> Result<&ReadWrite<u16, PCR::Register>, ErrorCode> {
        check_index(pad, Device::SIUL_NUM_PCRS).map(|i| &self.pcr[i])
    }

    /// Output latch of `pad`.
    pub fn output(&self, pad: usize) -> Result<&ReadWrite<u8, GPDO::Register>, ErrorCode> {
        check_index(pad, Device::SIUL_NUM_PCRS).map(|i| &self.gpdo[i])
    }

    /// Input level of `pad`.
    pub fn input(&self, pad: usize) -> Result<&ReadOnly<u8, GPDI::Register>, ErrorCode> {
        check_index(pad, Device::SIUL_NUM_PCRS).map(|i| &self.gpdi[i])
    }

    /// Parallel output data of one port.
    pub fn port_output(&self, port: usize) -> Result<&ReadWrite<u16>, ErrorCode> {
        check_index(port, Device::SIUL_NUM_PORTS).map(|i| &self.pgpdo_ports()[i])
    }

    /// Parallel input data of one port.
    pub fn port_input(&self, port: usize) -> Result<&ReadOnly<u16>, ErrorCode> {
        check_index(port, Device::SIUL_NUM_PORTS).map(|i| &self.pgpdi_ports()[i])
    }

    /// Masked parallel output register of one port.
    pub fn port_masked_output(
        &self,
        port: usize,
    ) -> Result<&WriteOnly<u32, MPGPDO::Register>, ErrorCode> {
        check_index(port, Device::SIUL_NUM_PORTS).map(|i| &self.mpgpdo[i])
    }

    /// Input multiplexer selection register `n`.
    pub fn padsel(&self, n: usize) -> Result<&ReadWrite<u8, PSMI::Register>, ErrorCode> {
        check_index(n, Device::SIUL_NUM_PADSELS).map(|i| &self.psmi[i])
    }
}

/// Pad number of `pin` on `port`.
pub const fn pad_number(port: usize, pin: usize) -> usize {
    port * 16 + pin
}

/// Bit of `pin` inside a 16-bit parallel port value.
pub const fn port_pin_mask(pin: usize) -> u16 {
    0x8000 >> (pin % 16)
}

/// Index into `gpdo_words()` and the PDO bit for `pad` inside that word.
pub const fn gpdo_word_lane(pad: usize) -> (usize, u32) {
    (pad / 4, 1 << byte_lane_shift(pad))
}

pub const SIUL_BASE: StaticRef<SiulRegisters> =
    unsafe { StaticRef::new(SIUL_BASE_ADDR as *const SiulRegisters) };

register_bitfields![u32,
    pub MIDR1 [
        PARTNUM OFFSET(16) NUMBITS(16) [],
        /// Always 0 on this family
        CSP OFFSET(15) NUMBITS(1) [],
        PKG OFFSET(10) NUMBITS(5) [
            Lqfp144 = 0b01101,
            Mapbga257 = 0b10101
        ],
        MAJOR_MASK OFFSET(4) NUMBITS(4) [],
        MINOR_MASK OFFSET(0) NUMBITS(4) []
    ],
    pub MIDR2 [
        SF OFFSET(31) NUMBITS(1) [],
        FLASH_SIZE_1 OFFSET(27) NUMBITS(4) [],
        FLASH_SIZE_2 OFFSET(23) NUMBITS(4) [],
        PARTNUM OFFSET(8) NUMBITS(8) [],
        EE OFFSET(4) NUMBITS(1) [],
        FR OFFSET(0) NUMBITS(1) []
    ],
    pub MPGPDO [
        /// Pins of the port that the write affects, pin 0 in bit 31
        MASK OFFSET(16) NUMBITS(16) [],
        MPPDO OFFSET(0) NUMBITS(16) []
    ],
    pub IFMC [
        MAXCNT OFFSET(0) NUMBITS(4) []
    ],
    pub IFCPR [
        IFCP OFFSET(0) NUMBITS(4) []
    ]
];

register_bitfields![u16,
    pub PCR [
        /// Safe Mode Control. When clear the output buffer is disabled
        /// while the device is in SAFE mode.
        SMC OFFSET(14) NUMBITS(1) [],
        /// Analog Pad Control
        APC OFFSET(13) NUMBITS(1) [],
        /// Pad Output Assignment
        PA OFFSET(10) NUMBITS(2) [
            Gpio = 0,
            Alternate1 = 1,
            Alternate2 = 2,
            Alternate3 = 3
        ],
        /// Output Buffer Enable
        OBE OFFSET(9) NUMBITS(1) [],
        /// Input Buffer Enable
        IBE OFFSET(8) NUMBITS(1) [],
        /// Open Drain Output Enable
        ODE OFFSET(5) NUMBITS(1) [],
        /// Slew Rate Control
        SRC OFFSET(2) NUMBITS(1) [
            Slow = 0,
            Fast = 1
        ],
        /// Weak Pull Up/Down Enable
        WPE OFFSET(1) NUMBITS(1) [],
        /// Weak Pull Up/Down Select
        WPS OFFSET(0) NUMBITS(1) [
            PullDown = 0,
            PullUp = 1
        ]
    ]
];

register_bitfields![u8,
    pub PSMI [
        PADSEL OFFSET(0) NUMBITS(4) []
    ],
    pub GPDO [
        PDO OFFSET(0) NUMBITS(1) []
    ],
    pub GPDI [
        PDI OFFSET(0) NUMBITS(1) []
    ]
];
