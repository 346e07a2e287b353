// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Enhanced Direct Memory Access controller (eDMA), 16 channels.
//!
//! Channel state lives in the transfer control descriptors (`TCD[n]`).
//! The per-channel request, interrupt and error bits can be changed either
//! in the bitmap registers or through the eight byte-wide set/clear
//! registers at `0x18`, which take a channel number and touch only that
//! channel's bit. A set/clear byte with [`SETCLR::NOP`] set is ignored, and
//! one with bit 6 set in the channel number applies to all channels.
//!
//! Set/clear bytes, `CPR` bytes and whole TCDs can also be written as
//! 32-bit words, and the iteration counters have a second layout when
//! minor-loop channel linking is enabled.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::chip_config::{Device, Spc56elConfig};
use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::EDMA_BASE_ADDR;
use crate::static_ref::StaticRef;

pub const NUM_CHANNELS: usize = 16;

/// Channel number that makes a set/clear byte apply to every channel.
pub const ALL_CHANNELS: u8 = 0x40;

/// Index of each set/clear byte in [`EdmaRegisters::setclr`].
pub mod setclr {
    /// Set Enable Request
    pub const SERQ: usize = 0;
    /// Clear Enable Request
    pub const CERQ: usize = 1;
    /// Set Enable Error Interrupt
    pub const SEEI: usize = 2;
    /// Clear Enable Error Interrupt
    pub const CEEI: usize = 3;
    /// Clear Interrupt Request
    pub const CINT: usize = 4;
    /// Clear Error
    pub const CERR: usize = 5;
    /// Set START Bit
    pub const SSRT: usize = 6;
    /// Clear DONE Status Bit
    pub const CDNE: usize = 7;
}

register_structs! {
    /// Transfer control descriptor.
    pub TcdRegisters {
        /// Source Address
        (0x00 => pub saddr: ReadWrite<u32>),
        /// Transfer Attributes
        (0x04 => pub attr: ReadWrite<u16, ATTR::Register>),
        /// Signed Source Address Offset
        (0x06 => pub soff: ReadWrite<u16>),
        /// Minor Byte Count
        (0x08 => pub nbytes: ReadWrite<u32>),
        /// Last Source Address Adjustment
        (0x0C => pub slast: ReadWrite<u32>),
        /// Destination Address
        (0x10 => pub daddr: ReadWrite<u32>),
        /// Current Major Iteration Count
        (0x14 => pub citer: ReadWrite<u16, ITER::Register>),
        /// Signed Destination Address Offset
        (0x16 => pub doff: ReadWrite<u16>),
        /// Last Destination Address Adjustment / Scatter Gather Address
        (0x18 => pub dlast_sga: ReadWrite<u32>),
        /// Beginning Major Iteration Count
        (0x1C => pub biter: ReadWrite<u16, ITER::Register>),
        /// Control and Status
        (0x1E => pub csr: ReadWrite<u16, CSR::Register>),
        (0x20 => @END),
    },

    pub EdmaRegisters {
        /// Control Register
        (0x0000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Error Status Register
        (0x0004 => pub esr: ReadOnly<u32, ESR::Register>),
        (0x0008 => _reserved0),
        /// Enable Request Register
        (0x000C => pub erq: ReadWrite<u32>),
        (0x0010 => _reserved1),
        /// Enable Error Interrupt Register
        (0x0014 => pub eei: ReadWrite<u32>),
        /// Set/clear registers, see [`setclr`]
        (0x0018 => pub setclr: [WriteOnly<u8, SETCLR::Register>; 8]),
        (0x0020 => _reserved2),
        /// Interrupt Request Register, write 1 to clear
        (0x0024 => pub int: ReadWrite<u32>),
        (0x0028 => _reserved3),
        /// Error Register, write 1 to clear
        (0x002C => pub err: ReadWrite<u32>),
        (0x0030 => _reserved4),
        /// Hardware Request Status Register
        (0x0034 => pub hrs: ReadOnly<u32>),
        (0x0038 => _reserved5),
        /// Channel Priority Registers
        (0x0100 => pub cpr: [ReadWrite<u8, CPR::Register>; NUM_CHANNELS]),
        (0x0110 => _reserved6),
        (0x1000 => pub tcd: [TcdRegisters; NUM_CHANNELS]),
        (0x1200 => @END),
    }
}

alias_views! {
    TcdRegisters {
        /// `CITER` with minor-loop channel linking enabled.
        pub fn citer_elink(&self) -> &ReadWrite<u16, ITER_ELINK::Register> =
            citer as ReadWrite<u16, ITER::Register>;
        /// `BITER` with minor-loop channel linking enabled.
        pub fn biter_elink(&self) -> &ReadWrite<u16, ITER_ELINK::Register> =
            biter as ReadWrite<u16, ITER::Register>;
    }
}

alias_views! {
    EdmaRegisters {
        /// The eight set/clear bytes as two words.
        pub fn setclr_words(&self) -> &[WriteOnly<u32>; 2] =
            setclr as [WriteOnly<u8, SETCLR::Register>; 8];
        /// Channel priorities, four channels per word.
        pub fn cpr_words(&self) -> &[ReadWrite<u32>; NUM_CHANNELS / 4] =
            cpr as [ReadWrite<u8, CPR::Register>; NUM_CHANNELS];
        /// Every TCD as eight raw words.
        pub fn tcd_words(&self) -> &[[ReadWrite<u32>; 8]; NUM_CHANNELS] =
            tcd as [TcdRegisters; NUM_CHANNELS];
    }
}

// The checked accessors index the layout arrays with the device bound.
const _: () = assert!(Device::EDMA_CHANNELS <= NUM_CHANNELS);

impl EdmaRegisters {
    pub fn tcd(&self, channel: usize) -> Result<&TcdRegisters, ErrorCode> {
        check_index(channel, Device::EDMA_CHANNELS).map(|i| &self.tcd[i])
    }

    /// TCD of `channel` as raw words, for copying a prepared descriptor.
    pub fn tcd_raw(&self, channel: usize) -> Result<&[ReadWrite<u32>; 8], ErrorCode> {
        check_index(channel, Device::EDMA_CHANNELS).map(|i| &self.tcd_words()[i])
    }

    pub fn priority(&self, channel: usize) -> Result<&ReadWrite<u8, CPR::Register>, ErrorCode> {
        check_index(channel, Device::EDMA_CHANNELS).map(|i| &self.cpr[i])
    }
}

/// Bit of `channel` in `ERQ`, `EEI`, `INT`, `ERR` and `HRS`.
pub const fn channel_bit(channel: usize) -> Result<u32, ErrorCode> {
    match check_index(channel, Device::EDMA_CHANNELS) {
        Ok(c) => Ok(1 << c),
        Err(e) => Err(e),
    }
}

/// `SSIZE`/`DSIZE` encoding of a transfer of `bytes` bytes.
pub const fn transfer_size(bytes: usize) -> Result<u16, ErrorCode> {
    match bytes {
        1 => Ok(0),
        2 => Ok(1),
        4 => Ok(2),
        8 => Ok(3),
        32 => Ok(5),
        _ => Err(ErrorCode::INVAL),
    }
}

pub const EDMA_BASE: StaticRef<EdmaRegisters> =
    unsafe { StaticRef::new(EDMA_BASE_ADDR as *const EdmaRegisters) };

register_bitfields![u32,
    pub CR [
        /// Cancel transfer
        CX OFFSET(17) NUMBITS(1) [],
        /// Error cancel transfer
        ECX OFFSET(16) NUMBITS(1) [],
        GRP1PRI OFFSET(10) NUMBITS(1) [],
        GRP0PRI OFFSET(8) NUMBITS(1) [],
        /// Enable minor loop mapping
        EMLM OFFSET(7) NUMBITS(1) [],
        /// Continuous link mode
        CLM OFFSET(6) NUMBITS(1) [],
        HALT OFFSET(5) NUMBITS(1) [],
        /// Halt on error
        HOE OFFSET(4) NUMBITS(1) [],
        /// Enable round robin group arbitration
        ERGA OFFSET(3) NUMBITS(1) [],
        /// Enable round robin channel arbitration
        ERCA OFFSET(2) NUMBITS(1) [],
        /// Enable debug
        EDBG OFFSET(1) NUMBITS(1) []
    ],
    pub ESR [
        VLD OFFSET(31) NUMBITS(1) [],
        ECX OFFSET(16) NUMBITS(1) [],
        GPE OFFSET(15) NUMBITS(1) [],
        CPE OFFSET(14) NUMBITS(1) [],
        /// Channel of the last recorded error
        ERRCHN OFFSET(8) NUMBITS(6) [],
        SAE OFFSET(7) NUMBITS(1) [],
        SOE OFFSET(6) NUMBITS(1) [],
        DAE OFFSET(5) NUMBITS(1) [],
        DOE OFFSET(4) NUMBITS(1) [],
        NCE OFFSET(3) NUMBITS(1) [],
        SGE OFFSET(2) NUMBITS(1) [],
        SBE OFFSET(1) NUMBITS(1) [],
        DBE OFFSET(0) NUMBITS(1) []
    ]
];

register_bitfields![u16,
    pub ATTR [
        /// Source address modulo
        SMOD OFFSET(11) NUMBITS(5) [],
        SSIZE OFFSET(8) NUMBITS(3) [],
        /// Destination address modulo
        DMOD OFFSET(3) NUMBITS(5) [],
        DSIZE OFFSET(0) NUMBITS(3) []
    ],
    /// `CITER`/`BITER` without channel linking.
    pub ITER [
        ELINK OFFSET(15) NUMBITS(1) [],
        COUNT OFFSET(0) NUMBITS(15) []
    ],
    /// `CITER`/`BITER` with channel linking.
    pub ITER_ELINK [
        ELINK OFFSET(15) NUMBITS(1) [],
        LINKCH OFFSET(9) NUMBITS(6) [],
        COUNT OFFSET(0) NUMBITS(9) []
    ],
    pub CSR [
        /// Bandwidth control
        BWC OFFSET(14) NUMBITS(2) [
            NoStall = 0,
            Stall4Cycles = 2,
            Stall8Cycles = 3
        ],
        MAJORLINKCH OFFSET(8) NUMBITS(6) [],
        DONE OFFSET(7) NUMBITS(1) [],
        ACTIVE OFFSET(6) NUMBITS(1) [],
        MAJORELINK OFFSET(5) NUMBITS(1) [],
        /// Enable scatter/gather
        ESG OFFSET(4) NUMBITS(1) [],
        /// Disable request at the end of the major loop
        DREQ OFFSET(3) NUMBITS(1) [],
        INTHALF OFFSET(2) NUMBITS(1) [],
        INTMAJ OFFSET(1) NUMBITS(1) [],
        START OFFSET(0) NUMBITS(1) []
    ]
];

register_bitfields![u8,
    /// Layout shared by the eight set/clear bytes.
    pub SETCLR [
        /// No operation
        NOP OFFSET(7) NUMBITS(1) [],
        CH OFFSET(0) NUMBITS(7) []
    ],
    pub CPR [
        /// Enable channel preemption
        ECP OFFSET(7) NUMBITS(1) [],
        /// Disable preempt ability
        DPA OFFSET(6) NUMBITS(1) [],
        GRPPRI OFFSET(4) NUMBITS(2) [],
        CHPRI OFFSET(0) NUMBITS(4) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::byte_in_word;
    use crate::testing::{self, assert_fields};
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(EdmaRegisters, erq), 0x0C);
        assert_eq!(offset_of!(EdmaRegisters, eei), 0x14);
        assert_eq!(offset_of!(EdmaRegisters, setclr), 0x18);
        assert_eq!(offset_of!(EdmaRegisters, int), 0x24);
        assert_eq!(offset_of!(EdmaRegisters, err), 0x2C);
        assert_eq!(offset_of!(EdmaRegisters, hrs), 0x34);
        assert_eq!(offset_of!(EdmaRegisters, cpr), 0x100);
        assert_eq!(offset_of!(EdmaRegisters, tcd), 0x1000);
        assert_eq!(size_of::<EdmaRegisters>(), 0x1200);
        assert_eq!(EDMA_BASE.address(), 0xFFF4_4000);
    }

    #[test]
    fn tcd_layout() {
        assert_eq!(offset_of!(TcdRegisters, attr), 0x04);
        assert_eq!(offset_of!(TcdRegisters, soff), 0x06);
        assert_eq!(offset_of!(TcdRegisters, nbytes), 0x08);
        assert_eq!(offset_of!(TcdRegisters, daddr), 0x10);
        assert_eq!(offset_of!(TcdRegisters, citer), 0x14);
        assert_eq!(offset_of!(TcdRegisters, dlast_sga), 0x18);
        assert_eq!(offset_of!(TcdRegisters, biter), 0x1C);
        assert_eq!(offset_of!(TcdRegisters, csr), 0x1E);
        assert_eq!(size_of::<TcdRegisters>(), 0x20);

        let edma = testing::zeroed::<EdmaRegisters>();
        assert_eq!(testing::offset_in(&*edma, edma.tcd(15).unwrap()), 0x11E0);
        assert!(edma.tcd(Device::EDMA_CHANNELS).is_err());
        assert!(edma.tcd(Device::EDMA_CHANNELS - 1).is_ok());
        assert!(edma.priority(Device::EDMA_CHANNELS - 1).is_ok());
    }

    #[test]
    fn bitfields() {
        assert_fields!(32;
            CR::CX, CR::ECX, CR::GRP1PRI, CR::GRP0PRI, CR::EMLM, CR::CLM,
            CR::HALT, CR::HOE, CR::ERGA, CR::ERCA, CR::EDBG);
        assert_fields!(32;
            ESR::VLD, ESR::ECX, ESR::GPE, ESR::CPE, ESR::ERRCHN, ESR::SAE,
            ESR::SOE, ESR::DAE, ESR::DOE, ESR::NCE, ESR::SGE, ESR::SBE, ESR::DBE);
        assert_eq!(
            assert_fields!(16; ATTR::SMOD, ATTR::SSIZE, ATTR::DMOD, ATTR::DSIZE),
            0
        );
        assert_eq!(
            assert_fields!(16;
                CSR::BWC, CSR::MAJORLINKCH, CSR::DONE, CSR::ACTIVE, CSR::MAJORELINK,
                CSR::ESG, CSR::DREQ, CSR::INTHALF, CSR::INTMAJ, CSR::START),
            0
        );
        assert_eq!(assert_fields!(16; ITER::ELINK, ITER::COUNT), 0);
        assert_eq!(
            assert_fields!(16; ITER_ELINK::ELINK, ITER_ELINK::LINKCH, ITER_ELINK::COUNT),
            0
        );
        assert_eq!(assert_fields!(8; SETCLR::NOP, SETCLR::CH), 0);
        assert_eq!(
            assert_fields!(8; CPR::ECP, CPR::DPA, CPR::GRPPRI, CPR::CHPRI),
            0
        );
    }

    #[test]
    fn set_clear_bytes() {
        let edma = testing::zeroed::<EdmaRegisters>();
        edma.setclr[setclr::SERQ].write(SETCLR::CH.val(5));
        edma.setclr[setclr::CINT].write(SETCLR::CH.val(ALL_CHANNELS));
        let words = edma.setclr_words();
        assert_eq!(
            testing::offset_in(&*edma, &words[1]),
            0x18 + setclr::CINT
        );

        // Read the bytes back through a writable view of the same memory.
        let raw = unsafe { &*(words as *const _ as *const [ReadWrite<u32>; 2]) };
        assert_eq!(raw[0].get(), byte_in_word(setclr::SERQ, 5));
        assert_eq!(raw[1].get(), byte_in_word(setclr::CINT, ALL_CHANNELS));

        words[0].set(byte_in_word(setclr::CERQ, 0x80));
        assert_eq!(raw[0].get(), byte_in_word(setclr::CERQ, 0x80));
    }

    #[test]
    fn priorities_as_words() {
        let edma = testing::zeroed::<EdmaRegisters>();
        edma.priority(6)
            .unwrap()
            .write(CPR::ECP::SET + CPR::CHPRI.val(6));
        assert_eq!(edma.cpr_words()[1].get(), byte_in_word(6, 0x86));

        edma.cpr_words()[3].set(byte_in_word(15, 0x0F));
        assert_eq!(edma.cpr[15].read(CPR::CHPRI), 15);
        assert!(edma.priority(Device::EDMA_CHANNELS).is_err());
    }

    #[test]
    fn descriptor_words() {
        let edma = testing::zeroed::<EdmaRegisters>();
        let raw = edma.tcd_raw(2).unwrap();
        raw[0].set(0x4000_0000);
        raw[4].set(0xFFF9_0034);
        assert_eq!(edma.tcd[2].saddr.get(), 0x4000_0000);
        assert_eq!(edma.tcd[2].daddr.get(), 0xFFF9_0034);

        edma.tcd[2].dlast_sga.set(0x4000_1000);
        assert_eq!(raw[6].get(), 0x4000_1000);
        assert!(edma.tcd_raw(Device::EDMA_CHANNELS).is_err());
    }

    #[test]
    fn linked_iteration_counts() {
        let edma = testing::zeroed::<EdmaRegisters>();
        let tcd = edma.tcd(0).unwrap();
        tcd.citer_elink()
            .write(ITER_ELINK::ELINK::SET + ITER_ELINK::LINKCH.val(3) + ITER_ELINK::COUNT.val(10));
        assert!(tcd.citer.is_set(ITER::ELINK));
        assert_eq!(tcd.citer.read(ITER::COUNT), (3 << 9) | 10);

        tcd.biter.write(ITER::COUNT.val(100));
        assert_eq!(tcd.biter_elink().read(ITER_ELINK::COUNT), 100);
        assert_eq!(tcd.biter_elink().read(ITER_ELINK::LINKCH), 0);
    }

    #[test]
    fn transfer_setup() {
        assert_eq!(channel_bit(0), Ok(0x1));
        assert_eq!(channel_bit(15), Ok(0x8000));
        assert_eq!(channel_bit(16), Err(ErrorCode::INVAL));
        assert_eq!(
            channel_bit(Device::EDMA_CHANNELS - 1),
            Ok(1 << (Device::EDMA_CHANNELS - 1))
        );
        assert_eq!(channel_bit(Device::EDMA_CHANNELS), Err(ErrorCode::INVAL));
        assert_eq!(transfer_size(4), Ok(2));
        assert_eq!(transfer_size(3), Err(ErrorCode::INVAL));

        let edma = testing::zeroed::<EdmaRegisters>();
        let tcd = edma.tcd(1).unwrap();
        tcd.attr.write(
            ATTR::SSIZE.val(transfer_size(1).unwrap()) + ATTR::DSIZE.val(transfer_size(2).unwrap()),
        );
        tcd.csr.modify(CSR::INTMAJ::SET + CSR::DREQ::SET);
        assert_eq!(tcd.attr.get(), 0x0001);
        assert_eq!(tcd.csr.get(), 0x000A);
        edma.erq.set(channel_bit(1).unwrap());
        assert_eq!(edma.erq.get(), 0x2);
    }
}
