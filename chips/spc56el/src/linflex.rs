// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! LIN controllers LINFlex_0 and LINFlex_1, usable as LIN master/slave or
//! as a UART.
//!
//! Control and status registers are 16 bits wide and occupy the low half
//! of a 32-bit slot, so each sits two bytes into its slot. The eight data
//! bytes `DATA0..DATA7` are packed into `BDRL` and `BDRM` with `DATA0` in
//! the least significant byte of `BDRL`. In UART mode the transmitter sends
//! `DATA0` and the receiver delivers into `DATA4`; use
//! [`LinFlexRegisters::data_bytes`] with [`data_byte_index`] to move a
//! single byte without touching its neighbours.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::LINFLEX_BASE_ADDR;
use crate::static_ref::StaticRef;

pub const NUM_DATA_BYTES: usize = 8;
pub const NUM_FILTERS: usize = 8;

/// Data byte sent in UART mode.
pub const UART_TX_BYTE: usize = 0;
/// Data byte received in UART mode.
pub const UART_RX_BYTE: usize = 4;

register_structs! {
    pub FilterControlRegisters {
        (0x0 => _reserved0),
        /// Identifier Filter Control Register
        (0x2 => pub ifcr: ReadWrite<u16, IFCR::Register>),
        (0x4 => @END),
    },

    pub LinFlexRegisters {
        (0x00 => _reserved0),
        /// LIN Control Register 1
        (0x02 => pub lincr1: ReadWrite<u16, LINCR1::Register>),
        (0x04 => _reserved1),
        /// LIN Interrupt Enable Register
        (0x06 => pub linier: ReadWrite<u16, LINIER::Register>),
        (0x08 => _reserved2),
        /// LIN Status Register, write 1 to clear
        (0x0A => pub linsr: ReadWrite<u16, LINSR::Register>),
        (0x0C => _reserved3),
        /// LIN Error Status Register, write 1 to clear
        (0x0E => pub linesr: ReadWrite<u16, LINESR::Register>),
        (0x10 => _reserved4),
        /// UART Mode Control Register
        (0x12 => pub uartcr: ReadWrite<u16, UARTCR::Register>),
        (0x14 => _reserved5),
        /// UART Mode Status Register, write 1 to clear
        (0x16 => pub uartsr: ReadWrite<u16, UARTSR::Register>),
        (0x18 => _reserved6),
        /// LIN Time-Out Control Status Register
        (0x1A => pub lintcsr: ReadWrite<u16, LINTCSR::Register>),
        (0x1C => _reserved7),
        /// LIN Output Compare Register
        (0x1E => pub linocr: ReadWrite<u16, LINOCR::Register>),
        (0x20 => _reserved8),
        /// LIN Time-Out Control Register
        (0x22 => pub lintocr: ReadWrite<u16, LINTOCR::Register>),
        (0x24 => _reserved9),
        /// LIN Fractional Baud Rate Register
        (0x26 => pub linfbrr: ReadWrite<u16, LINFBRR::Register>),
        (0x28 => _reserved10),
        /// LIN Integer Baud Rate Register
        (0x2A => pub linibrr: ReadWrite<u16, LINIBRR::Register>),
        (0x2C => _reserved11),
        /// LIN Checksum Field Register
        (0x2E => pub lincfr: ReadWrite<u16, LINCFR::Register>),
        (0x30 => _reserved12),
        /// LIN Control Register 2
        (0x32 => pub lincr2: ReadWrite<u16, LINCR2::Register>),
        (0x34 => _reserved13),
        /// Buffer Identifier Register
        (0x36 => pub bidr: ReadWrite<u16, BIDR::Register>),
        /// Buffer Data Register Least Significant
        (0x38 => pub bdrl: ReadWrite<u32, BDRL::Register>),
        /// Buffer Data Register Most Significant
        (0x3C => pub bdrm: ReadWrite<u32, BDRM::Register>),
        (0x40 => _reserved14),
        /// Identifier Filter Enable Register
        (0x42 => pub ifer: ReadWrite<u16, IFER::Register>),
        (0x44 => _reserved15),
        /// Identifier Filter Match Index
        (0x46 => pub ifmi: ReadWrite<u16, IFMI::Register>),
        (0x48 => _reserved16),
        /// Identifier Filter Mode Register
        (0x4A => pub ifmr: ReadWrite<u16, IFMR::Register>),
        /// Identifier Filter Control Registers 0..7
        (0x4C => pub filter: [FilterControlRegisters; NUM_FILTERS]),
        (0x6C => @END),
    }
}

impl LinFlexRegisters {
    /// `BDRL` and `BDRM` as eight byte registers in address order. See
    /// [`data_byte_index`] for where `DATAn` lands.
    pub fn data_bytes(&self) -> &[ReadWrite<u8>; NUM_DATA_BYTES] {
        let words: &ReadWrite<u32, BDRL::Register> = &self.bdrl;
        // SAFETY: `bdrl` and `bdrm` are adjacent 32-bit cells at 0x38 and
        // 0x3C, so eight byte cells starting at `bdrl` cover exactly them.
        unsafe {
            &*(words as *const ReadWrite<u32, BDRL::Register>)
                .cast::<[ReadWrite<u8>; NUM_DATA_BYTES]>()
        }
    }

    pub fn filter_control(&self, n: usize) -> Result<&ReadWrite<u16, IFCR::Register>, ErrorCode> {
        check_index(n, NUM_FILTERS).map(|i| &self.filter[i].ifcr)
    }
}

const _: () = assert!(
    core::mem::offset_of!(LinFlexRegisters, bdrm)
        == core::mem::offset_of!(LinFlexRegisters, bdrl) + 4
);

/// Position of data byte `DATAn` in [`LinFlexRegisters::data_bytes`].
pub const fn data_byte_index(n: usize) -> Result<usize, ErrorCode> {
    match check_index(n, NUM_DATA_BYTES) {
        Ok(n) => {
            let lane = n % 4;
            let offset = if cfg!(target_endian = "big") { 3 - lane } else { lane };
            Ok(n - lane + offset)
        }
        Err(e) => Err(e),
    }
}

/// Integer and fractional baud rate divider values (`LINIBRR`,
/// `LINFBRR`) for `baud` with a module clock of `clock` Hz.
pub const fn baud_divider(clock: u32, baud: u32) -> Result<(u16, u16), ErrorCode> {
    if baud == 0 {
        return Err(ErrorCode::INVAL);
    }
    let div = clock / baud;
    let mantissa = div >> 4;
    if mantissa == 0 || mantissa > 0x1FFF {
        return Err(ErrorCode::INVAL);
    }
    Ok((mantissa as u16, (div & 0xF) as u16))
}

pub const LINFLEX0_BASE: StaticRef<LinFlexRegisters> =
    unsafe { StaticRef::new(LINFLEX_BASE_ADDR[0] as *const LinFlexRegisters) };
pub const LINFLEX1_BASE: StaticRef<LinFlexRegisters> =
    unsafe { StaticRef::new(LINFLEX_BASE_ADDR[1] as *const LinFlexRegisters) };

register_bitfields![u16,
    pub LINCR1 [
        CCD OFFSET(15) NUMBITS(1) [],
        CFD OFFSET(14) NUMBITS(1) [],
        LASE OFFSET(13) NUMBITS(1) [],
        AWUM OFFSET(12) NUMBITS(1) [],
        MBL OFFSET(8) NUMBITS(4) [],
        BF OFFSET(7) NUMBITS(1) [],
        SFTM OFFSET(6) NUMBITS(1) [],
        LBKM OFFSET(5) NUMBITS(1) [],
        MME OFFSET(4) NUMBITS(1) [],
        SBDT OFFSET(3) NUMBITS(1) [],
        RBLM OFFSET(2) NUMBITS(1) [],
        SLEEP OFFSET(1) NUMBITS(1) [],
        /// Initialization request
        INIT OFFSET(0) NUMBITS(1) []
    ],
    pub LINIER [
        SZIE OFFSET(15) NUMBITS(1) [],
        OCIE OFFSET(14) NUMBITS(1) [],
        BEIE OFFSET(13) NUMBITS(1) [],
        CEIE OFFSET(12) NUMBITS(1) [],
        HEIE OFFSET(11) NUMBITS(1) [],
        FEIE OFFSET(8) NUMBITS(1) [],
        BOIE OFFSET(7) NUMBITS(1) [],
        LSIE OFFSET(6) NUMBITS(1) [],
        WUIE OFFSET(5) NUMBITS(1) [],
        DBFIE OFFSET(4) NUMBITS(1) [],
        DBEIE OFFSET(3) NUMBITS(1) [],
        DRIE OFFSET(2) NUMBITS(1) [],
        DTIE OFFSET(1) NUMBITS(1) [],
        HRIE OFFSET(0) NUMBITS(1) []
    ],
    pub LINSR [
        LINS OFFSET(12) NUMBITS(4) [
            Sleep = 0,
            Init = 1,
            Idle = 2,
            SyncBreak = 3,
            SyncDelimiter = 4,
            SyncField = 5,
            Identifier = 6,
            Header = 7,
            DataTransmission = 8,
            Checksum = 9
        ],
        RMB OFFSET(9) NUMBITS(1) [],
        RBSY OFFSET(7) NUMBITS(1) [],
        RPS OFFSET(6) NUMBITS(1) [],
        WUF OFFSET(5) NUMBITS(1) [],
        DBFF OFFSET(4) NUMBITS(1) [],
        DBEF OFFSET(3) NUMBITS(1) [],
        DRF OFFSET(2) NUMBITS(1) [],
        DTF OFFSET(1) NUMBITS(1) [],
        HRF OFFSET(0) NUMBITS(1) []
    ],
    pub LINESR [
        SZF OFFSET(15) NUMBITS(1) [],
        OCF OFFSET(14) NUMBITS(1) [],
        BEF OFFSET(13) NUMBITS(1) [],
        CEF OFFSET(12) NUMBITS(1) [],
        SFEF OFFSET(11) NUMBITS(1) [],
        BDEF OFFSET(10) NUMBITS(1) [],
        IDPEF OFFSET(9) NUMBITS(1) [],
        FEF OFFSET(8) NUMBITS(1) [],
        BOF OFFSET(7) NUMBITS(1) [],
        NF OFFSET(0) NUMBITS(1) []
    ],
    pub UARTCR [
        TDFL OFFSET(13) NUMBITS(2) [],
        RDFL OFFSET(10) NUMBITS(2) [],
        RXEN OFFSET(5) NUMBITS(1) [],
        TXEN OFFSET(4) NUMBITS(1) [],
        OP OFFSET(3) NUMBITS(1) [],
        PCE OFFSET(2) NUMBITS(1) [],
        /// Word length, 0 for 7 bits and 1 for 8 bits
        WL OFFSET(1) NUMBITS(1) [],
        /// UART mode, set before any other UARTCR bit
        UART OFFSET(0) NUMBITS(1) []
    ],
    pub UARTSR [
        SZF OFFSET(15) NUMBITS(1) [],
        OCF OFFSET(14) NUMBITS(1) [],
        PE OFFSET(10) NUMBITS(4) [],
        RMB OFFSET(9) NUMBITS(1) [],
        FEF OFFSET(8) NUMBITS(1) [],
        BOF OFFSET(7) NUMBITS(1) [],
        RPS OFFSET(6) NUMBITS(1) [],
        WUF OFFSET(5) NUMBITS(1) [],
        DRF OFFSET(2) NUMBITS(1) [],
        DTF OFFSET(1) NUMBITS(1) [],
        NF OFFSET(0) NUMBITS(1) []
    ],
    pub LINTCSR [
        LTOM OFFSET(10) NUMBITS(1) [],
        IOT OFFSET(9) NUMBITS(1) [],
        TOCE OFFSET(8) NUMBITS(1) [],
        CNT OFFSET(0) NUMBITS(8) []
    ],
    pub LINOCR [
        OC2 OFFSET(8) NUMBITS(8) [],
        OC1 OFFSET(0) NUMBITS(8) []
    ],
    pub LINTOCR [
        RTO OFFSET(8) NUMBITS(4) [],
        HTO OFFSET(0) NUMBITS(7) []
    ],
    pub LINFBRR [
        DIV_F OFFSET(0) NUMBITS(4) []
    ],
    pub LINIBRR [
        DIV_M OFFSET(0) NUMBITS(13) []
    ],
    pub LINCFR [
        CF OFFSET(0) NUMBITS(8) []
    ],
    pub LINCR2 [
        IOBE OFFSET(14) NUMBITS(1) [],
        IOPE OFFSET(13) NUMBITS(1) [],
        WURQ OFFSET(12) NUMBITS(1) [],
        DDRQ OFFSET(11) NUMBITS(1) [],
        DTRQ OFFSET(10) NUMBITS(1) [],
        ABRQ OFFSET(9) NUMBITS(1) [],
        HTRQ OFFSET(8) NUMBITS(1) []
    ],
    pub BIDR [
        DFL OFFSET(10) NUMBITS(6) [],
        DIR OFFSET(9) NUMBITS(1) [],
        CCS OFFSET(8) NUMBITS(1) [],
        ID OFFSET(0) NUMBITS(6) []
    ],
    pub IFER [
        FACT OFFSET(0) NUMBITS(8) []
    ],
    pub IFMI [
        IFMI OFFSET(0) NUMBITS(4) []
    ],
    pub IFMR [
        IFM OFFSET(0) NUMBITS(4) []
    ],
    pub IFCR [
        DFL OFFSET(10) NUMBITS(3) [],
        DIR OFFSET(9) NUMBITS(1) [],
        CCS OFFSET(8) NUMBITS(1) [],
        ID OFFSET(0) NUMBITS(6) []
    ]
];

register_bitfields![u32,
    pub BDRL [
        DATA3 OFFSET(24) NUMBITS(8) [],
        DATA2 OFFSET(16) NUMBITS(8) [],
        DATA1 OFFSET(8) NUMBITS(8) [],
        DATA0 OFFSET(0) NUMBITS(8) []
    ],
    pub BDRM [
        DATA7 OFFSET(24) NUMBITS(8) [],
        DATA6 OFFSET(16) NUMBITS(8) [],
        DATA5 OFFSET(8) NUMBITS(8) [],
        DATA4 OFFSET(0) NUMBITS(8) []
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
        assert_eq!(offset_of!(LinFlexRegisters, lincr1), 0x02);
        assert_eq!(offset_of!(LinFlexRegisters, uartcr), 0x12);
        assert_eq!(offset_of!(LinFlexRegisters, uartsr), 0x16);
        assert_eq!(offset_of!(LinFlexRegisters, linfbrr), 0x26);
        assert_eq!(offset_of!(LinFlexRegisters, linibrr), 0x2A);
        assert_eq!(offset_of!(LinFlexRegisters, bidr), 0x36);
        assert_eq!(offset_of!(LinFlexRegisters, bdrl), 0x38);
        assert_eq!(offset_of!(LinFlexRegisters, bdrm), 0x3C);
        assert_eq!(offset_of!(LinFlexRegisters, ifmr), 0x4A);
        assert_eq!(size_of::<LinFlexRegisters>(), 0x6C);

        let lin = testing::zeroed::<LinFlexRegisters>();
        assert_eq!(testing::offset_in(&*lin, &lin.filter[0].ifcr), 0x4E);
        assert_eq!(testing::offset_in(&*lin, &lin.filter[7].ifcr), 0x6A);
        assert_eq!(LINFLEX0_BASE.address(), 0xFFE4_0000);
        assert_eq!(LINFLEX1_BASE.address(), 0xFFE4_4000);
    }

    #[test]
    fn bitfields() {
        assert_fields!(16;
            LINCR1::CCD, LINCR1::CFD, LINCR1::LASE, LINCR1::AWUM, LINCR1::MBL,
            LINCR1::BF, LINCR1::SFTM, LINCR1::LBKM, LINCR1::MME, LINCR1::SBDT,
            LINCR1::RBLM, LINCR1::SLEEP, LINCR1::INIT);
        assert_eq!(
            assert_fields!(16;
                UARTCR::TDFL, UARTCR::RDFL, UARTCR::RXEN, UARTCR::TXEN,
                UARTCR::OP, UARTCR::PCE, UARTCR::WL, UARTCR::UART),
            0x93C0
        );
        assert_fields!(32; BDRL::DATA3, BDRL::DATA2, BDRL::DATA1, BDRL::DATA0);
        assert_fields!(16; IFCR::DFL, IFCR::DIR, IFCR::CCS, IFCR::ID);
        assert_fields!(16;
            LINIER::SZIE, LINIER::OCIE, LINIER::BEIE, LINIER::CEIE, LINIER::HEIE, LINIER::FEIE,
            LINIER::BOIE, LINIER::LSIE, LINIER::WUIE, LINIER::DBFIE, LINIER::DBEIE, LINIER::DRIE,
            LINIER::DTIE, LINIER::HRIE);
        assert_fields!(16;
            LINSR::LINS, LINSR::RMB, LINSR::RBSY, LINSR::RPS, LINSR::WUF, LINSR::DBFF, LINSR::DBEF,
            LINSR::DRF, LINSR::DTF, LINSR::HRF);
        assert_fields!(16;
            LINESR::SZF, LINESR::OCF, LINESR::BEF, LINESR::CEF, LINESR::SFEF, LINESR::BDEF,
            LINESR::IDPEF, LINESR::FEF, LINESR::BOF, LINESR::NF);
        assert_fields!(16;
            UARTSR::SZF, UARTSR::OCF, UARTSR::PE, UARTSR::RMB, UARTSR::FEF, UARTSR::BOF,
            UARTSR::RPS, UARTSR::WUF, UARTSR::DRF, UARTSR::DTF, UARTSR::NF);
        assert_fields!(16; LINTCSR::LTOM, LINTCSR::IOT, LINTCSR::TOCE, LINTCSR::CNT);
        assert_fields!(16; LINOCR::OC2, LINOCR::OC1);
        assert_fields!(16; LINTOCR::RTO, LINTOCR::HTO);
        assert_fields!(16; LINFBRR::DIV_F);
        assert_fields!(16; LINIBRR::DIV_M);
        assert_fields!(16; LINCFR::CF);
        assert_fields!(16;
            LINCR2::IOBE, LINCR2::IOPE, LINCR2::WURQ, LINCR2::DDRQ, LINCR2::DTRQ, LINCR2::ABRQ,
            LINCR2::HTRQ);
        assert_fields!(16; BIDR::DFL, BIDR::DIR, BIDR::CCS, BIDR::ID);
        assert_fields!(16; IFER::FACT);
        assert_fields!(16; IFMI::IFMI);
        assert_fields!(16; IFMR::IFM);
        assert_fields!(32; BDRM::DATA7, BDRM::DATA6, BDRM::DATA5, BDRM::DATA4);
    }

    #[test]
    fn uart_setup_bits() {
        let lin = testing::zeroed::<LinFlexRegisters>();
        lin.lincr1.write(LINCR1::INIT::SET);
        assert_eq!(lin.lincr1.get(), 0x0001);
        lin.uartcr
            .write(UARTCR::UART::SET + UARTCR::WL::SET + UARTCR::RXEN::SET + UARTCR::TXEN::SET);
        assert_eq!(lin.uartcr.get(), 0x0033);
    }

    #[test]
    fn data_bytes_follow_named_fields() {
        let lin = testing::zeroed::<LinFlexRegisters>();
        let tx = data_byte_index(UART_TX_BYTE).unwrap();
        lin.data_bytes()[tx].set(0x5A);
        assert_eq!(lin.bdrl.read(BDRL::DATA0), 0x5A);
        assert_eq!(lin.bdrl.get(), 0x0000_005A);

        lin.bdrm.write(BDRM::DATA4.val(0xC3) + BDRM::DATA7.val(0x11));
        let rx = data_byte_index(UART_RX_BYTE).unwrap();
        assert_eq!(lin.data_bytes()[rx].get(), 0xC3);
        assert_eq!(lin.data_bytes()[data_byte_index(7).unwrap()].get(), 0x11);
        assert_eq!(data_byte_index(8), Err(ErrorCode::INVAL));
    }

    #[test]
    fn baud_rates() {
        // 60 MHz module clock, 38400 baud: 1562 = 97 * 16 + 10.
        assert_eq!(baud_divider(60_000_000, 38_400), Ok((97, 10)));
        assert_eq!(baud_divider(60_000_000, 0), Err(ErrorCode::INVAL));
        assert_eq!(baud_divider(1_000, 115_200), Err(ErrorCode::INVAL));
    }

    #[test]
    fn filters() {
        let lin = testing::zeroed::<LinFlexRegisters>();
        lin.filter_control(3).unwrap().write(IFCR::ID.val(0x2A) + IFCR::DFL.val(7));
        assert_eq!(lin.filter[3].ifcr.get(), 0x1C2A);
        assert!(lin.filter_control(NUM_FILTERS).is_err());
    }
}
