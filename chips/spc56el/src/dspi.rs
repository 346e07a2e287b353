// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Deserial/Serial Peripheral Interface (DSPI).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::DSPI_BASE_ADDR;
use crate::static_ref::StaticRef;

pub const NUM_CTAR: usize = 8;
pub const FIFO_DEPTH: usize = 5;
pub const NUM_PCS: usize = 8;

register_structs! {
    pub DspiRegisters {
        /// Module Configuration Register
        (0x00 => pub mcr: ReadWrite<u32, MCR::Register>),
        (0x04 => _reserved0),
        /// Transfer Count Register
        (0x08 => pub tcr: ReadWrite<u32, TCR::Register>),
        /// Clock and Transfer Attributes Registers
        (0x0C => pub ctar: [ReadWrite<u32, CTAR::Register>; NUM_CTAR]),
        /// Status Register, write 1 to clear the flags
        (0x2C => pub sr: ReadWrite<u32, SR::Register>),
        /// DMA/Interrupt Request Select and Enable Register
        (0x30 => pub rser: ReadWrite<u32, RSER::Register>),
        /// PUSH TX FIFO Register
        (0x34 => pub pushr: ReadWrite<u32, PUSHR::Register>),
        /// POP RX FIFO Register
        (0x38 => pub popr: ReadOnly<u32, POPR::Register>),
        /// Transmit FIFO Registers
        (0x3C => pub txfr: [ReadOnly<u32, TXFR::Register>; FIFO_DEPTH]),
        (0x50 => _reserved1),
        /// Receive FIFO Registers
        (0x7C => pub rxfr: [ReadOnly<u32, POPR::Register>; FIFO_DEPTH]),
        (0x90 => _reserved2),
        /// DSI Configuration Register
        (0xC0 => pub dsicr: ReadWrite<u32, DSICR::Register>),
        /// DSI Serialization Data Register
        (0xC4 => pub sdr: ReadOnly<u32, SERIAL_DATA::Register>),
        /// DSI Alternate Serialization Data Register
        (0xC8 => pub asdr: ReadWrite<u32, SERIAL_DATA::Register>),
        /// DSI Transmit Comparison Register
        (0xCC => pub compr: ReadOnly<u32, SERIAL_DATA::Register>),
        /// DSI Deserialization Data Register
        (0xD0 => pub ddr: ReadOnly<u32, SERIAL_DATA::Register>),
        (0xD4 => @END),
    }
}

impl DspiRegisters {
    pub fn transfer_attributes(
        &self,
        n: usize,
    ) -> Result<&ReadWrite<u32, CTAR::Register>, ErrorCode> {
        check_index(n, NUM_CTAR).map(|i| &self.ctar[i])
    }

    /// Transmit FIFO entry `n`, for debugging.
    pub fn tx_fifo(&self, n: usize) -> Result<&ReadOnly<u32, TXFR::Register>, ErrorCode> {
        check_index(n, FIFO_DEPTH).map(|i| &self.txfr[i])
    }

    /// Receive FIFO entry `n`, for debugging.
    pub fn rx_fifo(&self, n: usize) -> Result<&ReadOnly<u32, POPR::Register>, ErrorCode> {
        check_index(n, FIFO_DEPTH).map(|i| &self.rxfr[i])
    }
}

/// `PUSHR` bit asserting peripheral chip select `pcs`.
pub const fn pcs_bit(pcs: usize) -> Result<u32, ErrorCode> {
    match check_index(pcs, NUM_PCS) {
        Ok(p) => Ok(1 << (16 + p)),
        Err(e) => Err(e),
    }
}

pub const DSPI_BASE: [StaticRef<DspiRegisters>; 3] = unsafe {
    [
        StaticRef::new(DSPI_BASE_ADDR[0] as *const DspiRegisters),
        StaticRef::new(DSPI_BASE_ADDR[1] as *const DspiRegisters),
        StaticRef::new(DSPI_BASE_ADDR[2] as *const DspiRegisters),
    ]
};

register_bitfields![u32,
    pub MCR [
        /// Master mode
        MSTR OFFSET(31) NUMBITS(1) [],
        CONT_SCKE OFFSET(30) NUMBITS(1) [],
        /// Configuration
        DCONF OFFSET(28) NUMBITS(2) [
            Spi = 0,
            Dsi = 1,
            Csi = 2
        ],
        FRZ OFFSET(27) NUMBITS(1) [],
        MTFE OFFSET(26) NUMBITS(1) [],
        PCSSE OFFSET(25) NUMBITS(1) [],
        ROOE OFFSET(24) NUMBITS(1) [],
        PCSIS7 OFFSET(23) NUMBITS(1) [],
        PCSIS6 OFFSET(22) NUMBITS(1) [],
        PCSIS5 OFFSET(21) NUMBITS(1) [],
        PCSIS4 OFFSET(20) NUMBITS(1) [],
        PCSIS3 OFFSET(19) NUMBITS(1) [],
        PCSIS2 OFFSET(18) NUMBITS(1) [],
        PCSIS1 OFFSET(17) NUMBITS(1) [],
        PCSIS0 OFFSET(16) NUMBITS(1) [],
        MDIS OFFSET(14) NUMBITS(1) [],
        DIS_TXF OFFSET(13) NUMBITS(1) [],
        DIS_RXF OFFSET(12) NUMBITS(1) [],
        CLR_TXF OFFSET(11) NUMBITS(1) [],
        CLR_RXF OFFSET(10) NUMBITS(1) [],
        /// Sample point in modified timing format
        SMPL_PT OFFSET(8) NUMBITS(2) [],
        HALT OFFSET(0) NUMBITS(1) []
    ],
    pub TCR [
        TCNT OFFSET(16) NUMBITS(16) []
    ],
    pub CTAR [
        DBR OFFSET(31) NUMBITS(1) [],
        /// Frame size minus one
        FMSZ OFFSET(27) NUMBITS(4) [],
        CPOL OFFSET(26) NUMBITS(1) [],
        CPHA OFFSET(25) NUMBITS(1) [],
        LSBFE OFFSET(24) NUMBITS(1) [],
        PCSSCK OFFSET(22) NUMBITS(2) [],
        PASC OFFSET(20) NUMBITS(2) [],
        PDT OFFSET(18) NUMBITS(2) [],
        PBR OFFSET(16) NUMBITS(2) [],
        CSSCK OFFSET(12) NUMBITS(4) [],
        ASC OFFSET(8) NUMBITS(4) [],
        DT OFFSET(4) NUMBITS(4) [],
        BR OFFSET(0) NUMBITS(4) []
    ],
    pub SR [
        TCF OFFSET(31) NUMBITS(1) [],
        TXRXS OFFSET(30) NUMBITS(1) [],
        EOQF OFFSET(28) NUMBITS(1) [],
        TFUF OFFSET(27) NUMBITS(1) [],
        TFFF OFFSET(25) NUMBITS(1) [],
        RFOF OFFSET(19) NUMBITS(1) [],
        RFDF OFFSET(17) NUMBITS(1) [],
        TXCTR OFFSET(12) NUMBITS(4) [],
        TXNXTPTR OFFSET(8) NUMBITS(4) [],
        RXCTR OFFSET(4) NUMBITS(4) [],
        POPNXTPTR OFFSET(0) NUMBITS(4) []
    ],
    pub RSER [
        TCFRE OFFSET(31) NUMBITS(1) [],
        EOQFRE OFFSET(28) NUMBITS(1) [],
        TFUFRE OFFSET(27) NUMBITS(1) [],
        TFFFRE OFFSET(25) NUMBITS(1) [],
        TFFFDIRS OFFSET(24) NUMBITS(1) [],
        RFOFRE OFFSET(19) NUMBITS(1) [],
        RFDFRE OFFSET(17) NUMBITS(1) [],
        RFDFDIRS OFFSET(16) NUMBITS(1) []
    ],
    pub PUSHR [
        CONT OFFSET(31) NUMBITS(1) [],
        /// Clock and transfer attributes select
        CTAS OFFSET(28) NUMBITS(3) [],
        EOQ OFFSET(27) NUMBITS(1) [],
        CTCNT OFFSET(26) NUMBITS(1) [],
        PCS7 OFFSET(23) NUMBITS(1) [],
        PCS6 OFFSET(22) NUMBITS(1) [],
        PCS5 OFFSET(21) NUMBITS(1) [],
        PCS4 OFFSET(20) NUMBITS(1) [],
        PCS3 OFFSET(19) NUMBITS(1) [],
        PCS2 OFFSET(18) NUMBITS(1) [],
        PCS1 OFFSET(17) NUMBITS(1) [],
        PCS0 OFFSET(16) NUMBITS(1) [],
        TXDATA OFFSET(0) NUMBITS(16) []
    ],
    pub POPR [
        RXDATA OFFSET(0) NUMBITS(16) []
    ],
    pub TXFR [
        TXCMD OFFSET(16) NUMBITS(16) [],
        TXDATA OFFSET(0) NUMBITS(16) []
    ],
    pub DSICR [
        MTOE OFFSET(31) NUMBITS(1) [],
        MTOCNT OFFSET(24) NUMBITS(6) [],
        TXSS OFFSET(19) NUMBITS(1) [],
        TPOL OFFSET(18) NUMBITS(1) [],
        TRRE OFFSET(17) NUMBITS(1) [],
        CID OFFSET(16) NUMBITS(1) [],
        DCONT OFFSET(15) NUMBITS(1) [],
        DSICTAS OFFSET(12) NUMBITS(3) [],
        DPCS5 OFFSET(5) NUMBITS(1) [],
        DPCS4 OFFSET(4) NUMBITS(1) [],
        DPCS3 OFFSET(3) NUMBITS(1) [],
        DPCS2 OFFSET(2) NUMBITS(1) [],
        DPCS1 OFFSET(1) NUMBITS(1) [],
        DPCS0 OFFSET(0) NUMBITS(1) []
    ],
    /// Shared by `SDR`, `ASDR`, `COMPR` and `DDR`.
    pub SERIAL_DATA [
        DATA OFFSET(0) NUMBITS(16) []
    ]
];
