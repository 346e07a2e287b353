// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Controller Area Network (FlexCAN).
//!
//! Message buffers are four words: control/status, identifier and eight
//! data bytes. A buffer is locked by reading its `CS` word and released by
//! reading `TIMER`. The data bytes are stored in transmission order, so
//! the byte view of [`MessageBufferRegisters::data`] matches the frame.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::chip_config::{Device, Spc56elConfig};
use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::FLEXCAN_BASE_ADDR;
use crate::static_ref::StaticRef;

/// Message buffer slots in the layout. The SPC56EL60 implements
/// `Device::FLEXCAN_MESSAGE_BUFFERS` of them.
pub const NUM_BUFFER_SLOTS: usize = 64;

register_structs! {
    pub MessageBufferRegisters {
        /// Control and Status
        (0x0 => pub cs: ReadWrite<u32, CS::Register>),
        /// Identifier
        (0x4 => pub id: ReadWrite<u32, ID::Register>),
        /// Payload, first byte in the most significant lane of word 0
        (0x8 => pub data: [ReadWrite<u32>; 2]),
        (0x10 => @END),
    },

    pub FlexCanRegisters {
        /// Module Configuration Register
        (0x000 => pub mcr: ReadWrite<u32, MCR::Register>),
        /// Control Register
        (0x004 => pub cr: ReadWrite<u32, CR::Register>),
        /// Free Running Timer
        (0x008 => pub timer: ReadWrite<u32>),
        (0x00C => _reserved0),
        /// Rx Global Mask
        (0x010 => pub rxgmask: ReadWrite<u32>),
        /// Rx Buffer 14 Mask
        (0x014 => pub rx14mask: ReadWrite<u32>),
        /// Rx Buffer 15 Mask
        (0x018 => pub rx15mask: ReadWrite<u32>),
        /// Error Counter Register
        (0x01C => pub ecr: ReadWrite<u32, ECR::Register>),
        /// Error and Status Register
        (0x020 => pub esr: ReadWrite<u32, ESR::Register>),
        /// Interrupt Masks, buffers 63..32
        (0x024 => pub imrh: ReadWrite<u32>),
        /// Interrupt Masks, buffers 31..0
        (0x028 => pub imrl: ReadWrite<u32>),
        /// Interrupt Flags, buffers 63..32, write 1 to clear
        (0x02C => pub ifrh: ReadWrite<u32>),
        /// Interrupt Flags, buffers 31..0, write 1 to clear
        (0x030 => pub ifrl: ReadWrite<u32>),
        (0x034 => _reserved1),
        /// Message Buffers
        (0x080 => pub buf: [MessageBufferRegisters; NUM_BUFFER_SLOTS]),
        (0x480 => _reserved2),
        /// Rx Individual Mask Registers
        (0x880 => pub rximr: [ReadWrite<u32>; NUM_BUFFER_SLOTS]),
        (0x980 => @END),
    }
}

alias_views! {
    MessageBufferRegisters {
        /// Payload as eight bytes in frame order.
        pub fn data_bytes(&self) -> &[ReadWrite<u8>; 8] = data as [ReadWrite<u32>; 2];
    }
}

impl FlexCanRegisters {
    pub fn message_buffer(&self, n: usize) -> Result<&MessageBufferRegisters, ErrorCode> {
        check_index(n, Device::FLEXCAN_MESSAGE_BUFFERS).map(|i| &self.buf[i])
    }

    pub fn individual_mask(&self, n: usize) -> Result<&ReadWrite<u32>, ErrorCode> {
        check_index(n, Device::FLEXCAN_MESSAGE_BUFFERS).map(|i| &self.rximr[i])
    }

    /// The interrupt flag register holding buffer `n` and its bit.
    pub fn interrupt_flag(&self, n: usize) -> Result<(&ReadWrite<u32>, u32), ErrorCode> {
        let n = check_index(n, NUM_BUFFER_SLOTS)?;
        if n < 32 {
            Ok((&self.ifrl, 1 << n))
        } else {
            Ok((&self.ifrh, 1 << (n - 32)))
        }
    }
}

/// `ID` word for an 11-bit standard identifier.
pub const fn standard_id(id: u32) -> Result<u32, ErrorCode> {
    if id > 0x7FF {
        return Err(ErrorCode::INVAL);
    }
    Ok(id << 18)
}

/// `ID` word for a 29-bit extended identifier. `CS.IDE` must be set too.
pub const fn extended_id(id: u32) -> Result<u32, ErrorCode> {
    if id > 0x1FFF_FFFF {
        return Err(ErrorCode::INVAL);
    }
    Ok(id)
}

pub const FLEXCAN0_BASE: StaticRef<FlexCanRegisters> =
    unsafe { StaticRef::new(FLEXCAN_BASE_ADDR[0] as *const FlexCanRegisters) };
pub const FLEXCAN1_BASE: StaticRef<FlexCanRegisters> =
    unsafe { StaticRef::new(FLEXCAN_BASE_ADDR[1] as *const FlexCanRegisters) };

register_bitfields![u32,
    pub MCR [
        MDIS OFFSET(31) NUMBITS(1) [],
        FRZ OFFSET(30) NUMBITS(1) [],
        FEN OFFSET(29) NUMBITS(1) [],
        HALT OFFSET(28) NUMBITS(1) [],
        NOTRDY OFFSET(27) NUMBITS(1) [],
        WAKMSK OFFSET(26) NUMBITS(1) [],
        SOFTRST OFFSET(25) NUMBITS(1) [],
        FRZACK OFFSET(24) NUMBITS(1) [],
        SUPV OFFSET(23) NUMBITS(1) [],
        SLFWAK OFFSET(22) NUMBITS(1) [],
        WRNEN OFFSET(21) NUMBITS(1) [],
        LPMACK OFFSET(20) NUMBITS(1) [],
        WAKSRC OFFSET(19) NUMBITS(1) [],
        SRXDIS OFFSET(17) NUMBITS(1) [],
        BCC OFFSET(16) NUMBITS(1) [],
        LPRIO_EN OFFSET(13) NUMBITS(1) [],
        AEN OFFSET(12) NUMBITS(1) [],
        IDAM OFFSET(8) NUMBITS(2) [],
        /// Index of the last message buffer in use
        MAXMB OFFSET(0) NUMBITS(6) []
    ],
    pub CR [
        /// Prescaler, the time quantum is PRESDIV + 1 clocks
        PRESDIV OFFSET(24) NUMBITS(8) [],
        RJW OFFSET(22) NUMBITS(2) [],
        PSEG1 OFFSET(19) NUMBITS(3) [],
        PSEG2 OFFSET(16) NUMBITS(3) [],
        BOFFMSK OFFSET(15) NUMBITS(1) [],
        ERRMSK OFFSET(14) NUMBITS(1) [],
        CLKSRC OFFSET(13) NUMBITS(1) [],
        LPB OFFSET(12) NUMBITS(1) [],
        TWRNMSK OFFSET(11) NUMBITS(1) [],
        RWRNMSK OFFSET(10) NUMBITS(1) [],
        SMP OFFSET(7) NUMBITS(1) [],
        BOFFREC OFFSET(6) NUMBITS(1) [],
        TSYN OFFSET(5) NUMBITS(1) [],
        LBUF OFFSET(4) NUMBITS(1) [],
        LOM OFFSET(3) NUMBITS(1) [],
        PROPSEG OFFSET(0) NUMBITS(3) []
    ],
    pub ECR [
        RXECNT OFFSET(8) NUMBITS(8) [],
        TXECNT OFFSET(0) NUMBITS(8) []
    ],
    pub ESR [
        TWRNINT OFFSET(17) NUMBITS(1) [],
        RWRNINT OFFSET(16) NUMBITS(1) [],
        BIT1ERR OFFSET(15) NUMBITS(1) [],
        BIT0ERR OFFSET(14) NUMBITS(1) [],
        ACKERR OFFSET(13) NUMBITS(1) [],
        CRCERR OFFSET(12) NUMBITS(1) [],
        FRMERR OFFSET(11) NUMBITS(1) [],
        STFERR OFFSET(10) NUMBITS(1) [],
        TXWRN OFFSET(9) NUMBITS(1) [],
        RXWRN OFFSET(8) NUMBITS(1) [],
        IDLE OFFSET(7) NUMBITS(1) [],
        TXRX OFFSET(6) NUMBITS(1) [],
        /// Fault confinement state
        FLTCONF OFFSET(4) NUMBITS(2) [
            ErrorActive = 0,
            ErrorPassive = 1,
            BusOff = 2
        ],
        BOFFINT OFFSET(2) NUMBITS(1) [],
        ERRINT OFFSET(1) NUMBITS(1) [],
        WAKINT OFFSET(0) NUMBITS(1) []
    ],
    pub CS [
        /// Message buffer code
        CODE OFFSET(24) NUMBITS(4) [
            RxInactive = 0b0000,
            RxBusy = 0b0001,
            RxFull = 0b0010,
            RxEmpty = 0b0100,
            RxOverrun = 0b0110,
            TxInactive = 0b1000,
            TxAbort = 0b1001,
            TxData = 0b1100,
            TxAnswer = 0b1110
        ],
        SRR OFFSET(22) NUMBITS(1) [],
        IDE OFFSET(21) NUMBITS(1) [],
        RTR OFFSET(20) NUMBITS(1) [],
        /// Data length code
        LENGTH OFFSET(16) NUMBITS(4) [],
        TIMESTAMP OFFSET(0) NUMBITS(16) []
    ],
    pub ID [
        PRIO OFFSET(29) NUMBITS(3) [],
        STD_ID OFFSET(18) NUMBITS(11) [],
        EXT_ID OFFSET(0) NUMBITS(18) []
    ]
];
