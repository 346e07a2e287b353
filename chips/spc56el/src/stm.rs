// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System Timer Module (STM), one per core.
//!
//! A 32-bit free-running counter with four compare channels. The counter
//! runs at the system clock divided by `CR.CPS + 1`.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::chip_config::{Device, Spc56elConfig};
use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::{Core, STM_BASE_ADDR};
use crate::static_ref::StaticRef;

pub const NUM_CHANNELS: usize = 4;

register_structs! {
    pub ChannelRegisters {
        /// Channel Control Register
        (0x0 => pub ccr: ReadWrite<u32, CCR::Register>),
        /// Channel Interrupt Register, write 1 to clear
        (0x4 => pub cir: ReadWrite<u32, CIR::Register>),
        /// Channel Compare Register
        (0x8 => pub cmp: ReadWrite<u32>),
        (0xC => _reserved0),
        (0x10 => @END),
    },

    pub StmRegisters {
        /// Control Register
        (0x00 => pub cr: ReadWrite<u32, CR::Register>),
        /// Count Register
        (0x04 => pub cnt: ReadWrite<u32>),
        (0x08 => _reserved0),
        (0x10 => pub channel: [ChannelRegisters; NUM_CHANNELS]),
        (0x50 => @END),
    }
}

impl StmRegisters {
    pub fn compare(&self, n: usize) -> Result<&ChannelRegisters, ErrorCode> {
        check_index(n, Device::STM_CHANNELS).map(|i| &self.channel[i])
    }
}

/// `CR.CPS` value dividing the system clock by `divider` (1..=256).
pub const fn prescaler(divider: u32) -> Result<u32, ErrorCode> {
    if divider == 0 || divider > 256 {
        return Err(ErrorCode::INVAL);
    }
    Ok(divider - 1)
}

pub const STM_BASE: [StaticRef<StmRegisters>; 2] = unsafe {
    [
        StaticRef::new(STM_BASE_ADDR[0] as *const StmRegisters),
        StaticRef::new(STM_BASE_ADDR[1] as *const StmRegisters),
    ]
};

pub const fn stm_base(core: Core) -> StaticRef<StmRegisters> {
    STM_BASE[core.index()]
}

register_bitfields![u32,
    pub CR [
        /// Counter prescaler
        CPS OFFSET(8) NUMBITS(8) [],
        FRZ OFFSET(1) NUMBITS(1) [],
        /// Timer counter enable
        TEN OFFSET(0) NUMBITS(1) []
    ],
    pub CCR [
        CEN OFFSET(0) NUMBITS(1) []
    ],
    pub CIR [
        CIF OFFSET(0) NUMBITS(1) []
    ]
];
