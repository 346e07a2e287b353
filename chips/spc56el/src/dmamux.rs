// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! DMA channel multiplexer (DMAMUX).
//!
//! One configuration byte per eDMA channel routes a request source to the
//! channel. The source must be changed with `ENBL` clear.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::chip_config::{Device, Spc56elConfig};
use crate::edma::NUM_CHANNELS;
use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::DMAMUX_BASE_ADDR;
use crate::static_ref::StaticRef;

/// Channels whose request can be gated by a PIT trigger.
pub const NUM_TRIGGERED_CHANNELS: usize = 4;

register_structs! {
    #[repr(align(4))]
    pub DmaMuxRegisters {
        /// Channel Configuration Registers
        (0x00 => pub chconfig: [ReadWrite<u8, CHCONFIG::Register>; NUM_CHANNELS]),
        (0x10 => @END),
    }
}

alias_views! {
    DmaMuxRegisters {
        /// Channel configuration, four channels per word.
        pub fn chconfig_words(&self) -> &[ReadWrite<u32>; NUM_CHANNELS / 4] =
            chconfig as [ReadWrite<u8, CHCONFIG::Register>; NUM_CHANNELS];
    }
}

impl DmaMuxRegisters {
    pub fn channel(&self, n: usize) -> Result<&ReadWrite<u8, CHCONFIG::Register>, ErrorCode> {
        check_index(n, Device::EDMA_CHANNELS).map(|i| &self.chconfig[i])
    }
}

pub const DMAMUX_BASE: StaticRef<DmaMuxRegisters> =
    unsafe { StaticRef::new(DMAMUX_BASE_ADDR as *const DmaMuxRegisters) };

register_bitfields![u8,
    pub CHCONFIG [
        ENBL OFFSET(7) NUMBITS(1) [],
        /// Periodic trigger, channels 0..3 only
        TRIG OFFSET(6) NUMBITS(1) [],
        SOURCE OFFSET(0) NUMBITS(6) []
    ]
];
