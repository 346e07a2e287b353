// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Periodic Interrupt Timer (PIT).
//!
//! Each channel counts down from `LDVAL` to zero at the peripheral clock,
//! raises `TFLG.TIF` and reloads.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::chip_config::{Device, Spc56elConfig};
use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::PIT_BASE_ADDR;
use crate::static_ref::StaticRef;

pub const NUM_CHANNELS: usize = 4;

register_structs! {
    pub ChannelRegisters {
        /// Timer Load Value Register
        (0x0 => pub ldval: ReadWrite<u32>),
        /// Current Timer Value Register
        (0x4 => pub cval: ReadOnly<u32>),
        /// Timer Control Register
        (0x8 => pub tctrl: ReadWrite<u32, TCTRL::Register>),
        /// Timer Flag Register, write 1 to clear
        (0xC => pub tflg: ReadWrite<u32, TFLG::Register>),
        (0x10 => @END),
    },

    pub PitRegisters {
        /// Module Control Register
        (0x000 => pub mcr: ReadWrite<u32, MCR::Register>),
        (0x004 => _reserved0),
        (0x100 => pub ch: [ChannelRegisters; NUM_CHANNELS]),
        (0x140 => @END),
    }
}

impl PitRegisters {
    pub fn channel(&self, n: usize) -> Result<&ChannelRegisters, ErrorCode> {
        check_index(n, Device::PIT_CHANNELS).map(|i| &self.ch[i])
    }
}

/// `LDVAL` for a period of `ticks` timer clocks. The counter includes
/// zero, so the load value is one less.
pub const fn load_value(ticks: u32) -> Result<u32, ErrorCode> {
    match ticks.checked_sub(1) {
        Some(v) => Ok(v),
        None => Err(ErrorCode::INVAL),
    }
}

pub const PIT_BASE: StaticRef<PitRegisters> =
    unsafe { StaticRef::new(PIT_BASE_ADDR as *const PitRegisters) };

register_bitfields![u32,
    pub MCR [
        /// Module disable, set out of reset
        MDIS OFFSET(1) NUMBITS(1) [],
        /// Freeze in debug mode
        FRZ OFFSET(0) NUMBITS(1) []
    ],
    pub TCTRL [
        TIE OFFSET(1) NUMBITS(1) [],
        TEN OFFSET(0) NUMBITS(1) []
    ],
    pub TFLG [
        TIF OFFSET(0) NUMBITS(1) []
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
        assert_eq!(offset_of!(PitRegisters, ch), 0x100);
        assert_eq!(offset_of!(ChannelRegisters, tflg), 0xC);
        assert_eq!(size_of::<PitRegisters>(), 0x140);
        assert_eq!(PIT_BASE.address(), 0xC3FF_0000);
        assert_eq!(assert_fields!(32; MCR::MDIS, MCR::FRZ), 0xFFFF_FFFC);
        assert_eq!(assert_fields!(32; TCTRL::TIE, TCTRL::TEN), 0xFFFF_FFFC);
        assert_eq!(assert_fields!(32; TFLG::TIF), 0xFFFF_FFFE);
    }

    #[test]
    fn periodic_channel() {
        let pit = testing::zeroed::<PitRegisters>();
        pit.mcr.write(MCR::FRZ::SET);
        let ch = pit.channel(3).unwrap();
        ch.ldval.set(load_value(64_000).unwrap());
        ch.tctrl.write(TCTRL::TIE::SET + TCTRL::TEN::SET);

        assert_eq!(pit.mcr.get(), 0x1);
        assert_eq!(testing::offset_in(&*pit, &ch.ldval), 0x130);
        assert_eq!(pit.ch[3].ldval.get(), 63_999);
        assert_eq!(pit.ch[3].tctrl.get(), 0x3);
        assert!(pit.channel(Device::PIT_CHANNELS).is_err());
        assert_eq!(load_value(0), Err(ErrorCode::INVAL));
    }
}
