// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral bridge (PBRIDGE), one per core.
//!
//! Access rights are packed as 4-bit nibbles, eight per word, slot 0 in
//! the most significant nibble. `MPROT` holds the master privileges,
//! `PACR` the on-platform peripheral slots and `OPACR` the off-platform
//! ones. [`master_field`] and [`slot_field`] build the field for one slot;
//! the nibble contents are laid out by [`MASTER`] and [`SLOT`].

use tock_registers::fields::Field;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::{Core, PBRIDGE_BASE_ADDR};
use crate::static_ref::StaticRef;

pub const NUM_MASTERS: usize = 8;
pub const NUM_PACR: usize = 4;
pub const NUM_OPACR: usize = 12;
/// Slots per access control word.
pub const SLOTS_PER_WORD: usize = 8;

register_structs! {
    pub PbridgeRegisters {
        /// Master Privilege Register
        (0x00 => pub mprot: ReadWrite<u32, ()>),
        (0x04 => _reserved0),
        /// Peripheral Access Control Registers
        (0x20 => pub pacr: [ReadWrite<u32, ()>; NUM_PACR]),
        (0x30 => _reserved1),
        /// Off-Platform Peripheral Access Control Registers
        (0x40 => pub opacr: [ReadWrite<u32, ()>; NUM_OPACR]),
        (0x70 => @END),
    }
}

impl PbridgeRegisters {
    /// The `PACR` word holding on-platform peripheral `slot` and the field
    /// inside it.
    pub fn pacr_for(
        &self,
        slot: usize,
    ) -> Result<(&ReadWrite<u32, ()>, Field<u32, ()>), ErrorCode> {
        let word = check_index(slot / SLOTS_PER_WORD, NUM_PACR)?;
        Ok((&self.pacr[word], slot_field(slot % SLOTS_PER_WORD)?))
    }

    /// The `OPACR` word holding off-platform peripheral `slot` and the
    /// field inside it.
    pub fn opacr_for(
        &self,
        slot: usize,
    ) -> Result<(&ReadWrite<u32, ()>, Field<u32, ()>), ErrorCode> {
        let word = check_index(slot / SLOTS_PER_WORD, NUM_OPACR)?;
        Ok((&self.opacr[word], slot_field(slot % SLOTS_PER_WORD)?))
    }
}

const fn nibble_shift(slot: usize) -> Result<usize, ErrorCode> {
    match check_index(slot, SLOTS_PER_WORD) {
        Ok(s) => Ok(28 - 4 * s),
        Err(e) => Err(e),
    }
}

/// Nibble of `master` in `MPROT`.
pub const fn master_field(master: usize) -> Result<Field<u32, ()>, ErrorCode> {
    match nibble_shift(master) {
        Ok(shift) => Ok(Field::new(0xF, shift)),
        Err(e) => Err(e),
    }
}

/// Nibble of `slot` (0..8) inside one `PACR`/`OPACR` word.
pub const fn slot_field(slot: usize) -> Result<Field<u32, ()>, ErrorCode> {
    match nibble_shift(slot) {
        Ok(shift) => Ok(Field::new(0xF, shift)),
        Err(e) => Err(e),
    }
}

pub const PBRIDGE_BASE: [StaticRef<PbridgeRegisters>; 2] = unsafe {
    [
        StaticRef::new(PBRIDGE_BASE_ADDR[0] as *const PbridgeRegisters),
        StaticRef::new(PBRIDGE_BASE_ADDR[1] as *const PbridgeRegisters),
    ]
};

pub const fn pbridge_base(core: Core) -> StaticRef<PbridgeRegisters> {
    PBRIDGE_BASE[core.index()]
}

register_bitfields![u8,
    /// Contents of one `MPROT` nibble.
    pub MASTER [
        /// Master buffer writes enable
        MBW OFFSET(3) NUMBITS(1) [],
        /// Trusted for reads
        MTR OFFSET(2) NUMBITS(1) [],
        /// Trusted for writes
        MTW OFFSET(1) NUMBITS(1) [],
        /// Privilege level forced to user
        MPL OFFSET(0) NUMBITS(1) []
    ],
    /// Contents of one `PACR`/`OPACR` nibble.
    pub SLOT [
        /// Buffer writes enable
        BW OFFSET(3) NUMBITS(1) [],
        /// Supervisor protect
        SP OFFSET(2) NUMBITS(1) [],
        /// Write protect
        WP OFFSET(1) NUMBITS(1) [],
        /// Trusted protect
        TP OFFSET(0) NUMBITS(1) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, assert_fields};
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(PbridgeRegisters, pacr), 0x20);
        assert_eq!(offset_of!(PbridgeRegisters, opacr), 0x40);
        assert_eq!(size_of::<PbridgeRegisters>(), 0x70);
        assert_eq!(pbridge_base(Core::Core0).address(), 0xFFF0_0000);
        assert_eq!(pbridge_base(Core::Core1).address(), 0x8FF0_0000);
    }

    #[test]
    fn bitfields() {
        assert_eq!(
            assert_fields!(8; MASTER::MBW, MASTER::MTR, MASTER::MTW, MASTER::MPL),
            0xF0
        );
        assert_fields!(8; SLOT::BW, SLOT::SP, SLOT::WP, SLOT::TP);
    }

    #[test]
    fn slot_nibbles() {
        assert_eq!(master_field(0).unwrap().shift, 28);
        assert_eq!(slot_field(7).unwrap().shift, 0);
        assert_eq!(slot_field(3).unwrap().mask, 0xF);
        assert!(slot_field(8).is_err());
        assert!(master_field(NUM_MASTERS).is_err());
    }

    #[test]
    fn trust_master() {
        let pbridge = testing::zeroed::<PbridgeRegisters>();
        let mut nibble = LocalRegisterCopy::<u8, MASTER::Register>::new(0);
        nibble.modify(MASTER::MTR::SET + MASTER::MTW::SET);
        pbridge
            .mprot
            .write(master_field(1).unwrap().val(u32::from(nibble.get())));
        assert_eq!(pbridge.mprot.get(), 0x0600_0000);
    }

    #[test]
    fn peripheral_slots() {
        let pbridge = testing::zeroed::<PbridgeRegisters>();
        let (word, field) = pbridge.opacr_for(13).unwrap();
        assert_eq!(testing::offset_in(&*pbridge, word), 0x44);
        let mut nibble = LocalRegisterCopy::<u8, SLOT::Register>::new(0);
        nibble.write(SLOT::WP::SET);
        word.modify(field.val(u32::from(nibble.get())));
        assert_eq!(pbridge.opacr[1].get(), 0x0000_0200);
        assert_eq!(pbridge.opacr[1].read(field), 0x2);

        assert!(pbridge.pacr_for(NUM_PACR * SLOTS_PER_WORD).is_err());
        assert!(pbridge.opacr_for(NUM_OPACR * SLOTS_PER_WORD - 1).is_ok());
    }
}
