// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Hardware semaphores (SEMA4) shared by the two cores.
//!
//! Sixteen one-byte gates. A core locks gate `n` by writing its lock value
//! to `GATE[n]` and reading it back; the write only takes effect while the
//! gate is unlocked. Gates can be reset from either core with the two-step
//! [`RESET_KEY_1`] / [`RESET_KEY_2`] sequence on `RSTGT`.

use tock_registers::registers::{Aliased, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::SEMA4_BASE_ADDR;
use crate::static_ref::StaticRef;

pub const NUM_GATES: usize = 16;

/// First reset write, placed in `RSTGDP`.
pub const RESET_KEY_1: u16 = 0xE2;
/// Second reset write, placed in `RSTGDP` together with the gate number.
pub const RESET_KEY_2: u16 = 0x1D;
/// `RSTGTN` value that resets every gate at once.
pub const RESET_ALL_GATES: u16 = 0x40;

register_structs! {
    // Word-aligned so the gates can be viewed as words.
    #[repr(align(4))]
    pub Sema4Registers {
        /// Semaphore gates
        (0x000 => pub gate: [ReadWrite<u8, GATE::Register>; NUM_GATES]),
        (0x010 => _reserved0),
        /// Core 0 Interrupt Notification Enable
        (0x040 => pub cp0ine: ReadWrite<u16>),
        (0x042 => _reserved1),
        /// Core 1 Interrupt Notification Enable
        (0x048 => pub cp1ine: ReadWrite<u16>),
        (0x04A => _reserved2),
        /// Core 0 Interrupt Notification
        (0x080 => pub cp0ntf: ReadWrite<u16>),
        (0x082 => _reserved3),
        /// Core 1 Interrupt Notification
        (0x088 => pub cp1ntf: ReadWrite<u16>),
        (0x08A => _reserved4),
        /// Reset Gate. Reads give the state of the reset state machine.
        (0x100 => pub rstgt: Aliased<u16, RSTGT_R::Register, RSTGT_W::Register>),
        (0x102 => _reserved5),
        /// Reset Notification
        (0x104 => pub rstntf: Aliased<u16, RSTGT_R::Register, RSTGT_W::Register>),
        (0x106 => _reserved6),
        (0x108 => @END),
    }
}

alias_views! {
    Sema4Registers {
        /// Four gates per word.
        pub fn gate_words(&self) -> &[ReadWrite<u32>; 4] =
            gate as [ReadWrite<u8, GATE::Register>; NUM_GATES];
    }
}

impl Sema4Registers {
    pub fn gate(&self, n: usize) -> Result<&ReadWrite<u8, GATE::Register>, ErrorCode> {
        check_index(n, NUM_GATES).map(|i| &self.gate[i])
    }
}

/// Bit of gate `n` in the notification enable and flag registers.
pub const fn gate_bit(n: usize) -> Result<u16, ErrorCode> {
    match check_index(n, NUM_GATES) {
        Ok(i) => Ok(0x8000 >> i),
        Err(e) => Err(e),
    }
}

/// The two `RSTGT` words that reset `gate`, or every gate for
/// [`RESET_ALL_GATES`].
pub const fn reset_sequence(gate: u16) -> Result<[u16; 2], ErrorCode> {
    if gate as usize >= NUM_GATES && gate != RESET_ALL_GATES {
        return Err(ErrorCode::INVAL);
    }
    Ok([RESET_KEY_1 << 8, (RESET_KEY_2 << 8) | gate])
}

pub const SEMA4_BASE: StaticRef<Sema4Registers> =
    unsafe { StaticRef::new(SEMA4_BASE_ADDR as *const Sema4Registers) };

register_bitfields![u8,
    pub GATE [
        /// Gate finite state machine
        GTFSM OFFSET(0) NUMBITS(2) [
            Unlocked = 0,
            LockedByCore0 = 1,
            LockedByCore1 = 2
        ]
    ]
];

register_bitfields![u16,
    pub RSTGT_R [
        /// Reset state machine
        RSTGSM OFFSET(12) NUMBITS(2) [
            Idle = 0,
            WaitSecondWrite = 1
        ],
        /// Bus master that started the reset
        RSTGMS OFFSET(8) NUMBITS(4) [],
        RSTGTN OFFSET(0) NUMBITS(8) []
    ],
    pub RSTGT_W [
        /// Data pattern, the reset keys go here
        RSTGDP OFFSET(8) NUMBITS(8) [],
        /// Gate to reset
        RSTGTN OFFSET(0) NUMBITS(8) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::byte_in_word;
    use crate::testing::{self, assert_fields};
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(Sema4Registers, cp0ine), 0x040);
        assert_eq!(offset_of!(Sema4Registers, cp1ine), 0x048);
        assert_eq!(offset_of!(Sema4Registers, cp0ntf), 0x080);
        assert_eq!(offset_of!(Sema4Registers, cp1ntf), 0x088);
        assert_eq!(offset_of!(Sema4Registers, rstgt), 0x100);
        assert_eq!(offset_of!(Sema4Registers, rstntf), 0x104);
        assert_eq!(size_of::<Sema4Registers>(), 0x108);
        assert_eq!(SEMA4_BASE.address(), 0xFFF2_4000);
    }

    #[test]
    fn bitfields() {
        assert_eq!(assert_fields!(8; GATE::GTFSM), 0xFC);
        assert_fields!(16; RSTGT_R::RSTGSM, RSTGT_R::RSTGMS, RSTGT_R::RSTGTN);
        assert_fields!(16; RSTGT_W::RSTGDP, RSTGT_W::RSTGTN);
    }

    #[test]
    fn gates_as_words() {
        let sema4 = testing::zeroed::<Sema4Registers>();
        sema4.gate(5).unwrap().write(GATE::GTFSM::LockedByCore1);
        assert_eq!(sema4.gate_words()[1].get(), byte_in_word(5, 2));

        sema4.gate_words()[3].set(byte_in_word(14, 1));
        assert!(sema4.gate[14].matches_all(GATE::GTFSM::LockedByCore0));
        assert_eq!(sema4.gate[15].get(), 0);
        assert!(sema4.gate(NUM_GATES).is_err());
    }

    #[test]
    fn reset_words() {
        assert_eq!(reset_sequence(3), Ok([0xE200, 0x1D03]));
        assert_eq!(reset_sequence(RESET_ALL_GATES), Ok([0xE200, 0x1D40]));
        assert_eq!(reset_sequence(16), Err(ErrorCode::INVAL));

        let sema4 = testing::zeroed::<Sema4Registers>();
        sema4.rstgt.write(RSTGT_W::RSTGDP.val(RESET_KEY_1) + RSTGT_W::RSTGTN.val(0));
        assert_eq!(sema4.rstgt.get(), 0xE200);
    }

    #[test]
    fn notification_bits() {
        assert_eq!(gate_bit(0), Ok(0x8000));
        assert_eq!(gate_bit(15), Ok(0x0001));
        assert_eq!(gate_bit(16), Err(ErrorCode::INVAL));
    }
}
