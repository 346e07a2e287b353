// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interrupt Controller (INTC), one per core.
//!
//! In software vector mode the handler reads `IACKR` to acknowledge the
//! request and learn its vector, raising `CPR` to the source priority, and
//! writes `EOIR` when done to restore the previous priority. Each source
//! has a one-byte priority in `PSR`; priority 0 never interrupts.

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs, LocalRegisterCopy};

use crate::chip_config::{Device, Spc56elConfig};
use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::{Core, INTC_BASE_ADDR};
use crate::static_ref::StaticRef;

/// Priority select slots in the layout. The SPC56EL60 implements
/// `Device::INTC_SOURCES` of them.
pub const NUM_PSR: usize = 512;
pub const NUM_SOFTWARE_IRQS: usize = 8;
pub const MAX_PRIORITY: u8 = 15;

register_structs! {
    pub IntcRegisters {
        /// Block Configuration Register
        (0x000 => pub mcr: ReadWrite<u32, MCR::Register>),
        (0x004 => _reserved0),
        /// Current Priority Register
        (0x008 => pub cpr: ReadWrite<u32, CPR::Register>),
        (0x00C => _reserved1),
        /// Interrupt Acknowledge Register. Reading acknowledges the request.
        (0x010 => pub iackr: ReadWrite<u32, IACKR::Register>),
        (0x014 => _reserved2),
        /// End-of-Interrupt Register
        (0x018 => pub eoir: WriteOnly<u32>),
        (0x01C => _reserved3),
        /// Software Set/Clear Interrupt Registers
        (0x020 => pub sscir: [ReadWrite<u8, SSCIR::Register>; NUM_SOFTWARE_IRQS]),
        (0x028 => _reserved4),
        /// Priority Select Registers
        (0x040 => pub psr: [ReadWrite<u8, PSR::Register>; NUM_PSR]),
        (0x240 => @END),
    }
}

alias_views! {
    IntcRegisters {
        /// Software interrupts, four per word.
        pub fn sscir_words(&self) -> &[ReadWrite<u32>; NUM_SOFTWARE_IRQS / 4] =
            sscir as [ReadWrite<u8, SSCIR::Register>; NUM_SOFTWARE_IRQS];
        /// Source priorities, four sources per word.
        pub fn psr_words(&self) -> &[ReadWrite<u32>; NUM_PSR / 4] =
            psr as [ReadWrite<u8, PSR::Register>; NUM_PSR];
    }
}

impl IntcRegisters {
    /// Priority select register of interrupt `source`.
    pub fn priority(&self, source: usize) -> Result<&ReadWrite<u8, PSR::Register>, ErrorCode> {
        check_index(source, Device::INTC_SOURCES).map(|i| &self.psr[i])
    }

    pub fn software_irq(&self, n: usize) -> Result<&ReadWrite<u8, SSCIR::Register>, ErrorCode> {
        check_index(n, NUM_SOFTWARE_IRQS).map(|i| &self.sscir[i])
    }
}

/// Vector number carried by a raw `IACKR` value.
pub fn acknowledged_vector(iackr: u32) -> u32 {
    LocalRegisterCopy::<u32, IACKR::Register>::new(iackr).read(IACKR::INTVEC)
}

pub const INTC_BASE: [StaticRef<IntcRegisters>; 2] = unsafe {
    [
        StaticRef::new(INTC_BASE_ADDR[0] as *const IntcRegisters),
        StaticRef::new(INTC_BASE_ADDR[1] as *const IntcRegisters),
    ]
};

/// The interrupt controller serving `core`.
pub const fn intc_base(core: Core) -> StaticRef<IntcRegisters> {
    INTC_BASE[core.index()]
}

register_bitfields![u32,
    pub MCR [
        /// Vector table entry size
        VTES OFFSET(5) NUMBITS(1) [
            FourBytes = 0,
            EightBytes = 1
        ],
        /// Hardware vector enable
        HVEN OFFSET(0) NUMBITS(1) []
    ],
    pub CPR [
        PRI OFFSET(0) NUMBITS(4) []
    ],
    pub IACKR [
        /// Vector table base address
        VTBA OFFSET(11) NUMBITS(21) [],
        INTVEC OFFSET(2) NUMBITS(9) []
    ]
];

register_bitfields![u8,
    pub SSCIR [
        SET OFFSET(1) NUMBITS(1) [],
        /// Flag, write 1 to clear
        CLR OFFSET(0) NUMBITS(1) []
    ],
    pub PSR [
        PRI OFFSET(0) NUMBITS(4) []
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
        assert_eq!(offset_of!(IntcRegisters, cpr), 0x008);
        assert_eq!(offset_of!(IntcRegisters, iackr), 0x010);
        assert_eq!(offset_of!(IntcRegisters, eoir), 0x018);
        assert_eq!(offset_of!(IntcRegisters, sscir), 0x020);
        assert_eq!(offset_of!(IntcRegisters, psr), 0x040);
        assert_eq!(size_of::<IntcRegisters>(), 0x240);
    }

    #[test]
    fn per_core_copies() {
        assert_eq!(intc_base(Core::Core0).address(), 0xFFF4_8000);
        assert_eq!(intc_base(Core::Core1).address(), 0x8FF4_8000);
    }

    #[test]
    fn bitfields() {
        assert_eq!(assert_fields!(32; MCR::VTES, MCR::HVEN), 0xFFFF_FFDE);
        assert_eq!(assert_fields!(32; IACKR::VTBA, IACKR::INTVEC), 0x3);
        assert_eq!(assert_fields!(8; SSCIR::SET, SSCIR::CLR), 0xFC);
        assert_eq!(assert_fields!(8; PSR::PRI), 0xF0);
        assert_fields!(32; CPR::PRI);
    }

    #[test]
    fn source_priorities() {
        let intc = testing::zeroed::<IntcRegisters>();
        intc.priority(81).unwrap().write(PSR::PRI.val(MAX_PRIORITY));
        assert_eq!(intc.psr_words()[20].get(), byte_in_word(81, 0x0F));

        intc.psr_words()[0].set(byte_in_word(2, 0x03));
        assert_eq!(intc.psr[2].read(PSR::PRI), 3);
        assert!(intc.priority(Device::INTC_SOURCES).is_err());
        assert!(intc.priority(Device::INTC_SOURCES - 1).is_ok());
    }

    #[test]
    fn software_interrupts() {
        let intc = testing::zeroed::<IntcRegisters>();
        intc.software_irq(5).unwrap().write(SSCIR::SET::SET);
        assert_eq!(intc.sscir_words()[1].get(), byte_in_word(5, 0x02));
        assert!(intc.software_irq(NUM_SOFTWARE_IRQS).is_err());
    }

    #[test]
    fn acknowledge() {
        assert_eq!(acknowledged_vector(0x4000_0000 | (59 << 2)), 59);

        let intc = testing::zeroed::<IntcRegisters>();
        testing::poke(&intc.iackr, 0x0000_1000u32 | (200 << 2));
        assert_eq!(intc.iackr.read(IACKR::INTVEC), 200);
        assert_eq!(intc.iackr.read(IACKR::VTBA), 0x2);
    }
}
