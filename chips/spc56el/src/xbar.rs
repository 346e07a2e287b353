// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Crossbar switch (XBAR), one per core.
//!
//! Each slave port has a priority register giving every master a 3-bit
//! level and a control register selecting arbitration and parking. Slave
//! and master port blocks repeat every 0x100 bytes.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::{Core, XBAR_BASE_ADDR};
use crate::static_ref::StaticRef;

pub const NUM_PORTS: usize = 8;

register_structs! {
    pub SlavePortRegisters {
        /// Priority Register
        (0x00 => pub prs: ReadWrite<u32, PRS::Register>),
        (0x04 => _reserved0),
        /// Control Register
        (0x10 => pub crs: ReadWrite<u32, CRS::Register>),
        (0x14 => _reserved1),
        (0x100 => @END),
    },

    pub MasterPortRegisters {
        /// General Purpose Control Register
        (0x00 => pub mgpcr: ReadWrite<u32, MGPCR::Register>),
        (0x04 => _reserved0),
        (0x100 => @END),
    },

    pub XbarRegisters {
        (0x000 => pub slave: [SlavePortRegisters; NUM_PORTS]),
        (0x800 => pub master: [MasterPortRegisters; NUM_PORTS]),
        (0x1000 => @END),
    }
}

impl XbarRegisters {
    pub fn slave_port(&self, n: usize) -> Result<&SlavePortRegisters, ErrorCode> {
        check_index(n, NUM_PORTS).map(|i| &self.slave[i])
    }

    pub fn master_port(&self, n: usize) -> Result<&MasterPortRegisters, ErrorCode> {
        check_index(n, NUM_PORTS).map(|i| &self.master[i])
    }
}

/// Shift of the priority field of `master` in `PRS`.
pub const fn priority_shift(master: usize) -> Result<usize, ErrorCode> {
    match check_index(master, NUM_PORTS) {
        Ok(m) => Ok(m * 4),
        Err(e) => Err(e),
    }
}

pub const XBAR_BASE: [StaticRef<XbarRegisters>; 2] = unsafe {
    [
        StaticRef::new(XBAR_BASE_ADDR[0] as *const XbarRegisters),
        StaticRef::new(XBAR_BASE_ADDR[1] as *const XbarRegisters),
    ]
};

pub const fn xbar_base(core: Core) -> StaticRef<XbarRegisters> {
    XBAR_BASE[core.index()]
}

register_bitfields![u32,
    pub PRS [
        M7 OFFSET(28) NUMBITS(3) [],
        M6 OFFSET(24) NUMBITS(3) [],
        M5 OFFSET(20) NUMBITS(3) [],
        M4 OFFSET(16) NUMBITS(3) [],
        M3 OFFSET(12) NUMBITS(3) [],
        M2 OFFSET(8) NUMBITS(3) [],
        M1 OFFSET(4) NUMBITS(3) [],
        M0 OFFSET(0) NUMBITS(3) []
    ],
    pub CRS [
        /// Read only, locks PRS and CRS until reset
        RO OFFSET(31) NUMBITS(1) [],
        /// Halt request gets the lowest priority
        HLP OFFSET(30) NUMBITS(1) [],
        ARB OFFSET(8) NUMBITS(2) [
            Fixed = 0,
            RoundRobin = 1
        ],
        PCTL OFFSET(4) NUMBITS(2) [
            ParkOnSpecific = 0,
            ParkOnLast = 1,
            LowPowerPark = 2
        ],
        /// Master to park on
        PARK OFFSET(0) NUMBITS(3) []
    ],
    pub MGPCR [
        /// Arbitrate on undefined length bursts
        AULB OFFSET(0) NUMBITS(3) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, assert_fields};
    use core::mem::size_of;
    use tock_registers::interfaces::{Readable, Writeable};

    #[test]
    fn layout() {
        assert_eq!(size_of::<SlavePortRegisters>(), 0x100);
        assert_eq!(size_of::<XbarRegisters>(), 0x1000);
        let xbar = testing::zeroed::<XbarRegisters>();
        assert_eq!(testing::offset_in(&*xbar, &xbar.slave[2].crs), 0x210);
        assert_eq!(
            testing::offset_in(&*xbar, &xbar.master_port(1).unwrap().mgpcr),
            0x900
        );
        assert!(xbar.slave_port(NUM_PORTS).is_err());
    }

    #[test]
    fn per_core_copies() {
        assert_eq!(xbar_base(Core::Core0).address(), 0xFFF0_4000);
        assert_eq!(xbar_base(Core::Core1).address(), 0x8FF0_4000);
    }

    #[test]
    fn bitfields() {
        assert_eq!(
            assert_fields!(32;
                PRS::M7, PRS::M6, PRS::M5, PRS::M4, PRS::M3, PRS::M2, PRS::M1, PRS::M0),
            0x8888_8888
        );
        assert_fields!(32; CRS::RO, CRS::HLP, CRS::ARB, CRS::PCTL, CRS::PARK);
        assert_fields!(32; MGPCR::AULB);
    }

    #[test]
    fn master_priorities() {
        assert_eq!(priority_shift(3), Ok(12));
        assert_eq!(priority_shift(8), Err(ErrorCode::INVAL));

        let xbar = testing::zeroed::<XbarRegisters>();
        let port = xbar.slave_port(0).unwrap();
        port.prs.write(PRS::M0.val(1) + PRS::M3.val(0));
        port.crs.write(CRS::ARB::RoundRobin + CRS::PCTL::ParkOnLast);
        assert_eq!(port.prs.get(), 0x1);
        assert_eq!(port.crs.get(), 0x110);
    }
}
