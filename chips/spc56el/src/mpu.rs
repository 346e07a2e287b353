// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Memory Protection Unit (MPU), one per core.
//!
//! Sixteen region descriptors, each four words: start, end, access rights
//! and process id. Writing only the access word through `RGDAAC[n]`
//! leaves the region valid while its rights change.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::{Core, MPU_BASE_ADDR};
use crate::static_ref::StaticRef;

pub const NUM_REGIONS: usize = 16;
/// Slave ports with error capture registers.
pub const NUM_SLAVE_PORTS: usize = 4;
/// Region granularity in bytes.
pub const REGION_ALIGN: u32 = 32;

register_structs! {
    pub ErrorCaptureRegisters {
        /// Error Address Register
        (0x0 => pub ear: ReadOnly<u32>),
        /// Error Detail Register
        (0x4 => pub edr: ReadOnly<u32, EDR::Register>),
        (0x8 => @END),
    },

    pub RegionDescriptorRegisters {
        (0x0 => pub word0: ReadWrite<u32, WORD0::Register>),
        (0x4 => pub word1: ReadWrite<u32, WORD1::Register>),
        (0x8 => pub word2: ReadWrite<u32, ACCESS::Register>),
        (0xC => pub word3: ReadWrite<u32, WORD3::Register>),
        (0x10 => @END),
    },

    pub MpuRegisters {
        /// Control/Error Status Register
        (0x000 => pub cesr: ReadWrite<u32, CESR::Register>),
        (0x004 => _reserved0),
        (0x010 => pub error: [ErrorCaptureRegisters; NUM_SLAVE_PORTS]),
        (0x030 => _reserved1),
        /// Region Descriptors
        (0x400 => pub rgd: [RegionDescriptorRegisters; NUM_REGIONS]),
        (0x500 => _reserved2),
        /// Region Descriptor Alternate Access Control
        (0x800 => pub rgdaac: [ReadWrite<u32, ACCESS::Register>; NUM_REGIONS]),
        (0x840 => @END),
    }
}

impl MpuRegisters {
    pub fn region(&self, n: usize) -> Result<&RegionDescriptorRegisters, ErrorCode> {
        check_index(n, NUM_REGIONS).map(|i| &self.rgd[i])
    }

    /// Alternate access control word of region `n`.
    pub fn region_access(&self, n: usize) -> Result<&ReadWrite<u32, ACCESS::Register>, ErrorCode> {
        check_index(n, NUM_REGIONS).map(|i| &self.rgdaac[i])
    }

    pub fn error_capture(&self, port: usize) -> Result<&ErrorCaptureRegisters, ErrorCode> {
        check_index(port, NUM_SLAVE_PORTS).map(|i| &self.error[i])
    }
}

/// `WORD0`/`WORD1` values for a region covering `start..=end`. Both ends
/// must sit on the 32-byte region grid (`end` is the last byte, so its low
/// five bits are all ones).
pub const fn region_bounds(start: u32, end: u32) -> Result<(u32, u32), ErrorCode> {
    let low = REGION_ALIGN - 1;
    if start & low != 0 || end & low != low || end < start {
        return Err(ErrorCode::INVAL);
    }
    Ok((start, end & !low))
}

pub const MPU_BASE: [StaticRef<MpuRegisters>; 2] = unsafe {
    [
        StaticRef::new(MPU_BASE_ADDR[0] as *const MpuRegisters),
        StaticRef::new(MPU_BASE_ADDR[1] as *const MpuRegisters),
    ]
};

/// The MPU seen by `core`.
pub const fn mpu_base(core: Core) -> StaticRef<MpuRegisters> {
    MPU_BASE[core.index()]
}

register_bitfields![u32,
    pub CESR [
        SPERR OFFSET(24) NUMBITS(8) [],
        HRL OFFSET(16) NUMBITS(4) [],
        NSP OFFSET(12) NUMBITS(4) [],
        NRGD OFFSET(8) NUMBITS(4) [],
        /// MPU enable
        VLD OFFSET(0) NUMBITS(1) []
    ],
    pub EDR [
        EACD OFFSET(16) NUMBITS(16) [],
        EPID OFFSET(8) NUMBITS(8) [],
        EMN OFFSET(4) NUMBITS(4) [],
        EATTR OFFSET(1) NUMBITS(3) [],
        ERW OFFSET(0) NUMBITS(1) []
    ],
    pub WORD0 [
        SRTADDR OFFSET(5) NUMBITS(27) []
    ],
    pub WORD1 [
        ENDADDR OFFSET(5) NUMBITS(27) []
    ],
    /// Region access rights. Masters 0..3 have supervisor and user
    /// modes plus process-id enables, masters 4..7 read/write enables.
    pub ACCESS [
        M7RE OFFSET(31) NUMBITS(1) [],
        M7WE OFFSET(30) NUMBITS(1) [],
        M6RE OFFSET(29) NUMBITS(1) [],
        M6WE OFFSET(28) NUMBITS(1) [],
        M5RE OFFSET(27) NUMBITS(1) [],
        M5WE OFFSET(26) NUMBITS(1) [],
        M4RE OFFSET(25) NUMBITS(1) [],
        M4WE OFFSET(24) NUMBITS(1) [],
        M3PE OFFSET(23) NUMBITS(1) [],
        M3SM OFFSET(21) NUMBITS(2) [],
        M3UM OFFSET(18) NUMBITS(3) [],
        M2PE OFFSET(17) NUMBITS(1) [],
        M2SM OFFSET(15) NUMBITS(2) [],
        M2UM OFFSET(12) NUMBITS(3) [],
        M1PE OFFSET(11) NUMBITS(1) [],
        M1SM OFFSET(9) NUMBITS(2) [],
        M1UM OFFSET(6) NUMBITS(3) [],
        M0PE OFFSET(5) NUMBITS(1) [],
        M0SM OFFSET(3) NUMBITS(2) [
            Rwx = 0,
            Rx = 1,
            Rw = 2,
            AsUser = 3
        ],
        /// User mode read, write and execute bits
        M0UM OFFSET(0) NUMBITS(3) []
    ],
    pub WORD3 [
        PID OFFSET(24) NUMBITS(8) [],
        PIDMASK OFFSET(16) NUMBITS(8) [],
        VLD OFFSET(0) NUMBITS(1) []
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
        assert_eq!(offset_of!(MpuRegisters, error), 0x010);
        assert_eq!(offset_of!(MpuRegisters, rgd), 0x400);
        assert_eq!(offset_of!(MpuRegisters, rgdaac), 0x800);
        assert_eq!(size_of::<MpuRegisters>(), 0x840);

        let mpu = testing::zeroed::<MpuRegisters>();
        assert_eq!(testing::offset_in(&*mpu, &mpu.error[3].edr), 0x2C);
        assert_eq!(testing::offset_in(&*mpu, &mpu.rgd[15].word3), 0x4FC);
    }

    #[test]
    fn per_core_copies() {
        assert_eq!(mpu_base(Core::Core0).address(), 0xFFF1_0000);
        assert_eq!(mpu_base(Core::Core1).address(), 0x8FF1_0000);
    }

    #[test]
    fn bitfields() {
        assert_fields!(32;
            ACCESS::M7RE, ACCESS::M7WE, ACCESS::M6RE, ACCESS::M6WE,
            ACCESS::M5RE, ACCESS::M5WE, ACCESS::M4RE, ACCESS::M4WE,
            ACCESS::M3PE, ACCESS::M3SM, ACCESS::M3UM,
            ACCESS::M2PE, ACCESS::M2SM, ACCESS::M2UM,
            ACCESS::M1PE, ACCESS::M1SM, ACCESS::M1UM,
            ACCESS::M0PE, ACCESS::M0SM, ACCESS::M0UM);
        assert_fields!(32; CESR::SPERR, CESR::HRL, CESR::NSP, CESR::NRGD, CESR::VLD);
        assert_fields!(32; EDR::EACD, EDR::EPID, EDR::EMN, EDR::EATTR, EDR::ERW);
        assert_eq!(assert_fields!(32; WORD3::PID, WORD3::PIDMASK, WORD3::VLD), 0x0000_FFFE);
        assert_fields!(32; WORD0::SRTADDR);
        assert_fields!(32; WORD1::ENDADDR);
    }

    #[test]
    fn region_setup() {
        let mpu = testing::zeroed::<MpuRegisters>();
        let (start, end) = region_bounds(0x4000_0000, 0x4001_FFFF).unwrap();
        let rgd = mpu.region(2).unwrap();
        rgd.word0.set(start);
        rgd.word1.set(end);
        rgd.word2.write(ACCESS::M0SM::Rw + ACCESS::M0UM.val(0b110));
        rgd.word3.write(WORD3::VLD::SET);
        assert_eq!(rgd.word1.read(WORD1::ENDADDR), 0x4001_FFE0 >> 5);
        assert_eq!(mpu.rgd[2].word2.get(), 0x0000_0016);

        mpu.region_access(2).unwrap().write(ACCESS::M1UM.val(0b100));
        assert_eq!(mpu.rgdaac[2].get(), 0x0000_0100);
        assert!(mpu.region(NUM_REGIONS).is_err());
        assert!(mpu.error_capture(4).is_err());

        assert_eq!(region_bounds(0x10, 0x3F), Err(ErrorCode::INVAL));
        assert_eq!(region_bounds(0x20, 0x3E), Err(ErrorCode::INVAL));
        assert_eq!(region_bounds(0x40, 0x1F), Err(ErrorCode::INVAL));
    }
}
