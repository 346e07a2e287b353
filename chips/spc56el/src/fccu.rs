// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Fault Collection and Control Unit (FCCU).
//!
//! Critical (CF) and non-critical (NCF) fault flags are cleared by writing
//! the matching key first, [`CFK_KEY`] to `CFK` or [`NCFK_KEY`] to `NCFK`,
//! and then writing 1s to the flags in `CFS[n]` / `NCFS[n]`. The clear runs
//! as an FCCU operation; it has finished once `CTRL.OPS` reads
//! `Successful`.
//!
//! State changes go through `CTRL.OPR` and must be preceded by the
//! operation key in `CTRLK` for the operations that need one.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs, LocalRegisterCopy};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::FCCU_BASE_ADDR;
use crate::static_ref::StaticRef;

/// Critical fault key.
pub const CFK_KEY: u32 = 0x618B_7A50;
/// Non-critical fault key.
pub const NCFK_KEY: u32 = 0xAB34_98FE;
/// `CTRLK` key for operation 1, enter the configuration state.
pub const CTRLK_OP1_KEY: u32 = 0x9137_56AF;
/// `CTRLK` key for operation 2, return to the normal state.
pub const CTRLK_OP2_KEY: u32 = 0x825A_132B;

/// Words of critical or non-critical fault flags.
pub const NUM_FAULT_WORDS: usize = 4;

register_structs! {
    pub FccuRegisters {
        /// Control Register
        (0x00 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// Control Key Register
        (0x04 => pub ctrlk: WriteOnly<u32>),
        /// Configuration Register
        (0x08 => pub cfg: ReadWrite<u32, CFG::Register>),
        /// CF Configuration Registers
        (0x0C => pub cf_cfg: [ReadWrite<u32>; NUM_FAULT_WORDS]),
        /// NCF Configuration Registers
        (0x1C => pub ncf_cfg: [ReadWrite<u32>; NUM_FAULT_WORDS]),
        /// CFS Configuration Registers, two bits of reaction per fault
        (0x2C => pub cfs_cfg: [ReadWrite<u32>; 8]),
        /// NCFS Configuration Registers
        (0x4C => pub ncfs_cfg: [ReadWrite<u32>; 8]),
        /// CF Status Registers, write 1 to clear after the CF key
        (0x6C => pub cfs: [ReadWrite<u32>; NUM_FAULT_WORDS]),
        /// CF Key Register
        (0x7C => pub cfk: WriteOnly<u32>),
        /// NCF Status Registers, write 1 to clear after the NCF key
        (0x80 => pub ncfs: [ReadWrite<u32>; NUM_FAULT_WORDS]),
        /// NCF Key Register
        (0x90 => pub ncfk: WriteOnly<u32>),
        /// NCF Enable Registers
        (0x94 => pub ncfe: [ReadWrite<u32>; NUM_FAULT_WORDS]),
        /// NCF Time-out Enable Registers
        (0xA4 => pub ncf_toe: [ReadWrite<u32>; NUM_FAULT_WORDS]),
        /// NCF Time-out Register
        (0xB4 => pub ncf_to: ReadWrite<u32>),
        /// Configuration-state Time-out Register
        (0xB8 => pub cfg_to: ReadWrite<u32, CFG_TO::Register>),
        /// IO Control Register
        (0xBC => pub einout: ReadWrite<u32, EINOUT::Register>),
        /// Status Register
        (0xC0 => pub stat: ReadOnly<u32, STAT::Register>),
        /// NA Freeze Status Register
        (0xC4 => pub nafs: ReadOnly<u32>),
        /// AF Freeze Status Register
        (0xC8 => pub affs: ReadOnly<u32>),
        /// NF Freeze Status Register
        (0xCC => pub nffs: ReadOnly<u32>),
        /// FA Freeze Status Register
        (0xD0 => pub fafs: ReadOnly<u32>),
        /// SC Freeze Status Register
        (0xD4 => pub scfs: ReadOnly<u32>),
        /// CF Fake Register
        (0xD8 => pub cff: WriteOnly<u32>),
        /// NCF Fake Register
        (0xDC => pub ncff: WriteOnly<u32>),
        /// IRQ Status Register
        (0xE0 => pub irq_stat: ReadWrite<u32, IRQ::Register>),
        /// IRQ Enable Register
        (0xE4 => pub irq_en: ReadWrite<u32, IRQ::Register>),
        /// XTMR Register
        (0xE8 => pub xtmr: ReadOnly<u32>),
        /// MCS Register
        (0xEC => pub mcs: ReadOnly<u32>),
        /// Transient Lock Register
        (0xF0 => pub trans_lock: ReadWrite<u32>),
        /// Permanent Lock Register
        (0xF4 => pub permnt_lock: ReadWrite<u32>),
        /// Delta T Register
        (0xF8 => pub delta_t: ReadWrite<u32>),
        (0xFC => @END),
    }
}

impl FccuRegisters {
    /// Critical fault status word `n`.
    pub fn critical_status(&self, n: usize) -> Result<&ReadWrite<u32>, ErrorCode> {
        check_index(n, NUM_FAULT_WORDS).map(|i| &self.cfs[i])
    }

    /// Non-critical fault status word `n`.
    pub fn noncritical_status(&self, n: usize) -> Result<&ReadWrite<u32>, ErrorCode> {
        check_index(n, NUM_FAULT_WORDS).map(|i| &self.ncfs[i])
    }
}

/// Whether a raw `CTRL` value reports the last operation as successful.
pub fn operation_succeeded(ctrl: u32) -> bool {
    LocalRegisterCopy::<u32, CTRL::Register>::new(ctrl).matches_all(CTRL::OPS::Successful)
}

pub const FCCU_BASE: StaticRef<FccuRegisters> =
    unsafe { StaticRef::new(FCCU_BASE_ADDR as *const FccuRegisters) };

register_bitfields![u32,
    pub CTRL [
        DEBUG OFFSET(9) NUMBITS(1) [],
        /// Operation status
        OPS OFFSET(6) NUMBITS(2) [
            Idle = 0,
            InProgress = 1,
            Aborted = 2,
            Successful = 3
        ],
        /// Operation run
        OPR OFFSET(0) NUMBITS(5) [
            NoOperation = 0,
            SetConfig = 1,
            SetNormal = 2,
            ReadStatus = 3
        ]
    ],
    pub CFG [
        /// Fault-output polarity select
        PS OFFSET(9) NUMBITS(1) [],
        /// Fault-output mode
        FOM OFFSET(6) NUMBITS(3) [],
        /// Fault-output prescaler
        FOP OFFSET(0) NUMBITS(6) []
    ],
    pub CFG_TO [
        TO OFFSET(0) NUMBITS(3) []
    ],
    pub EINOUT [
        EIN1 OFFSET(5) NUMBITS(1) [],
        EIN0 OFFSET(4) NUMBITS(1) [],
        EOUT1 OFFSET(1) NUMBITS(1) [],
        EOUT0 OFFSET(0) NUMBITS(1) []
    ],
    pub STAT [
        STATUS OFFSET(0) NUMBITS(3) [
            Normal = 0,
            Config = 1,
            Alarm = 2,
            Fault = 3
        ]
    ],
    /// Shared by `IRQ_STAT` and `IRQ_EN`.
    pub IRQ [
        NMI OFFSET(2) NUMBITS(1) [],
        ALRM OFFSET(1) NUMBITS(1) [],
        CFG_TO OFFSET(0) NUMBITS(1) []
    ]
];
