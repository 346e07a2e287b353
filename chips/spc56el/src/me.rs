// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Mode Entry Module (ME).
//!
//! ME owns the device operating modes (DRUN, RUN0..3, HALT0, STOP0, SAFE),
//! the clock sources each mode turns on, and the per-peripheral clock
//! gating through `PCTL`. A mode change is requested by writing `MCTL`
//! twice, first with [`MCTL_KEY`] and then with [`MCTL_KEY_INV`], see
//! [`mctl_pair`].

use core::convert::TryFrom;

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::ErrorCode;
use crate::memory_map::{Peripheral, ME_BASE_ADDR};
use crate::static_ref::StaticRef;

/// Number of peripheral control registers in the block.
pub const NUM_PCTL: usize = 144;

/// First `MCTL` key.
pub const MCTL_KEY: u32 = 0x5AF0;
/// Second `MCTL` key, the bitwise inverse of the first.
pub const MCTL_KEY_INV: u32 = 0xA50F;

register_structs! {
    pub MeRegisters {
        /// Global Status Register
        (0x000 => pub gs: ReadOnly<u32, GS::Register>),
        /// Mode Control Register
        (0x004 => pub mctl: ReadWrite<u32, MCTL::Register>),
        /// Mode Enable Register
        (0x008 => pub mer: ReadWrite<u32, MER::Register>),
        /// Interrupt Status Register, write 1 to clear
        (0x00C => pub is: ReadWrite<u32, IS::Register>),
        /// Interrupt Mask Register
        (0x010 => pub im: ReadWrite<u32, IM::Register>),
        /// Invalid Mode Transition Status Register
        (0x014 => pub imts: ReadWrite<u32, IMTS::Register>),
        (0x018 => _reserved0),
        (0x020 => pub reset: ReadOnly<u32, MC::Register>),
        (0x024 => pub test: ReadWrite<u32, MC::Register>),
        (0x028 => pub safe: ReadWrite<u32, MC::Register>),
        (0x02C => pub drun: ReadWrite<u32, MC::Register>),
        (0x030 => pub run: [ReadWrite<u32, MC::Register>; 4]),
        (0x040 => pub halt0: ReadWrite<u32, MC::Register>),
        (0x044 => _reserved1),
        (0x048 => pub stop0: ReadWrite<u32, MC::Register>),
        (0x04C => _reserved2),
        (0x054 => pub standby0: ReadWrite<u32, MC::Register>),
        (0x058 => _reserved3),
        /// Peripheral Status Registers, one bit per PCTL index
        (0x060 => pub ps: [ReadOnly<u32>; 4]),
        (0x070 => _reserved4),
        /// Run Peripheral Configuration Registers
        (0x080 => pub runpc: [ReadWrite<u32, RUNPC::Register>; 8]),
        /// Low-Power Peripheral Configuration Registers
        (0x0A0 => pub lppc: [ReadWrite<u32, LPPC::Register>; 8]),
        /// Peripheral Control Registers
        (0x0C0 => pub pctl: [ReadWrite<u8, PCTL::Register>; NUM_PCTL]),
        (0x150 => @END),
    }
}

alias_views! {
    MeRegisters {
        /// Peripheral control, four peripherals per word.
        pub fn pctl_words(&self) -> &[ReadWrite<u32>; NUM_PCTL / 4] =
            pctl as [ReadWrite<u8, PCTL::Register>; NUM_PCTL];
    }
}

impl MeRegisters {
    /// Peripheral control register gating `peripheral`.
    pub fn pctl_for(
        &self,
        peripheral: Peripheral,
    ) -> Result<&ReadWrite<u8, PCTL::Register>, ErrorCode> {
        peripheral.pctl().map(|n| &self.pctl[n])
    }

    /// Mode configuration register of `mode`.
    pub fn mode_config(&self, mode: Mode) -> Result<&ReadWrite<u32, MC::Register>, ErrorCode> {
        match mode {
            Mode::Test => Ok(&self.test),
            Mode::Safe => Ok(&self.safe),
            Mode::Drun => Ok(&self.drun),
            Mode::Run0 => Ok(&self.run[0]),
            Mode::Run1 => Ok(&self.run[1]),
            Mode::Run2 => Ok(&self.run[2]),
            Mode::Run3 => Ok(&self.run[3]),
            Mode::Halt0 => Ok(&self.halt0),
            Mode::Stop0 => Ok(&self.stop0),
            Mode::Standby0 => Ok(&self.standby0),
            // RESET configuration is fixed by hardware.
            Mode::Reset => Err(ErrorCode::NOSUPPORT),
        }
    }
}

pub const ME_BASE: StaticRef<MeRegisters> =
    unsafe { StaticRef::new(ME_BASE_ADDR as *const MeRegisters) };

/// Device operating mode, as encoded in `GS.S_CURRENT_MODE` and
/// `MCTL.TARGET_MODE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Reset = 0,
    Test = 1,
    Safe = 2,
    Drun = 3,
    Run0 = 4,
    Run1 = 5,
    Run2 = 6,
    Run3 = 7,
    Halt0 = 8,
    Stop0 = 10,
    Standby0 = 13,
}

impl TryFrom<u32> for Mode {
    type Error = ErrorCode;

    fn try_from(code: u32) -> Result<Mode, ErrorCode> {
        match code {
            0 => Ok(Mode::Reset),
            1 => Ok(Mode::Test),
            2 => Ok(Mode::Safe),
            3 => Ok(Mode::Drun),
            4 => Ok(Mode::Run0),
            5 => Ok(Mode::Run1),
            6 => Ok(Mode::Run2),
            7 => Ok(Mode::Run3),
            8 => Ok(Mode::Halt0),
            10 => Ok(Mode::Stop0),
            13 => Ok(Mode::Standby0),
            _ => Err(ErrorCode::INVAL),
        }
    }
}

/// The two `MCTL` words that request a transition to `mode`, in the order
/// they must be written.
pub const fn mctl_pair(mode: Mode) -> [u32; 2] {
    let target = (mode as u32) << 28;
    [target | MCTL_KEY, target | MCTL_KEY_INV]
}

/// `PCTL` value selecting run configuration `run` and low-power
/// configuration `lp`.
pub const fn pctl_value(run: u8, lp: u8) -> u8 {
    ((lp & 0x7) << 3) | (run & 0x7)
}

register_bitfields![u32,
    pub GS [
        S_CURRENT_MODE OFFSET(28) NUMBITS(4) [],
        /// Mode transition in progress
        S_MTRANS OFFSET(27) NUMBITS(1) [],
        S_DC OFFSET(26) NUMBITS(1) [],
        S_PDO OFFSET(23) NUMBITS(1) [],
        S_MVR OFFSET(20) NUMBITS(1) [],
        S_DFLA OFFSET(18) NUMBITS(2) [],
        S_CFLA OFFSET(16) NUMBITS(2) [],
        S_PLL1 OFFSET(7) NUMBITS(1) [],
        S_PLL0 OFFSET(6) NUMBITS(1) [],
        S_XOSC OFFSET(5) NUMBITS(1) [],
        S_IRCOSC OFFSET(4) NUMBITS(1) [],
        S_SYSCLK OFFSET(0) NUMBITS(4) []
    ],
    pub MCTL [
        TARGET_MODE OFFSET(28) NUMBITS(4) [
            RESET = 0,
            TEST = 1,
            SAFE = 2,
            DRUN = 3,
            RUN0 = 4,
            RUN1 = 5,
            RUN2 = 6,
            RUN3 = 7,
            HALT0 = 8,
            STOP0 = 10,
            STANDBY0 = 13
        ],
        KEY OFFSET(0) NUMBITS(16) []
    ],
    pub MER [
        STANDBY0 OFFSET(13) NUMBITS(1) [],
        STOP0 OFFSET(10) NUMBITS(1) [],
        HALT0 OFFSET(8) NUMBITS(1) [],
        RUN3 OFFSET(7) NUMBITS(1) [],
        RUN2 OFFSET(6) NUMBITS(1) [],
        RUN1 OFFSET(5) NUMBITS(1) [],
        RUN0 OFFSET(4) NUMBITS(1) [],
        DRUN OFFSET(3) NUMBITS(1) [],
        SAFE OFFSET(2) NUMBITS(1) [],
        TEST OFFSET(1) NUMBITS(1) [],
        RESET OFFSET(0) NUMBITS(1) []
    ],
    pub IS [
        /// Invalid mode configuration
        I_ICONF OFFSET(3) NUMBITS(1) [],
        /// Invalid mode transition
        I_IMODE OFFSET(2) NUMBITS(1) [],
        /// SAFE mode entered
        I_ISAFE OFFSET(1) NUMBITS(1) [],
        /// Mode transition complete
        I_IMTC OFFSET(0) NUMBITS(1) []
    ],
    pub IM [
        M_ICONF OFFSET(3) NUMBITS(1) [],
        M_IMODE OFFSET(2) NUMBITS(1) [],
        M_ISAFE OFFSET(1) NUMBITS(1) [],
        M_IMTC OFFSET(0) NUMBITS(1) []
    ],
    pub IMTS [
        S_MTI OFFSET(4) NUMBITS(1) [],
        S_MRI OFFSET(3) NUMBITS(1) [],
        S_DMA OFFSET(2) NUMBITS(1) [],
        S_NMA OFFSET(1) NUMBITS(1) [],
        S_SEA OFFSET(0) NUMBITS(1) []
    ],
    /// Mode configuration, shared by every mode register.
    pub MC [
        /// I/O output power-down
        PDO OFFSET(23) NUMBITS(1) [],
        /// Main voltage regulator on
        MVRON OFFSET(20) NUMBITS(1) [],
        DFLAON OFFSET(18) NUMBITS(2) [
            PowerDown = 1,
            LowPower = 2,
            Normal = 3
        ],
        CFLAON OFFSET(16) NUMBITS(2) [
            PowerDown = 1,
            LowPower = 2,
            Normal = 3
        ],
        PLL1ON OFFSET(7) NUMBITS(1) [],
        PLL0ON OFFSET(6) NUMBITS(1) [],
        XOSC0ON OFFSET(5) NUMBITS(1) [],
        IRCON OFFSET(4) NUMBITS(1) [],
        SYSCLK OFFSET(0) NUMBITS(4) [
            Irc = 0,
            Xosc = 2,
            Fmpll0 = 4,
            Fmpll1 = 5,
            Disabled = 15
        ]
    ],
    pub RUNPC [
        RUN3 OFFSET(7) NUMBITS(1) [],
        RUN2 OFFSET(6) NUMBITS(1) [],
        RUN1 OFFSET(5) NUMBITS(1) [],
        RUN0 OFFSET(4) NUMBITS(1) [],
        DRUN OFFSET(3) NUMBITS(1) [],
        SAFE OFFSET(2) NUMBITS(1) [],
        TEST OFFSET(1) NUMBITS(1) [],
        RESET OFFSET(0) NUMBITS(1) []
    ],
    pub LPPC [
        STANDBY0 OFFSET(13) NUMBITS(1) [],
        STOP0 OFFSET(10) NUMBITS(1) [],
        HALT0 OFFSET(8) NUMBITS(1) []
    ]
];

register_bitfields![u8,
    pub PCTL [
        /// Peripheral frozen while the core is halted by a debugger
        DBG_F OFFSET(6) NUMBITS(1) [],
        /// Index into `lppc`
        LP_CFG OFFSET(3) NUMBITS(3) [],
        /// Index into `runpc`
        RUN_CFG OFFSET(0) NUMBITS(3) []
    ]
];
