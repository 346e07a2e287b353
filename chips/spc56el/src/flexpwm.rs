// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Motor-control PWM modules FlexPWM_0 and FlexPWM_1.
//!
//! Each module has four identical submodules followed by the module-wide
//! output, fault and load-control registers. All registers are 16 bits.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::FLEXPWM_BASE_ADDR;
use crate::static_ref::StaticRef;

pub const NUM_SUBMODULES: usize = 4;

/// Index into [`SubmoduleRegisters::val`].
pub mod val {
    /// Mid-cycle reload point
    pub const VAL0: usize = 0;
    /// Counter modulo, the PWM period
    pub const VAL1: usize = 1;
    /// PWM A rising edge
    pub const VAL2: usize = 2;
    /// PWM A falling edge
    pub const VAL3: usize = 3;
    /// PWM B rising edge
    pub const VAL4: usize = 4;
    /// PWM B falling edge
    pub const VAL5: usize = 5;
}

register_structs! {
    pub CaptureRegisters {
        (0x0 => pub value: ReadOnly<u16>),
        (0x2 => pub cycle: ReadOnly<u16, CVALC::Register>),
        (0x4 => @END),
    },

    pub SubmoduleRegisters {
        /// Counter Register
        (0x00 => pub cnt: ReadOnly<u16>),
        /// Initial Count Register
        (0x02 => pub init: ReadWrite<u16>),
        /// Control 2 Register
        (0x04 => pub ctrl2: ReadWrite<u16, CTRL2::Register>),
        /// Control 1 Register
        (0x06 => pub ctrl: ReadWrite<u16, CTRL::Register>),
        /// Value Registers 0..5
        (0x08 => pub val: [ReadWrite<u16>; 6]),
        /// Fractional Delay Register A
        (0x14 => pub fraca: ReadWrite<u16, FRAC::Register>),
        /// Fractional Delay Register B
        (0x16 => pub fracb: ReadWrite<u16, FRAC::Register>),
        /// Output Control Register
        (0x18 => pub octrl: ReadWrite<u16, OCTRL::Register>),
        /// Status Register, write 1 to clear
        (0x1A => pub sts: ReadWrite<u16, STS::Register>),
        /// Interrupt Enable Register
        (0x1C => pub inten: ReadWrite<u16, INTEN::Register>),
        /// DMA Enable Register
        (0x1E => pub dmaen: ReadWrite<u16, DMAEN::Register>),
        /// Output Trigger Control Register
        (0x20 => pub tctrl: ReadWrite<u16, TCTRL::Register>),
        /// Fault Disable Mapping Register
        (0x22 => pub dismap: ReadWrite<u16, DISMAP::Register>),
        /// Deadtime Count Registers 0 and 1
        (0x24 => pub dtcnt: [ReadWrite<u16, DTCNT::Register>; 2]),
        (0x28 => pub captctrla: ReadWrite<u16, CAPTCTRLA::Register>),
        (0x2A => pub captcompa: ReadWrite<u16, CAPTCOMPA::Register>),
        (0x2C => pub captctrlb: ReadWrite<u16, CAPTCTRLB::Register>),
        (0x2E => pub captcompb: ReadWrite<u16, CAPTCOMPB::Register>),
        (0x30 => pub captctrlx: ReadWrite<u16, CAPTCTRLX::Register>),
        (0x32 => pub captcompx: ReadWrite<u16, CAPTCOMPX::Register>),
        /// Capture Value Registers 0..5 with their cycle counts
        (0x34 => pub cval: [CaptureRegisters; 6]),
        (0x4C => _reserved0),
        (0x50 => @END),
    },

    pub FlexPwmRegisters {
        (0x000 => pub sub: [SubmoduleRegisters; NUM_SUBMODULES]),
        /// Output Enable Register
        (0x140 => pub outen: ReadWrite<u16, OUTEN::Register>),
        /// Mask Register
        (0x142 => pub mask: ReadWrite<u16, MASK::Register>),
        /// Software Controlled Output Register
        (0x144 => pub swcout: ReadWrite<u16, SWCOUT::Register>),
        /// Deadtime Source Select Register
        (0x146 => pub dtsrcsel: ReadWrite<u16, DTSRCSEL::Register>),
        /// Master Control Register
        (0x148 => pub mctrl: ReadWrite<u16, MCTRL::Register>),
        (0x14A => _reserved0),
        /// Fault Control Register
        (0x14C => pub fctrl: ReadWrite<u16, FCTRL::Register>),
        /// Fault Status Register
        (0x14E => pub fsts: ReadWrite<u16, FSTS::Register>),
        /// Fault Filter Register
        (0x150 => pub ffilt: ReadWrite<u16, FFILT::Register>),
        (0x152 => @END),
    }
}

impl FlexPwmRegisters {
    pub fn submodule(&self, n: usize) -> Result<&SubmoduleRegisters, ErrorCode> {
        check_index(n, NUM_SUBMODULES).map(|i| &self.sub[i])
    }
}

/// Bit of submodule `n` in the four-bit per-submodule fields (`MCTRL`
/// `LDOK`/`CLDOK`/`RUN`/`IPOL`, `OUTEN`, `MASK`).
pub const fn submodule_bit(n: usize) -> Result<u16, ErrorCode> {
    match check_index(n, NUM_SUBMODULES) {
        Ok(i) => Ok(1 << i),
        Err(e) => Err(e),
    }
}

pub const FLEXPWM0_BASE: StaticRef<FlexPwmRegisters> =
    unsafe { StaticRef::new(FLEXPWM_BASE_ADDR[0] as *const FlexPwmRegisters) };
pub const FLEXPWM1_BASE: StaticRef<FlexPwmRegisters> =
    unsafe { StaticRef::new(FLEXPWM_BASE_ADDR[1] as *const FlexPwmRegisters) };

register_bitfields![u16,
    pub CTRL2 [
        DBGEN OFFSET(15) NUMBITS(1) [],
        WAITEN OFFSET(14) NUMBITS(1) [],
        INDEP OFFSET(13) NUMBITS(1) [],
        PWMA_INIT OFFSET(12) NUMBITS(1) [],
        PWMB_INIT OFFSET(11) NUMBITS(1) [],
        PWMX_INIT OFFSET(10) NUMBITS(1) [],
        INIT_SEL OFFSET(8) NUMBITS(2) [],
        FRCEN OFFSET(7) NUMBITS(1) [],
        FORCE OFFSET(6) NUMBITS(1) [],
        FORCE_SEL OFFSET(3) NUMBITS(3) [],
        RELOAD_SEL OFFSET(2) NUMBITS(1) [],
        CLK_SEL OFFSET(0) NUMBITS(2) []
    ],
    pub CTRL [
        LDFQ OFFSET(12) NUMBITS(4) [],
        HALF OFFSET(11) NUMBITS(1) [],
        FULL OFFSET(10) NUMBITS(1) [],
        DT OFFSET(8) NUMBITS(2) [],
        PRSC OFFSET(4) NUMBITS(3) [],
        DBLEN OFFSET(0) NUMBITS(1) []
    ],
    pub FRAC [
        FRACEN OFFSET(15) NUMBITS(1) [],
        FRACDLY OFFSET(0) NUMBITS(5) []
    ],
    pub OCTRL [
        PWMA_IN OFFSET(15) NUMBITS(1) [],
        PWMB_IN OFFSET(14) NUMBITS(1) [],
        PWMX_IN OFFSET(13) NUMBITS(1) [],
        POLA OFFSET(10) NUMBITS(1) [],
        POLB OFFSET(9) NUMBITS(1) [],
        POLX OFFSET(8) NUMBITS(1) [],
        PWMAFS OFFSET(4) NUMBITS(2) [],
        PWMBFS OFFSET(2) NUMBITS(2) [],
        PWMXFS OFFSET(0) NUMBITS(2) []
    ],
    pub STS [
        RUF OFFSET(14) NUMBITS(1) [],
        REF OFFSET(13) NUMBITS(1) [],
        RF OFFSET(12) NUMBITS(1) [],
        CFA1 OFFSET(11) NUMBITS(1) [],
        CFA0 OFFSET(10) NUMBITS(1) [],
        CFB1 OFFSET(9) NUMBITS(1) [],
        CFB0 OFFSET(8) NUMBITS(1) [],
        CFX1 OFFSET(7) NUMBITS(1) [],
        CFX0 OFFSET(6) NUMBITS(1) [],
        CMPF OFFSET(0) NUMBITS(6) []
    ],
    pub INTEN [
        REIE OFFSET(13) NUMBITS(1) [],
        RIE OFFSET(12) NUMBITS(1) [],
        CX1IE OFFSET(7) NUMBITS(1) [],
        CX0IE OFFSET(6) NUMBITS(1) [],
        CMPIE OFFSET(0) NUMBITS(6) []
    ],
    pub DMAEN [
        VALDE OFFSET(9) NUMBITS(1) [],
        FAND OFFSET(8) NUMBITS(1) [],
        CAPTDE OFFSET(6) NUMBITS(2) [],
        CA1DE OFFSET(5) NUMBITS(1) [],
        CA0DE OFFSET(4) NUMBITS(1) [],
        CB1DE OFFSET(3) NUMBITS(1) [],
        CB0DE OFFSET(2) NUMBITS(1) [],
        CX1DE OFFSET(1) NUMBITS(1) [],
        CX0DE OFFSET(0) NUMBITS(1) []
    ],
    pub TCTRL [
        OUT_TRIG_EN OFFSET(0) NUMBITS(6) []
    ],
    pub DISMAP [
        DISX OFFSET(8) NUMBITS(4) [],
        DISB OFFSET(4) NUMBITS(4) [],
        DISA OFFSET(0) NUMBITS(4) []
    ],
    pub DTCNT [
        DTCNT OFFSET(0) NUMBITS(11) []
    ],
    pub CAPTCTRLA [
        CA1CNT OFFSET(13) NUMBITS(3) [],
        CA0CNT OFFSET(10) NUMBITS(3) [],
        CFAWM OFFSET(8) NUMBITS(2) [],
        EDGCNTAEN OFFSET(7) NUMBITS(1) [],
        INPSELA OFFSET(6) NUMBITS(1) [],
        EDGA1 OFFSET(4) NUMBITS(2) [],
        EDGA0 OFFSET(2) NUMBITS(2) [],
        ONESHOTA OFFSET(1) NUMBITS(1) [],
        ARMA OFFSET(0) NUMBITS(1) []
    ],
    pub CAPTCOMPA [
        EDGCNTA OFFSET(8) NUMBITS(8) [],
        EDGCMPA OFFSET(0) NUMBITS(8) []
    ],
    pub CAPTCTRLB [
        CB1CNT OFFSET(13) NUMBITS(3) [],
        CB0CNT OFFSET(10) NUMBITS(3) [],
        CFBWM OFFSET(8) NUMBITS(2) [],
        EDGCNTBEN OFFSET(7) NUMBITS(1) [],
        INPSELB OFFSET(6) NUMBITS(1) [],
        EDGB1 OFFSET(4) NUMBITS(2) [],
        EDGB0 OFFSET(2) NUMBITS(2) [],
        ONESHOTB OFFSET(1) NUMBITS(1) [],
        ARMB OFFSET(0) NUMBITS(1) []
    ],
    pub CAPTCOMPB [
        EDGCNTB OFFSET(8) NUMBITS(8) [],
        EDGCMPB OFFSET(0) NUMBITS(8) []
    ],
    pub CAPTCTRLX [
        CX1CNT OFFSET(13) NUMBITS(3) [],
        CX0CNT OFFSET(10) NUMBITS(3) [],
        CFXWM OFFSET(8) NUMBITS(2) [],
        EDGCNTX_EN OFFSET(7) NUMBITS(1) [],
        INP_SELX OFFSET(6) NUMBITS(1) [],
        EDGX1 OFFSET(4) NUMBITS(2) [],
        EDGX0 OFFSET(2) NUMBITS(2) [],
        ONESHOTX OFFSET(1) NUMBITS(1) [],
        ARMX OFFSET(0) NUMBITS(1) []
    ],
    pub CAPTCOMPX [
        EDGCNTX OFFSET(8) NUMBITS(8) [],
        EDGCMPX OFFSET(0) NUMBITS(8) []
    ],
    pub CVALC [
        CVALCYC OFFSET(0) NUMBITS(4) []
    ],
    pub OUTEN [
        PWMA_EN OFFSET(8) NUMBITS(4) [],
        PWMB_EN OFFSET(4) NUMBITS(4) [],
        PWMX_EN OFFSET(0) NUMBITS(4) []
    ],
    pub MASK [
        MASKA OFFSET(8) NUMBITS(4) [],
        MASKB OFFSET(4) NUMBITS(4) [],
        MASKX OFFSET(0) NUMBITS(4) []
    ],
    pub SWCOUT [
        OUTA_3 OFFSET(7) NUMBITS(1) [],
        OUTB_3 OFFSET(6) NUMBITS(1) [],
        OUTA_2 OFFSET(5) NUMBITS(1) [],
        OUTB_2 OFFSET(4) NUMBITS(1) [],
        OUTA_1 OFFSET(3) NUMBITS(1) [],
        OUTB_1 OFFSET(2) NUMBITS(1) [],
        OUTA_0 OFFSET(1) NUMBITS(1) [],
        OUTB_0 OFFSET(0) NUMBITS(1) []
    ],
    pub DTSRCSEL [
        SELA_3 OFFSET(14) NUMBITS(2) [],
        SELB_3 OFFSET(12) NUMBITS(2) [],
        SELA_2 OFFSET(10) NUMBITS(2) [],
        SELB_2 OFFSET(8) NUMBITS(2) [],
        SELA_1 OFFSET(6) NUMBITS(2) [],
        SELB_1 OFFSET(4) NUMBITS(2) [],
        SELA_0 OFFSET(2) NUMBITS(2) [],
        SELB_0 OFFSET(0) NUMBITS(2) []
    ],
    pub MCTRL [
        IPOL OFFSET(12) NUMBITS(4) [],
        RUN OFFSET(8) NUMBITS(4) [],
        CLDOK OFFSET(4) NUMBITS(4) [],
        LDOK OFFSET(0) NUMBITS(4) []
    ],
    pub FCTRL [
        FLVL OFFSET(12) NUMBITS(4) [],
        FAUTO OFFSET(8) NUMBITS(4) [],
        FSAFE OFFSET(4) NUMBITS(4) [],
        FIE OFFSET(0) NUMBITS(4) []
    ],
    pub FSTS [
        FTEST OFFSET(12) NUMBITS(1) [],
        FFPIN OFFSET(8) NUMBITS(4) [],
        FFLAG OFFSET(0) NUMBITS(4) []
    ],
    pub FFILT [
        FILT_CNT OFFSET(8) NUMBITS(3) [],
        FILT_PER OFFSET(0) NUMBITS(8) []
    ]
];


#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, assert_fields};
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(SubmoduleRegisters, val), 0x08);
        assert_eq!(offset_of!(SubmoduleRegisters, octrl), 0x18);
        assert_eq!(offset_of!(SubmoduleRegisters, dismap), 0x22);
        assert_eq!(offset_of!(SubmoduleRegisters, captcompx), 0x32);
        assert_eq!(offset_of!(SubmoduleRegisters, cval), 0x34);
        assert_eq!(size_of::<SubmoduleRegisters>(), 0x50);
        assert_eq!(offset_of!(FlexPwmRegisters, outen), 0x140);
        assert_eq!(offset_of!(FlexPwmRegisters, fctrl), 0x14C);
        assert_eq!(size_of::<FlexPwmRegisters>(), 0x152);

        let pwm = testing::zeroed::<FlexPwmRegisters>();
        assert_eq!(testing::offset_in(&*pwm, &pwm.sub[2].val[val::VAL1]), 0xA0 + 0x0A);
        assert_eq!(testing::offset_in(&*pwm, &pwm.sub[3].cval[5].cycle), 0xF0 + 0x4A);
        assert_eq!(FLEXPWM0_BASE.address(), 0xFFE2_4000);
        assert_eq!(FLEXPWM1_BASE.address(), 0xFFE2_8000);
    }

    #[test]
    fn bitfields() {
        assert_fields!(16;
            CTRL2::DBGEN, CTRL2::WAITEN, CTRL2::INDEP, CTRL2::PWMA_INIT,
            CTRL2::PWMB_INIT, CTRL2::PWMX_INIT, CTRL2::INIT_SEL, CTRL2::FRCEN,
            CTRL2::FORCE, CTRL2::FORCE_SEL, CTRL2::RELOAD_SEL, CTRL2::CLK_SEL);
        assert_eq!(
            assert_fields!(16;
                CTRL::LDFQ, CTRL::HALF, CTRL::FULL, CTRL::DT, CTRL::PRSC, CTRL::DBLEN),
            0x008E
        );
        assert_fields!(16; MCTRL::IPOL, MCTRL::RUN, MCTRL::CLDOK, MCTRL::LDOK);
        assert_fields!(16; OUTEN::PWMA_EN, OUTEN::PWMB_EN, OUTEN::PWMX_EN);
        assert_fields!(16; FRAC::FRACEN, FRAC::FRACDLY);
        assert_fields!(16;
            OCTRL::PWMA_IN, OCTRL::PWMB_IN, OCTRL::PWMX_IN, OCTRL::POLA, OCTRL::POLB, OCTRL::POLX,
            OCTRL::PWMAFS, OCTRL::PWMBFS, OCTRL::PWMXFS);
        assert_fields!(16;
            STS::RUF, STS::REF, STS::RF, STS::CFA1, STS::CFA0, STS::CFB1, STS::CFB0, STS::CFX1,
            STS::CFX0, STS::CMPF);
        assert_fields!(16; INTEN::REIE, INTEN::RIE, INTEN::CX1IE, INTEN::CX0IE, INTEN::CMPIE);
        assert_fields!(16;
            DMAEN::VALDE, DMAEN::FAND, DMAEN::CAPTDE, DMAEN::CA1DE, DMAEN::CA0DE, DMAEN::CB1DE,
            DMAEN::CB0DE, DMAEN::CX1DE, DMAEN::CX0DE);
        assert_fields!(16; TCTRL::OUT_TRIG_EN);
        assert_fields!(16; DISMAP::DISX, DISMAP::DISB, DISMAP::DISA);
        assert_fields!(16; DTCNT::DTCNT);
        assert_fields!(16;
            CAPTCTRLA::CA1CNT, CAPTCTRLA::CA0CNT, CAPTCTRLA::CFAWM, CAPTCTRLA::EDGCNTAEN,
            CAPTCTRLA::INPSELA, CAPTCTRLA::EDGA1, CAPTCTRLA::EDGA0, CAPTCTRLA::ONESHOTA,
            CAPTCTRLA::ARMA);
        assert_fields!(16; CAPTCOMPA::EDGCNTA, CAPTCOMPA::EDGCMPA);
        assert_fields!(16;
            CAPTCTRLB::CB1CNT, CAPTCTRLB::CB0CNT, CAPTCTRLB::CFBWM, CAPTCTRLB::EDGCNTBEN,
            CAPTCTRLB::INPSELB, CAPTCTRLB::EDGB1, CAPTCTRLB::EDGB0, CAPTCTRLB::ONESHOTB,
            CAPTCTRLB::ARMB);
        assert_fields!(16; CAPTCOMPB::EDGCNTB, CAPTCOMPB::EDGCMPB);
        assert_fields!(16;
            CAPTCTRLX::CX1CNT, CAPTCTRLX::CX0CNT, CAPTCTRLX::CFXWM, CAPTCTRLX::EDGCNTX_EN,
            CAPTCTRLX::INP_SELX, CAPTCTRLX::EDGX1, CAPTCTRLX::EDGX0, CAPTCTRLX::ONESHOTX,
            CAPTCTRLX::ARMX);
        assert_fields!(16; CAPTCOMPX::EDGCNTX, CAPTCOMPX::EDGCMPX);
        assert_fields!(16; CVALC::CVALCYC);
        assert_fields!(16; MASK::MASKA, MASK::MASKB, MASK::MASKX);
        assert_fields!(16;
            SWCOUT::OUTA_3, SWCOUT::OUTB_3, SWCOUT::OUTA_2, SWCOUT::OUTB_2, SWCOUT::OUTA_1,
            SWCOUT::OUTB_1, SWCOUT::OUTA_0, SWCOUT::OUTB_0);
        assert_fields!(16;
            DTSRCSEL::SELA_3, DTSRCSEL::SELB_3, DTSRCSEL::SELA_2, DTSRCSEL::SELB_2,
            DTSRCSEL::SELA_1, DTSRCSEL::SELB_1, DTSRCSEL::SELA_0, DTSRCSEL::SELB_0);
        assert_fields!(16; FCTRL::FLVL, FCTRL::FAUTO, FCTRL::FSAFE, FCTRL::FIE);
        assert_fields!(16; FSTS::FTEST, FSTS::FFPIN, FSTS::FFLAG);
        assert_fields!(16; FFILT::FILT_CNT, FFILT::FILT_PER);
    }

    #[test]
    fn load_and_run() {
        let pwm = testing::zeroed::<FlexPwmRegisters>();
        let sub = pwm.submodule(1).unwrap();
        sub.val[val::VAL1].set(1000);
        sub.ctrl.write(CTRL::FULL::SET + CTRL::PRSC.val(2));
        assert_eq!(sub.ctrl.get(), 0x0420);

        let bit = submodule_bit(1).unwrap();
        pwm.mctrl.modify(MCTRL::LDOK.val(bit) + MCTRL::RUN.val(bit));
        assert_eq!(pwm.mctrl.get(), 0x0202);
        assert_eq!(pwm.sub[1].val[1].get(), 1000);
        assert!(pwm.submodule(4).is_err());
        assert_eq!(submodule_bit(4), Err(ErrorCode::INVAL));
    }
}
