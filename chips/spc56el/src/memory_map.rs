// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Physical memory map of the SPC56EL60.
//!
//! Peripheral bridge B (`0xFFE0_0000` and up) holds the motor-control,
//! communication and platform blocks, bridge A (`0xC3F8_0000` and up) the
//! system blocks. When the device runs in decoupled parallel mode each core
//! has its own copy of the platform blocks. Core 1 sees its copy at the
//! core 0 address with the top byte replaced by `0x8F`.

use crate::errorcode::ErrorCode;

pub const CFLASH_BASE_ADDR: usize = 0xC3F8_8000;
pub const SIUL_BASE_ADDR: usize = 0xC3F9_0000;
pub const SSCM_BASE_ADDR: usize = 0xC3FD_8000;
pub const ME_BASE_ADDR: usize = 0xC3FD_C000;
pub const CGM_BASE_ADDR: usize = 0xC3FE_0000;
pub const RGM_BASE_ADDR: usize = 0xC3FE_4000;
pub const PCU_BASE_ADDR: usize = 0xC3FE_8000;
pub const PIT_BASE_ADDR: usize = 0xC3FF_0000;

pub const ADC_BASE_ADDR: [usize; 2] = [0xFFE0_0000, 0xFFE0_4000];
pub const CTU_BASE_ADDR: usize = 0xFFE0_C000;
pub const ETIMER_BASE_ADDR: [usize; 3] = [0xFFE1_8000, 0xFFE1_C000, 0xFFE2_0000];
pub const FLEXPWM_BASE_ADDR: [usize; 2] = [0xFFE2_4000, 0xFFE2_8000];
pub const LINFLEX_BASE_ADDR: [usize; 2] = [0xFFE4_0000, 0xFFE4_4000];
pub const CRC_BASE_ADDR: usize = 0xFFE6_8000;
pub const FCCU_BASE_ADDR: usize = 0xFFE6_C000;
pub const SEMA4_BASE_ADDR: usize = 0xFFF2_4000;
pub const EDMA_BASE_ADDR: usize = 0xFFF4_4000;
pub const DSPI_BASE_ADDR: [usize; 3] = [0xFFF9_0000, 0xFFF9_4000, 0xFFF9_8000];
pub const FLEXCAN_BASE_ADDR: [usize; 2] = [0xFFFC_0000, 0xFFFC_4000];
pub const DMAMUX_BASE_ADDR: usize = 0xFFFD_C000;
pub const FLEXRAY_BASE_ADDR: usize = 0xFFFE_0000;

// Platform blocks, indexed by `Core::index()`.
pub const PBRIDGE_BASE_ADDR: [usize; 2] = [0xFFF0_0000, 0x8FF0_0000];
pub const XBAR_BASE_ADDR: [usize; 2] = [0xFFF0_4000, 0x8FF0_4000];
pub const MPU_BASE_ADDR: [usize; 2] = [0xFFF1_0000, 0x8FF1_0000];
pub const SWT_BASE_ADDR: [usize; 2] = [0xFFF3_8000, 0x8FF3_8000];
pub const STM_BASE_ADDR: [usize; 2] = [0xFFF3_C000, 0x8FF3_C000];
pub const INTC_BASE_ADDR: [usize; 2] = [0xFFF4_8000, 0x8FF4_8000];

/// Processor core issuing the access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Core {
    Core0,
    Core1,
}

impl Core {
    pub const ALL: [Core; 2] = [Core::Core0, Core::Core1];

    pub const fn index(self) -> usize {
        match self {
            Core::Core0 => 0,
            Core::Core1 => 1,
        }
    }

    pub const fn from_index(index: usize) -> Result<Core, ErrorCode> {
        match index {
            0 => Ok(Core::Core0),
            1 => Ok(Core::Core1),
            _ => Err(ErrorCode::INVAL),
        }
    }
}

/// Every block instance on the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Peripheral {
    Cflash,
    Siul,
    Sscm,
    Me,
    Cgm,
    Rgm,
    Pcu,
    Pit,
    Adc0,
    Adc1,
    Ctu0,
    Etimer0,
    Etimer1,
    Etimer2,
    FlexPwm0,
    FlexPwm1,
    LinFlex0,
    LinFlex1,
    Crc,
    Fccu,
    Pbridge,
    Xbar,
    Mpu,
    Sema4,
    Swt,
    Stm,
    Edma,
    Intc,
    Dspi0,
    Dspi1,
    Dspi2,
    FlexCan0,
    FlexCan1,
    DmaMux,
    FlexRay,
}

impl Peripheral {
    pub const ALL: [Peripheral; 35] = [
        Peripheral::Cflash,
        Peripheral::Siul,
        Peripheral::Sscm,
        Peripheral::Me,
        Peripheral::Cgm,
        Peripheral::Rgm,
        Peripheral::Pcu,
        Peripheral::Pit,
        Peripheral::Adc0,
        Peripheral::Adc1,
        Peripheral::Ctu0,
        Peripheral::Etimer0,
        Peripheral::Etimer1,
        Peripheral::Etimer2,
        Peripheral::FlexPwm0,
        Peripheral::FlexPwm1,
        Peripheral::LinFlex0,
        Peripheral::LinFlex1,
        Peripheral::Crc,
        Peripheral::Fccu,
        Peripheral::Pbridge,
        Peripheral::Xbar,
        Peripheral::Mpu,
        Peripheral::Sema4,
        Peripheral::Swt,
        Peripheral::Stm,
        Peripheral::Edma,
        Peripheral::Intc,
        Peripheral::Dspi0,
        Peripheral::Dspi1,
        Peripheral::Dspi2,
        Peripheral::FlexCan0,
        Peripheral::FlexCan1,
        Peripheral::DmaMux,
        Peripheral::FlexRay,
    ];

    /// Absolute base address of the block as seen from `core`.
    ///
    /// Shared blocks answer the same address for both cores.
    pub const fn base_address(self, core: Core) -> usize {
        let c = core.index();
        match self {
            Peripheral::Cflash => CFLASH_BASE_ADDR,
            Peripheral::Siul => SIUL_BASE_ADDR,
            Peripheral::Sscm => SSCM_BASE_ADDR,
            Peripheral::Me => ME_BASE_ADDR,
            Peripheral::Cgm => CGM_BASE_ADDR,
            Peripheral::Rgm => RGM_BASE_ADDR,
            Peripheral::Pcu => PCU_BASE_ADDR,
            Peripheral::Pit => PIT_BASE_ADDR,
            Peripheral::Adc0 => ADC_BASE_ADDR[0],
            Peripheral::Adc1 => ADC_BASE_ADDR[1],
            Peripheral::Ctu0 => CTU_BASE_ADDR,
            Peripheral::Etimer0 => ETIMER_BASE_ADDR[0],
            Peripheral::Etimer1 => ETIMER_BASE_ADDR[1],
            Peripheral::Etimer2 => ETIMER_BASE_ADDR[2],
            Peripheral::FlexPwm0 => FLEXPWM_BASE_ADDR[0],
            Peripheral::FlexPwm1 => FLEXPWM_BASE_ADDR[1],
            Peripheral::LinFlex0 => LINFLEX_BASE_ADDR[0],
            Peripheral::LinFlex1 => LINFLEX_BASE_ADDR[1],
            Peripheral::Crc => CRC_BASE_ADDR,
            Peripheral::Fccu => FCCU_BASE_ADDR,
            Peripheral::Pbridge => PBRIDGE_BASE_ADDR[c],
            Peripheral::Xbar => XBAR_BASE_ADDR[c],
            Peripheral::Mpu => MPU_BASE_ADDR[c],
            Peripheral::Sema4 => SEMA4_BASE_ADDR,
            Peripheral::Swt => SWT_BASE_ADDR[c],
            Peripheral::Stm => STM_BASE_ADDR[c],
            Peripheral::Edma => EDMA_BASE_ADDR,
            Peripheral::Intc => INTC_BASE_ADDR[c],
            Peripheral::Dspi0 => DSPI_BASE_ADDR[0],
            Peripheral::Dspi1 => DSPI_BASE_ADDR[1],
            Peripheral::Dspi2 => DSPI_BASE_ADDR[2],
            Peripheral::FlexCan0 => FLEXCAN_BASE_ADDR[0],
            Peripheral::FlexCan1 => FLEXCAN_BASE_ADDR[1],
            Peripheral::DmaMux => DMAMUX_BASE_ADDR,
            Peripheral::FlexRay => FLEXRAY_BASE_ADDR,
        }
    }

    /// Whether each core has its own copy of the block.
    pub const fn is_per_core(self) -> bool {
        matches!(
            self,
            Peripheral::Pbridge
                | Peripheral::Xbar
                | Peripheral::Mpu
                | Peripheral::Swt
                | Peripheral::Stm
                | Peripheral::Intc
        )
    }

    /// Index of the ME peripheral control register (`ME.PCTL[n]`) that
    /// gates the block's clock.
    ///
    /// System and platform blocks are always clocked and have none.
    pub const fn pctl(self) -> Result<usize, ErrorCode> {
        match self {
            Peripheral::Dspi0 => Ok(4),
            Peripheral::Dspi1 => Ok(5),
            Peripheral::Dspi2 => Ok(6),
            Peripheral::FlexCan0 => Ok(16),
            Peripheral::FlexCan1 => Ok(17),
            Peripheral::DmaMux => Ok(23),
            Peripheral::FlexRay => Ok(24),
            Peripheral::Adc0 => Ok(32),
            Peripheral::Adc1 => Ok(33),
            Peripheral::Etimer0 => Ok(38),
            Peripheral::Etimer1 => Ok(39),
            Peripheral::Etimer2 => Ok(40),
            Peripheral::FlexPwm0 => Ok(41),
            Peripheral::FlexPwm1 => Ok(42),
            Peripheral::LinFlex0 => Ok(48),
            Peripheral::LinFlex1 => Ok(49),
            Peripheral::Ctu0 => Ok(57),
            Peripheral::Crc => Ok(58),
            Peripheral::Pit => Ok(92),
            _ => Err(ErrorCode::NODEVICE),
        }
    }
}
