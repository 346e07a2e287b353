// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Register handles for one core.

use crate::memory_map::Core;
use crate::static_ref::StaticRef;
use crate::{
    adc, cflash, cgm, crc, ctu, dmamux, dspi, edma, etimer, fccu, flexcan, flexpwm, flexray, intc,
    linflex, me, mpu, pbridge, pcu, pit, rgm, sema4, siul, sscm, stm, swt, xbar,
};

/// Every block as seen from one core. Shared blocks point at the same
/// registers in both instances, per-core blocks at the core's own copy.
pub struct Spc56elPeripherals {
    pub core: Core,

    pub cflash: StaticRef<cflash::CflashRegisters>,
    pub siul: StaticRef<siul::SiulRegisters>,
    pub sscm: StaticRef<sscm::SscmRegisters>,
    pub me: StaticRef<me::MeRegisters>,
    pub cgm: StaticRef<cgm::CgmRegisters>,
    pub rgm: StaticRef<rgm::RgmRegisters>,
    pub pcu: StaticRef<pcu::PcuRegisters>,
    pub pit: StaticRef<pit::PitRegisters>,

    pub adc: [StaticRef<adc::AdcRegisters>; 2],
    pub ctu: StaticRef<ctu::CtuRegisters>,
    pub etimer: [StaticRef<etimer::EtimerRegisters>; 3],
    pub flexpwm: [StaticRef<flexpwm::FlexPwmRegisters>; 2],

    pub linflex: [StaticRef<linflex::LinFlexRegisters>; 2],
    pub dspi: [StaticRef<dspi::DspiRegisters>; 3],
    pub flexcan: [StaticRef<flexcan::FlexCanRegisters>; 2],
    pub flexray: StaticRef<flexray::FlexRayRegisters>,

    pub crc: StaticRef<crc::CrcRegisters>,
    pub fccu: StaticRef<fccu::FccuRegisters>,
    pub sema4: StaticRef<sema4::Sema4Registers>,

    pub edma: StaticRef<edma::EdmaRegisters>,
    pub dmamux: StaticRef<dmamux::DmaMuxRegisters>,

    pub intc: StaticRef<intc::IntcRegisters>,
    pub swt: StaticRef<swt::SwtRegisters>,
    pub stm: StaticRef<stm::StmRegisters>,
    pub xbar: StaticRef<xbar::XbarRegisters>,
    pub mpu: StaticRef<mpu::MpuRegisters>,
    pub pbridge: StaticRef<pbridge::PbridgeRegisters>,
}

impl Spc56elPeripherals {
    pub const fn new(core: Core) -> Self {
        Self {
            core,

            cflash: cflash::CFLASH_BASE,
            siul: siul::SIUL_BASE,
            sscm: sscm::SSCM_BASE,
            me: me::ME_BASE,
            cgm: cgm::CGM_BASE,
            rgm: rgm::RGM_BASE,
            pcu: pcu::PCU_BASE,
            pit: pit::PIT_BASE,

            adc: [adc::ADC0_BASE, adc::ADC1_BASE],
            ctu: ctu::CTU_BASE,
            etimer: [
                etimer::ETIMER0_BASE,
                etimer::ETIMER1_BASE,
                etimer::ETIMER2_BASE,
            ],
            flexpwm: [flexpwm::FLEXPWM0_BASE, flexpwm::FLEXPWM1_BASE],

            linflex: [linflex::LINFLEX0_BASE, linflex::LINFLEX1_BASE],
            dspi: dspi::DSPI_BASE,
            flexcan: [flexcan::FLEXCAN0_BASE, flexcan::FLEXCAN1_BASE],
            flexray: flexray::FLEXRAY_BASE,

            crc: crc::CRC_BASE,
            fccu: fccu::FCCU_BASE,
            sema4: sema4::SEMA4_BASE,

            edma: edma::EDMA_BASE,
            dmamux: dmamux::DMAMUX_BASE,

            intc: intc::intc_base(core),
            swt: swt::swt_base(core),
            stm: stm::stm_base(core),
            xbar: xbar::xbar_base(core),
            mpu: mpu::mpu_base(core),
            pbridge: pbridge::pbridge_base(core),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map::Peripheral;

    fn handle_address(p: &Spc56elPeripherals, block: Peripheral) -> usize {
        match block {
            Peripheral::Cflash => p.cflash.address(),
            Peripheral::Siul => p.siul.address(),
            Peripheral::Sscm => p.sscm.address(),
            Peripheral::Me => p.me.address(),
            Peripheral::Cgm => p.cgm.address(),
            Peripheral::Rgm => p.rgm.address(),
            Peripheral::Pcu => p.pcu.address(),
            Peripheral::Pit => p.pit.address(),
            Peripheral::Adc0 => p.adc[0].address(),
            Peripheral::Adc1 => p.adc[1].address(),
            Peripheral::Ctu0 => p.ctu.address(),
            Peripheral::Etimer0 => p.etimer[0].address(),
            Peripheral::Etimer1 => p.etimer[1].address(),
            Peripheral::Etimer2 => p.etimer[2].address(),
            Peripheral::FlexPwm0 => p.flexpwm[0].address(),
            Peripheral::FlexPwm1 => p.flexpwm[1].address(),
            Peripheral::LinFlex0 => p.linflex[0].address(),
            Peripheral::LinFlex1 => p.linflex[1].address(),
            Peripheral::Crc => p.crc.address(),
            Peripheral::Fccu => p.fccu.address(),
            Peripheral::Pbridge => p.pbridge.address(),
            Peripheral::Xbar => p.xbar.address(),
            Peripheral::Mpu => p.mpu.address(),
            Peripheral::Sema4 => p.sema4.address(),
            Peripheral::Swt => p.swt.address(),
            Peripheral::Stm => p.stm.address(),
            Peripheral::Edma => p.edma.address(),
            Peripheral::Intc => p.intc.address(),
            Peripheral::Dspi0 => p.dspi[0].address(),
            Peripheral::Dspi1 => p.dspi[1].address(),
            Peripheral::Dspi2 => p.dspi[2].address(),
            Peripheral::FlexCan0 => p.flexcan[0].address(),
            Peripheral::FlexCan1 => p.flexcan[1].address(),
            Peripheral::DmaMux => p.dmamux.address(),
            Peripheral::FlexRay => p.flexray.address(),
        }
    }

    #[test]
    fn handles_match_memory_map() {
        for core in Core::ALL {
            let peripherals = Spc56elPeripherals::new(core);
            assert_eq!(peripherals.core, core);
            for block in Peripheral::ALL {
                assert_eq!(
                    handle_address(&peripherals, block),
                    block.base_address(core),
                    "{:?} on {:?}",
                    block,
                    core
                );
            }
        }
    }

    #[test]
    fn cores_share_system_blocks() {
        let p0 = Spc56elPeripherals::new(Core::Core0);
        let p1 = Spc56elPeripherals::new(Core::Core1);
        assert_eq!(p0.siul.address(), p1.siul.address());
        assert_eq!(p0.edma.address(), p1.edma.address());
        assert_eq!(p0.sema4.address(), p1.sema4.address());
        assert_ne!(p0.intc.address(), p1.intc.address());
        assert_eq!(p1.swt.address(), 0x8FF3_8000);
    }

    #[test]
    fn usable_in_const_context() {
        const CORE1: Spc56elPeripherals = Spc56elPeripherals::new(Core::Core1);
        assert_eq!(CORE1.stm.address(), 0x8FF3_C000);
        assert_eq!(CORE1.cflash.address(), 0xC3F8_8000);
    }
}
