// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Names from earlier revisions of the device headers.
//!
//! Each item here is a deprecated alias of a current field or register:
//! the same mask and shift, or a reference to the same cell. Nothing in
//! this module carries storage of its own. [`RENAMES`] lists every old
//! name with its replacement so tooling can rewrite sources.
//!
//! Do not add entries. New code uses the current names.

#![allow(deprecated)]

use tock_registers::fields::Field;
use tock_registers::registers::{ReadOnly, ReadWrite};

use crate::cgm::{self, AuxClockRegisters, CgmRegisters};
use crate::errorcode::ErrorCode;
use crate::memory_map::Peripheral;

/// Whether a renamed item is a whole register or a bit field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NameKind {
    Register,
    Field,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rename {
    pub block: Peripheral,
    pub kind: NameKind,
    pub old: &'static str,
    pub new: &'static str,
}

const fn rename(
    block: Peripheral,
    kind: NameKind,
    old: &'static str,
    new: &'static str,
) -> Rename {
    Rename {
        block,
        kind,
        old,
        new,
    }
}

use NameKind::{Field as F, Register as R};
use Peripheral::{Cflash, Cgm, Me, Siul};

pub const RENAMES: [Rename; 42] = [
    rename(Me, F, "S_CURRENTMODE", "S_CURRENT_MODE"),
    rename(Me, F, "S_RC", "S_IRCOSC"),
    rename(Me, F, "S_OSC", "S_XOSC"),
    rename(Me, F, "I_CONF", "I_ICONF"),
    rename(Me, F, "I_MODE", "I_IMODE"),
    rename(Me, F, "I_SAFE", "I_ISAFE"),
    rename(Me, F, "I_MTC", "I_IMTC"),
    rename(Me, F, "M_CONF", "M_ICONF"),
    rename(Me, F, "M_MODE", "M_IMODE"),
    rename(Me, F, "M_SAFE", "M_ISAFE"),
    rename(Me, F, "M_MTC", "M_IMTC"),
    rename(Cgm, R, "AC0SC", "AC0_SC"),
    rename(Cgm, R, "AC1SC", "AC1_SC"),
    rename(Cgm, R, "AC2SC", "AC2_SC"),
    rename(Cgm, R, "AC3SC", "AC3_SC"),
    rename(Cgm, R, "AC4SC", "AC4_SC"),
    rename(Cgm, R, "AC0DC", "AC0_DC0_3"),
    rename(Cgm, R, "AC1DC", "AC1_DC0_3"),
    rename(Cgm, R, "AC2DC", "AC2_DC0_3"),
    rename(Cgm, R, "AC3DC", "AC3_DC0_3"),
    rename(Cgm, R, "AC4DC", "AC4_DC0_3"),
    rename(Cgm, R, "SCDC", "SC_DC0_3"),
    rename(Cgm, R, "SCSS", "SC_SS"),
    rename(Cgm, R, "OCEN", "OC_EN"),
    rename(Cgm, R, "OCDSSC", "OCDS_SC"),
    rename(Cflash, F, "BK0_APC", "B02_APC"),
    rename(Cflash, F, "BK0_WWSC", "B02_WWSC"),
    rename(Cflash, F, "BK0_RWSC", "B02_RWSC"),
    rename(Cflash, F, "BK0_RWWC2", "B02_RWWC2"),
    rename(Cflash, F, "BK0_RWWC1", "B02_RWWC1"),
    rename(Cflash, F, "BK0_RWWC0", "B02_RWWC0"),
    rename(Cflash, F, "B0_P1_BCFG", "B02_P1_BCFG"),
    rename(Cflash, F, "B0_P1_DPFE", "B02_P1_DPFE"),
    rename(Cflash, F, "B0_P1_IPFE", "B02_P1_IPFE"),
    rename(Cflash, F, "B0_P1_PFLM", "B02_P1_PFLM"),
    rename(Cflash, F, "B0_P1_BFE", "B02_P1_BFE"),
    rename(Cflash, F, "B0_P0_BCFG", "B02_P0_BCFG"),
    rename(Cflash, F, "B0_P0_DPFE", "B02_P0_DPFE"),
    rename(Cflash, F, "B0_P0_IPFE", "B02_P0_IPFE"),
    rename(Cflash, F, "B0_P0_PFLM", "B02_P0_PFLM"),
    rename(Cflash, F, "B0_P0_BFE", "B02_P0_BFE"),
    rename(Siul, F, "SME", "SMC"),
];

/// Current spelling of the deprecated name `old` in `block`.
pub fn current_name(block: Peripheral, old: &str) -> Result<&'static str, ErrorCode> {
    RENAMES
        .iter()
        .find(|r| r.block == block && r.old == old)
        .map(|r| r.new)
        .ok_or(ErrorCode::NOSUPPORT)
}

/// `ME_GS`, `ME_IS` and `ME_IM` fields.
pub mod me {
    use super::Field;
    use crate::me::{GS, IM, IS};

    #[deprecated(note = "use GS::S_CURRENT_MODE")]
    pub const S_CURRENTMODE: Field<u32, GS::Register> = GS::S_CURRENT_MODE;
    #[deprecated(note = "use GS::S_IRCOSC")]
    pub const S_RC: Field<u32, GS::Register> = GS::S_IRCOSC;
    #[deprecated(note = "use GS::S_XOSC")]
    pub const S_OSC: Field<u32, GS::Register> = GS::S_XOSC;

    #[deprecated(note = "use IS::I_ICONF")]
    pub const I_CONF: Field<u32, IS::Register> = IS::I_ICONF;
    #[deprecated(note = "use IS::I_IMODE")]
    pub const I_MODE: Field<u32, IS::Register> = IS::I_IMODE;
    #[deprecated(note = "use IS::I_ISAFE")]
    pub const I_SAFE: Field<u32, IS::Register> = IS::I_ISAFE;
    #[deprecated(note = "use IS::I_IMTC")]
    pub const I_MTC: Field<u32, IS::Register> = IS::I_IMTC;

    #[deprecated(note = "use IM::M_ICONF")]
    pub const M_CONF: Field<u32, IM::Register> = IM::M_ICONF;
    #[deprecated(note = "use IM::M_IMODE")]
    pub const M_MODE: Field<u32, IM::Register> = IM::M_IMODE;
    #[deprecated(note = "use IM::M_ISAFE")]
    pub const M_SAFE: Field<u32, IM::Register> = IM::M_ISAFE;
    #[deprecated(note = "use IM::M_IMTC")]
    pub const M_MTC: Field<u32, IM::Register> = IM::M_IMTC;
}

/// `CFLASH_PFCR0` fields, formerly named after bank 0.
pub mod cflash {
    use super::Field;
    use crate::cflash::PFCR0;

    macro_rules! pfcr0_renames {
        ($($old:ident => $new:ident),+ $(,)?) => {
            $(
                #[deprecated]
                pub const $old: Field<u32, PFCR0::Register> = PFCR0::$new;
            )+
        };
    }

    pfcr0_renames! {
        BK0_APC => B02_APC,
        BK0_WWSC => B02_WWSC,
        BK0_RWSC => B02_RWSC,
        BK0_RWWC2 => B02_RWWC2,
        BK0_RWWC1 => B02_RWWC1,
        BK0_RWWC0 => B02_RWWC0,
        B0_P1_BCFG => B02_P1_BCFG,
        B0_P1_DPFE => B02_P1_DPFE,
        B0_P1_IPFE => B02_P1_IPFE,
        B0_P1_PFLM => B02_P1_PFLM,
        B0_P1_BFE => B02_P1_BFE,
        B0_P0_BCFG => B02_P0_BCFG,
        B0_P0_DPFE => B02_P0_DPFE,
        B0_P0_IPFE => B02_P0_IPFE,
        B0_P0_PFLM => B02_P0_PFLM,
        B0_P0_BFE => B02_P0_BFE,
    }
}

/// `SIUL_PCR` fields.
pub mod siul {
    use super::Field;
    use crate::siul::PCR;

    #[deprecated(note = "use PCR::SMC")]
    pub const SME: Field<u16, PCR::Register> = PCR::SMC;
}

macro_rules! aux_clock_renames {
    ($($n:literal: $sc:ident, $dc:ident;)+) => {
        impl CgmRegisters {
            $(
                #[deprecated(note = "use ac[n].sc")]
                pub fn $sc(&self) -> &ReadWrite<u32, cgm::SC::Register> {
                    &self.ac[$n].sc
                }

                #[deprecated(note = "use ac[n].dc0_3()")]
                pub fn $dc(&self) -> &ReadWrite<u32, cgm::DC0_3::Register> {
                    AuxClockRegisters::dc0_3(&self.ac[$n])
                }
            )+
        }
    };
}

aux_clock_renames! {
    0: ac0sc, ac0dc;
    1: ac1sc, ac1dc;
    2: ac2sc, ac2dc;
    3: ac3sc, ac3dc;
    4: ac4sc, ac4dc;
}

impl CgmRegisters {
    #[deprecated(note = "use sc_dc0_3()")]
    pub fn scdc(&self) -> &ReadWrite<u32, cgm::DC0_3::Register> {
        self.sc_dc0_3()
    }

    #[deprecated(note = "use sc_ss")]
    pub fn scss(&self) -> &ReadOnly<u32, cgm::SC_SS::Register> {
        &self.sc_ss
    }

    #[deprecated(note = "use oc_en")]
    pub fn ocen(&self) -> &ReadWrite<u32, cgm::OC_EN::Register> {
        &self.oc_en
    }

    #[deprecated(note = "use ocds_sc")]
    pub fn ocdssc(&self) -> &ReadWrite<u32, cgm::OCDS_SC::Register> {
        &self.ocds_sc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cflash::{CflashRegisters, PFCR0};
    use crate::me::{MeRegisters, GS, IM, IS};
    use crate::siul::PCR;
    use crate::testing;
    use core::ptr;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
    use tock_registers::LocalRegisterCopy;

    fn same<T: tock_registers::UIntLike, R: tock_registers::RegisterLongName>(
        a: Field<T, R>,
        b: Field<T, R>,
    ) -> bool {
        a.mask == b.mask && a.shift == b.shift
    }

    #[test]
    fn fields_alias_current_layout() {
        assert!(same(me::S_CURRENTMODE, GS::S_CURRENT_MODE));
        assert!(same(me::S_RC, GS::S_IRCOSC));
        assert!(same(me::S_OSC, GS::S_XOSC));
        assert!(same(me::I_CONF, IS::I_ICONF));
        assert!(same(me::I_MTC, IS::I_IMTC));
        assert!(same(me::M_SAFE, IM::M_ISAFE));
        assert!(same(cflash::BK0_APC, PFCR0::B02_APC));
        assert!(same(cflash::BK0_RWWC0, PFCR0::B02_RWWC0));
        assert!(same(cflash::B0_P0_PFLM, PFCR0::B02_P0_PFLM));
        assert!(same(siul::SME, PCR::SMC));
    }

    #[test]
    fn old_and_new_names_share_storage() {
        let flash = testing::zeroed::<CflashRegisters>();
        flash
            .pfcr0
            .write(cflash::BK0_APC.val(3) + cflash::BK0_WWSC.val(3) + cflash::BK0_RWSC.val(3));
        assert_eq!(flash.pfcr0.read(PFCR0::B02_APC), 3);
        assert_eq!(flash.pfcr0.read(PFCR0::B02_WWSC), 3);
        flash.pfcr0.modify(PFCR0::B02_P0_BFE::SET);
        assert!(flash.pfcr0.is_set(cflash::B0_P0_BFE));

        let mode = testing::zeroed::<MeRegisters>();
        mode.im.write(IM::M_IMODE::SET);
        assert!(mode.im.is_set(me::M_MODE));
        assert_eq!(mode.im.read(me::M_CONF), 0);

        let pad = LocalRegisterCopy::<u16, PCR::Register>::new(0x4000);
        assert!(pad.is_set(siul::SME));
    }

    #[test]
    fn clock_registers_alias() {
        let cgm = testing::zeroed::<CgmRegisters>();
        assert!(ptr::eq(cgm.ac2sc(), &cgm.ac[2].sc));
        assert!(ptr::eq(cgm.ac4dc(), cgm.ac[4].dc0_3()));
        assert!(ptr::eq(cgm.scdc(), cgm.sc_dc0_3()));
        assert!(ptr::eq(cgm.ocen(), &cgm.oc_en));
        assert!(ptr::eq(cgm.scss(), &cgm.sc_ss));

        cgm.ac0dc().set(0x8300_0000);
        assert_eq!(cgm.ac[0].dc0_3().get(), 0x8300_0000);
        cgm.ocdssc().set(0x1234_0000);
        assert_eq!(cgm.ocds_sc.get(), 0x1234_0000);
    }

    #[test]
    fn rename_table() {
        assert_eq!(current_name(Peripheral::Me, "S_CURRENTMODE"), Ok("S_CURRENT_MODE"));
        assert_eq!(current_name(Peripheral::Cgm, "AC3DC"), Ok("AC3_DC0_3"));
        assert_eq!(current_name(Peripheral::Cflash, "BK0_APC"), Ok("B02_APC"));
        assert_eq!(current_name(Peripheral::Siul, "SME"), Ok("SMC"));
        assert_eq!(current_name(Peripheral::Me, "SME"), Err(ErrorCode::NOSUPPORT));
        assert_eq!(current_name(Peripheral::Cgm, "AC0_SC"), Err(ErrorCode::NOSUPPORT));
    }

    #[test]
    fn rename_table_is_unambiguous() {
        for (i, a) in RENAMES.iter().enumerate() {
            assert_ne!(a.old, a.new);
            for b in &RENAMES[i + 1..] {
                assert!(a.block != b.block || a.old != b.old, "{} listed twice", a.old);
            }
        }
    }
}
