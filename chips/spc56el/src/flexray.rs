// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! FlexRay communication controller (FR).
//!
//! Every register is 16 bits wide. The message buffer headers and payloads
//! live in system RAM at the address programmed into `SYSBADHR`/`SYSBADLR`;
//! the block itself only holds the per-buffer control, filter and index
//! registers in `MBCCS[n]`.
//!
//! The protocol configuration registers `PCR0..PCR30` each pack several
//! unrelated protocol parameters and are written once in the `Config`
//! state, so they are kept as raw halfwords.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::{check_index, ErrorCode};
use crate::memory_map::FLEXRAY_BASE_ADDR;
use crate::static_ref::StaticRef;

pub const NUM_MESSAGE_BUFFERS: usize = 128;
pub const NUM_PCR: usize = 31;
pub const NUM_SLOT_STATUS: usize = 8;
pub const NUM_NETWORK_VECTOR: usize = 6;
/// Alignment of the message buffer area in system RAM.
pub const SYSTEM_MEMORY_ALIGN: u32 = 16;

register_structs! {
    pub MessageBufferControlRegisters {
        /// Configuration, Control, Status Register
        (0x0 => pub mbccsr: ReadWrite<u16, MBCCSR::Register>),
        /// Cycle Counter Filter Register
        (0x2 => pub mbccfr: ReadWrite<u16, MBCCFR::Register>),
        /// Frame ID Register
        (0x4 => pub mbfidr: ReadWrite<u16, MBFIDR::Register>),
        /// Index Register
        (0x6 => pub mbidxr: ReadWrite<u16, MBIDXR::Register>),
        (0x8 => @END),
    },

    pub FlexRayRegisters {
        /// Module Version Register
        (0x000 => pub mvr: ReadOnly<u16, MVR::Register>),
        /// Module Configuration Register
        (0x002 => pub mcr: ReadWrite<u16, MCR::Register>),
        /// System Memory Base Address High Register
        (0x004 => pub sysbadhr: ReadWrite<u16>),
        /// System Memory Base Address Low Register
        (0x006 => pub sysbadlr: ReadWrite<u16>),
        /// Strobe Signal Control Register
        (0x008 => pub stbscr: ReadWrite<u16, STBSCR::Register>),
        /// Strobe Port Control Register
        (0x00A => pub stbpcr: ReadWrite<u16, STBPCR::Register>),
        /// Message Buffer Data Size Register
        (0x00C => pub mbdsr: ReadWrite<u16, MBDSR::Register>),
        /// Message Buffer Segment Size and Utilization Register
        (0x00E => pub mbssutr: ReadWrite<u16, MBSSUTR::Register>),
        /// PE DRAM Access Register
        (0x010 => pub padr: ReadWrite<u16>),
        /// PE DRAM Data Register
        (0x012 => pub pdar: ReadOnly<u16>),
        /// Protocol Operation Control Register
        (0x014 => pub pocr: ReadWrite<u16, POCR::Register>),
        /// Global Interrupt Flag and Enable Register
        (0x016 => pub gifer: ReadWrite<u16, GIFER::Register>),
        /// Protocol Interrupt Flag Register 0
        (0x018 => pub pifr0: ReadWrite<u16, PIFR0::Register>),
        /// Protocol Interrupt Flag Register 1
        (0x01A => pub pifr1: ReadWrite<u16, PIFR1::Register>),
        /// Protocol Interrupt Enable Register 0
        (0x01C => pub pier0: ReadWrite<u16, PIER0::Register>),
        /// Protocol Interrupt Enable Register 1
        (0x01E => pub pier1: ReadWrite<u16, PIER1::Register>),
        /// CHI Error Flag Register
        (0x020 => pub chierfr: ReadWrite<u16, CHIERFR::Register>),
        /// Message Buffer Interrupt Vector Register
        (0x022 => pub mbivec: ReadOnly<u16, MBIVEC::Register>),
        /// Channel A Status Error Counter Register
        (0x024 => pub casercr: ReadOnly<u16>),
        /// Channel B Status Error Counter Register
        (0x026 => pub cbsercr: ReadOnly<u16>),
        /// Protocol Status Registers 0..3
        (0x028 => pub psr0: ReadOnly<u16, PSR0::Register>),
        (0x02A => pub psr1: ReadWrite<u16, PSR1::Register>),
        (0x02C => pub psr2: ReadOnly<u16, PSR2::Register>),
        (0x02E => pub psr3: ReadWrite<u16, PSR3::Register>),
        /// Macrotick Counter Register
        (0x030 => pub mtctr: ReadOnly<u16>),
        /// Cycle Counter Register
        (0x032 => pub cyctr: ReadOnly<u16>),
        /// Slot Counter Channel A Register
        (0x034 => pub sltctar: ReadOnly<u16>),
        /// Slot Counter Channel B Register
        (0x036 => pub sltctbr: ReadOnly<u16>),
        /// Rate Correction Value Register
        (0x038 => pub rtcorvr: ReadOnly<u16>),
        /// Offset Correction Value Register
        (0x03A => pub ofcorvr: ReadOnly<u16>),
        /// Combined Interrupt Flag Register
        (0x03C => pub cifrr: ReadOnly<u16, CIFRR::Register>),
        (0x03E => _reserved0),
        /// Sync Frame Counter Register
        (0x040 => pub sfcntr: ReadOnly<u16, SFCNTR::Register>),
        /// Sync Frame Table Offset Register
        (0x042 => pub sftor: ReadWrite<u16>),
        /// Sync Frame Table Configuration, Control, Status Register
        (0x044 => pub sftccsr: ReadWrite<u16, SFTCCSR::Register>),
        /// Sync Frame ID Rejection Filter Register
        (0x046 => pub sfidrfr: ReadWrite<u16, SFIDRFR::Register>),
        /// Sync Frame ID Acceptance Filter Value Register
        (0x048 => pub sfidafvr: ReadWrite<u16>),
        /// Sync Frame ID Acceptance Filter Mask Register
        (0x04A => pub sfidafmr: ReadWrite<u16>),
        /// Network Management Vector Registers
        (0x04C => pub nmvr: [ReadOnly<u16>; NUM_NETWORK_VECTOR]),
        /// Network Management Vector Length Register
        (0x058 => pub nmvlr: ReadWrite<u16>),
        /// Timer Configuration and Control Register
        (0x05A => pub ticcr: ReadWrite<u16, TICCR::Register>),
        /// Timer 1 Cycle Set Register
        (0x05C => pub ti1cysr: ReadWrite<u16, TI1CYSR::Register>),
        /// Timer 1 Macrotick Offset Register
        (0x05E => pub t1mtor: ReadWrite<u16>),
        /// Timer 2 Configuration Registers
        (0x060 => pub ti2cr0: ReadWrite<u16>),
        (0x062 => pub ti2cr1: ReadWrite<u16>),
        /// Slot Status Selection Register
        (0x064 => pub sssr: ReadWrite<u16, SSSR::Register>),
        /// Slot Status Counter Condition Register
        (0x066 => pub ssccr: ReadWrite<u16, SSCCR::Register>),
        /// Slot Status Registers
        (0x068 => pub ssr: [ReadOnly<u16, SSR::Register>; NUM_SLOT_STATUS]),
        /// Slot Status Counter Registers
        (0x078 => pub sscr: [ReadOnly<u16>; 4]),
        /// MTS A Configuration Register
        (0x080 => pub mtsacfr: ReadWrite<u16, MTSCFR::Register>),
        /// MTS B Configuration Register
        (0x082 => pub mtsbcfr: ReadWrite<u16, MTSCFR::Register>),
        /// Receive Shadow Buffer Index Register
        (0x084 => pub rsbir: ReadWrite<u16, RSBIR::Register>),
        /// Receive FIFO Selection Register
        (0x086 => pub rfsr: ReadWrite<u16>),
        /// Receive FIFO Start Index Register
        (0x088 => pub rfsir: ReadWrite<u16>),
        /// Receive FIFO Depth and Size Register
        (0x08A => pub rfdsr: ReadWrite<u16, RFDSR::Register>),
        /// Receive FIFO A Read Index Register
        (0x08C => pub rfarir: ReadOnly<u16>),
        /// Receive FIFO B Read Index Register
        (0x08E => pub rfbrir: ReadOnly<u16>),
        /// Receive FIFO Message ID Acceptance Filter Value Register
        (0x090 => pub rfmidafvr: ReadWrite<u16>),
        /// Receive FIFO Message ID Acceptance Filter Mask Register
        (0x092 => pub rfmiafmr: ReadWrite<u16>),
        /// Receive FIFO Frame ID Rejection Filter Value Register
        (0x094 => pub rffidrfvr: ReadWrite<u16>),
        /// Receive FIFO Frame ID Rejection Filter Mask Register
        (0x096 => pub rffidrfmr: ReadWrite<u16>),
        /// Receive FIFO Range Filter Configuration Register
        (0x098 => pub rfrfcfr: ReadWrite<u16, RFRFCFR::Register>),
        /// Receive FIFO Range Filter Control Register
        (0x09A => pub rfrfctr: ReadWrite<u16, RFRFCTR::Register>),
        /// Last Dynamic Transmit Slot Channel A Register
        (0x09C => pub ldtxslar: ReadOnly<u16>),
        /// Last Dynamic Transmit Slot Channel B Register
        (0x09E => pub ldtxslbr: ReadOnly<u16>),
        /// Protocol Configuration Registers
        (0x0A0 => pub pcr: [ReadWrite<u16>; NUM_PCR]),
        (0x0DE => _reserved1),
        (0x100 => pub mbccs: [MessageBufferControlRegisters; NUM_MESSAGE_BUFFERS]),
        (0x500 => @END),
    }
}

impl FlexRayRegisters {
    pub fn message_buffer(&self, n: usize) -> Result<&MessageBufferControlRegisters, ErrorCode> {
        check_index(n, NUM_MESSAGE_BUFFERS).map(|i| &self.mbccs[i])
    }

    /// Protocol configuration register `PCRn`.
    pub fn protocol_config(&self, n: usize) -> Result<&ReadWrite<u16>, ErrorCode> {
        check_index(n, NUM_PCR).map(|i| &self.pcr[i])
    }

    pub fn slot_status(&self, n: usize) -> Result<&ReadOnly<u16, SSR::Register>, ErrorCode> {
        check_index(n, NUM_SLOT_STATUS).map(|i| &self.ssr[i])
    }
}

/// `SYSBADHR`/`SYSBADLR` values for a message buffer area at `address`.
pub const fn system_memory_base(address: u32) -> Result<[u16; 2], ErrorCode> {
    if address % SYSTEM_MEMORY_ALIGN != 0 {
        return Err(ErrorCode::INVAL);
    }
    Ok([(address >> 16) as u16, address as u16])
}

pub const FLEXRAY_BASE: StaticRef<FlexRayRegisters> =
    unsafe { StaticRef::new(FLEXRAY_BASE_ADDR as *const FlexRayRegisters) };

register_bitfields![u16,
    pub MVR [
        CHIVER OFFSET(8) NUMBITS(8) [],
        PEVER OFFSET(0) NUMBITS(8) []
    ],
    pub MCR [
        /// Module enable
        MEN OFFSET(15) NUMBITS(1) [],
        SCMD OFFSET(13) NUMBITS(1) [],
        CHB OFFSET(12) NUMBITS(1) [],
        CHA OFFSET(11) NUMBITS(1) [],
        SFFE OFFSET(10) NUMBITS(1) [],
        CLKSEL OFFSET(4) NUMBITS(1) [],
        BITRATE OFFSET(1) NUMBITS(3) [
            Mbps10 = 0,
            Mbps5 = 1,
            Mbps2_5 = 2,
            Mbps8 = 3
        ]
    ],
    pub STBSCR [
        WMD OFFSET(15) NUMBITS(1) [],
        STBSSEL OFFSET(8) NUMBITS(7) [],
        ENB OFFSET(4) NUMBITS(1) [],
        STBPSEL OFFSET(0) NUMBITS(2) []
    ],
    pub STBPCR [
        STB3EN OFFSET(3) NUMBITS(1) [],
        STB2EN OFFSET(2) NUMBITS(1) [],
        STB1EN OFFSET(1) NUMBITS(1) [],
        STB0EN OFFSET(0) NUMBITS(1) []
    ],
    pub MBDSR [
        MBSEG2DS OFFSET(8) NUMBITS(7) [],
        MBSEG1DS OFFSET(0) NUMBITS(7) []
    ],
    pub MBSSUTR [
        LAST_MB_SEG1 OFFSET(8) NUMBITS(6) [],
        LAST_MB_UTIL OFFSET(0) NUMBITS(6) []
    ],
    pub POCR [
        WME OFFSET(15) NUMBITS(1) [],
        EOC_AP OFFSET(10) NUMBITS(2) [],
        ERC_AP OFFSET(8) NUMBITS(2) [],
        BSY OFFSET(7) NUMBITS(1) [],
        /// Protocol control command
        POCCMD OFFSET(0) NUMBITS(4) [
            AllowColdstart = 0,
            AllSlots = 1,
            Config = 2,
            Freeze = 3,
            ConfigComplete = 4,
            Run = 5,
            DefaultConfig = 6,
            Halt = 7,
            Wakeup = 8
        ]
    ],
    pub GIFER [
        MIF OFFSET(15) NUMBITS(1) [],
        PRIF OFFSET(14) NUMBITS(1) [],
        CHIF OFFSET(13) NUMBITS(1) [],
        WKUPIF OFFSET(12) NUMBITS(1) [],
        FNEBIF OFFSET(11) NUMBITS(1) [],
        FNEAIF OFFSET(10) NUMBITS(1) [],
        RBIF OFFSET(9) NUMBITS(1) [],
        TBIF OFFSET(8) NUMBITS(1) [],
        MIE OFFSET(7) NUMBITS(1) [],
        PRIE OFFSET(6) NUMBITS(1) [],
        CHIE OFFSET(5) NUMBITS(1) [],
        WKUPIE OFFSET(4) NUMBITS(1) [],
        FNEBIE OFFSET(3) NUMBITS(1) [],
        FNEAIE OFFSET(2) NUMBITS(1) [],
        RBIE OFFSET(1) NUMBITS(1) [],
        TBIE OFFSET(0) NUMBITS(1) []
    ],
    pub PIFR0 [
        FATLIF OFFSET(15) NUMBITS(1) [],
        INTLIF OFFSET(14) NUMBITS(1) [],
        ILCFIF OFFSET(13) NUMBITS(1) [],
        CSAIF OFFSET(12) NUMBITS(1) [],
        MRCIF OFFSET(11) NUMBITS(1) [],
        MOCIF OFFSET(10) NUMBITS(1) [],
        CCLIF OFFSET(9) NUMBITS(1) [],
        MXSIF OFFSET(8) NUMBITS(1) [],
        MTXIF OFFSET(7) NUMBITS(1) [],
        LTXBIF OFFSET(6) NUMBITS(1) [],
        LTXAIF OFFSET(5) NUMBITS(1) [],
        TBVBIF OFFSET(4) NUMBITS(1) [],
        TBVAIF OFFSET(3) NUMBITS(1) [],
        TI2IF OFFSET(2) NUMBITS(1) [],
        TI1IF OFFSET(1) NUMBITS(1) [],
        CYSIF OFFSET(0) NUMBITS(1) []
    ],
    pub PIFR1 [
        EMCIF OFFSET(15) NUMBITS(1) [],
        IPCIF OFFSET(14) NUMBITS(1) [],
        PECFIF OFFSET(13) NUMBITS(1) [],
        PSCIF OFFSET(12) NUMBITS(1) [],
        SSI3IF OFFSET(11) NUMBITS(1) [],
        SSI2IF OFFSET(10) NUMBITS(1) [],
        SSI1IF OFFSET(9) NUMBITS(1) [],
        SSI0IF OFFSET(8) NUMBITS(1) [],
        EVTIF OFFSET(5) NUMBITS(1) [],
        ODTIF OFFSET(4) NUMBITS(1) []
    ],
    pub PIER0 [
        FATLIE OFFSET(15) NUMBITS(1) [],
        INTLIE OFFSET(14) NUMBITS(1) [],
        ILCFIE OFFSET(13) NUMBITS(1) [],
        CSAIE OFFSET(12) NUMBITS(1) [],
        MRCIE OFFSET(11) NUMBITS(1) [],
        MOCIE OFFSET(10) NUMBITS(1) [],
        CCLIE OFFSET(9) NUMBITS(1) [],
        MXSIE OFFSET(8) NUMBITS(1) [],
        MTXIE OFFSET(7) NUMBITS(1) [],
        LTXBIE OFFSET(6) NUMBITS(1) [],
        LTXAIE OFFSET(5) NUMBITS(1) [],
        TBVBIE OFFSET(4) NUMBITS(1) [],
        TBVAIE OFFSET(3) NUMBITS(1) [],
        TI2IE OFFSET(2) NUMBITS(1) [],
        TI1IE OFFSET(1) NUMBITS(1) [],
        CYSIE OFFSET(0) NUMBITS(1) []
    ],
    pub PIER1 [
        EMCIE OFFSET(15) NUMBITS(1) [],
        IPCIE OFFSET(14) NUMBITS(1) [],
        PECFIE OFFSET(13) NUMBITS(1) [],
        PSCIE OFFSET(12) NUMBITS(1) [],
        SSI3IE OFFSET(11) NUMBITS(1) [],
        SSI2IE OFFSET(10) NUMBITS(1) [],
        SSI1IE OFFSET(9) NUMBITS(1) [],
        SSI0IE OFFSET(8) NUMBITS(1) [],
        EVTIE OFFSET(5) NUMBITS(1) [],
        ODTIE OFFSET(4) NUMBITS(1) []
    ],
    pub CHIERFR [
        FRLBEF OFFSET(15) NUMBITS(1) [],
        FRLAEF OFFSET(14) NUMBITS(1) [],
        PCMIEF OFFSET(13) NUMBITS(1) [],
        FOVBEF OFFSET(12) NUMBITS(1) [],
        FOVAEF OFFSET(11) NUMBITS(1) [],
        MSBEF OFFSET(10) NUMBITS(1) [],
        MBUEF OFFSET(9) NUMBITS(1) [],
        LCKEF OFFSET(8) NUMBITS(1) [],
        DBLEF OFFSET(7) NUMBITS(1) [],
        SBCFEF OFFSET(6) NUMBITS(1) [],
        FIDEF OFFSET(5) NUMBITS(1) [],
        DPLEF OFFSET(4) NUMBITS(1) [],
        SPLEF OFFSET(3) NUMBITS(1) [],
        NMLEF OFFSET(2) NUMBITS(1) [],
        NMFEF OFFSET(1) NUMBITS(1) [],
        ILSAEF OFFSET(0) NUMBITS(1) []
    ],
    pub MBIVEC [
        TBIVEC OFFSET(8) NUMBITS(6) [],
        RBIVEC OFFSET(0) NUMBITS(6) []
    ],
    pub PSR0 [
        ERRMODE OFFSET(14) NUMBITS(2) [
            Active = 0,
            Passive = 1,
            CommHalt = 2
        ],
        SLOTMODE OFFSET(12) NUMBITS(2) [],
        /// Protocol state
        PROTSTATE OFFSET(8) NUMBITS(3) [
            DefaultConfig = 0,
            Config = 1,
            Wakeup = 2,
            Ready = 3,
            NormalPassive = 4,
            NormalActive = 5,
            Halt = 6,
            Startup = 7
        ],
        SUBSTATE OFFSET(4) NUMBITS(4) [],
        WAKEUPSTATUS OFFSET(0) NUMBITS(3) []
    ],
    pub PSR1 [
        CSAA OFFSET(15) NUMBITS(1) [],
        CSP OFFSET(14) NUMBITS(1) [],
        REMCSAT OFFSET(8) NUMBITS(5) [],
        CPN OFFSET(7) NUMBITS(1) [],
        HHR OFFSET(6) NUMBITS(1) [],
        FRZ OFFSET(5) NUMBITS(1) [],
        APTAC OFFSET(0) NUMBITS(5) []
    ],
    pub PSR2 [
        NBVB OFFSET(15) NUMBITS(1) [],
        NSEB OFFSET(14) NUMBITS(1) [],
        STCB OFFSET(13) NUMBITS(1) [],
        SBVB OFFSET(12) NUMBITS(1) [],
        SSEB OFFSET(11) NUMBITS(1) [],
        MTB OFFSET(10) NUMBITS(1) [],
        NBVA OFFSET(9) NUMBITS(1) [],
        NSEA OFFSET(8) NUMBITS(1) [],
        STCA OFFSET(7) NUMBITS(1) [],
        SBVA OFFSET(6) NUMBITS(1) [],
        SSEA OFFSET(5) NUMBITS(1) [],
        MTA OFFSET(4) NUMBITS(1) [],
        CLKCORRFAILCNT OFFSET(0) NUMBITS(4) []
    ],
    pub PSR3 [
        WUB OFFSET(13) NUMBITS(1) [],
        ABVB OFFSET(12) NUMBITS(1) [],
        AACB OFFSET(11) NUMBITS(1) [],
        ACEB OFFSET(10) NUMBITS(1) [],
        ASEB OFFSET(9) NUMBITS(1) [],
        AVFB OFFSET(8) NUMBITS(1) [],
        WUA OFFSET(5) NUMBITS(1) [],
        ABVA OFFSET(4) NUMBITS(1) [],
        AACA OFFSET(3) NUMBITS(1) [],
        ACEA OFFSET(2) NUMBITS(1) [],
        ASEA OFFSET(1) NUMBITS(1) [],
        AVFA OFFSET(0) NUMBITS(1) []
    ],
    pub CIFRR [
        MIFR OFFSET(7) NUMBITS(1) [],
        PRIFR OFFSET(6) NUMBITS(1) [],
        CHIFR OFFSET(5) NUMBITS(1) [],
        WUPIFR OFFSET(4) NUMBITS(1) [],
        FNEBIFR OFFSET(3) NUMBITS(1) [],
        FNEAIFR OFFSET(2) NUMBITS(1) [],
        RBIFR OFFSET(1) NUMBITS(1) [],
        TBIFR OFFSET(0) NUMBITS(1) []
    ],
    pub SFCNTR [
        SFEVB OFFSET(12) NUMBITS(4) [],
        SFEVA OFFSET(8) NUMBITS(4) [],
        SFODB OFFSET(4) NUMBITS(4) [],
        SFODA OFFSET(0) NUMBITS(4) []
    ],
    pub SFTCCSR [
        ELKT OFFSET(15) NUMBITS(1) [],
        OLKT OFFSET(14) NUMBITS(1) [],
        CYCNUM OFFSET(8) NUMBITS(6) [],
        ELKS OFFSET(7) NUMBITS(1) [],
        OLKS OFFSET(6) NUMBITS(1) [],
        EVAL OFFSET(5) NUMBITS(1) [],
        OVAL OFFSET(4) NUMBITS(1) [],
        OPT OFFSET(2) NUMBITS(1) [],
        SDVEN OFFSET(1) NUMBITS(1) [],
        SIDEN OFFSET(0) NUMBITS(1) []
    ],
    pub SFIDRFR [
        SYNFRID OFFSET(0) NUMBITS(10) []
    ],
    pub TICCR [
        T2CFG OFFSET(13) NUMBITS(1) [],
        T2REP OFFSET(12) NUMBITS(1) [],
        T2SP OFFSET(10) NUMBITS(1) [],
        T2TR OFFSET(9) NUMBITS(1) [],
        T2ST OFFSET(8) NUMBITS(1) [],
        T1REP OFFSET(4) NUMBITS(1) [],
        T1SP OFFSET(2) NUMBITS(1) [],
        T1TR OFFSET(1) NUMBITS(1) [],
        T1ST OFFSET(0) NUMBITS(1) []
    ],
    pub TI1CYSR [
        TI1CYCVAL OFFSET(8) NUMBITS(6) [],
        TI1CYCMSK OFFSET(0) NUMBITS(6) []
    ],
    pub SSSR [
        WMD OFFSET(15) NUMBITS(1) [],
        SEL OFFSET(12) NUMBITS(2) [],
        SLOTNUMBER OFFSET(0) NUMBITS(11) []
    ],
    pub SSCCR [
        WMD OFFSET(15) NUMBITS(1) [],
        SEL OFFSET(12) NUMBITS(2) [],
        CNTCFG OFFSET(9) NUMBITS(2) [],
        MCY OFFSET(8) NUMBITS(1) [],
        VFR OFFSET(7) NUMBITS(1) [],
        SYF OFFSET(6) NUMBITS(1) [],
        NUF OFFSET(5) NUMBITS(1) [],
        SUF OFFSET(4) NUMBITS(1) [],
        STATUSMASK OFFSET(0) NUMBITS(4) []
    ],
    pub SSR [
        VFB OFFSET(15) NUMBITS(1) [],
        SYB OFFSET(14) NUMBITS(1) [],
        NFB OFFSET(13) NUMBITS(1) [],
        SUB OFFSET(12) NUMBITS(1) [],
        SEB OFFSET(11) NUMBITS(1) [],
        CEB OFFSET(10) NUMBITS(1) [],
        BVB OFFSET(9) NUMBITS(1) [],
        TCB OFFSET(8) NUMBITS(1) [],
        VFA OFFSET(7) NUMBITS(1) [],
        SYA OFFSET(6) NUMBITS(1) [],
        NFA OFFSET(5) NUMBITS(1) [],
        SUA OFFSET(4) NUMBITS(1) [],
        SEA OFFSET(3) NUMBITS(1) [],
        CEA OFFSET(2) NUMBITS(1) [],
        BVA OFFSET(1) NUMBITS(1) [],
        TCA OFFSET(0) NUMBITS(1) []
    ],
    pub MTSCFR [
        MTE OFFSET(15) NUMBITS(1) [],
        CYCCNTMSK OFFSET(8) NUMBITS(6) [],
        CYCCNTVAL OFFSET(0) NUMBITS(6) []
    ],
    pub RSBIR [
        WMD OFFSET(15) NUMBITS(1) [],
        SEL OFFSET(12) NUMBITS(2) [],
        RSBIDX OFFSET(0) NUMBITS(7) []
    ],
    pub RFDSR [
        FIFODEPTH OFFSET(8) NUMBITS(8) [],
        ENTRYSIZE OFFSET(0) NUMBITS(7) []
    ],
    pub RFRFCFR [
        WMD OFFSET(15) NUMBITS(1) [],
        IBD OFFSET(14) NUMBITS(1) [],
        SEL OFFSET(12) NUMBITS(2) [],
        SID OFFSET(0) NUMBITS(11) []
    ],
    pub RFRFCTR [
        F3MD OFFSET(11) NUMBITS(1) [],
        F2MD OFFSET(10) NUMBITS(1) [],
        F1MD OFFSET(9) NUMBITS(1) [],
        F0MD OFFSET(8) NUMBITS(1) [],
        F3EN OFFSET(3) NUMBITS(1) [],
        F2EN OFFSET(2) NUMBITS(1) [],
        F1EN OFFSET(1) NUMBITS(1) [],
        F0EN OFFSET(0) NUMBITS(1) []
    ],
    pub MBCCSR [
        MCM OFFSET(14) NUMBITS(1) [],
        MBT OFFSET(13) NUMBITS(1) [],
        MTD OFFSET(12) NUMBITS(1) [],
        CMT OFFSET(11) NUMBITS(1) [],
        EDT OFFSET(10) NUMBITS(1) [],
        LCKT OFFSET(9) NUMBITS(1) [],
        MBIE OFFSET(8) NUMBITS(1) [],
        DUP OFFSET(4) NUMBITS(1) [],
        DVAL OFFSET(3) NUMBITS(1) [],
        EDS OFFSET(2) NUMBITS(1) [],
        LCKS OFFSET(1) NUMBITS(1) [],
        MBIF OFFSET(0) NUMBITS(1) []
    ],
    pub MBCCFR [
        MTM OFFSET(15) NUMBITS(1) [],
        CHNLA OFFSET(14) NUMBITS(1) [],
        CHNLB OFFSET(13) NUMBITS(1) [],
        CCFE OFFSET(12) NUMBITS(1) [],
        CCFMSK OFFSET(6) NUMBITS(6) [],
        CCFVAL OFFSET(0) NUMBITS(6) []
    ],
    pub MBFIDR [
        FID OFFSET(0) NUMBITS(11) []
    ],
    pub MBIDXR [
        MBIDX OFFSET(0) NUMBITS(7) []
    ]
];
