// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Device instance parameters.
//!
//! The register layouts reserve room for the largest family member. The
//! constants here say how much of that room a given part populates, and the
//! checked accessors in the block modules bound their indices with them.

/// Parameters of one SPC56EL family member.
pub trait Spc56elConfig {
    /// Identifier used in board diagnostics.
    const NAME: &'static str;

    /// SIUL ports (A..H), 16 pads each.
    const SIUL_NUM_PORTS: usize;
    /// Pad configuration registers implemented.
    const SIUL_NUM_PCRS: usize;
    /// Pad select multiplexing registers implemented.
    const SIUL_NUM_PADSELS: usize;

    const EDMA_CHANNELS: usize;
    const INTC_SOURCES: usize;
    const FLEXCAN_MESSAGE_BUFFERS: usize;
    const PIT_CHANNELS: usize;
    const STM_CHANNELS: usize;

    /// External crystal frequency in Hz.
    const XOSC_FREQ: u32;
    /// Internal RC oscillator frequency in Hz.
    const IRC_FREQ: u32;
}

/// SPC56EL60 (MPC5643L), 1 MiB flash, 257-pin MAPBGA bond-out.
pub enum Spc56el60 {}

impl Spc56elConfig for Spc56el60 {
    const NAME: &'static str = "spc56el60";

    const SIUL_NUM_PORTS: usize = 8;
    const SIUL_NUM_PCRS: usize = 133;
    const SIUL_NUM_PADSELS: usize = 44;

    const EDMA_CHANNELS: usize = 16;
    const INTC_SOURCES: usize = 256;
    const FLEXCAN_MESSAGE_BUFFERS: usize = 32;
    const PIT_CHANNELS: usize = 4;
    const STM_CHANNELS: usize = 4;

    const XOSC_FREQ: u32 = 40_000_000;
    const IRC_FREQ: u32 = 16_000_000;
}

/// The configuration the crate's checked accessors use.
pub type Device = Spc56el60;
