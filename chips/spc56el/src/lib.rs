// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral register map for the SPC56EL60 / MPC5643L.
//!
//! Every on-chip block is described by a `register_structs!` layout bound to
//! its physical base address through a [`StaticRef`]. The crate performs no
//! I/O of its own: drivers dereference the handles and access registers
//! through the `tock-registers` cell types, which are always volatile.
//!
//! The platform blocks INTC, SWT, STM, XBAR, MPU and PBRIDGE exist once per
//! core. Their layouts are declared once and bound to both copies, see
//! [`memory_map::Core`].
//!
//! Reference manual: MPC5643L Microcontroller Reference Manual, Rev. 10.

#![no_std]
#![recursion_limit = "256"]

// Host tests use std for allocation and formatting.
#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod alias;

#[cfg(test)]
mod testing;

pub mod chip;
pub mod chip_config;
pub mod errorcode;
pub mod legacy;
pub mod memory_map;
pub mod static_ref;

// System and clocking
pub mod cflash;
pub mod cgm;
pub mod me;
pub mod pcu;
pub mod rgm;
pub mod siul;
pub mod sscm;

// Platform (per-core) blocks
pub mod intc;
pub mod mpu;
pub mod pbridge;
pub mod stm;
pub mod swt;
pub mod xbar;

// Safety
pub mod crc;
pub mod fccu;
pub mod sema4;

// Timers and motor control
pub mod adc;
pub mod ctu;
pub mod etimer;
pub mod flexpwm;
pub mod pit;

// DMA
pub mod dmamux;
pub mod edma;

// Communication
pub mod dspi;
pub mod flexcan;
pub mod flexray;
pub mod linflex;

pub use crate::alias::{byte_in_word, byte_lane_shift, halfword_in_word, halfword_lane_shift};
pub use crate::errorcode::ErrorCode;
pub use crate::memory_map::{Core, Peripheral};
pub use crate::static_ref::StaticRef;
