//! Channel configuration for the ADAR1000 four-channel beamformer
//!
//! The entry point is the [high-level interface], built around the
//! [`Configurator`]. It validates gain, phase and bias requests and then
//! drives a [`Beamformer`] device through the field writes and latch commits
//! that apply them.
//!
//! This crate does not talk to a bus. The chip driver implements the
//! capability traits in the [`device`] module, and the configurator is
//! generic over them, so the same code runs against real hardware or a test
//! double.
//!
//! [high-level interface]: hl/index.html
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod code;
pub mod configs;
pub mod device;
pub mod hl;
pub mod vector;

#[cfg(test)]
mod mock;

pub use crate::{
    code::Code,
    configs::{BiasLevels, BiasRange, Config, InitConfig},
    device::{Beamformer, Channel, Mode, Open, CHANNEL_COUNT},
    hl::{Configurator, Error, Snapshot},
    vector::{validate_phase_gain_vector, Entry, ValidationError, VectorKind, Violation},
};
