//! Configuration structs for the configurator and chip bring-up
//!
//! [`Config`] holds the limits the configurator enforces. [`InitConfig`] is
//! handed to the driver through [`Open::open`] when the chip is brought up.
//!
//! [`Open::open`]: crate::device::Open::open

use crate::device::CHANNEL_COUNT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configurator limits
///
/// There is no default: the accepted PA bias range depends on the board and
/// must be supplied by the integrator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// PA bias values accepted by `enable_tx` and `set_pa_bias`, in volts
    pub pa_bias_range: BiasRange,
}

impl Config {
    /// Creates a config with the given PA bias range
    pub fn new(pa_bias_range: BiasRange) -> Self {
        Config { pa_bias_range }
    }
}

/// A closed range of bias voltages
///
/// If `min` is greater than `max`, the range is empty and every value is
/// rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BiasRange {
    /// Lowest accepted value
    pub min: f32,
    /// Highest accepted value
    pub max: f32,
}

impl BiasRange {
    /// Creates the range `min..=max`
    pub fn new(min: f32, max: f32) -> Self {
        BiasRange { min, max }
    }

    /// Creates the range `-limit..=limit`
    pub fn symmetric(limit: f32) -> Self {
        let limit = if limit < 0.0 { -limit } else { limit };
        BiasRange {
            min: -limit,
            max: limit,
        }
    }

    /// Whether `value` lies in the range
    ///
    /// NaN is never contained.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Bias levels programmed into the chip at bring-up, in volts
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BiasLevels {
    /// PA bias while the transmitter is off
    pub pa_off: f32,
    /// PA bias while the transmitter is on
    pub pa_on: f32,
    /// LNA bias while the receiver is off
    pub lna_off: f32,
    /// LNA bias while the receiver is on
    pub lna_on: f32,
}

/// Chip bring-up parameters passed to [`Open::open`]
///
/// [`Open::open`]: crate::device::Open::open
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InitConfig {
    /// Antenna element numbers of the array, one row per chip
    pub array_element_map: [[u8; CHANNEL_COUNT]; 1],
    /// Antenna element driven by each channel, in channel order
    pub channel_element_map: [u8; CHANNEL_COUNT],
    /// Bias levels
    pub bias: BiasLevels,
}

impl InitConfig {
    /// Creates a bring-up config with channel `n` wired to element `n + 1`
    pub fn new(bias: BiasLevels) -> Self {
        InitConfig {
            array_element_map: [[1, 2, 3, 4]],
            channel_element_map: [1, 2, 3, 4],
            bias,
        }
    }
}
