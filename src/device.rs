//! Capability contract for the beamformer chip driver
//!
//! The configurator never touches a bus. A chip driver (or a test double)
//! implements [`Beamformer`] and [`Channel`], and optionally [`Open`], and the
//! configurator drives it through these traits only.
//!
//! Field writes on a [`Channel`] are buffered by the chip. They only take
//! effect on the RF path once [`Beamformer::latch_tx_settings`] or
//! [`Beamformer::latch_rx_settings`] commits them.

use crate::{code::Code, configs::InitConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of RF channels on one chip
pub const CHANNEL_COUNT: usize = 4;

/// Operating mode of the chip
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Neither transmitter nor receiver is enabled
    #[default]
    Disabled,
    /// Transmit mode
    Tx,
    /// Receive mode
    Rx,
}

/// One RF channel of the chip
///
/// Every setter may fail if the underlying register access fails.
pub trait Channel {
    /// Transport error reported by the driver
    type Error;

    /// Enables or disables the transmit path
    fn set_tx_enable(&mut self, enable: bool) -> Result<(), Self::Error>;

    /// Enables or disables the receive path
    fn set_rx_enable(&mut self, enable: bool) -> Result<(), Self::Error>;

    /// Sets the transmit phase word
    fn set_tx_phase(&mut self, phase: Code) -> Result<(), Self::Error>;

    /// Sets the receive phase word
    fn set_rx_phase(&mut self, phase: Code) -> Result<(), Self::Error>;

    /// Sets the transmit gain word
    fn set_tx_gain(&mut self, gain: Code) -> Result<(), Self::Error>;

    /// Sets the receive gain word
    fn set_rx_gain(&mut self, gain: Code) -> Result<(), Self::Error>;

    /// Sets the PA bias applied while transmitting, in volts
    fn set_pa_bias_on(&mut self, volts: f32) -> Result<(), Self::Error>;
}

/// A four-channel beamformer chip
pub trait Beamformer {
    /// Transport error reported by the driver
    type Error;

    /// The channel type of this chip
    type Channel: Channel<Error = Self::Error>;

    /// Selects the operating mode
    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error>;

    /// Enables or disables the shared LNA bias output
    ///
    /// Disabled when the LNAs are self-biased.
    fn set_lna_bias_out_enable(&mut self, enable: bool) -> Result<(), Self::Error>;

    /// Returns the channels in element order
    fn channels(&mut self) -> &mut [Self::Channel; CHANNEL_COUNT];

    /// Commits pending transmit register writes to the hardware
    fn latch_tx_settings(&mut self) -> Result<(), Self::Error>;

    /// Commits pending receive register writes to the hardware
    fn latch_rx_settings(&mut self) -> Result<(), Self::Error>;

    /// Reads the on-chip temperature sensor
    fn temperature(&mut self) -> Result<f32, Self::Error>;
}

/// A beamformer that can be brought up from a bus locator
pub trait Open: Beamformer + Sized {
    /// Connects to and initializes the chip
    ///
    /// `locator` identifies the bus or context the chip is reachable through
    /// and `chip_id` selects the chip on it. The returned device must be in
    /// [`Mode::Disabled`].
    fn open(locator: &str, chip_id: &str, init: &InitConfig) -> Result<Self, Self::Error>;
}

impl<T> Beamformer for &mut T
where
    T: Beamformer + ?Sized,
{
    type Error = T::Error;
    type Channel = T::Channel;

    #[inline]
    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error> {
        T::set_mode(self, mode)
    }

    #[inline]
    fn set_lna_bias_out_enable(&mut self, enable: bool) -> Result<(), Self::Error> {
        T::set_lna_bias_out_enable(self, enable)
    }

    #[inline]
    fn channels(&mut self) -> &mut [Self::Channel; CHANNEL_COUNT] {
        T::channels(self)
    }

    #[inline]
    fn latch_tx_settings(&mut self) -> Result<(), Self::Error> {
        T::latch_tx_settings(self)
    }

    #[inline]
    fn latch_rx_settings(&mut self) -> Result<(), Self::Error> {
        T::latch_rx_settings(self)
    }

    #[inline]
    fn temperature(&mut self) -> Result<f32, Self::Error> {
        T::temperature(self)
    }
}
