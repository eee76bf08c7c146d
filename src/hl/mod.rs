//! High-level interface to the beamformer
//!
//! The entry point to this API is the [`Configurator`] struct. It wraps a
//! [`Beamformer`] device and turns intents (enable TX, set RX gains, ...)
//! into validated channel writes followed by the matching latch.
//!
//! Every request is validated in full before the device is touched, so a
//! rejected request never leaves a channel half-written. A failed device
//! call is different: the chip may then hold any mix of old and new values.
//! The configurator remembers every accepted request (see [`Snapshot`]) and
//! [`Configurator::resync`] re-issues it in full.

use core::fmt;

pub use error::*;

use crate::{
    code::Code,
    configs::{Config, InitConfig},
    device::{Beamformer, Mode, Open, CHANNEL_COUNT},
};

mod error;
mod mode;
mod monitor;
mod resync;
mod weights;

/// Entry point to the configurator API
pub struct Configurator<D> {
    device: D,
    config: Config,
    snapshot: Snapshot,
    needs_resync: bool,
}

/// The configuration last requested through a [`Configurator`]
///
/// A request is recorded once it passes validation, before the device is
/// written. Fields are `None` until the corresponding setter has been
/// called with valid input.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// Operating mode
    pub mode: Mode,
    /// PA bias in volts
    pub pa_bias: Option<f32>,
    /// Transmit phase words in channel order
    pub tx_phase: Option<[Code; CHANNEL_COUNT]>,
    /// Transmit gain words in channel order
    pub tx_gain: Option<[Code; CHANNEL_COUNT]>,
    /// Receive phase words in channel order
    pub rx_phase: Option<[Code; CHANNEL_COUNT]>,
    /// Receive gain words in channel order
    pub rx_gain: Option<[Code; CHANNEL_COUNT]>,
}

impl<D> Configurator<D>
where
    D: Beamformer,
{
    /// Create a new instance of `Configurator`
    ///
    /// The device is expected to be freshly initialized and therefore
    /// disabled. Nothing is written to it here.
    pub fn new(device: D, config: Config) -> Self {
        Configurator {
            device,
            config,
            snapshot: Snapshot::default(),
            needs_resync: false,
        }
    }

    /// Returns the configuration this configurator enforces
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives the device back
    pub fn release(self) -> D {
        self.device
    }

    /// Maps a device error, flagging that the chip needs a resync
    fn track<T>(&mut self, result: Result<T, D::Error>) -> Result<T, Error<D>> {
        result.map_err(|error| {
            #[cfg(feature = "defmt")]
            defmt::warn!("device access failed, configuration must be re-issued");

            self.needs_resync = true;
            Error::Device(error)
        })
    }

    /// Rejects PA bias values outside the configured range
    fn check_bias(&self, bias: f32) -> Result<(), Error<D>> {
        let range = self.config.pa_bias_range;
        if !range.contains(bias) {
            return Err(Error::InvalidArgument { bias, range });
        }

        Ok(())
    }
}

impl<D> Configurator<D>
where
    D: Open,
{
    /// Brings up a chip and wraps it
    ///
    /// `locator` and `chip_id` are passed through to the driver's [`Open`]
    /// implementation together with `init`.
    pub fn open(
        locator: &str,
        chip_id: &str,
        init: &InitConfig,
        config: Config,
    ) -> Result<Self, Error<D>> {
        let device = D::open(locator, chip_id, init).map_err(Error::Device)?;

        Ok(Configurator::new(device, config))
    }
}

// Can't be derived without putting requirements on `D`.
impl<D> fmt::Debug for Configurator<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Configurator {{ mode: {:?}, needs_resync: {:?}, .. }}",
            self.snapshot.mode, self.needs_resync
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{
        configs::{BiasLevels, BiasRange},
        mock::{MockDevice, Op},
    };

    #[test]
    fn open_passes_bring_up_parameters() {
        let init = InitConfig::new(BiasLevels {
            pa_off: -4.8,
            pa_on: -1.1,
            lna_off: -2.0,
            lna_on: -0.8,
        });
        let config = Config::new(BiasRange::symmetric(5.0));

        let mut configurator =
            Configurator::<MockDevice>::open("ip:192.168.2.1", "BEAM_TX", &init, config).unwrap();

        assert_eq!(configurator.mode(), Mode::Disabled);
        assert_eq!(
            configurator.device().take_ops(),
            vec![Op::Open {
                locator: "ip:192.168.2.1".into(),
                chip_id: "BEAM_TX".into(),
                init,
            }]
        );
    }

    #[test]
    fn new_does_not_touch_the_device() {
        let mut device = MockDevice::new();

        let configurator = Configurator::new(&mut device, Config::new(BiasRange::symmetric(5.0)));
        assert_eq!(configurator.snapshot(), &Snapshot::default());
        assert_eq!(configurator.config().pa_bias_range, BiasRange::new(-5.0, 5.0));
        assert!(!configurator.needs_resync());
        drop(configurator);

        assert!(device.take_ops().is_empty());
    }
}
