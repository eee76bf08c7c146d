use super::weights::Field;
use crate::{device::Beamformer, device::Mode, Configurator, Error};

impl<D> Configurator<D>
where
    D: Beamformer,
{
    /// Re-issues the requested configuration
    ///
    /// After a failed write or latch the chip may hold any mix of old and
    /// new values. Every operation records its request in the [`Snapshot`]
    /// before writing, so an interrupted change is finished here, not rolled
    /// back. This replays the snapshot in full: first the mode
    /// (with its PA bias when transmitting), then the PA bias if it was set
    /// outside TX mode, then every phase and gain vector that was ever set,
    /// each followed by its latch.
    ///
    /// Stops at the first device error, leaving [`needs_resync`] set.
    ///
    /// [`Snapshot`]: crate::Snapshot
    /// [`needs_resync`]: Configurator::needs_resync
    pub fn resync(&mut self) -> Result<(), Error<D>> {
        let mut snapshot = self.snapshot;

        // TX is only entered through `enable_tx`, which always records a bias.
        match (snapshot.mode, snapshot.pa_bias) {
            (Mode::Tx, Some(bias)) => self.enable_tx(bias)?,
            (Mode::Rx, _) => self.enable_rx()?,
            _ => self.disable()?,
        }
        if let (Some(bias), false) = (snapshot.pa_bias, snapshot.mode == Mode::Tx) {
            self.set_pa_bias(bias)?;
        }

        for field in Field::ALL {
            if let Some(codes) = *field.slot(&mut snapshot) {
                self.apply_words(field, codes)?;
            }
        }

        self.needs_resync = false;

        #[cfg(feature = "defmt")]
        defmt::debug!("configuration re-issued");

        Ok(())
    }
}
