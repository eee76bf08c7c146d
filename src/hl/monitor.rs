use crate::{device::Beamformer, device::Mode, hl::Snapshot, Configurator, Error};

impl<D> Configurator<D>
where
    D: Beamformer,
{
    /// Reads the on-chip temperature sensor
    ///
    /// A failed read doesn't change the chip state, so it does not flag a
    /// resync.
    pub fn read_temperature(&mut self) -> Result<f32, Error<D>> {
        self.device.temperature().map_err(Error::Device)
    }

    /// Returns the mode last requested
    ///
    /// If that request failed, [`needs_resync`](Self::needs_resync) is set
    /// and the chip may not be in this mode yet.
    pub fn mode(&self) -> Mode {
        self.snapshot.mode
    }

    /// Returns the configuration last requested
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Returns true if a device call failed since the last successful resync
    ///
    /// While this is set, the chip may hold any mix of old and new values.
    pub fn needs_resync(&self) -> bool {
        self.needs_resync
    }

    /// Provides direct access to the device
    ///
    /// Be aware that writing to the device directly bypasses validation and
    /// isn't reflected in the [`Snapshot`], so a later [`resync`] will undo
    /// it.
    ///
    /// [`resync`]: Configurator::resync
    pub fn device(&mut self) -> &mut D {
        &mut self.device
    }
}
