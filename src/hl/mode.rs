use crate::{
    device::{Beamformer, Channel, Mode},
    Configurator, Error,
};

impl<D> Configurator<D>
where
    D: Beamformer,
{
    /// Switches the chip to transmit on all channels
    ///
    /// Every channel gets its transmitter enabled, its receiver disabled and
    /// `pa_bias` as PA bias. The transmit settings are latched once, after
    /// all channels have been written.
    ///
    /// Fails with [`Error::InvalidArgument`] without touching the device if
    /// `pa_bias` is outside the configured range.
    pub fn enable_tx(&mut self, pa_bias: f32) -> Result<(), Error<D>> {
        self.check_bias(pa_bias)?;

        self.snapshot.mode = Mode::Tx;
        self.snapshot.pa_bias = Some(pa_bias);

        let result = enter_tx(&mut self.device, pa_bias);
        self.track(result)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("TX enabled, PA bias {=f32} V", pa_bias);

        Ok(())
    }

    /// Switches the chip to receive on all channels
    ///
    /// Assumes self-biased LNAs, so the shared LNA bias output is turned off.
    /// Nothing is latched: the receive gain and phase setters commit their
    /// own writes.
    pub fn enable_rx(&mut self) -> Result<(), Error<D>> {
        self.snapshot.mode = Mode::Rx;

        let result = enter_rx(&mut self.device);
        self.track(result)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("RX enabled");

        Ok(())
    }

    /// Disables transmitter and receiver on all channels
    pub fn disable(&mut self) -> Result<(), Error<D>> {
        self.snapshot.mode = Mode::Disabled;

        let result = enter_disabled(&mut self.device);
        self.track(result)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("TX and RX disabled");

        Ok(())
    }
}

fn enter_tx<D: Beamformer>(device: &mut D, pa_bias: f32) -> Result<(), D::Error> {
    device.set_mode(Mode::Tx)?;
    for channel in device.channels() {
        channel.set_tx_enable(true)?;
        channel.set_rx_enable(false)?;
        channel.set_pa_bias_on(pa_bias)?;
    }

    device.latch_tx_settings()
}

fn enter_rx<D: Beamformer>(device: &mut D) -> Result<(), D::Error> {
    device.set_mode(Mode::Rx)?;
    device.set_lna_bias_out_enable(false)?;
    for channel in device.channels() {
        channel.set_tx_enable(false)?;
        channel.set_rx_enable(true)?;
    }

    Ok(())
}

fn enter_disabled<D: Beamformer>(device: &mut D) -> Result<(), D::Error> {
    device.set_mode(Mode::Disabled)?;
    for channel in device.channels() {
        channel.set_tx_enable(false)?;
        channel.set_rx_enable(false)?;
    }

    Ok(())
}
