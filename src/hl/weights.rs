use crate::{
    code::Code,
    device::{Beamformer, Channel, CHANNEL_COUNT},
    hl::Snapshot,
    vector::{validate_phase_gain_vector, Entry, VectorKind},
    Configurator, Error,
};

/// A per-channel register word and the latch that commits it
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(super) enum Field {
    TxPhase,
    TxGain,
    RxPhase,
    RxGain,
}

impl Field {
    pub(super) const ALL: [Field; 4] = [
        Field::TxPhase,
        Field::TxGain,
        Field::RxPhase,
        Field::RxGain,
    ];

    fn kind(self) -> VectorKind {
        match self {
            Field::TxPhase | Field::RxPhase => VectorKind::Phase,
            Field::TxGain | Field::RxGain => VectorKind::Gain,
        }
    }

    fn write<C: Channel>(self, channel: &mut C, code: Code) -> Result<(), C::Error> {
        match self {
            Field::TxPhase => channel.set_tx_phase(code),
            Field::TxGain => channel.set_tx_gain(code),
            Field::RxPhase => channel.set_rx_phase(code),
            Field::RxGain => channel.set_rx_gain(code),
        }
    }

    fn latch<D: Beamformer>(self, device: &mut D) -> Result<(), D::Error> {
        match self {
            Field::TxPhase | Field::TxGain => device.latch_tx_settings(),
            Field::RxPhase | Field::RxGain => device.latch_rx_settings(),
        }
    }

    pub(super) fn slot(self, snapshot: &mut Snapshot) -> &mut Option<[Code; CHANNEL_COUNT]> {
        match self {
            Field::TxPhase => &mut snapshot.tx_phase,
            Field::TxGain => &mut snapshot.tx_gain,
            Field::RxPhase => &mut snapshot.rx_phase,
            Field::RxGain => &mut snapshot.rx_gain,
        }
    }
}

impl<D> Configurator<D>
where
    D: Beamformer,
{
    /// Sets the transmit phase of each channel
    ///
    /// `phases` must hold four integers between 0 and 127, in channel order.
    /// On success the transmit settings are latched once, after all channels
    /// have been written. On [`Error::Validation`] nothing is written.
    pub fn set_tx_phase<V: Entry>(&mut self, phases: &[V]) -> Result<(), Error<D>> {
        self.set_words(Field::TxPhase, phases)
    }

    /// Sets the transmit gain of each channel
    ///
    /// Same contract as [`set_tx_phase`](Self::set_tx_phase).
    pub fn set_tx_gain<V: Entry>(&mut self, gains: &[V]) -> Result<(), Error<D>> {
        self.set_words(Field::TxGain, gains)
    }

    /// Sets the receive phase of each channel and latches the receive settings
    pub fn set_rx_phase<V: Entry>(&mut self, phases: &[V]) -> Result<(), Error<D>> {
        self.set_words(Field::RxPhase, phases)
    }

    /// Sets the receive gain of each channel and latches the receive settings
    pub fn set_rx_gain<V: Entry>(&mut self, gains: &[V]) -> Result<(), Error<D>> {
        self.set_words(Field::RxGain, gains)
    }

    /// Sets the PA bias of every channel and latches the transmit settings
    ///
    /// Fails with [`Error::InvalidArgument`] without touching the device if
    /// `bias` is outside the configured range.
    pub fn set_pa_bias(&mut self, bias: f32) -> Result<(), Error<D>> {
        self.check_bias(bias)?;

        self.snapshot.pa_bias = Some(bias);

        let result = write_pa_bias(&mut self.device, bias);
        self.track(result)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("PA bias set to {=f32} V", bias);

        Ok(())
    }

    fn set_words<V: Entry>(&mut self, field: Field, vec: &[V]) -> Result<(), Error<D>> {
        let codes = validate_phase_gain_vector(vec, field.kind())?;
        self.apply_words(field, codes)
    }

    /// Records already validated words and writes them
    pub(super) fn apply_words(
        &mut self,
        field: Field,
        codes: [Code; CHANNEL_COUNT],
    ) -> Result<(), Error<D>> {
        *field.slot(&mut self.snapshot) = Some(codes);

        let result = write_words(&mut self.device, field, &codes);
        self.track(result)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{:?} latched: {:?}", field, codes);

        Ok(())
    }
}

fn write_words<D: Beamformer>(
    device: &mut D,
    field: Field,
    codes: &[Code; CHANNEL_COUNT],
) -> Result<(), D::Error> {
    for (channel, &code) in device.channels().iter_mut().zip(codes) {
        field.write(channel, code)?;
    }

    field.latch(device)
}

fn write_pa_bias<D: Beamformer>(device: &mut D, bias: f32) -> Result<(), D::Error> {
    for channel in device.channels() {
        channel.set_pa_bias_on(bias)?;
    }

    device.latch_tx_settings()
}
