//! Brings up a simulated beamformer, steers it and polls its temperature.
//!
//! Run with `RUST_LOG=info cargo run --example temperature_monitor`.

use std::{convert::Infallible, thread, time::Duration};

use adar1000_beam::{
    BiasLevels, BiasRange, Beamformer, Channel, Code, Config, Configurator, InitConfig, Mode,
    Open, CHANNEL_COUNT,
};

#[derive(Default)]
struct SimChannel {
    tx_enable: bool,
    rx_enable: bool,
    tx_phase: u8,
    tx_gain: u8,
    pa_bias_on: f32,
}

impl Channel for SimChannel {
    type Error = Infallible;

    fn set_tx_enable(&mut self, enable: bool) -> Result<(), Infallible> {
        self.tx_enable = enable;
        Ok(())
    }

    fn set_rx_enable(&mut self, enable: bool) -> Result<(), Infallible> {
        self.rx_enable = enable;
        Ok(())
    }

    fn set_tx_phase(&mut self, phase: Code) -> Result<(), Infallible> {
        self.tx_phase = phase.value();
        Ok(())
    }

    fn set_rx_phase(&mut self, _phase: Code) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_tx_gain(&mut self, gain: Code) -> Result<(), Infallible> {
        self.tx_gain = gain.value();
        Ok(())
    }

    fn set_rx_gain(&mut self, _gain: Code) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_pa_bias_on(&mut self, volts: f32) -> Result<(), Infallible> {
        self.pa_bias_on = volts;
        Ok(())
    }
}

struct SimBeamformer {
    mode: Mode,
    channels: [SimChannel; CHANNEL_COUNT],
    latches: u32,
    temperature: f32,
}

impl Beamformer for SimBeamformer {
    type Error = Infallible;
    type Channel = SimChannel;

    fn set_mode(&mut self, mode: Mode) -> Result<(), Infallible> {
        self.mode = mode;
        Ok(())
    }

    fn set_lna_bias_out_enable(&mut self, _enable: bool) -> Result<(), Infallible> {
        Ok(())
    }

    fn channels(&mut self) -> &mut [SimChannel; CHANNEL_COUNT] {
        &mut self.channels
    }

    fn latch_tx_settings(&mut self) -> Result<(), Infallible> {
        self.latches += 1;
        Ok(())
    }

    fn latch_rx_settings(&mut self) -> Result<(), Infallible> {
        self.latches += 1;
        Ok(())
    }

    fn temperature(&mut self) -> Result<f32, Infallible> {
        // The die warms up while transmitting
        if self.mode == Mode::Tx {
            self.temperature += 0.4;
        }
        Ok(self.temperature)
    }
}

impl Open for SimBeamformer {
    fn open(locator: &str, chip_id: &str, init: &InitConfig) -> Result<Self, Infallible> {
        log::info!(
            "opening {} on {} (elements {:?}, PA on {} V)",
            chip_id,
            locator,
            init.channel_element_map,
            init.bias.pa_on
        );

        Ok(SimBeamformer {
            mode: Mode::Disabled,
            channels: Default::default(),
            latches: 0,
            temperature: 24.0,
        })
    }
}

fn main() {
    env_logger::init();

    let init = InitConfig::new(BiasLevels {
        pa_off: -4.8,
        pa_on: -1.1,
        lna_off: -2.0,
        lna_on: -0.8,
    });
    let config = Config::new(BiasRange::symmetric(5.0));

    let mut beam =
        Configurator::<SimBeamformer>::open("ip:analog.local", "BEAM_TX", &init, config).unwrap();

    beam.enable_tx(-1.1).unwrap();
    beam.set_tx_gain(&[127, 127, 127, 127]).unwrap();
    beam.set_tx_phase(&[0, 32, 64, 96]).unwrap();

    if let Err(e) = beam.set_tx_phase(&[0, 32, 64, 128]) {
        log::warn!("rejected: {}", e);
    }
    if let Err(e) = beam.set_pa_bias(-6.0) {
        log::warn!("rejected: {}", e);
    }

    for i in 0..10 {
        let temperature = beam.read_temperature().unwrap();
        log::info!("Temp #{}: {:.1} °C", i, temperature);
        thread::sleep(Duration::from_millis(200));
    }

    beam.disable().unwrap();

    let device = beam.release();
    for (i, channel) in device.channels.iter().enumerate() {
        log::info!(
            "channel {}: tx={} rx={} gain={} phase={} bias={} V",
            i,
            channel.tx_enable,
            channel.rx_enable,
            channel.tx_gain,
            channel.tx_phase,
            channel.pa_bias_on
        );
    }
    log::info!("{} latches issued", device.latches);
}
