//! Recording beamformer double for unit tests
//!
//! Every device operation is appended to a shared journal so tests can assert
//! the exact order of field writes and latches. A single operation can be
//! armed to fail with [`MockError`].

use std::{cell::RefCell, rc::Rc};

use crate::{
    code::Code,
    configs::InitConfig,
    device::{Beamformer, Channel, Mode, Open, CHANNEL_COUNT},
};

/// A device operation as seen by the mock
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Open {
        locator: String,
        chip_id: String,
        init: InitConfig,
    },
    Mode(Mode),
    LnaBiasOut(bool),
    TxEnable(usize, bool),
    RxEnable(usize, bool),
    TxPhase(usize, u8),
    RxPhase(usize, u8),
    TxGain(usize, u8),
    RxGain(usize, u8),
    PaBias(usize, f32),
    LatchTx,
    LatchRx,
    Temperature,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MockError;

#[derive(Debug, Default)]
struct Journal {
    ops: Vec<Op>,
    fail_on: Option<Op>,
}

impl Journal {
    fn record(&mut self, op: Op) -> Result<(), MockError> {
        let fail = self.fail_on.as_ref() == Some(&op);
        self.ops.push(op);
        if fail {
            self.fail_on = None;
            return Err(MockError);
        }

        Ok(())
    }
}

type Shared = Rc<RefCell<Journal>>;

#[derive(Debug)]
pub struct MockChannel {
    index: usize,
    journal: Shared,
    pub tx_enable: bool,
    pub rx_enable: bool,
    pub tx_phase: Code,
    pub rx_phase: Code,
    pub tx_gain: Code,
    pub rx_gain: Code,
    pub pa_bias_on: f32,
}

impl MockChannel {
    fn new(index: usize, journal: Shared) -> Self {
        MockChannel {
            index,
            journal,
            tx_enable: false,
            rx_enable: false,
            tx_phase: Code::ZERO,
            rx_phase: Code::ZERO,
            tx_gain: Code::ZERO,
            rx_gain: Code::ZERO,
            pa_bias_on: 0.0,
        }
    }

    fn record(&self, op: Op) -> Result<(), MockError> {
        self.journal.borrow_mut().record(op)
    }
}

impl Channel for MockChannel {
    type Error = MockError;

    fn set_tx_enable(&mut self, enable: bool) -> Result<(), MockError> {
        self.record(Op::TxEnable(self.index, enable))?;
        self.tx_enable = enable;
        Ok(())
    }

    fn set_rx_enable(&mut self, enable: bool) -> Result<(), MockError> {
        self.record(Op::RxEnable(self.index, enable))?;
        self.rx_enable = enable;
        Ok(())
    }

    fn set_tx_phase(&mut self, phase: Code) -> Result<(), MockError> {
        self.record(Op::TxPhase(self.index, phase.value()))?;
        self.tx_phase = phase;
        Ok(())
    }

    fn set_rx_phase(&mut self, phase: Code) -> Result<(), MockError> {
        self.record(Op::RxPhase(self.index, phase.value()))?;
        self.rx_phase = phase;
        Ok(())
    }

    fn set_tx_gain(&mut self, gain: Code) -> Result<(), MockError> {
        self.record(Op::TxGain(self.index, gain.value()))?;
        self.tx_gain = gain;
        Ok(())
    }

    fn set_rx_gain(&mut self, gain: Code) -> Result<(), MockError> {
        self.record(Op::RxGain(self.index, gain.value()))?;
        self.rx_gain = gain;
        Ok(())
    }

    fn set_pa_bias_on(&mut self, volts: f32) -> Result<(), MockError> {
        self.record(Op::PaBias(self.index, volts))?;
        self.pa_bias_on = volts;
        Ok(())
    }
}

#[derive(Debug)]
pub struct MockDevice {
    journal: Shared,
    pub mode: Mode,
    pub lna_bias_out: bool,
    pub channels: [MockChannel; CHANNEL_COUNT],
    pub temperature: f32,
}

impl MockDevice {
    pub fn new() -> Self {
        let journal = Shared::default();
        let channels = core::array::from_fn(|index| MockChannel::new(index, journal.clone()));

        MockDevice {
            journal,
            mode: Mode::Disabled,
            lna_bias_out: true,
            channels,
            temperature: 25.0,
        }
    }

    /// Makes the next occurrence of `op` fail after it is recorded
    pub fn fail_on(&mut self, op: Op) {
        self.journal.borrow_mut().fail_on = Some(op);
    }

    /// Returns and clears the recorded operations
    pub fn take_ops(&mut self) -> Vec<Op> {
        core::mem::take(&mut self.journal.borrow_mut().ops)
    }

    fn record(&self, op: Op) -> Result<(), MockError> {
        self.journal.borrow_mut().record(op)
    }
}

impl Beamformer for MockDevice {
    type Error = MockError;
    type Channel = MockChannel;

    fn set_mode(&mut self, mode: Mode) -> Result<(), MockError> {
        self.record(Op::Mode(mode))?;
        self.mode = mode;
        Ok(())
    }

    fn set_lna_bias_out_enable(&mut self, enable: bool) -> Result<(), MockError> {
        self.record(Op::LnaBiasOut(enable))?;
        self.lna_bias_out = enable;
        Ok(())
    }

    fn channels(&mut self) -> &mut [MockChannel; CHANNEL_COUNT] {
        &mut self.channels
    }

    fn latch_tx_settings(&mut self) -> Result<(), MockError> {
        self.record(Op::LatchTx)
    }

    fn latch_rx_settings(&mut self) -> Result<(), MockError> {
        self.record(Op::LatchRx)
    }

    fn temperature(&mut self) -> Result<f32, MockError> {
        self.record(Op::Temperature)?;
        Ok(self.temperature)
    }
}

impl Open for MockDevice {
    fn open(locator: &str, chip_id: &str, init: &InitConfig) -> Result<Self, MockError> {
        let device = MockDevice::new();
        device.record(Op::Open {
            locator: locator.into(),
            chip_id: chip_id.into(),
            init: *init,
        })?;

        Ok(device)
    }
}
