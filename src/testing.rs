//! Simulated TM1637 bus for tests
//!
//! [`SimulatedBus`] records every call made through [`BusInterface`] and can decode
//! the recorded CLK/DIO waveform back into start/stop framed transactions, the way
//! the controller would see them.

use alloc::vec::Vec;
use embedded_hal::digital::PinState;

use crate::interface::BusInterface;

/// One call made through the interface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Clk(PinState),
    Dio(PinState),
    ReleaseDio,
    ReadDio(PinState),
    Delay(u32),
}

/// Error returned once the configured operation budget runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SimulatedError;

/// A decoded start/stop framed transaction
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Frame {
    pub bytes: Vec<u8>,
    pub acks: Vec<bool>,
    pub stopped: bool,
}

#[derive(Debug)]
pub(crate) struct SimulatedBus {
    pub events: Vec<Event>,
    /// Whether the simulated controller pulls DIO low in the ack slot
    pub acknowledge: bool,
    /// Fail every pin operation once this many have succeeded
    pub fail_after: Option<usize>,
    pin_ops: usize,
    dio_released: bool,
}

impl SimulatedBus {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            acknowledge: true,
            fail_after: None,
            pin_ops: 0,
            dio_released: false,
        }
    }

    pub fn without_ack() -> Self {
        Self {
            acknowledge: false,
            ..Self::new()
        }
    }

    fn pin_op(&mut self) -> Result<(), SimulatedError> {
        if self.fail_after.is_some_and(|limit| self.pin_ops >= limit) {
            return Err(SimulatedError);
        }
        self.pin_ops += 1;
        Ok(())
    }

    fn released_level(&self) -> PinState {
        if self.acknowledge {
            PinState::Low
        } else {
            PinState::High
        }
    }

    /// Replay the recorded events and split them into transactions
    pub fn frames(&self) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut current: Option<Frame> = None;
        let mut clk = PinState::High;
        let mut dio = PinState::High;
        let mut released = false;
        let mut shift: u8 = 0;
        let mut bit_count = 0;

        for event in &self.events {
            match *event {
                Event::Clk(level) => {
                    let rising = clk == PinState::Low && level == PinState::High;
                    clk = level;
                    let Some(frame) = current.as_mut() else {
                        continue;
                    };
                    if !rising {
                        continue;
                    }
                    if released {
                        frame.bytes.push(shift);
                        frame.acks.push(dio == PinState::Low);
                        shift = 0;
                        bit_count = 0;
                    } else if bit_count < 8 {
                        if dio == PinState::High {
                            shift |= 1 << bit_count;
                        }
                        bit_count += 1;
                    }
                }
                Event::Dio(_) | Event::ReleaseDio => {
                    let (level, now_released) = match *event {
                        Event::Dio(level) => (level, false),
                        _ => (self.released_level(), true),
                    };
                    released = now_released;
                    if clk == PinState::High && dio != level {
                        if level == PinState::Low {
                            if let Some(open) = current.take() {
                                frames.push(open);
                            }
                            current = Some(Frame::default());
                            shift = 0;
                            bit_count = 0;
                        } else if let Some(mut frame) = current.take() {
                            frame.stopped = true;
                            frames.push(frame);
                        }
                    }
                    dio = level;
                }
                _ => {}
            }
        }
        if let Some(open) = current {
            frames.push(open);
        }
        frames
    }

    /// Delays recorded, in order
    pub fn delays(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Delay(us) => Some(*us),
                _ => None,
            })
            .collect()
    }
}

impl BusInterface for SimulatedBus {
    type Error = SimulatedError;

    fn set_clk(&mut self, state: PinState) -> Result<(), Self::Error> {
        self.pin_op()?;
        self.events.push(Event::Clk(state));
        Ok(())
    }

    fn set_dio(&mut self, state: PinState) -> Result<(), Self::Error> {
        self.pin_op()?;
        self.dio_released = false;
        self.events.push(Event::Dio(state));
        Ok(())
    }

    fn release_dio(&mut self) -> Result<(), Self::Error> {
        self.pin_op()?;
        self.dio_released = true;
        self.events.push(Event::ReleaseDio);
        Ok(())
    }

    fn read_dio(&mut self) -> Result<PinState, Self::Error> {
        self.pin_op()?;
        let level = if self.dio_released {
            self.released_level()
        } else {
            self.events
                .iter()
                .rev()
                .find_map(|event| match event {
                    Event::Dio(level) => Some(*level),
                    _ => None,
                })
                .unwrap_or(PinState::High)
        };
        self.events.push(Event::ReadDio(level));
        Ok(level)
    }

    fn delay_us(&mut self, us: u32) {
        self.events.push(Event::Delay(us));
    }
}
