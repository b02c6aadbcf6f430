//! Hardware interface abstraction
//!
//! This module provides the [`BusInterface`] trait and the [`Interface`] struct
//! used by [`Bus`](crate::bus::Bus) to toggle the two TM1637 lines.
//!
//! ## Hardware Requirements
//!
//! The TM1637 requires 2 GPIO pins:
//! - **CLK**: Clock (output)
//! - **DIO**: Data (bidirectional, open-drain with pull-up)
//!
//! embedded-hal v1.0 has no pin type that can switch direction at runtime, so DIO is
//! modelled as an open-drain pin that implements both [`OutputPin`] and [`InputPin`].
//! Writing it high releases the line and lets the controller pull it low to
//! acknowledge a byte.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin, PinState};
//! use tm1637::{BusInterface, Interface};
//! # use core::convert::Infallible;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! let mut interface = Interface::new(MockPin, MockPin, MockDelay);
//!
//! // Start condition by hand
//! let _ = interface.set_clk(PinState::High);
//! let _ = interface.set_dio(PinState::High);
//! interface.delay_us(100);
//! let _ = interface.set_dio(PinState::Low);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the GPIO capability consumed by the bus protocol
///
/// Implementations own the CLK and DIO lines plus a microsecond delay source.
/// The protocol logic in [`Bus`](crate::bus::Bus) is written purely in terms of
/// this trait, so it can run against a simulated bus in tests.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If your HAL exposes a
/// pin that really switches between input and output mode (a "flex" pin),
/// implement this trait on your own type and reconfigure the pin direction in
/// [`release_dio`](Self::release_dio) and [`set_dio`](Self::set_dio).
pub trait BusInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Drive the CLK line to `state`
    fn set_clk(&mut self, state: PinState) -> InterfaceResult<(), Self::Error>;

    /// Drive the DIO line to `state`
    fn set_dio(&mut self, state: PinState) -> InterfaceResult<(), Self::Error>;

    /// Stop driving DIO so the controller can pull it low
    ///
    /// On an open-drain pin this is the same as setting it high.
    fn release_dio(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Sample the level currently present on DIO
    fn read_dio(&mut self) -> InterfaceResult<PinState, Self::Error>;

    /// Busy-wait for `us` microseconds
    fn delay_us(&mut self, us: u32);
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<PinErr> {
    /// GPIO pin error
    Pin(PinErr),
}

impl<PinErr: Debug> core::fmt::Display for InterfaceError<PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<PinErr: Debug> core::error::Error for InterfaceError<PinErr> {}

/// Hardware interface implementation for the TM1637
///
/// Implements [`BusInterface`] for embedded-hal v1.0 GPIO and delay traits.
///
/// ## Type Parameters
///
/// * `CLK` - Clock pin implementing [`OutputPin`]
/// * `DIO` - Open-drain data pin implementing [`OutputPin`] and [`InputPin`]
/// * `D` - Delay source implementing [`DelayNs`]
pub struct Interface<CLK, DIO, D> {
    /// Clock pin
    clk: CLK,
    /// Data pin (open-drain, released = high)
    dio: DIO,
    /// Delay source used between line transitions
    delay: D,
}

impl<CLK, DIO, D> Interface<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin + InputPin,
    D: DelayNs,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `clk` - Clock pin (output)
    /// * `dio` - Data pin (open-drain output with input sampling)
    /// * `delay` - Microsecond delay source
    pub fn new(clk: CLK, dio: DIO, delay: D) -> Self {
        Self { clk, dio, delay }
    }

    /// Give back the pins and the delay source
    pub fn release(self) -> (CLK, DIO, D) {
        (self.clk, self.dio, self.delay)
    }
}

impl<CLK, DIO, D, PinErr> BusInterface for Interface<CLK, DIO, D>
where
    CLK: OutputPin<Error = PinErr>,
    DIO: OutputPin<Error = PinErr> + InputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    type Error = InterfaceError<PinErr>;

    fn set_clk(&mut self, state: PinState) -> InterfaceResult<(), Self::Error> {
        self.clk.set_state(state).map_err(InterfaceError::Pin)
    }

    fn set_dio(&mut self, state: PinState) -> InterfaceResult<(), Self::Error> {
        self.dio.set_state(state).map_err(InterfaceError::Pin)
    }

    fn release_dio(&mut self) -> InterfaceResult<(), Self::Error> {
        self.dio.set_high().map_err(InterfaceError::Pin)
    }

    fn read_dio(&mut self) -> InterfaceResult<PinState, Self::Error> {
        let high = self.dio.is_high().map_err(InterfaceError::Pin)?;
        Ok(PinState::from(high))
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
