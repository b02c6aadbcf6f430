//! TM1637 7-Segment LED Display Driver
//!
//! A driver for the TM1637 LED controller found on the common 4-digit 7-segment
//! modules, talking its 2-wire (CLK + DIO) bus by bit-banging two GPIO pins.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Decimal and hexadecimal numbers with leading zeros, minus sign and dot/colon control
//! - Raw segment writes at any digit position
//! - Eight brightness levels and on/off control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use tm1637::{Builder, Display, Interface};
//!
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
//! # let clk = MockPin;
//! # let dio = MockPin;
//! # let delay = MockDelay;
//! let interface = Interface::new(clk, dio, delay);
//! let config = match Builder::new().digits(4).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! display.set_brightness(3, true);
//! let _ = display.show_number_dec_ex(1234, 0b0100_0000, false, 4, 0); // 12:34
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Bit-level bus protocol
pub mod bus;
/// TM1637 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Number to segment formatting
pub mod format;
/// Hardware interface abstraction
pub mod interface;
/// Segment bits and digit encoding
pub mod segment;

#[cfg(test)]
mod testing;

pub use bus::Bus;
pub use config::{
    Brightness, Builder, Config, DEFAULT_BIT_DELAY_US, DEFAULT_DIGITS, MAX_BRIGHTNESS,
    MAX_DIGITS,
};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use format::Radix;
pub use interface::{BusInterface, Interface, InterfaceError};
pub use segment::encode_digit;
