//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level GPIO errors
//!
//! A byte the controller does not acknowledge is not an error. The bus reports it
//! as `false` from [`Bus::write_byte`](crate::bus::Bus::write_byte) and the display
//! carries on.
//!
//! ## Example
//!
//! ```
//! use tm1637::{Builder, BuilderError};
//!
//! // Too many digits
//! let result = Builder::new().digits(8).build();
//! assert!(matches!(result, Err(BuilderError::InvalidDigitCount(8))));
//! ```

use crate::interface::BusInterface;

/// Number of digit registers (grids) on the TM1637
pub const MAX_DIGITS: u8 = 6;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: BusInterface> {
    /// Interface error (GPIO)
    ///
    /// Wraps the underlying hardware error from the [`BusInterface`] implementation.
    Interface(I::Error),
    /// Digit range outside the module
    ///
    /// A write must satisfy `pos + length <= digits`.
    InvalidPosition {
        /// First digit requested
        pos: u8,
        /// Number of digits requested
        length: usize,
        /// Number of digits on the module
        digits: u8,
    },
}

impl<I: BusInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InvalidPosition {
                pos,
                length,
                digits,
            } => write!(
                f,
                "Invalid position: {length} digits at {pos} on a {digits}-digit display"
            ),
        }
    }
}

impl<I: BusInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Digit count outside 1..=[`MAX_DIGITS`]
    InvalidDigitCount(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDigitCount(digits) => {
                write!(f, "Invalid digit count {digits} (must be 1 to {MAX_DIGITS})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
