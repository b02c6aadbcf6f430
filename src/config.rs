//! Display configuration types and builder

use crate::command::BRIGHTNESS_MASK;
pub use crate::error::{BuilderError, MAX_DIGITS};

/// Default delay between bus transitions, in microseconds
pub const DEFAULT_BIT_DELAY_US: u32 = 100;

/// Digit count of the common 4-digit modules
pub const DEFAULT_DIGITS: u8 = 4;

/// Highest brightness level
pub const MAX_BRIGHTNESS: u8 = BRIGHTNESS_MASK;

/// Brightness level and on/off state
///
/// Levels run from 0 (dimmest) to [`MAX_BRIGHTNESS`] (brightest). Larger levels are
/// clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brightness {
    level: u8,
    on: bool,
}

impl Brightness {
    /// Create a brightness setting, clamping `level` to [`MAX_BRIGHTNESS`]
    pub fn new(level: u8, on: bool) -> Self {
        if level > MAX_BRIGHTNESS {
            log::warn!("brightness {level} out of range, clamped to {MAX_BRIGHTNESS}");
        }
        Self {
            level: level.min(MAX_BRIGHTNESS),
            on,
        }
    }

    /// Brightness level, 0 to [`MAX_BRIGHTNESS`]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Whether the display is switched on
    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self {
            level: MAX_BRIGHTNESS,
            on: true,
        }
    }
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Delay between bus transitions in microseconds
    pub bit_delay_us: u32,
    /// Number of digits on the module
    pub digits: u8,
    /// Brightness applied with the first update
    pub brightness: Brightness,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust
/// use tm1637::Builder;
///
/// let config = match Builder::new().digits(6).bit_delay_us(50).brightness(3, true).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.digits, 6);
/// assert_eq!(config.brightness.level(), 3);
/// ```
#[must_use]
pub struct Builder {
    /// Delay between bus transitions in microseconds
    bit_delay_us: u32,
    /// Number of digits on the module
    digits: u8,
    /// Initial brightness
    brightness: Brightness,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            bit_delay_us: DEFAULT_BIT_DELAY_US,
            digits: DEFAULT_DIGITS,
            brightness: Brightness::default(),
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delay between bus transitions
    ///
    /// Slow modules or long wires may need more than the 100us default.
    pub fn bit_delay_us(mut self, us: u32) -> Self {
        self.bit_delay_us = us;
        self
    }

    /// Set the number of digits on the module
    pub fn digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Set the initial brightness (clamped to [`MAX_BRIGHTNESS`])
    pub fn brightness(mut self, level: u8, on: bool) -> Self {
        self.brightness = Brightness::new(level, on);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDigitCount` if the digit count is 0 or above
    /// [`MAX_DIGITS`]
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.digits == 0 || self.digits > MAX_DIGITS {
            return Err(BuilderError::InvalidDigitCount(self.digits));
        }
        Ok(Config {
            bit_delay_us: self.bit_delay_us,
            digits: self.digits,
            brightness: self.brightness,
        })
    }
}
