//! Core display operations

use crate::bus::Bus;
use crate::command::{DATA_AUTO_INCREMENT, address_set, display_control};
use crate::config::{Brightness, Config};
use crate::error::{Error, MAX_DIGITS};
use crate::format::{Radix, format_number};
use crate::interface::BusInterface;
use crate::segment::BLANK;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Driver for a TM1637 7-segment module
///
/// Holds the bus, the configuration and the brightness state. Brightness changes are
/// only sent to the controller as part of the next segment update.
pub struct Display<I>
where
    I: BusInterface,
{
    /// Bit-level protocol driver
    bus: Bus<I>,
    /// Display configuration
    config: Config,
    /// Brightness sent with the next update
    brightness: Brightness,
}

impl<I> Display<I>
where
    I: BusInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            bus: Bus::new(interface, config.bit_delay_us),
            brightness: config.brightness,
            config,
        }
    }

    /// Set the brightness for subsequent updates
    ///
    /// `level` runs from 0 (dimmest) to 7 (brightest); larger values are clamped to 7.
    /// Nothing is sent until the next call that writes segment data.
    pub fn set_brightness(&mut self, level: u8, on: bool) {
        self.brightness = Brightness::new(level, on);
    }

    /// Brightness that the next update will apply
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Write raw segment patterns starting at digit `pos`
    ///
    /// Each byte is one digit: bit 0 is segment A, bit 6 segment G, bit 7 the dot.
    /// Digits outside `pos..pos + segments.len()` keep their contents.
    ///
    /// The update takes three transactions: the data command, the address command
    /// with all segment bytes, and the display control command carrying the
    /// brightness. Missing acks are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPosition` without touching the bus if the range does not
    /// fit the module, or `Error::Interface` if a pin operation fails.
    pub fn set_segments(&mut self, segments: &[u8], pos: u8) -> DisplayResult<I> {
        self.check_range(pos, segments.len())?;

        log::trace!("set_segments pos={pos} segments={segments:02x?}");

        self.send(DATA_AUTO_INCREMENT, &[])?;
        self.send(address_set(pos), segments)?;
        let control = display_control(self.brightness.level(), self.brightness.is_on());
        self.send(control, &[])?;

        Ok(())
    }

    /// Blank every digit
    pub fn clear(&mut self) -> DisplayResult<I> {
        let length = usize::from(self.config.digits);
        self.check_range(0, length)?;

        let blank = [BLANK; MAX_DIGITS as usize];
        self.set_segments(&blank[..length], 0)
    }

    /// Show a decimal number
    ///
    /// * `num` - Number to show; negative numbers get a minus sign
    /// * `leading_zero` - Pad with zeros instead of blanks (not for negative numbers)
    /// * `length` - Number of digits to write; `num` has to fit, high digits are dropped
    /// * `pos` - Position of the most significant digit (0 is leftmost)
    pub fn show_number_dec(
        &mut self,
        num: i32,
        leading_zero: bool,
        length: u8,
        pos: u8,
    ) -> DisplayResult<I> {
        self.show_number_dec_ex(num, 0, leading_zero, length, pos)
    }

    /// Show a decimal number with control over the dots or colon
    ///
    /// `dots` is a bit mask, MSB first: bit 7 lights the dot of the first written
    /// digit, bit 6 the second, and so on. On a module with a center colon,
    /// `0b0100_0000` shows `00:00`. See [`apply_dots`](crate::format::apply_dots).
    pub fn show_number_dec_ex(
        &mut self,
        num: i32,
        dots: u8,
        leading_zero: bool,
        length: u8,
        pos: u8,
    ) -> DisplayResult<I> {
        self.show_number_base_ex(Radix::Decimal, num, dots, leading_zero, length, pos)
    }

    /// Show a hexadecimal number with control over the dots or colon
    pub fn show_number_hex_ex(
        &mut self,
        num: u16,
        dots: u8,
        leading_zero: bool,
        length: u8,
        pos: u8,
    ) -> DisplayResult<I> {
        self.show_number_base_ex(
            Radix::Hexadecimal,
            i32::from(num),
            dots,
            leading_zero,
            length,
            pos,
        )
    }

    fn show_number_base_ex(
        &mut self,
        radix: Radix,
        num: i32,
        dots: u8,
        leading_zero: bool,
        length: u8,
        pos: u8,
    ) -> DisplayResult<I> {
        let length = usize::from(length);
        self.check_range(pos, length)?;

        let mut buffer = [BLANK; MAX_DIGITS as usize];
        let digits = &mut buffer[..length];
        format_number(radix, num, dots, leading_zero, digits);
        self.set_segments(digits, pos)
    }

    /// Reject ranges outside the module or the controller's digit registers
    fn check_range(&self, pos: u8, length: usize) -> DisplayResult<I> {
        let digits = self.config.digits.min(MAX_DIGITS);
        if usize::from(pos) + length > usize::from(digits) {
            return Err(Error::InvalidPosition {
                pos,
                length,
                digits,
            });
        }
        Ok(())
    }

    /// Send one framed command with optional data bytes
    fn send(&mut self, command: u8, data: &[u8]) -> DisplayResult<I> {
        let acked = self
            .bus
            .transaction(command, data)
            .map_err(Error::Interface)?;
        let expected = data.len() + 1;
        if acked < expected {
            log::debug!("command {command:#04x}: {acked} of {expected} bytes acknowledged");
        }
        Ok(())
    }

    /// Number of digits on the module
    pub fn digits(&self) -> u8 {
        self.config.digits
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the underlying interface
    pub fn release(self) -> I {
        self.bus.release()
    }
}
