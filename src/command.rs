//! TM1637 command definitions
//!
//! This module defines the command bytes understood by the TM1637. Every command
//! is the first byte of its own start/stop framed transaction on the bus.
//!
//! ## Update Sequence
//!
//! Writing segment data always takes three frames:
//! 1. [`DATA_AUTO_INCREMENT`] alone
//! 2. [`address_set`] followed by the segment bytes
//! 3. [`display_control`] alone
//!
//! ## Example
//!
//! ```
//! use tm1637::command;
//!
//! assert_eq!(command::address_set(2), 0xC2);
//! assert_eq!(command::display_control(7, true), 0x8F);
//! assert_eq!(command::display_control(7, false), 0x87);
//! ```

/// Data command, write to display register with automatic address increment (0x40)
///
/// Each data byte following an address command lands in the next digit.
pub const DATA_AUTO_INCREMENT: u8 = 0x40;

/// Address command base (0xC0)
///
/// The low bits select the first digit register (C0H to C5H).
pub const ADDRESS_SET: u8 = 0xC0;

/// Display control command base (0x80)
///
/// Bits 0 to 2 carry the brightness (pulse width), bit 3 switches the display on.
pub const DISPLAY_CONTROL: u8 = 0x80;

/// Display on flag for [`DISPLAY_CONTROL`]
pub const DISPLAY_ON: u8 = 0x08;

/// Brightness bits of [`DISPLAY_CONTROL`]
pub const BRIGHTNESS_MASK: u8 = 0x07;

/// Address bits of [`ADDRESS_SET`]
///
/// This is a bit-field mask, not a range limit: only C0H to C5H
/// ([`MAX_DIGITS`](crate::error::MAX_DIGITS) registers) exist. Positions are
/// range-checked by [`Display`](crate::display::Display) before they get here.
pub const ADDRESS_MASK: u8 = 0x07;

/// Build the address command for digit `pos`
///
/// `pos` must be below [`MAX_DIGITS`](crate::error::MAX_DIGITS); larger values are
/// masked to the address bits, not checked.
pub const fn address_set(pos: u8) -> u8 {
    ADDRESS_SET | (pos & ADDRESS_MASK)
}

/// Build the display control command for a brightness level and on/off state
///
/// Only the low three bits of `level` are used.
pub const fn display_control(level: u8, on: bool) -> u8 {
    let on_bit = if on { DISPLAY_ON } else { 0 };
    DISPLAY_CONTROL | on_bit | (level & BRIGHTNESS_MASK)
}
