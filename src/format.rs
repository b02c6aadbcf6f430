//! Number formatting
//!
//! Turns an integer into a run of segment patterns, one per digit, most significant
//! digit first. The caller decides how many digits the run has by the length of the
//! slice it passes in.
//!
//! Numbers that do not fit are truncated: the high digits are dropped and only the
//! lowest `digits.len()` digits are shown. A negative number that fills every digit
//! loses its minus sign the same way.
//!
//! ## Example
//!
//! ```
//! use tm1637::format::{format_number, Radix};
//! use tm1637::segment::{encode_digit, BLANK, MINUS};
//!
//! let mut digits = [0u8; 4];
//! format_number(Radix::Decimal, -42, 0, false, &mut digits);
//! assert_eq!(digits, [BLANK, MINUS, encode_digit(4), encode_digit(2)]);
//! ```

use crate::segment::{BLANK, MINUS, SEG_DP, encode_digit};

/// Numeric base used when formatting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Radix {
    /// Base 10, negative numbers get a leading minus sign
    #[default]
    Decimal,
    /// Base 16, digits A to F; never shows a sign
    Hexadecimal,
}

impl Radix {
    /// The numeric base
    pub const fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }
}

/// Format `value` into `digits`, rightmost digit last
///
/// * `radix` - Decimal or hexadecimal
/// * `value` - Number to show. Hexadecimal formatting uses the magnitude and drops the sign
/// * `dots` - Dot mask, see [`apply_dots`]
/// * `leading_zero` - Pad with `0` instead of blanks. Ignored for negative numbers
/// * `digits` - Output buffer, its length is the number of digits to produce
///
/// Zero always shows at least one `0` in the rightmost digit.
pub fn format_number(radix: Radix, value: i32, dots: u8, leading_zero: bool, digits: &mut [u8]) {
    let negative = radix == Radix::Decimal && value < 0;
    let leading_zero = leading_zero && !negative;
    let base = radix.base();

    let mut rest = value.unsigned_abs();
    let mut sign_pending = negative;

    for (index, slot) in digits.iter_mut().rev().enumerate() {
        if rest > 0 || index == 0 {
            // Remainder of a u32 division by at most 16 fits a u8
            *slot = encode_digit((rest % base) as u8);
            rest /= base;
        } else if sign_pending {
            *slot = MINUS;
            sign_pending = false;
        } else if leading_zero {
            *slot = encode_digit(0);
        } else {
            *slot = BLANK;
        }
    }

    if rest > 0 || sign_pending {
        log::trace!(
            "{value} truncated to {} digits (base {base})",
            digits.len()
        );
    }

    apply_dots(dots, digits);
}

/// Merge a dot mask into a run of segment patterns
///
/// Bit 7 (MSB) of `dots` lights the dot of `digits[0]`, bit 6 that of `digits[1]`
/// and so on. Segment bits 0 to 6 are left untouched and a mask of 0 changes nothing.
///
/// For a 4-digit module with a dot after every digit:
/// * `0.000` is `0b1000_0000`
/// * `00.00` is `0b0100_0000`
/// * `000.0` is `0b0010_0000`
///
/// For a module with a center colon, `00:00` is `0b0100_0000`.
pub fn apply_dots(dots: u8, digits: &mut [u8]) {
    for (index, digit) in digits.iter_mut().enumerate().take(8) {
        if dots & (0x80 >> index) != 0 {
            *digit |= SEG_DP;
        }
    }
}
