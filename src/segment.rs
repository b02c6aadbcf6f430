//! 7-segment encoding
//!
//! A segment pattern is one byte per digit. Bits 0 to 6 light segments A to G,
//! bit 7 lights the dot (or the colon, depending on how the module is wired):
//!
//! ```text
//!       A
//!      ---
//!   F |   | B
//!      -G-
//!   E |   | C
//!      ---
//!       D    . DP
//! ```
//!
//! ## Example
//!
//! ```
//! use tm1637::segment::{encode_digit, SEG_B, SEG_C};
//!
//! assert_eq!(encode_digit(1), SEG_B | SEG_C);
//! assert_eq!(encode_digit(0xA), 0x77);
//! ```

/// Segment A (top)
pub const SEG_A: u8 = 0b0000_0001;
/// Segment B (top right)
pub const SEG_B: u8 = 0b0000_0010;
/// Segment C (bottom right)
pub const SEG_C: u8 = 0b0000_0100;
/// Segment D (bottom)
pub const SEG_D: u8 = 0b0000_1000;
/// Segment E (bottom left)
pub const SEG_E: u8 = 0b0001_0000;
/// Segment F (top left)
pub const SEG_F: u8 = 0b0010_0000;
/// Segment G (middle)
pub const SEG_G: u8 = 0b0100_0000;
/// Decimal point or colon
pub const SEG_DP: u8 = 0b1000_0000;

/// All segments off
pub const BLANK: u8 = 0x00;

/// Minus sign, shown in front of negative decimal numbers
pub const MINUS: u8 = SEG_G;

/// Largest value accepted by [`encode_digit`]
pub const MAX_DIGIT: u8 = 0x0F;

/// Patterns for the hexadecimal digits `0` to `F`
pub const DIGITS: [u8; 16] = [
    // XGFEDCBA
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
    0b0111_0111, // A
    0b0111_1100, // b
    0b0011_1001, // C
    0b0101_1110, // d
    0b0111_1001, // E
    0b0111_0001, // F
];

/// Convert a single digit (0 to 15) into its 7-segment pattern
///
/// Values 10 to 15 render as the hex letters A to F. The dot bit is never set.
///
/// Values above 15 are clamped to 15, so the result is always the pattern for `F`.
pub fn encode_digit(digit: u8) -> u8 {
    if digit > MAX_DIGIT {
        log::warn!("digit {digit} out of range, clamped to {MAX_DIGIT}");
    }
    DIGITS[usize::from(digit.min(MAX_DIGIT))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_digit_table() {
        let expected = [
            0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E,
            0x79, 0x71,
        ];
        for (digit, pattern) in expected.iter().enumerate() {
            assert_eq!(encode_digit(digit as u8), *pattern, "digit {digit}");
        }
    }

    #[test]
    fn test_encode_digit_never_sets_dot() {
        for digit in 0..=MAX_DIGIT {
            assert_eq!(encode_digit(digit) & SEG_DP, 0);
        }
    }

    #[test]
    fn test_encode_digit_clamps_out_of_range() {
        assert_eq!(encode_digit(16), encode_digit(0x0F));
        assert_eq!(encode_digit(u8::MAX), DIGITS[15]);
    }

    #[test]
    fn test_minus_is_middle_segment_only() {
        assert_eq!(MINUS, 0x40);
        assert_eq!(MINUS & !SEG_G, 0);
    }

    #[test]
    fn test_eight_lights_all_segments() {
        assert_eq!(
            encode_digit(8),
            SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G
        );
    }
}
