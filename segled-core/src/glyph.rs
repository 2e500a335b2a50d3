//! Seven-segment glyph table
//!
//! Bit layout of a pattern byte:
//!
//! ```text
//!      A            bit 0 = A
//!     ---           bit 1 = B
//!  F |   | B        bit 2 = C
//!     -G-           bit 3 = D
//!  E |   | C        bit 4 = E
//!     ---  .DP      bit 5 = F
//!      D            bit 6 = G
//!                   bit 7 = DP (or colon)
//! ```

/// All segments off
pub const BLANK: u8 = 0x00;

/// Middle segment only
pub const MINUS: u8 = 0x40;

/// Degree sign (A, B, F, G)
pub const DEGREE: u8 = 0x63;

/// Decimal point / colon bit
pub const DECIMAL_POINT: u8 = 0x80;

/// Hex digit patterns 0-F
pub const DIGITS: [u8; 16] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x77, // A
    0x7C, // b
    0x39, // C
    0x5E, // d
    0x79, // E
    0x71, // F
];

/// Celsius unit glyph
pub const LETTER_C: u8 = DIGITS[0xC];

/// Fahrenheit unit glyph
pub const LETTER_F: u8 = DIGITS[0xF];

/// Pattern for a single decimal digit
///
/// Only the low decimal digit is used, so `digit(12)` renders `2`.
pub fn digit(value: u8) -> u8 {
    DIGITS[(value % 10) as usize]
}

/// Pattern for a character
///
/// Letters are matched case-insensitively and rendered in whichever case
/// a seven-segment display can show. Characters with no sensible shape
/// render blank.
pub fn for_char(c: char) -> u8 {
    match c.to_ascii_lowercase() {
        d @ '0'..='9' => DIGITS[(d as u8 - b'0') as usize],
        h @ 'a'..='f' => DIGITS[(h as u8 - b'a' + 10) as usize],
        '-' => MINUS,
        '°' => DEGREE,
        'h' => 0x76,
        'i' => 0x10,
        'l' => 0x38,
        'n' => 0x54,
        'o' => 0x5C,
        'p' => 0x73,
        'r' => 0x50,
        't' => 0x78,
        'u' => 0x1C,
        _ => BLANK,
    }
}
