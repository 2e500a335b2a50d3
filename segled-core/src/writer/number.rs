//! Number writer

use core::fmt::Write;

use heapless::String;

use super::PatternWriter;
use crate::config::MAX_DIGITS;
use crate::glyph::{self, BLANK, DECIMAL_POINT};
use crate::traits::LedModule;

/// Longest `i32` rendering ("-2147483648")
const INT_TEXT_LEN: usize = 11;

/// Room for any finite `f32` with the largest supported precision
const FLOAT_TEXT_LEN: usize = 64;

/// Writes characters and numbers on top of a [`PatternWriter`]
pub struct NumberWriter<'a, M> {
    patterns: PatternWriter<'a, M>,
}

impl<'a, M: LedModule> NumberWriter<'a, M> {
    /// Wrap a pattern writer
    pub fn new(patterns: PatternWriter<'a, M>) -> Self {
        Self { patterns }
    }

    /// Access the underlying pattern writer
    pub fn pattern_writer(&mut self) -> &mut PatternWriter<'a, M> {
        &mut self.patterns
    }

    /// Blank every digit and home the cursor
    pub fn clear(&mut self) {
        self.patterns.clear();
    }

    /// Move the cursor back to position 0
    pub fn home(&mut self) {
        self.patterns.home();
    }

    /// Write one character at the cursor
    ///
    /// A `.` does not take a position of its own: it lights the decimal
    /// point of the previous digit. At the leftmost position it lights
    /// the decimal point of a blank digit instead.
    pub fn write_char(&mut self, c: char) {
        if c == '.' {
            match self.patterns.cursor() {
                0 => self.patterns.write_pattern(BLANK | DECIMAL_POINT),
                cursor => self.patterns.set_decimal_point_at(cursor - 1, true),
            }
            return;
        }
        self.patterns.write_pattern(glyph::for_char(c));
    }

    /// Write a string at the cursor
    pub fn write_str(&mut self, text: &str) {
        for c in text.chars() {
            self.write_char(c);
        }
    }

    /// Write a signed integer right-justified in `width` positions
    ///
    /// Padding is blank. A negative value gets a leading minus sign. If
    /// the number needs more than `width` positions it is written in full
    /// from the cursor, and whatever falls past the last digit is lost.
    pub fn write_signed_decimal(&mut self, value: i32, width: u8) {
        let mut text: String<INT_TEXT_LEN> = String::new();
        // Capacity covers i32::MIN
        let _ = write!(text, "{}", value);

        let padding = (width as usize).saturating_sub(text.len());
        for _ in 0..padding {
            self.patterns.write_pattern(BLANK);
        }
        self.write_str(&text);
    }

    /// Write exactly two decimal digits
    ///
    /// Only `value % 100` is shown. A leading zero is replaced by `pad`
    /// (pass `glyph::digit(0)` for zero padding, `glyph::BLANK` for none).
    pub fn write_dec2(&mut self, value: u32, pad: u8) {
        let value = (value % 100) as u8;
        let tens = value / 10;
        if tens == 0 {
            self.patterns.write_pattern(pad);
        } else {
            self.patterns.write_pattern(glyph::digit(tens));
        }
        self.patterns.write_pattern(glyph::digit(value % 10));
    }

    /// Write a float with a fixed number of decimals
    ///
    /// The value is written left-justified from the cursor, rounded to
    /// `precision` decimals (capped at the largest module size). Digits
    /// past the last position are lost. NaN and infinities are written
    /// letter by letter as far as the glyph table allows.
    pub fn write_float(&mut self, value: f32, precision: u8) {
        let precision = (precision as usize).min(MAX_DIGITS);
        let mut text: String<FLOAT_TEXT_LEN> = String::new();
        let _ = write!(text, "{:.*}", precision, value);
        self.write_str(&text);
    }
}
