//! Temperature writer

use super::NumberWriter;
use crate::glyph::{DEGREE, LETTER_C, LETTER_F};
use crate::traits::LedModule;

/// Writes whole-degree temperatures followed by unit glyphs
///
/// The number is right-justified in whatever is left of `width` after the
/// unit glyphs. A number too wide for that space pushes the glyphs to the
/// right, and anything past the last digit is dropped.
pub struct TemperatureWriter<'a, M> {
    numbers: NumberWriter<'a, M>,
}

impl<'a, M: LedModule> TemperatureWriter<'a, M> {
    /// Wrap a number writer
    pub fn new(numbers: NumberWriter<'a, M>) -> Self {
        Self { numbers }
    }

    /// Blank every digit and home the cursor
    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    /// Write `value°` in `width` positions
    pub fn write_temp_deg(&mut self, value: i32, width: u8) {
        self.write_with_units(value, width, &[DEGREE]);
    }

    /// Write `value°C` in `width` positions
    pub fn write_temp_deg_c(&mut self, value: i32, width: u8) {
        self.write_with_units(value, width, &[DEGREE, LETTER_C]);
    }

    /// Write `value°F` in `width` positions
    pub fn write_temp_deg_f(&mut self, value: i32, width: u8) {
        self.write_with_units(value, width, &[DEGREE, LETTER_F]);
    }

    fn write_with_units(&mut self, value: i32, width: u8, units: &[u8]) {
        let number_width = width.saturating_sub(units.len() as u8);
        self.numbers.write_signed_decimal(value, number_width);
        self.numbers.pattern_writer().write_patterns(units);
    }
}
