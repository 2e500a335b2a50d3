//! Clock writer

use super::NumberWriter;
use crate::glyph;
use crate::traits::LedModule;

/// Digit whose decimal point segment drives the colon
const COLON_POS: u8 = 1;

/// Writes `HH:MM` style times
pub struct ClockWriter<'a, M> {
    numbers: NumberWriter<'a, M>,
}

impl<'a, M: LedModule> ClockWriter<'a, M> {
    /// Wrap a number writer
    pub fn new(numbers: NumberWriter<'a, M>) -> Self {
        Self { numbers }
    }

    /// Blank every digit and home the cursor
    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    /// Write hour and minute as `HH:MM` at positions 0-3
    ///
    /// Both fields are zero padded. Values are not range checked: a
    /// field of 100 or more shows its last two digits.
    pub fn write_hour_minute_24(&mut self, hour: u32, minute: u32) {
        self.numbers.home();
        self.numbers.write_dec2(hour, glyph::digit(0));
        self.numbers.write_dec2(minute, glyph::digit(0));
        self.write_colon(true);
    }

    /// Turn the colon on or off
    pub fn write_colon(&mut self, on: bool) {
        self.numbers
            .pattern_writer()
            .set_decimal_point_at(COLON_POS, on);
    }
}
