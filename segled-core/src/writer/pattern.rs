//! Raw pattern writer

use crate::glyph::{BLANK, DECIMAL_POINT};
use crate::traits::LedModule;

/// Writes raw segment patterns through a cursor
///
/// The cursor starts at the leftmost digit. Writes past the last digit
/// are dropped silently, so callers never need to check the module size.
pub struct PatternWriter<'a, M> {
    module: &'a mut M,
    cursor: u8,
}

impl<'a, M: LedModule> PatternWriter<'a, M> {
    /// Wrap a module, cursor at position 0
    pub fn new(module: &'a mut M) -> Self {
        Self { module, cursor: 0 }
    }

    /// Number of digit positions
    pub fn size(&self) -> u8 {
        self.module.size()
    }

    /// Current cursor position
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Move the cursor back to position 0
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Blank every digit and home the cursor
    ///
    /// Does not flush.
    pub fn clear(&mut self) {
        for pos in 0..self.module.size() {
            self.module.set_pattern_at(pos, BLANK);
        }
        self.home();
    }

    /// Write a pattern at the cursor and advance it
    pub fn write_pattern(&mut self, pattern: u8) {
        self.module.set_pattern_at(self.cursor, pattern);
        self.cursor = self.cursor.saturating_add(1);
    }

    /// Write several patterns starting at the cursor
    pub fn write_patterns(&mut self, patterns: &[u8]) {
        for &pattern in patterns {
            self.write_pattern(pattern);
        }
    }

    /// Write a pattern at a position without moving the cursor
    pub fn write_pattern_at(&mut self, pos: u8, pattern: u8) {
        self.module.set_pattern_at(pos, pattern);
    }

    /// Pattern stored at a position
    pub fn pattern_at(&self, pos: u8) -> u8 {
        self.module.pattern_at(pos)
    }

    /// Turn the decimal point (or colon) segment of one digit on or off
    pub fn set_decimal_point_at(&mut self, pos: u8, on: bool) {
        if pos >= self.module.size() {
            return;
        }
        let pattern = self.module.pattern_at(pos);
        let pattern = if on {
            pattern | DECIMAL_POINT
        } else {
            pattern & !DECIMAL_POINT
        };
        self.module.set_pattern_at(pos, pattern);
    }
}
