//! Test doubles shared by the unit tests

use heapless::Vec;

use crate::buffer::DigitBuffer;
use crate::config::{DigitCount, MAX_DIGITS};
use crate::glyph::{self, DECIMAL_POINT};
use crate::traits::LedModule;

/// In-memory module that records what reached the "hardware"
pub struct MockModule {
    buffer: DigitBuffer,
    /// Patterns as of the last flush
    flushed: Vec<u8, MAX_DIGITS>,
    flushed_brightness: u8,
    begins: usize,
    flushes: usize,
}

impl MockModule {
    pub fn new(digits: DigitCount) -> Self {
        Self {
            buffer: DigitBuffer::new(digits),
            flushed: Vec::new(),
            flushed_brightness: 0,
            begins: 0,
            flushes: 0,
        }
    }

    pub fn patterns(&self) -> &[u8] {
        self.buffer.patterns()
    }

    pub fn flushed(&self) -> &[u8] {
        &self.flushed
    }

    pub fn flushed_brightness(&self) -> u8 {
        self.flushed_brightness
    }

    pub fn begins(&self) -> usize {
        self.begins
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl LedModule for MockModule {
    type Error = ();

    fn begin(&mut self) -> Result<(), ()> {
        self.begins += 1;
        self.buffer.reset();
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ()> {
        self.flushes += 1;
        self.flushed.clear();
        let _ = self.flushed.extend_from_slice(self.buffer.patterns());
        self.flushed_brightness = self.buffer.brightness();
        self.buffer.mark_flushed();
        Ok(())
    }

    fn size(&self) -> u8 {
        self.buffer.size()
    }

    fn set_pattern_at(&mut self, pos: u8, pattern: u8) {
        self.buffer.set_pattern_at(pos, pattern);
    }

    fn pattern_at(&self, pos: u8) -> u8 {
        self.buffer.pattern_at(pos)
    }

    fn set_brightness(&mut self, level: u8) {
        self.buffer.set_brightness(level);
    }

    fn brightness(&self) -> u8 {
        self.buffer.brightness()
    }

    fn is_flush_required(&self) -> bool {
        self.buffer.is_flush_required()
    }
}

/// Expected patterns for a string as it should appear on the display
///
/// `.` and `:` light the decimal point of the preceding character.
pub fn render(text: &str) -> Vec<u8, MAX_DIGITS> {
    let mut out: Vec<u8, MAX_DIGITS> = Vec::new();
    for c in text.chars() {
        if c == '.' || c == ':' {
            if let Some(last) = out.last_mut() {
                *last |= DECIMAL_POINT;
            }
            continue;
        }
        let _ = out.push(glyph::for_char(c));
    }
    out
}
