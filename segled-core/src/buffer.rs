//! Digit pattern buffer
//!
//! Every module keeps the same state: one pattern byte per digit, the
//! brightness level and whether the buffer changed since the last flush.
//! Module implementations embed a [`DigitBuffer`] and only add the wire
//! protocol on top.

use heapless::Vec;

use crate::config::{DigitCount, MAX_BRIGHTNESS, MAX_DIGITS};

/// Fixed-size pattern buffer for a seven-segment module
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitBuffer {
    patterns: Vec<u8, MAX_DIGITS>,
    brightness: u8,
    /// Set on every mutation, cleared by `mark_flushed`
    dirty: bool,
}

impl DigitBuffer {
    /// Create a blank buffer
    pub fn new(digits: DigitCount) -> Self {
        let mut patterns = Vec::new();
        // Capacity is MAX_DIGITS and DigitCount never exceeds it
        let _ = patterns.resize(digits.get() as usize, 0);
        Self {
            patterns,
            brightness: 0,
            dirty: true,
        }
    }

    /// Number of digit positions
    pub fn size(&self) -> u8 {
        self.patterns.len() as u8
    }

    /// Blank every digit
    pub fn reset(&mut self) {
        self.patterns.iter_mut().for_each(|p| *p = 0);
        self.dirty = true;
    }

    /// Set the pattern at a position
    ///
    /// Writes past the last digit are dropped.
    pub fn set_pattern_at(&mut self, pos: u8, pattern: u8) {
        if let Some(slot) = self.patterns.get_mut(pos as usize) {
            *slot = pattern;
            self.dirty = true;
        }
    }

    /// Pattern at a position (blank past the last digit)
    pub fn pattern_at(&self, pos: u8) -> u8 {
        self.patterns.get(pos as usize).copied().unwrap_or(0)
    }

    /// All patterns, leftmost digit first
    pub fn patterns(&self) -> &[u8] {
        &self.patterns
    }

    /// Set the brightness level
    ///
    /// Levels above [`MAX_BRIGHTNESS`] saturate.
    pub fn set_brightness(&mut self, level: u8) {
        self.brightness = level.min(MAX_BRIGHTNESS);
        self.dirty = true;
    }

    /// Current brightness level
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Whether the buffer changed since the last flush
    pub fn is_flush_required(&self) -> bool {
        self.dirty
    }

    /// Record that the buffer has been pushed to hardware
    pub fn mark_flushed(&mut self) {
        self.dirty = false;
    }
}
