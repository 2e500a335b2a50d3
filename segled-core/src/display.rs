//! Display facade
//!
//! [`Display`] owns one [`LedModule`] and turns domain values into pattern
//! writes. Every `write_*` call follows the same sequence:
//!
//! 1. clear the pattern buffer
//! 2. encode the value through the writer pipeline
//! 3. flush to the hardware
//!
//! The sequence runs unconditionally, even if the value has not changed.
//!
//! A `Display` is meant to be driven by exactly one telemetry handler.
//! Move it into the handler closure; there is no internal locking.

use crate::timestamp::{Timestamp, TimestampError};
use crate::traits::LedModule;
use crate::units::{kelvin_to_celsius, kelvin_to_fahrenheit, truncate_degrees};
use crate::writer::{ClockWriter, NumberWriter, PatternWriter, TemperatureWriter};

/// Decimals shown by [`Display::write_float`]
pub const DEFAULT_FLOAT_PRECISION: u8 = 2;

/// Errors from display writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// The module failed to talk to the hardware
    Transport(E),
    /// A timestamp could not be parsed; nothing was rendered
    Timestamp(TimestampError),
}

impl<E> From<TimestampError> for DisplayError<E> {
    fn from(err: TimestampError) -> Self {
        DisplayError::Timestamp(err)
    }
}

/// Seven-segment display with value-typed writes
pub struct Display<M> {
    module: M,
}

impl<M: LedModule> Display<M> {
    /// Wrap a module
    ///
    /// [`begin`](Self::begin) must be called before the first write. The
    /// construction helpers in `segled-drivers` do this for you.
    pub fn new(module: M) -> Self {
        Self { module }
    }

    /// Initialize the transport, then the module
    pub fn begin(&mut self) -> Result<(), M::Error> {
        self.module.begin()
    }

    /// Push the pattern buffer to the hardware
    pub fn flush(&mut self) -> Result<(), M::Error> {
        self.module.flush()
    }

    /// Blank the pattern buffer without flushing
    pub fn clear(&mut self) {
        self.patterns().clear();
    }

    /// Set the brightness (0-7, higher levels saturate)
    ///
    /// Takes effect on the next flush.
    pub fn set_brightness(&mut self, level: u8) {
        self.module.set_brightness(level);
    }

    /// Current brightness
    pub fn brightness(&self) -> u8 {
        self.module.brightness()
    }

    /// Number of digits
    pub fn size(&self) -> u8 {
        self.module.size()
    }

    /// Borrow the module
    pub fn module(&self) -> &M {
        &self.module
    }

    /// Mutably borrow the module
    pub fn module_mut(&mut self) -> &mut M {
        &mut self.module
    }

    /// Give the module back
    pub fn release(self) -> M {
        self.module
    }

    /// Write an integer right-justified across the whole display
    ///
    /// Equivalent to `printf("%*d", size, value)`. Digits that do not fit
    /// are dropped from the right.
    pub fn write_signed_decimal(&mut self, value: i32) -> Result<(), DisplayError<M::Error>> {
        self.clear();
        let width = self.size();
        self.numbers().write_signed_decimal(value, width);
        self.flush_or_transport()
    }

    /// Write a float with [`DEFAULT_FLOAT_PRECISION`] decimals
    pub fn write_float(&mut self, value: f32) -> Result<(), DisplayError<M::Error>> {
        self.write_float_with_precision(value, DEFAULT_FLOAT_PRECISION)
    }

    /// Write a float with the given number of decimals
    ///
    /// The value is left-justified and the decimal point uses the DP
    /// segment of the preceding digit. Modules without DP segments simply
    /// do not show it.
    pub fn write_float_with_precision(
        &mut self,
        value: f32,
        precision: u8,
    ) -> Result<(), DisplayError<M::Error>> {
        self.clear();
        self.numbers().write_float(value, precision);
        self.flush_or_transport()
    }

    /// Write a Kelvin temperature as whole degrees Celsius with `°C`
    pub fn write_temp_deg_c(&mut self, kelvin: f32) -> Result<(), DisplayError<M::Error>> {
        self.clear();
        let degrees = truncate_degrees(kelvin_to_celsius(kelvin));
        let width = self.size();
        self.temperatures().write_temp_deg_c(degrees, width);
        self.flush_or_transport()
    }

    /// Write a Kelvin temperature as whole degrees Fahrenheit with `°F`
    pub fn write_temp_deg_f(&mut self, kelvin: f32) -> Result<(), DisplayError<M::Error>> {
        self.clear();
        let degrees = truncate_degrees(kelvin_to_fahrenheit(kelvin));
        let width = self.size();
        self.temperatures().write_temp_deg_f(degrees, width);
        self.flush_or_transport()
    }

    /// Write the hour and minute of an ISO-8601 timestamp as `HH:MM`
    ///
    /// If the timestamp cannot be parsed the display is left untouched
    /// (no clear, no flush) and the parse error is returned.
    pub fn write_hour_minute_24(&mut self, iso8601: &str) -> Result<(), DisplayError<M::Error>> {
        let ts = parse_logged(iso8601)?;
        self.write_clock(ts.hour, ts.minute)
    }

    /// Write the minute and second of an ISO-8601 timestamp as `MM:SS`
    ///
    /// Uses the hour:minute layout with the minute in the hour field and
    /// the second in the minute field. Parse failures behave as in
    /// [`write_hour_minute_24`](Self::write_hour_minute_24).
    pub fn write_minutes_seconds(&mut self, iso8601: &str) -> Result<(), DisplayError<M::Error>> {
        let ts = parse_logged(iso8601)?;
        self.write_clock(ts.minute, ts.second)
    }

    fn write_clock(&mut self, high: u32, low: u32) -> Result<(), DisplayError<M::Error>> {
        self.clear();
        self.clock().write_hour_minute_24(high, low);
        self.flush_or_transport()
    }

    fn flush_or_transport(&mut self) -> Result<(), DisplayError<M::Error>> {
        self.module.flush().map_err(DisplayError::Transport)
    }

    fn patterns(&mut self) -> PatternWriter<'_, M> {
        PatternWriter::new(&mut self.module)
    }

    fn numbers(&mut self) -> NumberWriter<'_, M> {
        NumberWriter::new(self.patterns())
    }

    fn clock(&mut self) -> ClockWriter<'_, M> {
        ClockWriter::new(self.numbers())
    }

    fn temperatures(&mut self) -> TemperatureWriter<'_, M> {
        TemperatureWriter::new(self.numbers())
    }
}

fn parse_logged(iso8601: &str) -> Result<Timestamp, TimestampError> {
    Timestamp::parse(iso8601).map_err(|err| {
        warn!("rejected timestamp: {}", err);
        err
    })
}
