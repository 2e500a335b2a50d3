//! Temperature unit conversion
//!
//! Telemetry delivers temperatures as absolute values in Kelvin. The
//! display wants whole degrees Celsius or Fahrenheit.

/// Offset between Kelvin and degrees Celsius
pub const KELVIN_OFFSET: f32 = 273.15;

/// Convert Kelvin to degrees Celsius
pub fn kelvin_to_celsius(kelvin: f32) -> f32 {
    kelvin - KELVIN_OFFSET
}

/// Convert Kelvin to degrees Fahrenheit
pub fn kelvin_to_fahrenheit(kelvin: f32) -> f32 {
    celsius_to_fahrenheit(kelvin_to_celsius(kelvin))
}

/// Convert degrees Celsius to degrees Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * (9.0 / 5.0) + 32.0
}

/// Drop the fractional part of a temperature
///
/// Truncates toward zero. Values outside the `i32` range saturate and NaN
/// maps to 0, matching `as` cast semantics.
pub fn truncate_degrees(degrees: f32) -> i32 {
    degrees as i32
}
