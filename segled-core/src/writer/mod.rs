//! Segment-pattern writer pipeline
//!
//! Each stage wraps the one below it and adds higher-level semantics:
//!
//! ```text
//! ClockWriter ──┐
//!               ├──► NumberWriter ──► PatternWriter ──► &mut LedModule
//! TemperatureWriter ┘
//! ```
//!
//! The chain borrows the module for as long as it lives. Writers only
//! change the in-memory patterns; flushing is left to the owner of the
//! module.

pub mod clock;
pub mod number;
pub mod pattern;
pub mod temperature;

pub use clock::ClockWriter;
pub use number::NumberWriter;
pub use pattern::PatternWriter;
pub use temperature::TemperatureWriter;
