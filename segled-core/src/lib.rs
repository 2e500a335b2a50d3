//! Board-agnostic core logic for seven-segment LED displays
//!
//! This crate contains everything that does not depend on a specific
//! controller chip or GPIO implementation:
//!
//! - Hardware abstraction traits (LED module, transport interfaces)
//! - Digit buffer shared by module implementations
//! - Segment glyph table
//! - Writer pipeline (pattern → number → clock / temperature)
//! - Display facade with value-typed writes
//! - Unit conversion and timestamp parsing
//! - Configuration types and protocol constants

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod buffer;
pub mod config;
pub mod display;
pub mod glyph;
pub mod timestamp;
pub mod traits;
pub mod units;
pub mod writer;

#[cfg(test)]
mod testing;

pub use buffer::DigitBuffer;
pub use config::{ConfigError, DigitCount, DisplayConfig, Family};
pub use display::{Display, DisplayError};
pub use timestamp::{Timestamp, TimestampError};
pub use traits::{InterfaceError, LedModule, StrobedInterface, TwoWireInterface};
