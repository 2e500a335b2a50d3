//! Controller driver implementations
//!
//! This crate provides concrete implementations of the traits defined in
//! segled-core for the supported display controllers:
//!
//! - Bit-banged transports over `embedded-hal` GPIO (TM1637, TM1638)
//! - LED modules that speak each controller's command set
//! - Enum dispatch over both families for config-driven setups
//! - Shared pins for several displays on one clock line
//! - Construction helpers that hand back a ready [`Display`]
//!
//! [`Display`]: segled_core::Display

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod factory;
pub mod module;
pub mod shared;
pub mod tmi;

#[cfg(test)]
mod testing;

pub use factory::{
    build_display, create_tm1637, create_tm1638, FactoryError, PinSource, Tm1637Display,
    Tm1638Display,
};
pub use module::{AnyModule, Tm1637Module, Tm1638Module};
pub use shared::SharedPin;
pub use tmi::{SimpleTmi1637, SimpleTmi1638};
