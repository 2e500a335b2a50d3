//! Enum dispatch over both controller families
//!
//! Lets one `Display` type cover either family when the family is only
//! known at runtime (from a `DisplayConfig`).

use segled_core::traits::{InterfaceError, LedModule, StrobedInterface, TwoWireInterface};

use super::{Tm1637Module, Tm1638Module};

/// Either a TM1637 or a TM1638 module
pub enum AnyModule<A, B> {
    /// Two-wire TM1637 module
    Tm1637(Tm1637Module<A>),
    /// Strobed TM1638 module
    Tm1638(Tm1638Module<B>),
}

impl<A: TwoWireInterface, B: StrobedInterface> AnyModule<A, B> {
    /// Release the transport lines
    pub fn end(&mut self) -> Result<(), InterfaceError> {
        match self {
            AnyModule::Tm1637(m) => m.end(),
            AnyModule::Tm1638(m) => m.end(),
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            AnyModule::Tm1637($m) => $body,
            AnyModule::Tm1638($m) => $body,
        }
    };
}

impl<A: TwoWireInterface, B: StrobedInterface> LedModule for AnyModule<A, B> {
    type Error = InterfaceError;

    fn begin(&mut self) -> Result<(), InterfaceError> {
        dispatch!(self, m => m.begin())
    }

    fn flush(&mut self) -> Result<(), InterfaceError> {
        dispatch!(self, m => m.flush())
    }

    fn size(&self) -> u8 {
        dispatch!(self, m => m.size())
    }

    fn set_pattern_at(&mut self, pos: u8, pattern: u8) {
        dispatch!(self, m => m.set_pattern_at(pos, pattern))
    }

    fn pattern_at(&self, pos: u8) -> u8 {
        dispatch!(self, m => m.pattern_at(pos))
    }

    fn set_brightness(&mut self, level: u8) {
        dispatch!(self, m => m.set_brightness(level))
    }

    fn brightness(&self) -> u8 {
        dispatch!(self, m => m.brightness())
    }

    fn is_flush_required(&self) -> bool {
        dispatch!(self, m => m.is_flush_required())
    }
}
