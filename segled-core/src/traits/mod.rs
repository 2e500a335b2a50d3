//! Hardware abstraction traits
//!
//! These traits define the interface between the value formatting in this
//! crate and the controller-specific implementations in `segled-drivers`.

pub mod interface;
pub mod module;

pub use interface::{InterfaceError, StrobedInterface, TwoWireInterface};
pub use module::LedModule;
