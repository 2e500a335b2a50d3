//! LED module implementations
//!
//! A module owns a transport and a [`DigitBuffer`](segled_core::DigitBuffer)
//! and knows the controller's command set. Both families share the same
//! three-command flush:
//!
//! 1. data command (auto-increment addressing)
//! 2. address command followed by the digit bytes
//! 3. display control (on + brightness)

mod any;
mod tm1637;
mod tm1638;

pub use any::AnyModule;
pub use tm1637::Tm1637Module;
pub use tm1638::Tm1638Module;

/// Controller command bytes shared by TM1637 and TM1638
pub mod cmd {
    /// Write data, auto-increment address
    pub const DATA_AUTO_ADDRESS: u8 = 0x40;
    /// Set address to digit 0
    pub const ADDRESS: u8 = 0xC0;
    /// Display on; OR in the brightness (0-7)
    pub const DISPLAY_ON: u8 = 0x88;

    /// Display control byte for a brightness level
    pub const fn display_on(brightness: u8) -> u8 {
        DISPLAY_ON | (brightness & 0x07)
    }
}
