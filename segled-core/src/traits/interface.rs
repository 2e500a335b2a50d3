//! Transport interface traits
//!
//! The two controller families speak different serial protocols over
//! plain GPIO lines. These traits cover exactly what the modules need from
//! each transport and nothing about digit state.

/// Errors raised by a transport interface
///
/// Identifies which line failed to switch. GPIO implementations rarely
/// fail, but `embedded-hal` pins are fallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceError {
    /// Data line
    Dio,
    /// Clock line
    Clk,
    /// Strobe line
    Stb,
}

/// Two-wire transport (TM1637 family)
///
/// An I2C-like protocol without addresses: start condition, bytes sent
/// LSB first each followed by an ACK clock, stop condition.
pub trait TwoWireInterface {
    /// Put both lines into their idle (released) state
    fn begin(&mut self) -> Result<(), InterfaceError>;

    /// Release both lines
    fn end(&mut self) -> Result<(), InterfaceError>;

    /// Signal the start of a command
    fn start_condition(&mut self) -> Result<(), InterfaceError>;

    /// Signal the end of a command
    fn stop_condition(&mut self) -> Result<(), InterfaceError>;

    /// Send one byte
    ///
    /// Returns `true` if the controller acknowledged it.
    fn send_byte(&mut self, byte: u8) -> Result<bool, InterfaceError>;
}

/// Strobe-framed transport (TM1638 family)
///
/// An SPI-like protocol: strobe low opens a transaction, bytes are clocked
/// out LSB first, strobe high closes it.
pub trait StrobedInterface {
    /// Put all lines into their idle state
    fn begin(&mut self) -> Result<(), InterfaceError>;

    /// Release all lines
    fn end(&mut self) -> Result<(), InterfaceError>;

    /// Pull strobe low
    fn begin_transaction(&mut self) -> Result<(), InterfaceError>;

    /// Release strobe
    fn end_transaction(&mut self) -> Result<(), InterfaceError>;

    /// Send one byte
    fn send_byte(&mut self, byte: u8) -> Result<(), InterfaceError>;
}
