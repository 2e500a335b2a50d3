//! TM1638 LED module
//!
//! The TM1638 interleaves digit and LED addresses: even addresses hold the
//! seven-segment pattern, odd addresses the discrete LED above each digit.
//! LEDs are not driven, so every odd address gets a zero byte.

use segled_core::config::{check_digits, ConfigError, DigitCount};
use segled_core::traits::{InterfaceError, LedModule, StrobedInterface};
use segled_core::DigitBuffer;

use super::cmd;

/// TM1638 module with up to 8 digits
pub struct Tm1638Module<T> {
    interface: T,
    buffer: DigitBuffer,
}

impl<T: StrobedInterface> Tm1638Module<T> {
    /// Hardware digit limit
    pub const MAX_DIGITS: u8 = 8;

    /// Create a module on top of a transport
    pub fn new(interface: T, digits: DigitCount) -> Result<Self, ConfigError> {
        check_digits(Self::MAX_DIGITS, digits)?;
        Ok(Self {
            interface,
            buffer: DigitBuffer::new(digits),
        })
    }

    /// Borrow the transport
    pub fn interface(&self) -> &T {
        &self.interface
    }

    /// Release the transport lines
    pub fn end(&mut self) -> Result<(), InterfaceError> {
        self.interface.end()
    }

    /// Give back the transport
    pub fn release(self) -> T {
        self.interface
    }

    fn send_command(&mut self, command: u8) -> Result<(), InterfaceError> {
        self.interface.begin_transaction()?;
        self.interface.send_byte(command)?;
        self.interface.end_transaction()
    }

    fn send_digits(&mut self) -> Result<(), InterfaceError> {
        self.interface.begin_transaction()?;
        self.interface.send_byte(cmd::ADDRESS)?;
        for pos in 0..self.buffer.size() {
            self.interface.send_byte(self.buffer.pattern_at(pos))?;
            self.interface.send_byte(0x00)?;
        }
        self.interface.end_transaction()
    }
}

impl<T: StrobedInterface> LedModule for Tm1638Module<T> {
    type Error = InterfaceError;

    fn begin(&mut self) -> Result<(), InterfaceError> {
        self.interface.begin()?;
        self.buffer.reset();
        debug!("tm1638: {=u8} digits ready", self.buffer.size());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), InterfaceError> {
        self.send_command(cmd::DATA_AUTO_ADDRESS)?;
        self.send_digits()?;
        self.send_command(cmd::display_on(self.buffer.brightness()))?;
        self.buffer.mark_flushed();
        Ok(())
    }

    fn size(&self) -> u8 {
        self.buffer.size()
    }

    fn set_pattern_at(&mut self, pos: u8, pattern: u8) {
        self.buffer.set_pattern_at(pos, pattern);
    }

    fn pattern_at(&self, pos: u8) -> u8 {
        self.buffer.pattern_at(pos)
    }

    fn set_brightness(&mut self, level: u8) {
        self.buffer.set_brightness(level);
    }

    fn brightness(&self) -> u8 {
        self.buffer.brightness()
    }

    fn is_flush_required(&self) -> bool {
        self.buffer.is_flush_required()
    }
}
