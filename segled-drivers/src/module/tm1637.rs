//! TM1637 LED module

use segled_core::config::{check_digits, ConfigError, DigitCount};
use segled_core::traits::{InterfaceError, LedModule, TwoWireInterface};
use segled_core::DigitBuffer;

use super::cmd;

/// TM1637 module with up to 6 digits
pub struct Tm1637Module<T> {
    interface: T,
    buffer: DigitBuffer,
}

impl<T: TwoWireInterface> Tm1637Module<T> {
    /// Hardware digit limit
    pub const MAX_DIGITS: u8 = 6;

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

    /// One start..stop frame
    fn send_command(interface: &mut T, command: u8, data: &[u8]) -> Result<(), InterfaceError> {
        interface.start_condition()?;
        let mut acked = interface.send_byte(command)?;
        for &byte in data {
            acked &= interface.send_byte(byte)?;
        }
        interface.stop_condition()?;

        if !acked {
            warn!("tm1637: no ACK for command {=u8:#x}", command);
        }
        Ok(())
    }
}

impl<T: TwoWireInterface> LedModule for Tm1637Module<T> {
    type Error = InterfaceError;

    fn begin(&mut self) -> Result<(), InterfaceError> {
        self.interface.begin()?;
        self.buffer.reset();
        debug!("tm1637: {=u8} digits ready", self.buffer.size());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), InterfaceError> {
        let interface = &mut self.interface;
        Self::send_command(interface, cmd::DATA_AUTO_ADDRESS, &[])?;
        Self::send_command(interface, cmd::ADDRESS, self.buffer.patterns())?;
        Self::send_command(interface, cmd::display_on(self.buffer.brightness()), &[])?;
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
