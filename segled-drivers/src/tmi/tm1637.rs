//! TM1637 two-wire interface
//!
//! The TM1637 uses an I2C-like protocol without device addresses:
//!
//! - Start: DIO falls while CLK is high
//! - Data: 8 bits LSB first, DIO changes while CLK is low
//! - ACK: the controller pulls DIO low during a ninth clock
//! - Stop: DIO rises while CLK is high
//!
//! DIO must be an open-drain pin that can also be read back (for the ACK).
//! Driving it high releases the line to the pull-up.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use segled_core::config::TM1637_BIT_DELAY_US;
use segled_core::traits::{InterfaceError, TwoWireInterface};

/// Bit-banged TM1637 transport
pub struct SimpleTmi1637<DIO, CLK, D> {
    dio: DIO,
    clk: CLK,
    delay: D,
}

impl<DIO, CLK, D> SimpleTmi1637<DIO, CLK, D>
where
    DIO: OutputPin + InputPin,
    CLK: OutputPin,
    D: DelayNs,
{
    /// Create a new interface
    ///
    /// The lines are not touched until [`begin`](TwoWireInterface::begin).
    pub fn new(dio: DIO, clk: CLK, delay: D) -> Self {
        Self { dio, clk, delay }
    }

    /// Give back the pins and delay
    pub fn release(self) -> (DIO, CLK, D) {
        (self.dio, self.clk, self.delay)
    }

    fn bit_delay(&mut self) {
        self.delay.delay_us(TM1637_BIT_DELAY_US);
    }

    fn clk_high(&mut self) -> Result<(), InterfaceError> {
        self.clk.set_high().map_err(|_| InterfaceError::Clk)?;
        self.bit_delay();
        Ok(())
    }

    fn clk_low(&mut self) -> Result<(), InterfaceError> {
        self.clk.set_low().map_err(|_| InterfaceError::Clk)?;
        self.bit_delay();
        Ok(())
    }

    fn dio_high(&mut self) -> Result<(), InterfaceError> {
        self.dio.set_high().map_err(|_| InterfaceError::Dio)?;
        self.bit_delay();
        Ok(())
    }

    fn dio_low(&mut self) -> Result<(), InterfaceError> {
        self.dio.set_low().map_err(|_| InterfaceError::Dio)?;
        self.bit_delay();
        Ok(())
    }

    /// Clock the ACK bit, returning true if the controller pulled DIO low
    fn read_ack(&mut self) -> Result<bool, InterfaceError> {
        self.dio_high()?;
        self.clk_high()?;
        let ack = self.dio.is_low().map_err(|_| InterfaceError::Dio)?;
        self.clk_low()?;
        Ok(ack)
    }
}

impl<DIO, CLK, D> TwoWireInterface for SimpleTmi1637<DIO, CLK, D>
where
    DIO: OutputPin + InputPin,
    CLK: OutputPin,
    D: DelayNs,
{
    fn begin(&mut self) -> Result<(), InterfaceError> {
        self.clk_high()?;
        self.dio_high()
    }

    fn end(&mut self) -> Result<(), InterfaceError> {
        self.clk_high()?;
        self.dio_high()
    }

    fn start_condition(&mut self) -> Result<(), InterfaceError> {
        self.clk_high()?;
        self.dio_high()?;
        self.dio_low()?;
        self.clk_low()
    }

    fn stop_condition(&mut self) -> Result<(), InterfaceError> {
        self.dio_low()?;
        self.clk_high()?;
        self.dio_high()
    }

    fn send_byte(&mut self, byte: u8) -> Result<bool, InterfaceError> {
        let mut data = byte;
        for _ in 0..8 {
            if data & 0x01 != 0 {
                self.dio_high()?;
            } else {
                self.dio_low()?;
            }
            self.clk_high()?;
            self.clk_low()?;
            data >>= 1;
        }
        self.read_ack()
    }
}
