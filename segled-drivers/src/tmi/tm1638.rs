//! TM1638 strobed interface
//!
//! The TM1638 uses a 3-wire SPI-like protocol:
//!
//! - STB low opens a command, STB high closes it
//! - Data: 8 bits LSB first, DIO changes while CLK is low and is latched on
//!   the rising edge
//!
//! There is no ACK. DIO is only ever driven by us (key scanning is not
//! supported), so a push-pull output is enough.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use segled_core::config::TM1638_BIT_DELAY_US;
use segled_core::traits::{InterfaceError, StrobedInterface};

/// Bit-banged TM1638 transport
pub struct SimpleTmi1638<DIO, CLK, STB, D> {
    dio: DIO,
    clk: CLK,
    stb: STB,
    delay: D,
}

impl<DIO, CLK, STB, D> SimpleTmi1638<DIO, CLK, STB, D>
where
    DIO: OutputPin,
    CLK: OutputPin,
    STB: OutputPin,
    D: DelayNs,
{
    /// Create a new interface
    pub fn new(dio: DIO, clk: CLK, stb: STB, delay: D) -> Self {
        Self {
            dio,
            clk,
            stb,
            delay,
        }
    }

    /// Give back the pins and delay
    pub fn release(self) -> (DIO, CLK, STB, D) {
        (self.dio, self.clk, self.stb, self.delay)
    }

    fn bit_delay(&mut self) {
        self.delay.delay_us(TM1638_BIT_DELAY_US);
    }

    fn set_clk(&mut self, high: bool) -> Result<(), InterfaceError> {
        self.clk
            .set_state(high.into())
            .map_err(|_| InterfaceError::Clk)?;
        self.bit_delay();
        Ok(())
    }

    fn set_dio(&mut self, high: bool) -> Result<(), InterfaceError> {
        self.dio
            .set_state(high.into())
            .map_err(|_| InterfaceError::Dio)?;
        self.bit_delay();
        Ok(())
    }

    fn set_stb(&mut self, high: bool) -> Result<(), InterfaceError> {
        self.stb
            .set_state(high.into())
            .map_err(|_| InterfaceError::Stb)?;
        self.bit_delay();
        Ok(())
    }

    fn idle(&mut self) -> Result<(), InterfaceError> {
        self.set_stb(true)?;
        self.set_clk(true)?;
        self.set_dio(true)
    }
}

impl<DIO, CLK, STB, D> StrobedInterface for SimpleTmi1638<DIO, CLK, STB, D>
where
    DIO: OutputPin,
    CLK: OutputPin,
    STB: OutputPin,
    D: DelayNs,
{
    fn begin(&mut self) -> Result<(), InterfaceError> {
        self.idle()
    }

    fn end(&mut self) -> Result<(), InterfaceError> {
        self.idle()
    }

    fn begin_transaction(&mut self) -> Result<(), InterfaceError> {
        self.set_stb(false)
    }

    fn end_transaction(&mut self) -> Result<(), InterfaceError> {
        self.set_stb(true)
    }

    fn send_byte(&mut self, byte: u8) -> Result<(), InterfaceError> {
        let mut data = byte;
        for _ in 0..8 {
            self.set_clk(false)?;
            self.set_dio(data & 0x01 != 0)?;
            self.set_clk(true)?;
            data >>= 1;
        }
        Ok(())
    }
}
