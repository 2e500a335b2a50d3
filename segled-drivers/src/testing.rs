//! Test doubles: simulated buses that decode line transitions

extern crate std;

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use segled_core::traits::{InterfaceError, StrobedInterface, TwoWireInterface};

/// Line a probe is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Dio,
    Clk,
    Stb,
}

/// Something that reacts to line levels
pub trait Bus {
    fn drive(&mut self, line: Line, level: bool);
    fn sense(&self, line: Line) -> bool;
}

/// TM1637 receiver: decodes start/stop framed bytes with ACK clocks
pub struct TwoWireBus {
    clk: bool,
    dio: bool,
    in_frame: bool,
    bits: Vec<bool>,
    /// Bytes of each start..stop frame
    pub frames: Vec<Vec<u8>>,
    /// Whether the simulated controller pulls DIO low on the ACK clock
    pub ack: bool,
}

impl TwoWireBus {
    pub fn new() -> Self {
        Self {
            clk: false,
            dio: false,
            in_frame: false,
            bits: Vec::new(),
            frames: Vec::new(),
            ack: true,
        }
    }

    pub fn lines(&self) -> (bool, bool) {
        (self.dio, self.clk)
    }
}

impl Bus for TwoWireBus {
    fn drive(&mut self, line: Line, level: bool) {
        match line {
            Line::Clk => {
                if level && !self.clk && self.in_frame {
                    self.bits.push(self.dio);
                    // 8 data bits + ACK clock
                    if self.bits.len() == 9 {
                        let byte = pack_lsb_first(&self.bits[..8]);
                        if let Some(frame) = self.frames.last_mut() {
                            frame.push(byte);
                        }
                        self.bits.clear();
                    }
                }
                self.clk = level;
            }
            Line::Dio => {
                if self.clk && self.dio && !level {
                    self.in_frame = true;
                    self.frames.push(Vec::new());
                    self.bits.clear();
                } else if self.clk && !self.dio && level && self.in_frame {
                    self.in_frame = false;
                    self.bits.clear();
                }
                self.dio = level;
            }
            Line::Stb => {}
        }
    }

    fn sense(&self, line: Line) -> bool {
        match line {
            Line::Dio => self.dio && !self.ack,
            Line::Clk => self.clk,
            Line::Stb => true,
        }
    }
}

/// TM1638 receiver: decodes strobe framed bytes
pub struct StrobedBus {
    clk: bool,
    dio: bool,
    stb: bool,
    bits: Vec<bool>,
    /// Bytes of each strobe-low frame
    pub frames: Vec<Vec<u8>>,
}

impl StrobedBus {
    pub fn new() -> Self {
        Self {
            clk: true,
            dio: true,
            stb: true,
            bits: Vec::new(),
            frames: Vec::new(),
        }
    }

    pub fn lines(&self) -> (bool, bool, bool) {
        (self.dio, self.clk, self.stb)
    }
}

impl Bus for StrobedBus {
    fn drive(&mut self, line: Line, level: bool) {
        match line {
            Line::Stb => {
                if self.stb && !level {
                    self.frames.push(Vec::new());
                    self.bits.clear();
                }
                self.stb = level;
            }
            Line::Clk => {
                if level && !self.clk && !self.stb {
                    self.bits.push(self.dio);
                    if self.bits.len() == 8 {
                        let byte = pack_lsb_first(&self.bits);
                        if let Some(frame) = self.frames.last_mut() {
                            frame.push(byte);
                        }
                        self.bits.clear();
                    }
                }
                self.clk = level;
            }
            Line::Dio => self.dio = level,
        }
    }

    fn sense(&self, line: Line) -> bool {
        match line {
            Line::Dio => self.dio,
            Line::Clk => self.clk,
            Line::Stb => self.stb,
        }
    }
}

fn pack_lsb_first(bits: &[bool]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << i))
}

/// GPIO pin wired to one line of a simulated bus
pub struct Probe<'a, B> {
    bus: &'a RefCell<B>,
    line: Line,
}

impl<'a, B> Probe<'a, B> {
    pub fn new(bus: &'a RefCell<B>, line: Line) -> Self {
        Self { bus, line }
    }
}

impl<B> ErrorType for Probe<'_, B> {
    type Error = Infallible;
}

impl<B: Bus> OutputPin for Probe<'_, B> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.bus.borrow_mut().drive(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.bus.borrow_mut().drive(self.line, true);
        Ok(())
    }
}

impl<B: Bus> InputPin for Probe<'_, B> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.bus.borrow().sense(self.line))
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.bus.borrow().sense(self.line))
    }
}

/// Output wired to the same line of two simulated buses
///
/// Reads sense the first bus.
pub struct Tee<'a, B> {
    first: Probe<'a, B>,
    second: Probe<'a, B>,
}

impl<'a, B> Tee<'a, B> {
    pub fn new(first: &'a RefCell<B>, second: &'a RefCell<B>, line: Line) -> Self {
        Self {
            first: Probe::new(first, line),
            second: Probe::new(second, line),
        }
    }
}

impl<B> ErrorType for Tee<'_, B> {
    type Error = Infallible;
}

impl<B: Bus> OutputPin for Tee<'_, B> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.first.set_low()?;
        self.second.set_low()
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.first.set_high()?;
        self.second.set_high()
    }
}

impl<B: Bus> InputPin for Tee<'_, B> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.first.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.first.is_low()
    }
}

/// Pin that fails every operation
pub struct BrokenPin;

#[derive(Debug)]
pub struct BrokenPinError;

impl embedded_hal::digital::Error for BrokenPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = BrokenPinError;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), BrokenPinError> {
        Err(BrokenPinError)
    }

    fn set_high(&mut self) -> Result<(), BrokenPinError> {
        Err(BrokenPinError)
    }
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, BrokenPinError> {
        Err(BrokenPinError)
    }

    fn is_low(&mut self) -> Result<bool, BrokenPinError> {
        Err(BrokenPinError)
    }
}

/// Delay that only adds up how long it was asked to wait
pub struct CountingDelay<'a> {
    total_ns: &'a Cell<u64>,
}

impl<'a> CountingDelay<'a> {
    pub fn new(total_ns: &'a Cell<u64>) -> Self {
        Self { total_ns }
    }
}

impl DelayNs for CountingDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + ns as u64);
    }
}

/// Delay that returns immediately
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Byte-level record of what a module asked its transport to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Begin,
    End,
    Open,
    Close,
    Byte(u8),
}

/// Transport double for module tests
pub struct RecordingInterface {
    pub ops: Vec<Op>,
    /// Value returned for TM1637 ACKs
    pub ack: bool,
    /// Fail every call after this many ops
    pub fail_after: Option<usize>,
}

impl RecordingInterface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            ack: true,
            fail_after: None,
        }
    }

    /// Ops grouped into Open..Close frames
    pub fn frames(&self) -> Vec<Vec<u8>> {
        let mut frames = Vec::new();
        let mut current: Option<Vec<u8>> = None;
        for op in &self.ops {
            match op {
                Op::Open => current = Some(Vec::new()),
                Op::Close => frames.extend(current.take()),
                Op::Byte(b) => {
                    if let Some(frame) = current.as_mut() {
                        frame.push(*b);
                    }
                }
                Op::Begin | Op::End => {}
            }
        }
        frames
    }

    fn record(&mut self, op: Op) -> Result<(), InterfaceError> {
        if let Some(limit) = self.fail_after {
            if self.ops.len() >= limit {
                return Err(InterfaceError::Dio);
            }
        }
        self.ops.push(op);
        Ok(())
    }
}

impl TwoWireInterface for RecordingInterface {
    fn begin(&mut self) -> Result<(), InterfaceError> {
        self.record(Op::Begin)
    }

    fn end(&mut self) -> Result<(), InterfaceError> {
        self.record(Op::End)
    }

    fn start_condition(&mut self) -> Result<(), InterfaceError> {
        self.record(Op::Open)
    }

    fn stop_condition(&mut self) -> Result<(), InterfaceError> {
        self.record(Op::Close)
    }

    fn send_byte(&mut self, byte: u8) -> Result<bool, InterfaceError> {
        self.record(Op::Byte(byte))?;
        Ok(self.ack)
    }
}

impl StrobedInterface for RecordingInterface {
    fn begin(&mut self) -> Result<(), InterfaceError> {
        self.record(Op::Begin)
    }

    fn end(&mut self) -> Result<(), InterfaceError> {
        self.record(Op::End)
    }

    fn begin_transaction(&mut self) -> Result<(), InterfaceError> {
        self.record(Op::Open)
    }

    fn end_transaction(&mut self) -> Result<(), InterfaceError> {
        self.record(Op::Close)
    }

    fn send_byte(&mut self, byte: u8) -> Result<(), InterfaceError> {
        self.record(Op::Byte(byte))
    }
}
