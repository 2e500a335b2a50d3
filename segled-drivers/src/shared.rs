//! Pins shared between several displays
//!
//! Multi-display boards commonly run one clock line to every controller
//! and give each its own data line. A controller ignores the clock while
//! its own start condition (TM1637) or strobe (TM1638) is inactive, so one
//! GPIO can be handed to several transports.
//!
//! [`SharedPin`] wraps a `RefCell` borrow of the real pin. Each transfer
//! borrows it only for a single level change, and all displays run on the
//! same thread, so the borrows never overlap.

use core::cell::RefCell;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Handle to a pin owned by a `RefCell`
pub struct SharedPin<'a, P> {
    pin: &'a RefCell<P>,
}

impl<'a, P> SharedPin<'a, P> {
    pub fn new(pin: &'a RefCell<P>) -> Self {
        Self { pin }
    }
}

impl<P> Clone for SharedPin<'_, P> {
    fn clone(&self) -> Self {
        Self { pin: self.pin }
    }
}

impl<P: ErrorType> ErrorType for SharedPin<'_, P> {
    type Error = P::Error;
}

impl<P: OutputPin> OutputPin for SharedPin<'_, P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.borrow_mut().set_low()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.borrow_mut().set_high()
    }
}

impl<P: InputPin> InputPin for SharedPin<'_, P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin.borrow_mut().is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.pin.borrow_mut().is_low()
    }
}
