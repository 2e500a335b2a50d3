//! Display construction helpers
//!
//! These functions are the only place where pins, digit count and the
//! controller family come together. Each one builds the transport and the
//! module, wraps them in a [`Display`], runs `begin()` and applies the
//! initial brightness. Nothing is flushed, so the hardware keeps whatever
//! it showed until the first write.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use segled_core::config::{ConfigError, DigitCount, DisplayConfig, Family, DEFAULT_BRIGHTNESS};
use segled_core::traits::{InterfaceError, LedModule};
use segled_core::Display;

use crate::module::{AnyModule, Tm1637Module, Tm1638Module};
use crate::tmi::{SimpleTmi1637, SimpleTmi1638};

/// Ready-to-use TM1637 display
pub type Tm1637Display<DIO, CLK, D> = Display<Tm1637Module<SimpleTmi1637<DIO, CLK, D>>>;

/// Ready-to-use TM1638 display
pub type Tm1638Display<DIO, CLK, STB, D> =
    Display<Tm1638Module<SimpleTmi1638<DIO, CLK, STB, D>>>;

/// Module built from a [`DisplayConfig`]
pub type ConfiguredModule<P, D> =
    AnyModule<SimpleTmi1637<P, P, D>, SimpleTmi1638<P, P, P, D>>;

/// Errors from the construction helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FactoryError {
    /// Invalid configuration
    Config(ConfigError),
    /// The pin source could not provide this GPIO
    PinUnavailable(u8),
    /// `begin()` failed
    Transport(InterfaceError),
}

impl From<ConfigError> for FactoryError {
    fn from(err: ConfigError) -> Self {
        FactoryError::Config(err)
    }
}

impl From<InterfaceError> for FactoryError {
    fn from(err: InterfaceError) -> Self {
        FactoryError::Transport(err)
    }
}

/// Resolves GPIO numbers to pin objects
///
/// Implemented by the board glue. A source may hand out the same physical
/// pin more than once (see [`SharedPin`](crate::SharedPin)) when displays
/// share a clock line.
pub trait PinSource {
    /// Pin type handed out for every line
    type Pin: OutputPin + InputPin;

    /// Take the pin with the given GPIO number
    fn take(&mut self, pin: u8) -> Option<Self::Pin>;
}

/// Build a TM1637 display
pub fn create_tm1637<DIO, CLK, D>(
    dio: DIO,
    clk: CLK,
    delay: D,
    digits: DigitCount,
) -> Result<Tm1637Display<DIO, CLK, D>, FactoryError>
where
    DIO: OutputPin + InputPin,
    CLK: OutputPin,
    D: DelayNs,
{
    let module = Tm1637Module::new(SimpleTmi1637::new(dio, clk, delay), digits)?;
    start(module, DEFAULT_BRIGHTNESS)
}

/// Build a TM1638 display
pub fn create_tm1638<DIO, CLK, STB, D>(
    dio: DIO,
    clk: CLK,
    stb: STB,
    delay: D,
    digits: DigitCount,
) -> Result<Tm1638Display<DIO, CLK, STB, D>, FactoryError>
where
    DIO: OutputPin,
    CLK: OutputPin,
    STB: OutputPin,
    D: DelayNs,
{
    let module = Tm1638Module::new(SimpleTmi1638::new(dio, clk, stb, delay), digits)?;
    start(module, DEFAULT_BRIGHTNESS)
}

/// Build a display of either family from a configuration
///
/// The configuration is validated before any pin is taken. The configured
/// brightness replaces [`DEFAULT_BRIGHTNESS`].
pub fn build_display<P, D>(
    config: &DisplayConfig,
    pins: &mut P,
    delay: D,
) -> Result<Display<ConfiguredModule<P::Pin, D>>, FactoryError>
where
    P: PinSource,
    D: DelayNs,
{
    config.validate()?;

    let module = match config.family {
        Family::Tm1637 { dio, clk } => {
            let dio = take(pins, dio)?;
            let clk = take(pins, clk)?;
            AnyModule::Tm1637(Tm1637Module::new(
                SimpleTmi1637::new(dio, clk, delay),
                config.digits,
            )?)
        }
        Family::Tm1638 { dio, clk, stb } => {
            let dio = take(pins, dio)?;
            let clk = take(pins, clk)?;
            let stb = take(pins, stb)?;
            AnyModule::Tm1638(Tm1638Module::new(
                SimpleTmi1638::new(dio, clk, stb, delay),
                config.digits,
            )?)
        }
    };

    start(module, config.brightness)
}

fn take<P: PinSource>(pins: &mut P, pin: u8) -> Result<P::Pin, FactoryError> {
    pins.take(pin).ok_or_else(|| {
        warn!("factory: GPIO {=u8} unavailable", pin);
        FactoryError::PinUnavailable(pin)
    })
}

fn start<M>(module: M, brightness: u8) -> Result<Display<M>, FactoryError>
where
    M: LedModule<Error = InterfaceError>,
{
    let mut display = Display::new(module);
    display.begin()?;
    display.set_brightness(brightness);
    debug!(
        "factory: {=u8}-digit display, brightness {=u8}",
        display.size(),
        display.brightness()
    );
    Ok(display)
}
