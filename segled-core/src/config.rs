//! Display configuration types and protocol constants
//!
//! Timing values are mandated by the controller protocols and are not
//! part of the runtime configuration. Only pin assignment, digit count and
//! the initial brightness are configurable.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// TM1637 inter-bit delay in microseconds
pub const TM1637_BIT_DELAY_US: u32 = 100;

/// TM1638 inter-bit delay in microseconds
pub const TM1638_BIT_DELAY_US: u32 = 1;

/// Maximum number of digits any supported module has
pub const MAX_DIGITS: usize = 8;

/// Highest brightness level understood by the controllers
pub const MAX_BRIGHTNESS: u8 = 7;

/// Brightness applied by the construction helpers
pub const DEFAULT_BRIGHTNESS: u8 = 2;

/// Number of digit positions on a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DigitCount {
    /// 4-digit module (typical TM1637 clock display)
    #[default]
    Four,
    /// 6-digit module
    Six,
    /// 8-digit module (typical TM1638 LED&KEY board)
    Eight,
}

impl DigitCount {
    /// Number of digits as a plain integer
    pub const fn get(self) -> u8 {
        match self {
            DigitCount::Four => 4,
            DigitCount::Six => 6,
            DigitCount::Eight => 8,
        }
    }

    /// Parse a plain digit count
    pub const fn from_digits(digits: u8) -> Option<Self> {
        match digits {
            4 => Some(DigitCount::Four),
            6 => Some(DigitCount::Six),
            8 => Some(DigitCount::Eight),
            _ => None,
        }
    }
}

/// Controller family with its pin assignment
///
/// Pin numbers are GPIO numbers on the host MCU. Several displays may
/// share one clock pin; pins within one display must be distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Family {
    /// TM1637: clock + bidirectional data
    Tm1637 {
        /// Data pin (open-drain)
        dio: u8,
        /// Clock pin
        clk: u8,
    },
    /// TM1638: clock + data + strobe
    Tm1638 {
        /// Data pin
        dio: u8,
        /// Clock pin
        clk: u8,
        /// Strobe pin
        stb: u8,
    },
}

impl Family {
    /// Largest module this controller can drive
    pub const fn max_digits(&self) -> u8 {
        match self {
            Family::Tm1637 { .. } => 6,
            Family::Tm1638 { .. } => 8,
        }
    }

    /// Inter-bit delay the protocol requires
    pub const fn bit_delay_us(&self) -> u32 {
        match self {
            Family::Tm1637 { .. } => TM1637_BIT_DELAY_US,
            Family::Tm1638 { .. } => TM1638_BIT_DELAY_US,
        }
    }

    fn has_pin_conflict(&self) -> bool {
        match *self {
            Family::Tm1637 { dio, clk } => dio == clk,
            Family::Tm1638 { dio, clk, stb } => dio == clk || dio == stb || clk == stb,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The controller family cannot drive this many digits
    UnsupportedDigitCount {
        /// Requested digit count
        digits: u8,
        /// Largest count the family supports
        max: u8,
    },
    /// The same pin is assigned to two lines of one display
    PinConflict,
    /// Brightness above [`MAX_BRIGHTNESS`]
    BrightnessOutOfRange(u8),
}

/// Check that a family can drive a module of the given size
pub fn check_digits(max: u8, digits: DigitCount) -> Result<(), ConfigError> {
    if digits.get() > max {
        return Err(ConfigError::UnsupportedDigitCount {
            digits: digits.get(),
            max,
        });
    }
    Ok(())
}

/// Complete configuration for one display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Controller family and pins
    pub family: Family,
    /// Number of digits on the module
    pub digits: DigitCount,
    /// Brightness applied after `begin()` (0-7)
    pub brightness: u8,
}

impl DisplayConfig {
    /// TM1637 display with default brightness
    pub const fn tm1637(dio: u8, clk: u8, digits: DigitCount) -> Self {
        Self {
            family: Family::Tm1637 { dio, clk },
            digits,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// TM1638 display with default brightness
    pub const fn tm1638(dio: u8, clk: u8, stb: u8, digits: DigitCount) -> Self {
        Self {
            family: Family::Tm1638 { dio, clk, stb },
            digits,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Override the initial brightness
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_digits(self.family.max_digits(), self.digits)?;

        if self.family.has_pin_conflict() {
            return Err(ConfigError::PinConflict);
        }

        if self.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::BrightnessOutOfRange(self.brightness));
        }

        Ok(())
    }
}
