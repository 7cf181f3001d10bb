//! Core types for LED configuration and duty-cycle conversion.

use palette::Srgb;

use crate::colors::{CUSTOM_COLOR_INDEX, PredefinedColor};

/// Highest duty cycle a channel is ever driven with, in percent.
pub const MAX_DUTY_CYCLE: u8 = 100;

/// Electrical wiring of the RGB LED.
///
/// Determines whether a higher duty cycle makes a channel brighter
/// (common cathode) or dimmer (common anode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Polarity {
    /// Shared anode; a channel lights while its PWM output is low.
    CommonAnode = 0,

    /// Shared cathode; a channel lights while its PWM output is high.
    CommonCathode = 1,
}

impl Polarity {
    /// Converts one 8-bit color component to a duty cycle in percent.
    ///
    /// `component * 100 / 255` truncated, inverted as `100 - duty` for
    /// common anode wiring.
    #[inline]
    pub fn duty_cycle(self, component: u8) -> u8 {
        let duty = (component as u16 * MAX_DUTY_CYCLE as u16 / u8::MAX as u16) as u8;

        match self {
            Polarity::CommonAnode => MAX_DUTY_CYCLE - duty,
            Polarity::CommonCathode => duty,
        }
    }

    /// Duty cycle that keeps a channel dark.
    #[inline]
    pub fn inactive_duty_cycle(self) -> u8 {
        match self {
            Polarity::CommonAnode => MAX_DUTY_CYCLE,
            Polarity::CommonCathode => 0,
        }
    }
}

impl TryFrom<u8> for Polarity {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Polarity::CommonAnode),
            1 => Ok(Polarity::CommonCathode),
            other => Err(ConfigError::InvalidPolarity(other)),
        }
    }
}

/// Per-channel duty cycles in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyCycle {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl DutyCycle {
    /// Creates a duty-cycle triplet.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Same duty cycle on all three channels.
    #[inline]
    pub const fn uniform(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Converts an 8-bit color to duty cycles for the given wiring.
    #[inline]
    pub fn from_color(color: Srgb<u8>, polarity: Polarity) -> Self {
        Self {
            red: polarity.duty_cycle(color.red),
            green: polarity.duty_cycle(color.green),
            blue: polarity.duty_cycle(color.blue),
        }
    }
}

/// Color selection for configuration and color-setting operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSpec {
    /// Entry from the predefined color table.
    Predefined(PredefinedColor),

    /// Arbitrary 8-bit RGB triplet.
    Custom(Srgb<u8>),
}

impl ColorSpec {
    /// Resolves to 8-bit RGB components.
    #[inline]
    pub fn rgb(self) -> Srgb<u8> {
        match self {
            ColorSpec::Predefined(color) => color.rgb(),
            ColorSpec::Custom(color) => color,
        }
    }
}

impl From<PredefinedColor> for ColorSpec {
    fn from(color: PredefinedColor) -> Self {
        ColorSpec::Predefined(color)
    }
}

impl From<Srgb<u8>> for ColorSpec {
    fn from(color: Srgb<u8>) -> Self {
        ColorSpec::Custom(color)
    }
}

impl From<Srgb> for ColorSpec {
    /// Scales 0.0-1.0 float components to 0-255.
    fn from(color: Srgb) -> Self {
        ColorSpec::Custom(color.into_format::<u8>())
    }
}

/// Initial configuration of an LED controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedConfig {
    /// LED wiring.
    pub polarity: Polarity,

    /// Color staged at construction.
    pub initial_color: ColorSpec,

    /// Whether the LED lights up right after construction.
    pub initial_state: bool,
}

impl LedConfig {
    /// Creates a configuration for a white LED that starts turned off.
    pub fn new(polarity: Polarity) -> Self {
        Self {
            polarity,
            initial_color: ColorSpec::Predefined(PredefinedColor::White),
            initial_state: false,
        }
    }

    /// Sets the initial color.
    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.initial_color = color.into();
        self
    }

    /// Sets whether the LED is turned on right after construction.
    pub fn turned_on(mut self, on: bool) -> Self {
        self.initial_state = on;
        self
    }

    /// Builds a configuration from raw, unvalidated values.
    ///
    /// `color_index` selects an entry of the predefined table, or
    /// [`CUSTOM_COLOR_INDEX`] to use `r`, `g`, `b` instead. The components are
    /// ignored for any other index.
    ///
    /// # Errors
    /// * `InvalidPolarity` - `polarity` is neither `0` (anode) nor `1` (cathode)
    /// * `InvalidColor` - `color_index` is above [`CUSTOM_COLOR_INDEX`]
    pub fn from_raw(
        polarity: u8,
        color_index: u8,
        r: u8,
        g: u8,
        b: u8,
        initial_state: bool,
    ) -> Result<Self, ConfigError> {
        let polarity = Polarity::try_from(polarity)?;

        let initial_color = if color_index == CUSTOM_COLOR_INDEX {
            ColorSpec::Custom(Srgb::new(r, g, b))
        } else {
            ColorSpec::Predefined(PredefinedColor::try_from(color_index)?)
        };

        Ok(Self {
            polarity,
            initial_color,
            initial_state,
        })
    }
}

/// One of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No duty-cycle setter supplied for a channel.
    MissingChannel(Channel),

    /// Raw polarity value is not a known wiring.
    InvalidPolarity(u8),

    /// Raw color index is outside the predefined table.
    InvalidColor(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::MissingChannel(channel) => {
                write!(f, "no duty cycle setter for {:?} channel", channel)
            }
            ConfigError::InvalidPolarity(value) => {
                write!(f, "invalid polarity {}, expected 0 (common anode) or 1 (common cathode)", value)
            }
            ConfigError::InvalidColor(index) => {
                write!(f, "invalid predefined color index {}", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Errors returned when creating a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// The supplied configuration was rejected.
    InvalidConfig(ConfigError),

    /// No storage left for another controller.
    AllocationFailure,
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DriverError::InvalidConfig(err) => write!(f, "invalid configuration: {}", err),
            DriverError::AllocationFailure => write!(f, "no free controller slot"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DriverError {}

impl From<ConfigError> for DriverError {
    fn from(err: ConfigError) -> Self {
        DriverError::InvalidConfig(err)
    }
}
