#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`RgbLedController`**: Owns the state of one RGB LED and drives its three channels
//! - **`DutyCycleChannels`**: Trait to implement for your PWM hardware (duty cycle in percent)
//! - **`FnChannels`** / **`PwmChannels`**: Ready-made channel adapters for setter closures and `embedded-hal` PWM outputs
//! - **`Polarity`**: Common anode (inverted duty cycle) or common cathode wiring
//! - **`PredefinedColor`**: The seven built-in colors
//! - **`LedConfig`**: Polarity, initial color and initial on/off state
//! - **`LedRegistry`**: Fixed-capacity storage addressing controllers through `LedHandle`s
//! - **`LedAction`**: Commands that can be sent to control an LED
//!
//! Colors are 8-bit `Srgb<u8>` triplets. Each component is scaled to a duty cycle as
//! `component * 100 / 255`, inverted for common anode wiring. Color changes made while
//! the LED is off are staged and only reach the hardware on the next `turn_on`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod channels;
pub mod colors;
pub mod command;
pub mod controller;
pub mod registry;
pub mod types;

pub use channels::{DutyCycleChannels, FnChannels, PwmChannels};
pub use colors::{CUSTOM_COLOR_INDEX, PredefinedColor, UnknownColorName};
pub use command::{LedAction, LedCommand};
pub use controller::RgbLedController;
pub use registry::{LedHandle, LedRegistry};
pub use types::{
    Channel, ColorSpec, ConfigError, DriverError, DutyCycle, LedConfig, MAX_DUTY_CYCLE, Polarity,
};
