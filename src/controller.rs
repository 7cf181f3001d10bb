//! RGB LED controller with polarity-aware duty cycles and staged color updates.
//!
//! Provides [`RgbLedController`], which owns the state of a single RGB LED and
//! drives its three channels through a [`DutyCycleChannels`] implementation.

use palette::Srgb;

use crate::channels::{DutyCycleChannels, FnChannels};
use crate::colors::PredefinedColor;
use crate::command::LedAction;
use crate::types::{ColorSpec, DriverError, DutyCycle, LedConfig, Polarity};

/// Controls a single RGB LED.
///
/// The controller keeps the most recently requested color as a duty-cycle
/// triplet. While the LED is on, every color change is written to the
/// channels immediately. While it is off, color changes are only staged and
/// the channels stay at the inactive duty cycle until [`turn_on`] is called.
///
/// The controller performs no locking. Exclusive `&mut` access is required for
/// every operation that touches hardware.
///
/// # Type Parameters
/// * `C` - Duty-cycle channel implementation
///
/// [`turn_on`]: RgbLedController::turn_on
pub struct RgbLedController<C: DutyCycleChannels> {
    channels: C,
    polarity: Polarity,
    duty_cycle: DutyCycle,
    is_on: bool,
}

impl<C: DutyCycleChannels> RgbLedController<C> {
    /// Creates a controller and drives the channels to a defined state.
    ///
    /// All three channels are written before this returns: with the initial
    /// color if `config.initial_state` is set, otherwise with the inactive
    /// duty cycle for the configured polarity.
    pub fn new(mut channels: C, config: LedConfig) -> Self {
        let duty_cycle = DutyCycle::from_color(config.initial_color.rgb(), config.polarity);

        let output = if config.initial_state {
            duty_cycle
        } else {
            DutyCycle::uniform(config.polarity.inactive_duty_cycle())
        };
        channels.set_all(output);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "rgb led created: polarity={}, duty={}, on={}",
            config.polarity,
            duty_cycle,
            config.initial_state
        );

        Self {
            channels,
            polarity: config.polarity,
            duty_cycle,
            is_on: config.initial_state,
        }
    }

    /// Handles an action by dispatching to the matching method.
    pub fn handle_action(&mut self, action: LedAction) {
        match action {
            LedAction::TurnOn => self.turn_on(),
            LedAction::TurnOff => self.turn_off(),
            LedAction::SetPredefined(color) => self.set_predefined_color(color),
            LedAction::SetCustom(color) => self.set_custom_color(color.red, color.green, color.blue),
        }
    }

    /// Lights the LED with the staged color.
    ///
    /// Channels are written even if the LED is already on.
    pub fn turn_on(&mut self) {
        self.channels.set_all(self.duty_cycle);
        self.is_on = true;

        #[cfg(feature = "defmt")]
        defmt::trace!("rgb led on: duty={}", self.duty_cycle);
    }

    /// Drives all channels to the inactive duty cycle.
    ///
    /// The staged color is kept and restored by the next [`turn_on`](Self::turn_on).
    pub fn turn_off(&mut self) {
        self.channels
            .set_all(DutyCycle::uniform(self.polarity.inactive_duty_cycle()));
        self.is_on = false;

        #[cfg(feature = "defmt")]
        defmt::trace!("rgb led off");
    }

    /// Sets one of the predefined colors.
    ///
    /// Written to the channels only while the LED is on.
    pub fn set_predefined_color(&mut self, color: PredefinedColor) {
        self.set_color(color.rgb());
    }

    /// Sets a predefined color by table index.
    ///
    /// Does nothing if `index` is outside the table, including the custom
    /// sentinel index.
    pub fn set_predefined_color_index(&mut self, index: usize) {
        match PredefinedColor::from_index(index) {
            Some(color) => self.set_predefined_color(color),
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("ignoring predefined color index {}", index);
            }
        }
    }

    /// Sets an arbitrary 8-bit RGB color.
    ///
    /// Written to the channels only while the LED is on.
    pub fn set_custom_color(&mut self, r: u8, g: u8, b: u8) {
        self.set_color(Srgb::new(r, g, b));
    }

    /// Sets a color from any [`ColorSpec`] source.
    ///
    /// Written to the channels only while the LED is on.
    pub fn set_color(&mut self, color: impl Into<ColorSpec>) {
        self.duty_cycle = DutyCycle::from_color(color.into().rgb(), self.polarity);

        if self.is_on {
            self.channels.set_all(self.duty_cycle);
        }
    }

    /// Returns the wiring polarity.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the staged duty cycles, regardless of on/off state.
    pub fn duty_cycle(&self) -> DutyCycle {
        self.duty_cycle
    }

    /// Returns true if the LED is turned on.
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the duty cycles the channels were last driven with.
    pub fn output(&self) -> DutyCycle {
        if self.is_on {
            self.duty_cycle
        } else {
            DutyCycle::uniform(self.polarity.inactive_duty_cycle())
        }
    }

    /// Returns a reference to the channels.
    pub fn channels(&self) -> &C {
        &self.channels
    }

    /// Returns a mutable reference to the channels.
    ///
    /// Writing to the channels directly bypasses the controller state.
    pub fn channels_mut(&mut self) -> &mut C {
        &mut self.channels
    }

    /// Consumes the controller and returns the channels untouched.
    pub fn release(self) -> C {
        self.channels
    }
}

impl<R, G, B> RgbLedController<FnChannels<R, G, B>>
where
    R: FnMut(u8),
    G: FnMut(u8),
    B: FnMut(u8),
{
    /// Creates a controller from three optional setter functions.
    ///
    /// Nothing is written if any setter is missing.
    ///
    /// # Errors
    /// `InvalidConfig(MissingChannel)` if a setter is `None`.
    pub fn from_fns(
        red: Option<R>,
        green: Option<G>,
        blue: Option<B>,
        config: LedConfig,
    ) -> Result<Self, DriverError> {
        let channels = FnChannels::try_new(red, green, blue).inspect_err(|_err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("rgb led rejected: {}", _err);
        })?;

        Ok(Self::new(channels, config))
    }
}
