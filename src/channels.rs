//! Hardware abstraction for the three PWM duty-cycle outputs.
//!
//! Defines the [`DutyCycleChannels`] trait the controller drives, plus two
//! adapters: [`FnChannels`] for plain setter closures and [`PwmChannels`] for
//! `embedded-hal` PWM outputs.

use embedded_hal::pwm::SetDutyCycle;

use crate::types::{Channel, ConfigError, DutyCycle};

/// Trait for abstracting the PWM outputs of an RGB LED.
///
/// Each method receives a duty cycle in percent (0-100), the share of the
/// PWM period the output spends high. Implementations apply it to the
/// matching hardware channel and handle any hardware errors internally -
/// these methods cannot fail.
pub trait DutyCycleChannels {
    /// Sets the duty cycle of the red channel.
    fn set_red(&mut self, percent: u8);

    /// Sets the duty cycle of the green channel.
    fn set_green(&mut self, percent: u8);

    /// Sets the duty cycle of the blue channel.
    fn set_blue(&mut self, percent: u8);

    /// Sets all three channels, red first.
    fn set_all(&mut self, duty: DutyCycle) {
        self.set_red(duty.red);
        self.set_green(duty.green);
        self.set_blue(duty.blue);
    }
}

impl<C: DutyCycleChannels + ?Sized> DutyCycleChannels for &mut C {
    fn set_red(&mut self, percent: u8) {
        (**self).set_red(percent);
    }

    fn set_green(&mut self, percent: u8) {
        (**self).set_green(percent);
    }

    fn set_blue(&mut self, percent: u8) {
        (**self).set_blue(percent);
    }

    fn set_all(&mut self, duty: DutyCycle) {
        (**self).set_all(duty);
    }
}

/// Channels backed by three setter functions.
pub struct FnChannels<R, G, B>
where
    R: FnMut(u8),
    G: FnMut(u8),
    B: FnMut(u8),
{
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> FnChannels<R, G, B>
where
    R: FnMut(u8),
    G: FnMut(u8),
    B: FnMut(u8),
{
    /// Wraps three setters.
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    /// Wraps three optional setters.
    ///
    /// No setter is called by this function.
    ///
    /// # Errors
    /// `MissingChannel` naming the first absent setter, checked red, green, blue.
    pub fn try_new(red: Option<R>, green: Option<G>, blue: Option<B>) -> Result<Self, ConfigError> {
        let red = red.ok_or(ConfigError::MissingChannel(Channel::Red))?;
        let green = green.ok_or(ConfigError::MissingChannel(Channel::Green))?;
        let blue = blue.ok_or(ConfigError::MissingChannel(Channel::Blue))?;

        Ok(Self::new(red, green, blue))
    }

    /// Returns the wrapped setters.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

impl<R, G, B> DutyCycleChannels for FnChannels<R, G, B>
where
    R: FnMut(u8),
    G: FnMut(u8),
    B: FnMut(u8),
{
    fn set_red(&mut self, percent: u8) {
        (self.red)(percent);
    }

    fn set_green(&mut self, percent: u8) {
        (self.green)(percent);
    }

    fn set_blue(&mut self, percent: u8) {
        (self.blue)(percent);
    }
}

/// Channels backed by three `embedded-hal` PWM outputs.
///
/// Percentages are scaled to each output's own maximum duty cycle. Wiring
/// polarity is handled by the controller, so no inversion happens here.
pub struct PwmChannels<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> PwmChannels<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Wraps three PWM outputs.
    ///
    /// # Arguments
    /// * `red` - PWM output connected to the red terminal
    /// * `green` - PWM output connected to the green terminal
    /// * `blue` - PWM output connected to the blue terminal
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    /// Returns the PWM outputs.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

impl<R, G, B> DutyCycleChannels for PwmChannels<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_red(&mut self, percent: u8) {
        let _ = self.red.set_duty_cycle_percent(percent);
    }

    fn set_green(&mut self, percent: u8) {
        let _ = self.green.set_duty_cycle_percent(percent);
    }

    fn set_blue(&mut self, percent: u8) {
        let _ = self.blue.set_duty_cycle_percent(percent);
    }
}
