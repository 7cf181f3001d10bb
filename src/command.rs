//! Command-based control for LED controllers.

use palette::Srgb;

use crate::colors::PredefinedColor;

/// Actions for controlling an LED.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LedAction {
    /// Turn on with the staged color.
    TurnOn,
    /// Turn off.
    TurnOff,
    /// Set predefined color.
    SetPredefined(PredefinedColor),
    /// Set custom 8-bit color.
    SetCustom(Srgb<u8>),
}

impl From<PredefinedColor> for LedAction {
    fn from(color: PredefinedColor) -> Self {
        LedAction::SetPredefined(color)
    }
}

/// Command targeting a specific LED.
#[derive(Debug, Clone, Copy)]
pub struct LedCommand<Id> {
    pub led_id: Id,
    pub action: LedAction,
}

impl<Id> LedCommand<Id> {
    /// Creates command.
    pub fn new(led_id: Id, action: LedAction) -> Self {
        Self { led_id, action }
    }
}
