use heapless::Vec;

use crate::channels::{DutyCycleChannels, FnChannels};
use crate::colors::PredefinedColor;
use crate::command::{LedAction, LedCommand};
use crate::controller::RgbLedController;
use crate::types::{DriverError, LedConfig};

/// A reference to a controller stored in an [`LedRegistry`].
///
/// Handles are cheap to copy and become stale once the controller they refer
/// to is destroyed. A stale handle never addresses a controller created later
/// in the same slot; every operation taking it does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedHandle {
    index: usize,
    generation: u32,
}

impl LedHandle {
    /// Slot index within the registry.
    pub fn index(&self) -> usize {
        self.index
    }
}

struct Slot<C: DutyCycleChannels> {
    generation: u32,
    controller: Option<RgbLedController<C>>,
}

/// Fixed-capacity storage for RGB LED controllers addressed by handle.
///
/// Creating a controller claims a free slot and returns an [`LedHandle`];
/// destroying it frees the slot and invalidates the handle. All operations
/// other than creation silently ignore invalid handles.
///
/// # Type Parameters
/// * `C` - Channel implementation type (must be same for all LEDs in registry)
/// * `MAX_LEDS` - Maximum number of controllers this registry can hold
pub struct LedRegistry<C: DutyCycleChannels, const MAX_LEDS: usize> {
    slots: [Slot<C>; MAX_LEDS],
}

impl<C: DutyCycleChannels, const MAX_LEDS: usize> LedRegistry<C, MAX_LEDS> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| Slot {
                generation: 0,
                controller: None,
            }),
        }
    }

    /// Creates a controller in the first free slot.
    ///
    /// The channels are driven to their initial state only once a slot has
    /// been claimed.
    ///
    /// # Errors
    /// * `AllocationFailure` - Every slot is in use. The channels are dropped unwritten.
    pub fn create(&mut self, channels: C, config: LedConfig) -> Result<LedHandle, DriverError> {
        let Some(index) = self.slots.iter().position(|slot| slot.controller.is_none()) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("led registry full ({} slots)", MAX_LEDS);
            return Err(DriverError::AllocationFailure);
        };

        let slot = &mut self.slots[index];
        slot.controller = Some(RgbLedController::new(channels, config));

        Ok(LedHandle {
            index,
            generation: slot.generation,
        })
    }

    /// Destroys a controller and returns its channels.
    ///
    /// The channels are returned as they are; nothing is written to them.
    /// Returns `None` if the handle is already invalid.
    pub fn destroy(&mut self, handle: LedHandle) -> Option<C> {
        let slot = self.slot_mut(handle)?;
        let controller = slot.controller.take()?;
        slot.generation = slot.generation.wrapping_add(1);

        #[cfg(feature = "defmt")]
        defmt::debug!("rgb led destroyed: slot={}", handle.index);

        Some(controller.release())
    }

    /// Returns the controller behind a handle, if still valid.
    pub fn get(&self, handle: LedHandle) -> Option<&RgbLedController<C>> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)?
            .controller
            .as_ref()
    }

    /// Returns the controller behind a handle mutably, if still valid.
    pub fn get_mut(&mut self, handle: LedHandle) -> Option<&mut RgbLedController<C>> {
        self.slot_mut(handle)?.controller.as_mut()
    }

    /// Turns the LED on. Does nothing for an invalid handle.
    pub fn turn_on(&mut self, handle: LedHandle) {
        if let Some(led) = self.get_mut(handle) {
            led.turn_on();
        }
    }

    /// Turns the LED off. Does nothing for an invalid handle.
    pub fn turn_off(&mut self, handle: LedHandle) {
        if let Some(led) = self.get_mut(handle) {
            led.turn_off();
        }
    }

    /// Sets a predefined color. Does nothing for an invalid handle.
    pub fn set_predefined_color(&mut self, handle: LedHandle, color: PredefinedColor) {
        if let Some(led) = self.get_mut(handle) {
            led.set_predefined_color(color);
        }
    }

    /// Sets a predefined color by table index.
    ///
    /// Does nothing for an invalid handle or an index outside the table.
    pub fn set_predefined_color_index(&mut self, handle: LedHandle, index: usize) {
        if let Some(led) = self.get_mut(handle) {
            led.set_predefined_color_index(index);
        }
    }

    /// Sets a custom color. Does nothing for an invalid handle.
    pub fn set_custom_color(&mut self, handle: LedHandle, r: u8, g: u8, b: u8) {
        if let Some(led) = self.get_mut(handle) {
            led.set_custom_color(r, g, b);
        }
    }

    /// Routes an action to the controller behind a handle.
    ///
    /// Returns `false` if the handle is invalid and nothing happened.
    pub fn handle_action(&mut self, handle: LedHandle, action: LedAction) -> bool {
        match self.get_mut(handle) {
            Some(led) => {
                led.handle_action(action);
                true
            }
            None => false,
        }
    }

    /// Routes a command to the LED it targets.
    pub fn handle_command(&mut self, command: LedCommand<LedHandle>) -> bool {
        self.handle_action(command.led_id, command.action)
    }

    /// Returns handles to every live controller, in slot order.
    pub fn handles(&self) -> Vec<LedHandle, MAX_LEDS> {
        let mut handles = Vec::new();
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.controller.is_some() {
                // Cannot overflow, one entry per slot at most
                let _ = handles.push(LedHandle {
                    index,
                    generation: slot.generation,
                });
            }
        }
        handles
    }

    /// Returns true if the handle refers to a live controller.
    pub fn contains(&self, handle: LedHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Returns the number of live controllers.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.controller.is_some()).count()
    }

    /// Returns true if the registry holds no controllers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of controllers.
    pub fn capacity(&self) -> usize {
        MAX_LEDS
    }

    fn slot_mut(&mut self, handle: LedHandle) -> Option<&mut Slot<C>> {
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
    }
}

impl<C: DutyCycleChannels, const MAX_LEDS: usize> Default for LedRegistry<C, MAX_LEDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, G, B, const MAX_LEDS: usize> LedRegistry<FnChannels<R, G, B>, MAX_LEDS>
where
    R: FnMut(u8),
    G: FnMut(u8),
    B: FnMut(u8),
{
    /// Creates a controller from three optional setter functions.
    ///
    /// # Errors
    /// * `InvalidConfig(MissingChannel)` - A setter is `None`
    /// * `AllocationFailure` - Every slot is in use
    pub fn try_create(
        &mut self,
        red: Option<R>,
        green: Option<G>,
        blue: Option<B>,
        config: LedConfig,
    ) -> Result<LedHandle, DriverError> {
        let channels = FnChannels::try_new(red, green, blue)?;
        self.create(channels, config)
    }
}
