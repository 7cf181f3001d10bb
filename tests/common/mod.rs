//! Shared test infrastructure for rgb-led-driver integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::RefCell;
use rgb_led_driver::{DutyCycle, DutyCycleChannels};

// ============================================================================
// Channel writes
// ============================================================================

/// A single setter invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Red(u8),
    Green(u8),
    Blue(u8),
}

/// The three writes produced by driving all channels with `duty`
pub fn writes_for(duty: DutyCycle) -> [Write; 3] {
    [
        Write::Red(duty.red),
        Write::Green(duty.green),
        Write::Blue(duty.blue),
    ]
}

// ============================================================================
// Spy channels
// ============================================================================

/// Channels that record every setter call in order
#[derive(Default)]
pub struct SpyChannels {
    history: heapless::Vec<Write, 64>,
}

impl SpyChannels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Write] {
        &self.history
    }

    /// Returns and clears the recorded writes
    pub fn drain(&mut self) -> heapless::Vec<Write, 64> {
        core::mem::take(&mut self.history)
    }
}

impl DutyCycleChannels for SpyChannels {
    fn set_red(&mut self, percent: u8) {
        let _ = self.history.push(Write::Red(percent));
    }

    fn set_green(&mut self, percent: u8) {
        let _ = self.history.push(Write::Green(percent));
    }

    fn set_blue(&mut self, percent: u8) {
        let _ = self.history.push(Write::Blue(percent));
    }
}

// ============================================================================
// Shared log for closure-based setters
// ============================================================================

/// Write log shared between three setter closures
#[derive(Default)]
pub struct SetterLog {
    history: RefCell<heapless::Vec<Write, 64>>,
}

impl SetterLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn red(&self) -> impl FnMut(u8) + '_ {
        move |p| {
            let _ = self.history.borrow_mut().push(Write::Red(p));
        }
    }

    pub fn green(&self) -> impl FnMut(u8) + '_ {
        move |p| {
            let _ = self.history.borrow_mut().push(Write::Green(p));
        }
    }

    pub fn blue(&self) -> impl FnMut(u8) + '_ {
        move |p| {
            let _ = self.history.borrow_mut().push(Write::Blue(p));
        }
    }

    pub fn len(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn drain(&self) -> heapless::Vec<Write, 64> {
        core::mem::take(&mut *self.history.borrow_mut())
    }
}
