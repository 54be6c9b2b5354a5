//! Button and modifier tracking for the dispatch façade.
//!
//! The tracker mirrors the OS's down/up pairing from the event stream
//! itself. Touch stacks synthesize mouse input with broken pairing (releases
//! without presses, presses whose releases never arrive), so two deviations
//! from naive tracking are load-bearing:
//!
//! - a release with no matching tracked press is detected *before* the state
//!   machine sees it, and discarded;
//! - state exit actions may force individual buttons back up when the
//!   platform is known to drop the release (tap-hold-drag, mid-gesture
//!   synthetic input).

use crate::event::{InputEvent, Modifiers, MouseButton};

/// Tracked down-state of the three buttons and the keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonTracker {
    button1_down: bool,
    button2_down: bool,
    button3_down: bool,
    modifiers: Modifiers,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Button1 => self.button1_down,
            MouseButton::Button2 => self.button2_down,
            MouseButton::Button3 => self.button3_down,
        }
    }

    /// True if `event` is a release for a button we never saw go down.
    /// The dispatcher discards such events outright.
    pub fn is_orphan_release(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::ButtonRelease(e) => !self.is_down(e.button),
            _ => false,
        }
    }

    /// Update tracking from one event: button presses/releases flip the
    /// down-state, and any event carrying a modifier snapshot refreshes the
    /// modifier state.
    pub fn observe(&mut self, event: &InputEvent) {
        match event {
            InputEvent::ButtonPress(e) => {
                self.set_down(e.button, true);
                self.modifiers = e.modifiers;
            }
            InputEvent::ButtonRelease(e) => {
                self.set_down(e.button, false);
                self.modifiers = e.modifiers;
            }
            InputEvent::KeyPress(e) | InputEvent::KeyRelease(e) => {
                self.modifiers = e.modifiers;
            }
            _ => {}
        }
    }

    /// Force a button back up. Used by state exit fail-safes when the
    /// platform is known to drop the release event.
    pub fn clear_button(&mut self, button: MouseButton) {
        self.set_down(button, false);
    }

    /// Assemble the combined bitmask the classifier carries.
    pub fn mask(&self) -> u32 {
        (if self.button1_down { MouseButton::Button1.mask_bit() } else { 0 })
            | (if self.button2_down { MouseButton::Button2.mask_bit() } else { 0 })
            | (if self.button3_down { MouseButton::Button3.mask_bit() } else { 0 })
            | self.modifiers.mask()
    }

    fn set_down(&mut self, button: MouseButton, down: bool) {
        match button {
            MouseButton::Button1 => self.button1_down = down,
            MouseButton::Button2 => self.button2_down = down,
            MouseButton::Button3 => self.button3_down = down,
        }
    }
}
