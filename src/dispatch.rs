//! The dispatch façade: single entry point for raw input events.
//!
//! Receives one event at a time from the platform input loop (strictly
//! serialized, no re-entrancy), performs the mode-independent handling, and
//! feeds the rest through the state machine:
//!
//! 1. an active seek bypasses everything to the default handler;
//! 2. spatial-motion events are handled immediately, machine-independent;
//! 3. foreground overlays get first refusal;
//! 4. orphan button releases (no matching tracked press) are discarded;
//! 5. button/modifier tracking is updated from the event;
//! 6. the classified event plus a fresh outcome pair go to the machine;
//! 7. the return value is `consumed`, unless the machine explicitly
//!    forwarded, in which case the forwarded result stands.

use std::sync::Arc;

use crate::buttons::ButtonTracker;
use crate::event::{ClassifiedEvent, EventOutcome, InputEvent};
use crate::machine::{NavContext, NavMachine, NavState};
use crate::profile_scope;
use crate::settings::{SettingsStore, TimingPolicy};
use crate::types::{ModeCell, NavigationMode};
use crate::viewer::ViewerServices;

/// The interactive-navigation event dispatcher. Owns the state machine, the
/// button tracking, the published mode and the resolved timing policy; the
/// host viewer is borrowed per call so the navigator never entangles with
/// its ownership.
pub struct GestureNavigator {
    machine: NavMachine,
    buttons: ButtonTracker,
    mode: ModeCell,
    settings: Arc<dyn SettingsStore>,
    policy: TimingPolicy,
}

impl GestureNavigator {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            machine: NavMachine::new(),
            buttons: ButtonTracker::new(),
            mode: ModeCell::new(),
            settings,
            policy: TimingPolicy::default(),
        }
    }

    /// Current published navigation mode.
    pub fn mode(&self) -> NavigationMode {
        self.mode.get()
    }

    /// A clonable handle on the mode cell, for cursor/overlay consumers and
    /// for the host to write its seek/boxzoom/animation modes into.
    pub fn mode_cell(&self) -> ModeCell {
        self.mode.clone()
    }

    /// The machine's current state (diagnostics and tests).
    pub fn state(&self) -> &NavState {
        self.machine.state()
    }

    /// Human-readable hint for the current mode, for help/status display.
    pub fn instructions(&self) -> &'static str {
        self.mode().instructions()
    }

    /// Timing policy as of the last initiating press.
    pub fn policy(&self) -> &TimingPolicy {
        &self.policy
    }

    /// Process one raw input event. Returns true if the event was fully
    /// handled and must not be offered to the default handler again.
    pub fn dispatch(&mut self, viewer: &mut dyn ViewerServices, event: &InputEvent) -> bool {
        profile_scope!("dispatch");

        // Events during an active seek are the base mechanism's business.
        if viewer.is_seek_active() {
            return viewer.fallback_event(event);
        }

        // Mode-independent spaceball/joystick handling.
        if let InputEvent::SpatialMotion(motion) = event {
            viewer.process_spatial_motion(motion);
            return true;
        }

        // Give foreground nodes (e.g. a color bar) the chance to handle the
        // event first.
        if !viewer.is_editing() && viewer.handle_foreground_event(event) {
            return true;
        }

        // A release whose press we never saw. Discard it; touch stacks
        // synthesize such streams and the machine relies on never seeing
        // them.
        if self.buttons.is_orphan_release(event) {
            tracing::trace!("discarding orphan button release");
            return true;
        }

        self.buttons.observe(event);

        // Resolve the policy when an interaction may begin, so states never
        // have to look anything up themselves.
        if matches!(event, InputEvent::ButtonPress(_) | InputEvent::GestureStart(_)) {
            self.policy =
                TimingPolicy::resolve(self.settings.as_ref(), viewer.platform_hold_timeout());
        }

        let classified = ClassifiedEvent::new(event, self.buttons.mask());
        let mut out = EventOutcome::default();
        let mut ctx = NavContext {
            viewer,
            policy: &self.policy,
            mode: &self.mode,
            buttons: &mut self.buttons,
        };
        self.machine.process(&classified, &mut out, &mut ctx);

        if !out.forwarded && !out.consumed {
            viewer.fallback_event(event)
        } else {
            out.consumed
        }
    }

    /// Force the default-handler path, skipping the machine entirely. Used
    /// for replaying events the machine decided not to act on.
    pub fn bypass_dispatch(
        &mut self,
        viewer: &mut dyn ViewerServices,
        event: &InputEvent,
    ) -> bool {
        viewer.fallback_event(event)
    }
}
