//! The navigation state machine.
//!
//! This is the center of gravity of the crate: it converts classified input
//! events into camera operations while disambiguating overlapping gesture
//! sources. The left button serves a dual purpose - selecting objects as
//! well as spinning the view - and the trick that enables it is to consume
//! mouse events before the move threshold is detected, and refire them if
//! the mouse was released without moving.
//!
//! Touchscreen input makes this genuinely hard: touch stacks synthesize
//! mouse input as soon as the first finger lands, keep synthesizing it while
//! gesture events arrive, and do not reliably terminate it with release
//! events. Every state therefore carries explicit fail-safes (zero-mask
//! exits, stuck-button clearing on state exit) so the machine can always
//! reach Idle from any unexpected event sequence.
//!
//! ## Modules
//!
//! - `state` - the state set, one variant per interaction mode
//! - `queue` - postponed-event FIFO for click-vs-drag disambiguation
//! - `idle` - Idle and Interact reactions, host animation-mode wind-down
//! - `awaiting` - AwaitingMove / AwaitingRelease, roll-chord detection
//! - `dragging` - Rotate, Pan, StickyPan, Tilt
//! - `gesture` - multi-touch gesture handling

mod awaiting;
mod dragging;
mod gesture;
mod idle;
pub mod queue;
mod state;

pub use queue::PostponedEvents;
pub use state::{AwaitingMove, Gesture, NavState, Pan, Rotate, Tilt};

use crate::buttons::ButtonTracker;
use crate::event::{ClassifiedEvent, EventOutcome, MouseButton};
use crate::settings::TimingPolicy;
use crate::types::{ModeCell, RollDirection};
use crate::viewer::ViewerServices;

/// Everything a transition may touch, assembled by the dispatch façade per
/// event. The machine owns no host resources itself.
pub struct NavContext<'a> {
    pub viewer: &'a mut dyn ViewerServices,
    /// Thresholds and roll bindings, resolved before the event was fed in.
    pub policy: &'a TimingPolicy,
    /// Shared mode cell; written on state entry, read for host modes.
    pub mode: &'a ModeCell,
    /// The façade's button tracker; exit fail-safes may clear stuck buttons.
    pub buttons: &'a mut ButtonTracker,
}

/// Result of one state reaction.
pub(crate) enum Reaction {
    /// Stay in the current state. Whatever the outcome flags say stands; an
    /// unconsumed event bubbles to the default handler.
    Stay,
    /// Leave the current state (running its exit action) and enter the
    /// given one (its entry action already ran while building it).
    Transit(NavState),
}

/// The navigation state machine. One event is in flight at a time; nothing
/// suspends mid-transition.
#[derive(Debug, Default)]
pub struct NavMachine {
    state: NavState,
    postponed: PostponedEvents,
    roll_dir: RollDirection,
}

impl NavMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Feed one classified event through the current state's reaction and
    /// apply the resulting transition, if any.
    pub fn process(
        &mut self,
        ev: &ClassifiedEvent<'_>,
        out: &mut EventOutcome,
        ctx: &mut NavContext<'_>,
    ) {
        ev.trace_log();

        let Self { state, postponed, roll_dir } = self;
        let reaction = match state {
            NavState::Idle => idle::react_idle(ev, out, ctx, postponed),
            NavState::AwaitingMove(s) => {
                awaiting::react_awaiting_move(s, ev, out, ctx, postponed, roll_dir)
            }
            NavState::Rotate(s) => dragging::react_rotate(s, ev, out, ctx),
            NavState::Pan(s) => dragging::react_pan(s, ev, out, ctx),
            NavState::StickyPan(s) => dragging::react_sticky_pan(s, ev, out, ctx),
            NavState::Tilt(s) => dragging::react_tilt(s, ev, out, ctx),
            NavState::Gesture(s) => gesture::react_gesture(s, ev, out, ctx),
            NavState::AwaitingRelease => {
                awaiting::react_awaiting_release(ev, out, ctx, roll_dir)
            }
            NavState::Interact => idle::react_interact(ev, out, ctx),
        };

        if let Reaction::Transit(next) = reaction {
            self.run_exit_action(ctx);
            tracing::debug!(state = next.name(), "-> state");
            self.state = next;
        }
    }

    /// Exit actions compensate for the platform's unreliable release-event
    /// delivery during touch sequences: no postponed events and no stuck
    /// button-down flags may survive a transition.
    fn run_exit_action(&mut self, ctx: &mut NavContext<'_>) {
        match &self.state {
            NavState::AwaitingMove(_) => {
                // Always drained on exit, whether or not the state decided
                // to act on them.
                self.postponed.discard_all();
            }
            NavState::StickyPan(_) => {
                // The synthetic RMB press from tap-and-hold often gets no
                // matching release after a tap-hold-drag sequence.
                ctx.buttons.clear_button(MouseButton::Button2);
            }
            NavState::Gesture(_) => {
                // Touch stacks do not always send release events for the
                // synthetic presses fired during a gesture.
                ctx.buttons.clear_button(MouseButton::Button1);
                ctx.buttons.clear_button(MouseButton::Button2);
            }
            _ => {}
        }
    }
}
