//! AwaitingMove and AwaitingRelease reactions and the roll-chord logic
//! shared between them.
//!
//! AwaitingMove is the disambiguation window: a LMB or RMB press was
//! postponed and the machine is waiting for a move (drag), a hold (pan or
//! popup), a second button (tilt or roll chord), or a quick release (replay
//! as selection). AwaitingRelease just waits out the remaining buttons of a
//! decided interaction, still honoring roll chords.

use super::queue::PostponedEvents;
use super::state::{AwaitingMove, NavState};
use super::{dragging, gesture, idle, NavContext, Reaction};
use crate::constants::{ALT_DOWN, BUTTON1_DOWN, BUTTON2_DOWN};
use crate::error::NavError;
use crate::event::{ClassifiedEvent, EventOutcome};
use crate::types::{NavigationMode, RollDirection};

/// Entry into the disambiguation window: snapshot the press position and
/// time, load the thresholds, and tighten the platform recognizer so our
/// hold detection fires first.
pub(crate) fn enter_awaiting_move(
    ev: &ClassifiedEvent<'_>,
    ctx: &mut NavContext<'_>,
) -> NavState {
    ctx.mode.set(NavigationMode::Idle);
    ctx.viewer
        .set_platform_hold_timeout(ctx.policy.platform_hold_timeout);
    NavState::AwaitingMove(AwaitingMove::begin(ev.pos(), ev.time(), ctx.policy))
}

pub(crate) fn enter_awaiting_release() -> NavState {
    NavState::AwaitingRelease
}

/// Latch the roll direction at the instant the second button of the chord
/// goes down while the first is already held.
fn latch_roll_direction(ev: &ClassifiedEvent<'_>, roll_dir: &mut RollDirection) {
    if ev.mbstate() == (BUTTON1_DOWN | BUTTON2_DOWN) {
        if ev.is_press(1) {
            *roll_dir = RollDirection::Backward;
        }
        if ev.is_press(2) {
            *roll_dir = RollDirection::Forward;
        }
    }
}

/// The chord fires when either button is released while the other is still
/// down (the mask has collapsed to the complementary single button).
fn roll_fires(ev: &ClassifiedEvent<'_>) -> bool {
    (ev.is_release(1) && ev.mbstate() == BUTTON2_DOWN)
        || (ev.is_release(2) && ev.mbstate() == BUTTON1_DOWN)
}

/// Run the command bound to the latched roll direction. Failures are logged
/// and stop here; nothing may propagate into the state machine.
fn fire_roll_gesture(ctx: &mut NavContext<'_>, direction: RollDirection) {
    let cmd = match direction {
        RollDirection::Forward => {
            tracing::debug!("roll forward gesture");
            ctx.policy.roll_forward_command.as_str()
        }
        RollDirection::Backward => {
            tracing::debug!("roll backward gesture");
            ctx.policy.roll_back_command.as_str()
        }
        RollDirection::None => return,
    };
    if cmd.is_empty() {
        return;
    }
    if let Err(source) = ctx.viewer.run_command(cmd) {
        let err = NavError::Command { name: cmd.to_string(), source };
        tracing::error!(error = %err, "roll gesture command failed");
    }
}

/// Replay all postponed events, then this one, through the default handler.
fn refire(
    ev: &ClassifiedEvent<'_>,
    out: &mut EventOutcome,
    ctx: &mut NavContext<'_>,
    postponed: &mut PostponedEvents,
) {
    postponed.forward_all(ctx.viewer);
    out.consumed = ctx.viewer.fallback_event(ev.raw);
    out.forwarded = true;
}

pub(crate) fn react_awaiting_move(
    scratch: &mut AwaitingMove,
    ev: &ClassifiedEvent<'_>,
    out: &mut EventOutcome,
    ctx: &mut NavContext<'_>,
    postponed: &mut PostponedEvents,
    roll_dir: &mut RollDirection,
) -> Reaction {
    let long_click = scratch.is_long_click(ev.time());

    // This state consumes all mouse events.
    out.consumed = ev.is_button_event() || ev.is_pointer_move();

    // Right-click.
    if ev.is_release(2)
        && ev.mbstate() == 0
        && !ctx.viewer.is_editing()
        && ctx.viewer.is_popup_menu_enabled()
    {
        ctx.viewer.open_popup_menu(ev.pos());
        return Reaction::Transit(idle::enter(ctx));
    }

    latch_roll_direction(ev, roll_dir);
    if roll_fires(ev) {
        fire_roll_gesture(ctx, *roll_dir);
        return Reaction::Transit(enter_awaiting_release());
    }

    if ev.is_button_event() && ev.mbstate() == 0 {
        // All buttons released.
        if long_click {
            // Emulate a RMB click.
            ctx.viewer.open_popup_menu(ev.pos());
            return Reaction::Transit(idle::enter(ctx));
        }
        // Quick release: the press was a selection click after all.
        ctx.mode.set(NavigationMode::Selection);
        refire(ev, out, ctx, postponed);
        return Reaction::Transit(idle::enter(ctx));
    }

    if ev.is_press(3) {
        // MMB interrupts navigation-intent detection; replay everything.
        refire(ev, out, ctx, postponed);
        return Reaction::Transit(idle::enter(ctx));
    }

    if ev.is_button_event() {
        // Still undecided; keep the chord's events for possible replay.
        postponed.post(ev.raw, out);
    }

    if ev.is_pointer_move() {
        let moved = ev.pos() - scratch.base_pos;
        if moved.length() > scratch.move_threshold {
            // Mouse moved while buttons are held; decide how to navigate.
            match ev.mbstate() {
                BUTTON1_DOWN => {
                    if long_click {
                        return Reaction::Transit(dragging::enter_sticky_pan(ev, ctx));
                    }
                    // Spin is permitted only when Alt and the 2D/edit
                    // context disagree; otherwise the click belongs to
                    // selection and gets replayed.
                    let alt = ev.kbdstate() & ALT_DOWN != 0;
                    let allow_spin = alt == ctx.viewer.is_editing();
                    if allow_spin {
                        return Reaction::Transit(dragging::enter_rotate(ev, ctx));
                    }
                    refire(ev, out, ctx, postponed);
                    return Reaction::Transit(idle::enter(ctx));
                }
                BUTTON2_DOWN => return Reaction::Transit(dragging::enter_pan(ev, ctx)),
                mask if mask == (BUTTON1_DOWN | BUTTON2_DOWN) => {
                    return Reaction::Transit(dragging::enter_tilt(ev, ctx));
                }
                _ => {
                    // MMB was held? Replay everything.
                    refire(ev, out, ctx, postponed);
                    return Reaction::Transit(idle::enter(ctx));
                }
            }
        }
    }

    if ev.is_gesture_active() {
        out.consumed = true;
        return Reaction::Transit(gesture::enter(ctx));
    }

    Reaction::Stay
}

pub(crate) fn react_awaiting_release(
    ev: &ClassifiedEvent<'_>,
    out: &mut EventOutcome,
    ctx: &mut NavContext<'_>,
    roll_dir: &mut RollDirection,
) -> Reaction {
    if ev.is_button_event() {
        out.consumed = true;
        if ev.mbstate() == 0 {
            return Reaction::Transit(idle::enter(ctx));
        }
    }

    latch_roll_direction(ev, roll_dir);
    if roll_fires(ev) {
        fire_roll_gesture(ctx, *roll_dir);
    }

    if ev.is_pointer_move() {
        out.consumed = true;
    }

    if ev.is_gesture_active() {
        out.consumed = true;
        // Another gesture can start from here.
        return Reaction::Transit(gesture::enter(ctx));
    }

    Reaction::Stay
}
