//! Idle and Interact state reactions.
//!
//! Idle carries the special pre-dispatch for host-driven modes: seek arming,
//! running animations that any input should wind down, and box-zoom where
//! the machine stays out of the way entirely.

use super::queue::PostponedEvents;
use super::state::NavState;
use super::{awaiting, gesture, NavContext, Reaction};
use crate::constants::{BUTTON1_DOWN, BUTTON2_DOWN, BUTTON3_DOWN, KEY_ZOOM_STEP};
use crate::event::{ClassifiedEvent, EventOutcome, InputEvent, Key};
use crate::types::NavigationMode;

/// Entry into Idle: publish the mode. Every other state eventually funnels
/// back through here.
pub(crate) fn enter(ctx: &mut NavContext<'_>) -> NavState {
    ctx.mode.set(NavigationMode::Idle);
    NavState::Idle
}

fn enter_interact(ctx: &mut NavContext<'_>) -> NavState {
    ctx.mode.set(NavigationMode::Interact);
    NavState::Interact
}

pub(crate) fn react_idle(
    ev: &ClassifiedEvent<'_>,
    out: &mut EventOutcome,
    ctx: &mut NavContext<'_>,
    postponed: &mut PostponedEvents,
) -> Reaction {
    // Special handling for some special states of the viewer.
    let host_mode = ctx.mode.get();
    match host_mode {
        NavigationMode::SeekWait | NavigationMode::Spinning | NavigationMode::Seek => {
            if host_mode == NavigationMode::SeekWait && ev.is_press(1) {
                ctx.viewer.seek_to_point(ev.pos());
                ctx.mode.set(NavigationMode::Seek);
                out.consumed = true;
                return Reaction::Transit(awaiting::enter_awaiting_release());
            }
            // Animation modes: a mouse event stops the animation and waits
            // out the buttons; anything else cancels it without consuming
            // and falls through to normal processing.
            if !out.consumed {
                if ev.is_button_event() {
                    out.consumed = true;
                    return Reaction::Transit(awaiting::enter_awaiting_release());
                } else if ev.is_gesture_event() || ev.is_keyboard_event() || ev.is_spatial_event()
                {
                    ctx.mode.set(NavigationMode::Idle);
                }
            }
        }
        NavigationMode::BoxZoom => return Reaction::Stay,
        _ => {}
    }

    // Testing for draggers.
    if ev.is_press(1) && ev.mbstate() == BUTTON1_DOWN {
        let pos = ev.pos();
        if ctx.viewer.is_dragger_under_cursor(pos) {
            return Reaction::Transit(enter_interact(ctx));
        }
    }

    // Left and right clicks: postpone until move/hold/release disambiguates
    // click from drag.
    if (ev.is_press(1) && ev.mbstate() == BUTTON1_DOWN)
        || (ev.is_press(2) && ev.mbstate() == BUTTON2_DOWN)
    {
        postponed.post(ev.raw, out);
        return Reaction::Transit(awaiting::enter_awaiting_move(ev, ctx));
    }

    // MMB click: re-target the camera at the point under the cursor.
    if ev.is_press(3) && ev.mbstate() == BUTTON3_DOWN {
        out.consumed = true;
        ctx.viewer.setup_panning_plane();
        ctx.viewer.look_at_point(ev.pos());
        return Reaction::Transit(awaiting::enter_awaiting_release());
    }

    // Touchscreen gestures.
    if ev.is_gesture_active() {
        out.consumed = true;
        return Reaction::Transit(gesture::enter(ctx));
    }

    // Keyboard.
    if let InputEvent::KeyPress(kbev) | InputEvent::KeyRelease(kbev) = *ev.raw {
        out.consumed = true;
        let press = matches!(ev.raw, InputEvent::KeyPress(_));
        match kbev.key {
            Key::H => {
                // Disabled in editing mode because of conflicts with edit
                // tools.
                if !ctx.viewer.is_editing() && !press {
                    ctx.viewer.setup_panning_plane();
                    ctx.viewer.look_at_point(kbev.pos);
                }
            }
            Key::PageUp => {
                if !press {
                    let center = ctx.viewer.normalize_pixel_pos(kbev.pos);
                    ctx.viewer.zoom_camera(KEY_ZOOM_STEP, center);
                }
            }
            Key::PageDown => {
                if !press {
                    let center = ctx.viewer.normalize_pixel_pos(kbev.pos);
                    ctx.viewer.zoom_camera(-KEY_ZOOM_STEP, center);
                }
            }
            Key::Other(_) => out.consumed = false,
        }
    }

    Reaction::Stay
}

/// Interact: a dragger owns the input. Nothing is consumed so everything
/// reaches the dragger; the machine only watches for the zero mask.
pub(crate) fn react_interact(
    ev: &ClassifiedEvent<'_>,
    out: &mut EventOutcome,
    ctx: &mut NavContext<'_>,
) -> Reaction {
    if ev.is_button_event() {
        out.consumed = false;
        if ev.mbstate() == 0 {
            return Reaction::Transit(enter(ctx));
        }
    }
    Reaction::Stay
}
