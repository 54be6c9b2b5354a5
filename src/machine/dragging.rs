//! The camera-moving drag states: Rotate, Pan, StickyPan and Tilt.
//!
//! These states are where pointer moves actually drive the camera. They
//! morph into one another as the button mask changes mid-drag and fall back
//! to Idle on a zero mask.

use super::state::{NavState, Pan, Rotate, Tilt};
use super::{idle, NavContext, Reaction};
use crate::constants::{BUTTON1_DOWN, BUTTON2_DOWN};
use crate::coords::Point2;
use crate::event::{ClassifiedEvent, EventOutcome};
use crate::types::NavigationMode;

pub(crate) fn enter_rotate(ev: &ClassifiedEvent<'_>, ctx: &mut NavContext<'_>) -> NavState {
    let pos = ev.pos();
    ctx.viewer.save_cursor_position(pos);
    ctx.mode.set(NavigationMode::Dragging);
    NavState::Rotate(Rotate { base_pos: pos })
}

fn pan_scratch(ev: &ClassifiedEvent<'_>, ctx: &mut NavContext<'_>) -> Pan {
    ctx.mode.set(NavigationMode::Panning);
    let ratio = ctx.viewer.viewport_aspect_ratio();
    ctx.viewer.setup_panning_plane();
    Pan { base_pos: ev.pos(), ratio }
}

pub(crate) fn enter_pan(ev: &ClassifiedEvent<'_>, ctx: &mut NavContext<'_>) -> NavState {
    NavState::Pan(pan_scratch(ev, ctx))
}

pub(crate) fn enter_sticky_pan(ev: &ClassifiedEvent<'_>, ctx: &mut NavContext<'_>) -> NavState {
    NavState::StickyPan(pan_scratch(ev, ctx))
}

pub(crate) fn enter_tilt(ev: &ClassifiedEvent<'_>, ctx: &mut NavContext<'_>) -> NavState {
    ctx.viewer.set_rotation_center_to_focal_point();
    ctx.mode.set(NavigationMode::Dragging);
    ctx.viewer.setup_panning_plane();
    NavState::Tilt(Tilt { base_pos: ev.pos() })
}

pub(crate) fn react_rotate(
    scratch: &mut Rotate,
    ev: &ClassifiedEvent<'_>,
    out: &mut EventOutcome,
    ctx: &mut NavContext<'_>,
) -> Reaction {
    if ev.is_button_event() {
        out.consumed = true;
        if ev.mbstate() == (BUTTON1_DOWN | BUTTON2_DOWN) {
            return Reaction::Transit(enter_tilt(ev, ctx));
        }
        if ev.mbstate() == 0 {
            return Reaction::Transit(idle::enter(ctx));
        }
    }
    if ev.is_pointer_move() {
        out.consumed = true;
        let pos = ev.pos();
        let from = ctx.viewer.normalize_pixel_pos(scratch.base_pos);
        let to = ctx.viewer.normalize_pixel_pos(pos);
        ctx.viewer.spin_camera(from, to);
        scratch.base_pos = pos;
    }
    Reaction::Stay
}

fn pan_move(scratch: &mut Pan, ev: &ClassifiedEvent<'_>, ctx: &mut NavContext<'_>) {
    let pos = ev.pos();
    let from = ctx.viewer.normalize_pixel_pos(scratch.base_pos);
    let to = ctx.viewer.normalize_pixel_pos(pos);
    ctx.viewer.pan_camera(scratch.ratio, from, to);
    scratch.base_pos = pos;
}

pub(crate) fn react_pan(
    scratch: &mut Pan,
    ev: &ClassifiedEvent<'_>,
    out: &mut EventOutcome,
    ctx: &mut NavContext<'_>,
) -> Reaction {
    if ev.is_button_event() {
        out.consumed = true;
        if ev.mbstate() == (BUTTON1_DOWN | BUTTON2_DOWN) {
            return Reaction::Transit(enter_tilt(ev, ctx));
        }
        if ev.mbstate() == 0 {
            return Reaction::Transit(idle::enter(ctx));
        }
    }
    if ev.is_pointer_move() {
        out.consumed = true;
        pan_move(scratch, ev, ctx);
    }
    Reaction::Stay
}

/// StickyPan only exits on an explicit button1 release: after a
/// tap-hold-drag sequence the synthetic RMB release may never arrive, so a
/// zero-mask test would strand the state.
pub(crate) fn react_sticky_pan(
    scratch: &mut Pan,
    ev: &ClassifiedEvent<'_>,
    out: &mut EventOutcome,
    ctx: &mut NavContext<'_>,
) -> Reaction {
    if ev.is_button_event() {
        out.consumed = true;
        if ev.is_release(1) {
            return Reaction::Transit(idle::enter(ctx));
        }
    }
    if ev.is_pointer_move() {
        out.consumed = true;
        pan_move(scratch, ev, ctx);
    }
    Reaction::Stay
}

pub(crate) fn react_tilt(
    scratch: &mut Tilt,
    ev: &ClassifiedEvent<'_>,
    out: &mut EventOutcome,
    ctx: &mut NavContext<'_>,
) -> Reaction {
    if ev.is_button_event() {
        out.consumed = true;
        if ev.mbstate() == BUTTON2_DOWN {
            return Reaction::Transit(enter_pan(ev, ctx));
        }
        if ev.mbstate() == BUTTON1_DOWN {
            return Reaction::Transit(enter_rotate(ev, ctx));
        }
        if ev.mbstate() == 0 {
            return Reaction::Transit(idle::enter(ctx));
        }
    }
    if ev.is_pointer_move() {
        out.consumed = true;
        let pos = ev.pos();
        let dx = ctx.viewer.normalize_pixel_pos(pos).x
            - ctx.viewer.normalize_pixel_pos(scratch.base_pos).x;
        ctx.viewer.rotate_camera(dx * -2.0, Point2::new(0.5, 0.5));
        scratch.base_pos = pos;
    }
    Reaction::Stay
}
