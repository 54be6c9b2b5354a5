//! The Gesture state: multi-touch pan/pinch driving the camera.
//!
//! While a gesture runs, the touch stack keeps synthesizing mouse input; all
//! pointer moves are swallowed here so they cannot reach selection or the
//! default handler. A zero-mask mouse click is accepted as a fail-safe exit
//! in case the gesture-end event never arrives.

use super::state::{Gesture, NavState};
use super::{idle, NavContext, Reaction};
use crate::coords::Point2;
use crate::event::{ClassifiedEvent, EventOutcome, GestureKind, InputEvent};
use crate::types::NavigationMode;

pub(crate) fn enter(ctx: &mut NavContext<'_>) -> NavState {
    ctx.mode.set(NavigationMode::Panning);
    ctx.viewer.setup_panning_plane();
    NavState::Gesture(Gesture {
        ratio: ctx.viewer.viewport_aspect_ratio(),
        tilt_enabled: ctx.policy.tilt_enabled,
    })
}

pub(crate) fn react_gesture(
    scratch: &mut Gesture,
    ev: &ClassifiedEvent<'_>,
    out: &mut EventOutcome,
    ctx: &mut NavContext<'_>,
) -> Reaction {
    if ev.is_button_event() {
        out.consumed = true;
        if ev.mbstate() == 0 {
            // If the gesture-end event doesn't arrive, a mouse click must
            // still be able to stop this mode.
            tracing::warn!("leaving gesture state by mouse-click (fail-safe)");
            return Reaction::Transit(idle::enter(ctx));
        }
    }

    if ev.is_pointer_move() {
        // Swallow the synthetic mouse moves fired during the gesture.
        out.consumed = true;
    }

    match ev.raw {
        InputEvent::GestureEnd(_) => {
            out.consumed = true;
            return Reaction::Transit(idle::enter(ctx));
        }
        InputEvent::GestureCanceled(_) => {
            out.consumed = true;
            // Camera changes applied so far are kept; cancel only stops the
            // gesture.
            return Reaction::Transit(idle::enter(ctx));
        }
        InputEvent::GestureStart(g) | InputEvent::GestureUpdate(g) => {
            out.consumed = true;
            match g.kind {
                GestureKind::Pan { delta } => {
                    let d = ctx.viewer.normalize_pixel_delta(delta);
                    ctx.viewer.pan_camera(
                        scratch.ratio,
                        Point2::new(0.0, 0.0),
                        Point2::new(d.x, d.y),
                    );
                }
                GestureKind::Pinch { delta_zoom, delta_angle, center, delta_center } => {
                    let d = ctx.viewer.normalize_pixel_delta(delta_center);
                    ctx.viewer.pan_camera(
                        scratch.ratio,
                        Point2::new(0.0, 0.0),
                        Point2::new(d.x, d.y),
                    );
                    let pinch_center = ctx.viewer.normalize_pixel_pos(center);
                    ctx.viewer
                        .zoom_camera(-(delta_zoom.ln() as f32), pinch_center);
                    if delta_angle != 0.0 && scratch.tilt_enabled {
                        ctx.viewer.rotate_camera(delta_angle, pinch_center);
                    }
                }
                GestureKind::Unknown => {
                    // Unrecognized gesture subtype falls through.
                    out.consumed = false;
                }
            }
        }
        _ => {}
    }

    Reaction::Stay
}
