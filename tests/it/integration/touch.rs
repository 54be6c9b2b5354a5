//! Multi-touch gesture scenarios: two-finger pan, pinch zoom/rotate, and
//! the synthetic mouse traffic that accompanies them.

use crate::helpers::*;
use gesture_nav::settings::{KEY_DISABLE_TOUCH_TILT, VIEW_GROUP};
use gesture_nav::{NavState, NavigationMode, Point2};
use serde_json::json;

#[test]
fn test_two_finger_pan() {
    let mut nav = navigator();
    let mut viewer = RecordingViewer::new();

    nav.dispatch(&mut viewer, &pan_gesture_start(400.0, 300.0, 0));
    assert!(matches!(nav.state(), NavState::Gesture(_)));
    assert_eq!(nav.mode(), NavigationMode::Panning);

    nav.dispatch(&mut viewer, &pan_gesture_update(80.0, 60.0, 440.0, 330.0, 30));
    assert_eq!(
        viewer.camera_calls.last(),
        Some(&CameraCall::Pan {
            ratio: 800.0 / 600.0,
            from: Point2::new(0.0, 0.0),
            to: Point2::new(0.1, 0.1),
        }),
    );

    // Synthetic mouse moves during the gesture are swallowed.
    let handled = nav.dispatch(&mut viewer, &move_to(440.0, 330.0, 40));
    assert!(handled);
    assert!(viewer.fallback_events.is_empty());

    nav.dispatch(&mut viewer, &gesture_end(440.0, 330.0, 60));
    assert!(nav.state().is_idle());
    assert_eq!(nav.mode(), NavigationMode::Idle);
}

#[test]
fn test_pinch_zooms_by_log_of_zoom_delta() {
    let mut nav = navigator();
    let mut viewer = RecordingViewer::new();

    nav.dispatch(&mut viewer, &pan_gesture_start(400.0, 300.0, 0));
    nav.dispatch(&mut viewer, &pinch_update(2.0, 0.0, 400.0, 300.0, 30));

    // Doubling the finger distance zooms by -ln(2) about the pinch center.
    assert_eq!(viewer.zoom_amounts(), vec![-(2.0f64.ln() as f32)]);
    assert_eq!(
        viewer.camera_calls.last(),
        Some(&CameraCall::Zoom {
            amount: -(2.0f64.ln() as f32),
            center: Point2::new(0.5, 0.5),
        }),
    );
}

#[test]
fn test_pinch_rotation_respects_touch_tilt_setting() {
    // Touch tilt is off by default; the angle component is dropped.
    let mut nav = navigator();
    let mut viewer = RecordingViewer::new();
    nav.dispatch(&mut viewer, &pan_gesture_start(400.0, 300.0, 0));
    nav.dispatch(&mut viewer, &pinch_update(1.0, 0.3, 400.0, 300.0, 30));
    assert!(!viewer
        .camera_calls
        .iter()
        .any(|c| matches!(c, CameraCall::Rotate { .. })));

    // Enabled, the same pinch also rotates about the pinch center.
    let mut nav = navigator_with_settings(|s| {
        s.set(VIEW_GROUP, KEY_DISABLE_TOUCH_TILT, json!(false));
    });
    let mut viewer = RecordingViewer::new();
    nav.dispatch(&mut viewer, &pan_gesture_start(400.0, 300.0, 0));
    nav.dispatch(&mut viewer, &pinch_update(1.0, 0.3, 400.0, 300.0, 30));
    assert_eq!(
        viewer.camera_calls.last(),
        Some(&CameraCall::Rotate { angle: 0.3, center: Point2::new(0.5, 0.5) }),
    );
}

#[test]
fn test_gesture_cancel_keeps_camera_changes() {
    let mut nav = navigator();
    let mut viewer = RecordingViewer::new();

    nav.dispatch(&mut viewer, &pan_gesture_start(400.0, 300.0, 0));
    nav.dispatch(&mut viewer, &pan_gesture_update(80.0, 0.0, 440.0, 300.0, 30));
    let applied = viewer.pan_count();
    assert_eq!(applied, 1);

    // Cancel only stops the gesture; no compensation of what was applied.
    nav.dispatch(&mut viewer, &gesture_canceled(440.0, 300.0, 60));
    assert!(nav.state().is_idle());
    assert_eq!(viewer.pan_count(), applied);
}

#[test]
fn test_gesture_interrupts_pending_click() {
    // A synthetic press is pending in the disambiguation window when the
    // real gesture events arrive; the machine abandons the click.
    let mut nav = navigator();
    let mut viewer = RecordingViewer::new();

    nav.dispatch(&mut viewer, &press(1, 400.0, 300.0, 0));
    assert!(matches!(nav.state(), NavState::AwaitingMove(_)));

    nav.dispatch(&mut viewer, &pan_gesture_start(400.0, 300.0, 20));
    assert!(matches!(nav.state(), NavState::Gesture(_)));
    // The postponed press was discarded on the way out.
    assert!(viewer.fallback_events.is_empty());
}

#[test]
fn test_unknown_gesture_subtype_falls_through() {
    let mut nav = navigator();
    let mut viewer = RecordingViewer::new();

    nav.dispatch(&mut viewer, &pan_gesture_start(400.0, 300.0, 0));
    let ev = unknown_gesture_update(400.0, 300.0, 30);
    let handled = nav.dispatch(&mut viewer, &ev);

    // Unrecognized subtypes go to the default handler.
    assert!(handled);
    assert_eq!(viewer.fallback_events, vec![ev]);
}
