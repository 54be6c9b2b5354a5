//! Timing-policy plumbing through the dispatch path.

use crate::helpers::*;
use gesture_nav::settings::{KEY_MOVE_THRESHOLD, KEY_TAP_HOLD_TIMEOUT, VIEW_GROUP};
use gesture_nav::NavState;
use serde_json::json;
use std::time::Duration;

#[test]
fn test_policy_refreshes_on_initiating_press() {
    let mut nav = navigator_with_settings(|s| {
        s.set(VIEW_GROUP, KEY_TAP_HOLD_TIMEOUT, json!(1000));
    });
    let mut viewer = RecordingViewer::new();

    // Before any press the navigator carries the built-in defaults.
    assert_eq!(nav.policy().hold_timeout, Duration::from_millis(650));

    nav.dispatch(&mut viewer, &press(1, 100.0, 100.0, 0));
    assert_eq!(nav.policy().hold_timeout, Duration::from_millis(1000));

    // A 700ms hold is no longer a long click under the raised timeout; the
    // release replays as a selection click instead of opening the popup.
    nav.dispatch(&mut viewer, &release(1, 100.0, 100.0, 700));
    assert!(viewer.popup_openings.is_empty());
    assert_eq!(viewer.fallback_events.len(), 2);
}

#[test]
fn test_platform_recognizer_is_tightened_on_press() {
    let mut nav = navigator();
    let mut viewer = RecordingViewer::new();

    nav.dispatch(&mut viewer, &press(1, 100.0, 100.0, 0));

    // The viewer's tap-and-hold recognizer gets pushed past our own 630ms
    // threshold so the machine always decides first.
    assert_eq!(viewer.platform_timeouts, vec![Duration::from_millis(700)]);
    assert_eq!(nav.policy().hold_timeout, Duration::from_millis(630));
}

#[test]
fn test_move_threshold_override() {
    let mut nav = navigator_with_settings(|s| {
        s.set(VIEW_GROUP, KEY_MOVE_THRESHOLD, json!(20));
    });
    let mut viewer = RecordingViewer::new();

    nav.dispatch(&mut viewer, &press(1, 100.0, 100.0, 0));
    nav.dispatch(&mut viewer, &move_to(110.0, 100.0, 50));
    // 10px is below the raised threshold; still undecided.
    assert!(matches!(nav.state(), NavState::AwaitingMove(_)));

    nav.dispatch(&mut viewer, &move_to(125.0, 100.0, 100));
    assert!(matches!(nav.state(), NavState::Rotate(_)));
}
