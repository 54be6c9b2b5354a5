//! Roll-chord tests: two-button press chords that fire a bound command on
//! the release of either button.

use crate::helpers::*;
use gesture_nav::NavState;

#[test]
fn test_roll_forward_fires_once() {
    let mut nav = navigator_with_roll_commands();
    let mut viewer = RecordingViewer::new();

    // Button1 down, then button2 joins: latches forward.
    nav.dispatch(&mut viewer, &press(1, 100.0, 100.0, 0));
    nav.dispatch(&mut viewer, &press(2, 100.0, 100.0, 50));
    assert!(viewer.commands.is_empty());

    // Chord collapses to button2 alone: fires exactly once.
    nav.dispatch(&mut viewer, &release(1, 100.0, 100.0, 100));
    assert_eq!(viewer.commands, vec!["Std_RollForward".to_string()]);
    assert!(matches!(nav.state(), NavState::AwaitingRelease));

    // Releasing the remaining button returns to Idle without re-firing.
    nav.dispatch(&mut viewer, &release(2, 100.0, 100.0, 150));
    assert_eq!(viewer.commands.len(), 1);
    assert!(nav.state().is_idle());
}

#[test]
fn test_roll_backward_fires_once() {
    let mut nav = navigator_with_roll_commands();
    let mut viewer = RecordingViewer::new();

    // Button2 down first, then button1 joins: latches backward.
    nav.dispatch(&mut viewer, &press(2, 100.0, 100.0, 0));
    nav.dispatch(&mut viewer, &press(1, 100.0, 100.0, 50));
    nav.dispatch(&mut viewer, &release(2, 100.0, 100.0, 100));
    assert_eq!(viewer.commands, vec!["Std_RollBack".to_string()]);

    nav.dispatch(&mut viewer, &release(1, 100.0, 100.0, 150));
    assert_eq!(viewer.commands.len(), 1);
    assert!(nav.state().is_idle());
}

#[test]
fn test_roll_chord_can_refire_while_awaiting_release() {
    let mut nav = navigator_with_roll_commands();
    let mut viewer = RecordingViewer::new();

    // First chord fires forward and parks the machine in AwaitingRelease.
    nav.dispatch(&mut viewer, &press(1, 100.0, 100.0, 0));
    nav.dispatch(&mut viewer, &press(2, 100.0, 100.0, 50));
    nav.dispatch(&mut viewer, &release(1, 100.0, 100.0, 100));
    assert_eq!(viewer.commands.len(), 1);

    // Re-press button1 while button2 is still down: a second chord is
    // latched (backward) and fires on the button2 release, in place.
    nav.dispatch(&mut viewer, &press(1, 100.0, 100.0, 150));
    nav.dispatch(&mut viewer, &release(2, 100.0, 100.0, 200));
    assert_eq!(
        viewer.commands,
        vec!["Std_RollForward".to_string(), "Std_RollBack".to_string()]
    );
    assert!(matches!(nav.state(), NavState::AwaitingRelease));

    nav.dispatch(&mut viewer, &release(1, 100.0, 100.0, 250));
    assert!(nav.state().is_idle());
}

#[test]
fn test_unbound_roll_runs_no_command() {
    // No commands configured: the chord is still recognized and consumed
    // but nothing runs on the host.
    let mut nav = navigator();
    let mut viewer = RecordingViewer::new();

    nav.dispatch(&mut viewer, &press(1, 100.0, 100.0, 0));
    nav.dispatch(&mut viewer, &press(2, 100.0, 100.0, 50));
    nav.dispatch(&mut viewer, &release(1, 100.0, 100.0, 100));
    assert!(viewer.commands.is_empty());
    assert!(matches!(nav.state(), NavState::AwaitingRelease));

    // The postponed chord events are never replayed as selection clicks.
    nav.dispatch(&mut viewer, &release(2, 100.0, 100.0, 150));
    assert!(viewer.fallback_events.is_empty());
    assert!(nav.state().is_idle());
}

#[test]
fn test_failing_roll_command_does_not_derail_the_machine() {
    let mut nav = navigator_with_roll_commands();
    let mut viewer = RecordingViewer::new();
    viewer.command_fails = true;

    nav.dispatch(&mut viewer, &press(1, 100.0, 100.0, 0));
    nav.dispatch(&mut viewer, &press(2, 100.0, 100.0, 50));
    nav.dispatch(&mut viewer, &release(1, 100.0, 100.0, 100));

    // The command was attempted; the failure is logged and swallowed.
    assert_eq!(viewer.commands.len(), 1);
    assert!(matches!(nav.state(), NavState::AwaitingRelease));

    nav.dispatch(&mut viewer, &release(2, 100.0, 100.0, 150));
    assert!(nav.state().is_idle());
}
