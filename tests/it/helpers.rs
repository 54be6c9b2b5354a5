//! Test helpers: a recording host viewer and input-event builders.
//!
//! `RecordingViewer` implements `ViewerServices` and records every camera
//! operation, fallback replay, popup opening and command execution, so tests
//! can assert on exactly what the machine did to the host.

use gesture_nav::{
    ButtonEvent, GestureEvent, GestureKind, GestureNavigator, InputEvent, Key, KeyEvent,
    MemorySettings, Modifiers, MouseButton, MoveEvent, Point2, Vec2, ViewerServices,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// One recorded camera operation.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraCall {
    Spin { from: Point2, to: Point2 },
    Pan { ratio: f32, from: Point2, to: Point2 },
    Zoom { amount: f32, center: Point2 },
    Rotate { angle: f32, center: Point2 },
    SetupPanningPlane,
    RotationCenterToFocal,
    SaveCursor(Point2),
    LookAt(Point2),
    SeekTo(Point2),
}

/// Host viewer mock: 800x600 viewport, records everything.
#[derive(Default)]
pub struct RecordingViewer {
    pub camera_calls: Vec<CameraCall>,
    pub fallback_events: Vec<InputEvent>,
    pub popup_openings: Vec<Point2>,
    pub commands: Vec<String>,
    pub platform_timeouts: Vec<Duration>,
    pub editing: bool,
    pub dragger_under_cursor: bool,
    pub seek_active: bool,
    pub command_fails: bool,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All zoom amounts recorded so far.
    pub fn zoom_amounts(&self) -> Vec<f32> {
        self.camera_calls
            .iter()
            .filter_map(|c| match c {
                CameraCall::Zoom { amount, .. } => Some(*amount),
                _ => None,
            })
            .collect()
    }

    pub fn pan_count(&self) -> usize {
        self.camera_calls
            .iter()
            .filter(|c| matches!(c, CameraCall::Pan { .. }))
            .count()
    }

    pub fn spin_count(&self) -> usize {
        self.camera_calls
            .iter()
            .filter(|c| matches!(c, CameraCall::Spin { .. }))
            .count()
    }
}

impl ViewerServices for RecordingViewer {
    fn spin_camera(&mut self, from: Point2, to: Point2) {
        self.camera_calls.push(CameraCall::Spin { from, to });
    }

    fn pan_camera(&mut self, ratio: f32, from: Point2, to: Point2) {
        self.camera_calls.push(CameraCall::Pan { ratio, from, to });
    }

    fn zoom_camera(&mut self, amount: f32, center: Point2) {
        self.camera_calls.push(CameraCall::Zoom { amount, center });
    }

    fn rotate_camera(&mut self, angle: f32, center: Point2) {
        self.camera_calls.push(CameraCall::Rotate { angle, center });
    }

    fn setup_panning_plane(&mut self) {
        self.camera_calls.push(CameraCall::SetupPanningPlane);
    }

    fn set_rotation_center_to_focal_point(&mut self) {
        self.camera_calls.push(CameraCall::RotationCenterToFocal);
    }

    fn save_cursor_position(&mut self, pos: Point2) {
        self.camera_calls.push(CameraCall::SaveCursor(pos));
    }

    fn look_at_point(&mut self, pos: Point2) {
        self.camera_calls.push(CameraCall::LookAt(pos));
    }

    fn seek_to_point(&mut self, pos: Point2) {
        self.camera_calls.push(CameraCall::SeekTo(pos));
    }

    fn is_dragger_under_cursor(&mut self, _pos: Point2) -> bool {
        self.dragger_under_cursor
    }

    fn is_editing(&self) -> bool {
        self.editing
    }

    fn is_seek_active(&self) -> bool {
        self.seek_active
    }

    fn viewport_size(&self) -> (f32, f32) {
        (800.0, 600.0)
    }

    fn open_popup_menu(&mut self, pos: Point2) {
        self.popup_openings.push(pos);
    }

    fn fallback_event(&mut self, event: &InputEvent) -> bool {
        self.fallback_events.push(*event);
        true
    }

    fn set_platform_hold_timeout(&mut self, timeout: Duration) {
        self.platform_timeouts.push(timeout);
    }

    fn run_command(&mut self, name: &str) -> anyhow::Result<()> {
        self.commands.push(name.to_string());
        if self.command_fails {
            anyhow::bail!("host refused command");
        }
        Ok(())
    }
}

// ============================================================================
// Navigator factories
// ============================================================================

/// Install a subscriber once so `RUST_LOG` can surface the machine's
/// transition traces during a test run.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn navigator() -> GestureNavigator {
    navigator_with_settings(|_| {})
}

/// Navigator over an in-memory settings store with overrides applied.
pub fn navigator_with_settings(configure: impl FnOnce(&MemorySettings)) -> GestureNavigator {
    init_tracing();
    let settings = MemorySettings::new();
    configure(&settings);
    GestureNavigator::new(Arc::new(settings))
}

pub fn navigator_with_roll_commands() -> GestureNavigator {
    navigator_with_settings(|s| {
        s.set(
            gesture_nav::settings::VIEW_GROUP,
            gesture_nav::settings::KEY_ROLL_FWD_COMMAND,
            json!("Std_RollForward"),
        );
        s.set(
            gesture_nav::settings::VIEW_GROUP,
            gesture_nav::settings::KEY_ROLL_BACK_COMMAND,
            json!("Std_RollBack"),
        );
    })
}

// ============================================================================
// Event builders
// ============================================================================

fn button(index: u8) -> MouseButton {
    match index {
        1 => MouseButton::Button1,
        2 => MouseButton::Button2,
        3 => MouseButton::Button3,
        other => panic!("no button {other}"),
    }
}

pub fn press(index: u8, x: f32, y: f32, ms: u64) -> InputEvent {
    InputEvent::ButtonPress(ButtonEvent {
        button: button(index),
        pos: Point2::new(x, y),
        time: Duration::from_millis(ms),
        modifiers: Modifiers::default(),
    })
}

pub fn press_with_alt(index: u8, x: f32, y: f32, ms: u64) -> InputEvent {
    InputEvent::ButtonPress(ButtonEvent {
        button: button(index),
        pos: Point2::new(x, y),
        time: Duration::from_millis(ms),
        modifiers: Modifiers { alt: true, ..Modifiers::default() },
    })
}

pub fn release(index: u8, x: f32, y: f32, ms: u64) -> InputEvent {
    InputEvent::ButtonRelease(ButtonEvent {
        button: button(index),
        pos: Point2::new(x, y),
        time: Duration::from_millis(ms),
        modifiers: Modifiers::default(),
    })
}

pub fn move_to(x: f32, y: f32, ms: u64) -> InputEvent {
    InputEvent::PointerMove(MoveEvent { pos: Point2::new(x, y), time: Duration::from_millis(ms) })
}

pub fn key_press(key: Key, x: f32, y: f32, ms: u64) -> InputEvent {
    InputEvent::KeyPress(KeyEvent {
        key,
        pos: Point2::new(x, y),
        time: Duration::from_millis(ms),
        modifiers: Modifiers::default(),
    })
}

pub fn key_release(key: Key, x: f32, y: f32, ms: u64) -> InputEvent {
    InputEvent::KeyRelease(KeyEvent {
        key,
        pos: Point2::new(x, y),
        time: Duration::from_millis(ms),
        modifiers: Modifiers::default(),
    })
}

pub fn pan_gesture_start(x: f32, y: f32, ms: u64) -> InputEvent {
    InputEvent::GestureStart(GestureEvent {
        kind: GestureKind::Pan { delta: Vec2::new(0.0, 0.0) },
        pos: Point2::new(x, y),
        time: Duration::from_millis(ms),
    })
}

pub fn pan_gesture_update(dx: f32, dy: f32, x: f32, y: f32, ms: u64) -> InputEvent {
    InputEvent::GestureUpdate(GestureEvent {
        kind: GestureKind::Pan { delta: Vec2::new(dx, dy) },
        pos: Point2::new(x, y),
        time: Duration::from_millis(ms),
    })
}

pub fn pinch_update(delta_zoom: f64, delta_angle: f32, cx: f32, cy: f32, ms: u64) -> InputEvent {
    InputEvent::GestureUpdate(GestureEvent {
        kind: GestureKind::Pinch {
            delta_zoom,
            delta_angle,
            center: Point2::new(cx, cy),
            delta_center: Vec2::new(0.0, 0.0),
        },
        pos: Point2::new(cx, cy),
        time: Duration::from_millis(ms),
    })
}

pub fn gesture_end(x: f32, y: f32, ms: u64) -> InputEvent {
    InputEvent::GestureEnd(GestureEvent {
        kind: GestureKind::Unknown,
        pos: Point2::new(x, y),
        time: Duration::from_millis(ms),
    })
}

pub fn gesture_canceled(x: f32, y: f32, ms: u64) -> InputEvent {
    InputEvent::GestureCanceled(GestureEvent {
        kind: GestureKind::Unknown,
        pos: Point2::new(x, y),
        time: Duration::from_millis(ms),
    })
}

pub fn unknown_gesture_update(x: f32, y: f32, ms: u64) -> InputEvent {
    InputEvent::GestureUpdate(GestureEvent {
        kind: GestureKind::Unknown,
        pos: Point2::new(x, y),
        time: Duration::from_millis(ms),
    })
}
