//! The host viewer interface consumed by the navigation machine.
//!
//! Everything the machine needs from the surrounding viewer — camera
//! primitives, scene picking, popup menu, the default/legacy event handler,
//! command execution — comes through this trait. The crate never owns any of
//! it; camera deltas are normalized viewport coordinates and the host does
//! the actual transform math.

use std::time::Duration;

use crate::coords::{Point2, Vec2};
use crate::event::{InputEvent, SpatialMotionEvent};

/// Services the navigation state machine consumes from the viewer/host.
///
/// Methods with a default implementation are optional conveniences; a
/// minimal host only implements the camera primitives and the fallback
/// handler.
pub trait ViewerServices {
    // ------------------------------------------------------------------
    // Camera primitives (normalized viewport coordinates)
    // ------------------------------------------------------------------

    /// Incremental trackball rotation from `from` to `to`.
    fn spin_camera(&mut self, from: Point2, to: Point2);

    /// Incremental pan against the current pan-plane. `aspect_ratio` is the
    /// viewport aspect ratio captured when the pan began.
    fn pan_camera(&mut self, aspect_ratio: f32, from: Point2, to: Point2);

    /// Zoom by `amount` about `center` (positive zooms in).
    fn zoom_camera(&mut self, amount: f32, center: Point2);

    /// Rotate the camera by `angle` radians about `center` in the view
    /// plane. Used for tilt and pinch rotation.
    fn rotate_camera(&mut self, angle: f32, center: Point2);

    /// Re-anchor the pan-plane at the current camera focal plane. Must be
    /// called before a sequence of `pan_camera` calls.
    fn setup_panning_plane(&mut self);

    /// Move the rotation center to the camera focal point (tilt entry).
    fn set_rotation_center_to_focal_point(&mut self);

    /// Remember the cursor position as the rotation pivot (rotate entry).
    fn save_cursor_position(&mut self, pos: Point2);

    /// Re-target the camera at the scene point under `pos` (pixels).
    fn look_at_point(&mut self, pos: Point2);

    /// Start the seek animation toward the scene point under `pos`.
    fn seek_to_point(&mut self, pos: Point2);

    // ------------------------------------------------------------------
    // Scene and UI queries
    // ------------------------------------------------------------------

    /// Ray-pick at `pos` (pixels): is a dragger the frontmost hit?
    fn is_dragger_under_cursor(&mut self, pos: Point2) -> bool;

    /// Whether the viewer is in a 2D/edit viewing context (sketch editing).
    /// Gates spin-vs-select disambiguation and the H key.
    fn is_editing(&self) -> bool {
        false
    }

    /// Whether the base-class seek mechanism currently owns all input.
    fn is_seek_active(&self) -> bool {
        false
    }

    fn viewport_size(&self) -> (f32, f32);

    fn viewport_aspect_ratio(&self) -> f32 {
        let (w, h) = self.viewport_size();
        if h > 0.0 { w / h } else { 1.0 }
    }

    /// Pixel position mapped to normalized viewport coordinates.
    fn normalize_pixel_pos(&self, pos: Point2) -> Point2 {
        pos.normalized(self.viewport_size())
    }

    /// Pixel delta mapped to normalized viewport units.
    fn normalize_pixel_delta(&self, delta: Vec2) -> Vec2 {
        delta.normalized(self.viewport_size())
    }

    // ------------------------------------------------------------------
    // Popup menu
    // ------------------------------------------------------------------

    fn is_popup_menu_enabled(&self) -> bool {
        true
    }

    fn open_popup_menu(&mut self, pos: Point2);

    // ------------------------------------------------------------------
    // Event fallback and platform hooks
    // ------------------------------------------------------------------

    /// Offer the event to foreground scene nodes (e.g. a color bar) before
    /// the machine sees it. Return true if they handled it.
    fn handle_foreground_event(&mut self, _event: &InputEvent) -> bool {
        false
    }

    /// The default/legacy event handler. Postponed events are replayed here,
    /// and anything the machine leaves unconsumed lands here.
    fn fallback_event(&mut self, event: &InputEvent) -> bool;

    /// 6-DOF device input, handled independently of the state machine.
    fn process_spatial_motion(&mut self, _event: &SpatialMotionEvent) {}

    /// The platform tap-and-hold recognizer's current timeout.
    fn platform_hold_timeout(&self) -> Duration {
        Duration::from_millis(700)
    }

    /// Push a new timeout into the platform tap-and-hold recognizer, so the
    /// machine's own detector stays ahead of it.
    fn set_platform_hold_timeout(&mut self, _timeout: Duration) {}

    // ------------------------------------------------------------------
    // Command execution
    // ------------------------------------------------------------------

    /// Run a host command by string identifier (roll gestures). Failures
    /// are logged by the caller and never propagate into the machine.
    fn run_command(&mut self, _name: &str) -> anyhow::Result<()> {
        Ok(())
    }
}
