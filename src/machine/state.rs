//! Navigation state set - one variant per interaction mode, each owning its
//! per-gesture scratch.
//!
//! This replaces the scattered flag-and-global style of classic navigation
//! code with a single explicit state machine, making impossible states
//! unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Interact          (press on a dragger)
//! Idle -> AwaitingMove      (LMB or RMB press, event postponed)
//! Idle -> AwaitingRelease   (MMB press: look-at-point; or animation wind-down)
//! Idle -> Gesture           (touch gesture starts)
//!
//! AwaitingMove -> Rotate    (moved past threshold, LMB only, spin allowed)
//! AwaitingMove -> Pan       (moved past threshold, RMB only)
//! AwaitingMove -> StickyPan (moved past threshold, LMB held past hold timeout)
//! AwaitingMove -> Tilt      (moved past threshold, LMB+RMB)
//! AwaitingMove -> AwaitingRelease (roll chord fired)
//! AwaitingMove -> Idle      (quick release: replay as selection; long hold:
//!                            popup menu; MMB press: replay and bail out)
//!
//! Rotate <-> Tilt <-> Pan   (button mask changes mid-drag)
//! Any -> Idle               (all buttons released / gesture ends)
//! ```

use std::time::Duration;

use crate::coords::Point2;
use crate::settings::TimingPolicy;

/// Scratch for the click-vs-drag disambiguation window.
#[derive(Debug, Clone, PartialEq)]
pub struct AwaitingMove {
    /// Position of the initiating press.
    pub base_pos: Point2,
    /// Timestamp of the initiating press; long-click is computed lazily
    /// against it, no timer involved.
    pub since: Duration,
    /// Move threshold loaded at entry.
    pub move_threshold: f32,
    /// Long-click threshold loaded at entry.
    pub hold_timeout: Duration,
}

/// Scratch for an active spin drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotate {
    pub base_pos: Point2,
}

/// Scratch for an active pan drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pan {
    pub base_pos: Point2,
    /// Viewport aspect ratio captured at entry.
    pub ratio: f32,
}

/// Scratch for an active tilt drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub base_pos: Point2,
}

/// Scratch for an active touch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    /// Viewport aspect ratio captured at entry.
    pub ratio: f32,
    /// Whether pinch rotation may tilt the camera (config, read at entry).
    pub tilt_enabled: bool,
}

/// The navigation machine's current state. Initial state is `Idle`; no state
/// is terminal - the machine runs for the viewer's lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NavState {
    #[default]
    Idle,
    /// A button went down; waiting for a move, a hold, or a second click to
    /// decide between navigation and selection.
    AwaitingMove(AwaitingMove),
    Rotate(Rotate),
    Pan(Pan),
    /// Pan entered from a tap-hold-drag. Exits only on an explicit button1
    /// release, because touch stacks are unreliable about release delivery.
    StickyPan(Pan),
    Tilt(Tilt),
    Gesture(Gesture),
    /// Buttons are down but the interaction is decided; waiting for a zero
    /// mask. Roll chords may still fire here.
    AwaitingRelease,
    /// A dragger owns the input; events pass through unconsumed.
    Interact,
}

impl NavState {
    /// Short name for logs and transition traces.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingMove(_) => "AwaitingMove",
            Self::Rotate(_) => "Rotate",
            Self::Pan(_) => "Pan",
            Self::StickyPan(_) => "StickyPan",
            Self::Tilt(_) => "Tilt",
            Self::Gesture(_) => "Gesture",
            Self::AwaitingRelease => "AwaitingRelease",
            Self::Interact => "Interact",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// True while a camera-moving drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            Self::Rotate(_) | Self::Pan(_) | Self::StickyPan(_) | Self::Tilt(_)
        )
    }

    pub fn is_gesturing(&self) -> bool {
        matches!(self, Self::Gesture(_))
    }
}

impl AwaitingMove {
    /// Capture the disambiguation window's scratch from the initiating
    /// press and the resolved policy.
    pub fn begin(base_pos: Point2, since: Duration, policy: &TimingPolicy) -> Self {
        Self {
            base_pos,
            since,
            move_threshold: policy.move_threshold,
            hold_timeout: policy.hold_timeout,
        }
    }

    /// Whether `now` is far enough past the initiating press to count as a
    /// long click.
    pub fn is_long_click(&self, now: Duration) -> bool {
        now.saturating_sub(self.since) >= self.hold_timeout
    }
}
