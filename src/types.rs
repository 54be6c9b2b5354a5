//! Core shared types: the published navigation mode and its shared cell.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Coarse viewing mode, published by the state machine on state entry and
/// read by external cursor/overlay logic. The host also writes it to put the
/// viewer into its animation/seek/boxzoom modes; the Idle state inspects
/// those before running its normal logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NavigationMode {
    #[default]
    Idle,
    /// A click is being treated as object selection.
    Selection,
    /// View is being rotated by a drag.
    Dragging,
    Panning,
    Zooming,
    /// Events are passing through to a dragger in the scene.
    Interact,
    /// Host-driven rubber-band zoom; the machine stays out of the way.
    BoxZoom,
    /// Host armed seek; the next click picks the seek target.
    SeekWait,
    /// Seek animation running.
    Seek,
    /// Spin animation running.
    Spinning,
}

impl NavigationMode {
    /// True for the host-driven animation modes that the Idle state must
    /// wind down before processing input normally.
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Spinning | Self::Seek)
    }

    /// Human-readable hint describing how to drive the camera in this mode,
    /// for help/status display.
    pub fn instructions(self) -> &'static str {
        match self {
            Self::Selection => "Tap OR click left mouse button.",
            Self::Panning => "Drag screen with two fingers OR press right mouse button.",
            Self::Dragging => {
                "Drag screen with one finger OR press left mouse button. \
                 In edit modes, hold Alt in addition."
            }
            Self::Zooming => {
                "Pinch (place two fingers on the screen and drag them apart \
                 from or towards each other) OR scroll middle mouse button \
                 OR PgUp/PgDown on keyboard."
            }
            _ => "No description",
        }
    }
}

/// Shared, cheaply-clonable cell holding the current [`NavigationMode`].
///
/// The machine writes it on state entry; cursor and overlay code keep a
/// clone and read it; the host writes its seek/boxzoom/animation modes into
/// it.
#[derive(Debug, Clone, Default)]
pub struct ModeCell {
    inner: Arc<RwLock<NavigationMode>>,
}

impl ModeCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> NavigationMode {
        *self.inner.read()
    }

    pub fn set(&self, mode: NavigationMode) {
        let mut slot = self.inner.write();
        if *slot != mode {
            tracing::debug!(from = ?*slot, to = ?mode, "viewing mode");
        }
        *slot = mode;
    }
}

/// Direction latched for a two-button roll gesture: recorded when the second
/// button goes down, fired when either button is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollDirection {
    #[default]
    None,
    /// Button2 joined while button1 was down.
    Forward,
    /// Button1 joined while button2 was down.
    Backward,
}
