//! Input event model and per-event classification.
//!
//! `InputEvent` is the immutable tagged union the host feeds into the
//! dispatcher. `ClassifiedEvent` wraps one event together with the
//! button/modifier bitmask tracked by the façade and exposes the predicates
//! the state machine keys its transitions on. `EventOutcome` is the mutable
//! result pair; it travels as an explicit `&mut` next to the event instead
//! of being smuggled through a shared cell.

use std::time::Duration;

use crate::constants::{
    ALT_DOWN, CTRL_DOWN, MASK_BUTTONS, MASK_MODIFIERS, SHIFT_DOWN,
};
use crate::coords::{Point2, Vec2};

/// Mouse button identifier. The numbering follows the host viewer: 1 is the
/// left/primary button, 2 the right, 3 the middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Button1,
    Button2,
    Button3,
}

impl MouseButton {
    /// 1-based index, matching the transition table notation.
    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Self::Button1 => 1,
            Self::Button2 => 2,
            Self::Button3 => 3,
        }
    }

    /// The bit this button occupies in the combined bitmask.
    #[inline]
    pub fn mask_bit(self) -> u32 {
        match self {
            Self::Button1 => crate::constants::BUTTON1_DOWN,
            Self::Button2 => crate::constants::BUTTON2_DOWN,
            Self::Button3 => crate::constants::BUTTON3_DOWN,
        }
    }
}

/// Keys the navigation layer reacts to. Anything else stays unconsumed and
/// falls through to the default handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Re-target the camera at the point under the cursor.
    H,
    PageUp,
    PageDown,
    /// Any key the machine does not map; carried so the default handler can
    /// still see it.
    Other(u32),
}

/// Modifier key snapshot carried by button and key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Pack into the modifier bits of the combined bitmask.
    #[inline]
    pub fn mask(self) -> u32 {
        (if self.ctrl { CTRL_DOWN } else { 0 })
            | (if self.shift { SHIFT_DOWN } else { 0 })
            | (if self.alt { ALT_DOWN } else { 0 })
    }
}

/// A button press or release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonEvent {
    pub button: MouseButton,
    pub pos: Point2,
    pub time: Duration,
    pub modifiers: Modifiers,
}

/// A pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveEvent {
    pub pos: Point2,
    pub time: Duration,
}

/// A key press or release. Carries the pointer position because the H key
/// and the keyboard zoom act on the point under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub pos: Point2,
    pub time: Duration,
    pub modifiers: Modifiers,
}

/// Payload of a multi-touch gesture event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureKind {
    /// Two-finger pan; `delta` is the offset since the previous update, in
    /// pixels.
    Pan { delta: Vec2 },
    /// Pinch: zoom factor since last update, rotation since last update
    /// (radians), current pinch center and its movement since last update.
    Pinch {
        delta_zoom: f64,
        delta_angle: f32,
        center: Point2,
        delta_center: Vec2,
    },
    /// A gesture subtype the machine does not recognize. Left unconsumed.
    Unknown,
}

/// One event of a gesture start/update/end sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub pos: Point2,
    pub time: Duration,
}

/// 6-DOF input from a spacemouse or similar device. Handled ahead of the
/// state machine, never routed through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMotionEvent {
    pub translation: [f32; 3],
    pub rotation: [f32; 3],
    pub time: Duration,
}

/// The raw input event union. Immutable once constructed; classification
/// derives facts from it but never mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    ButtonPress(ButtonEvent),
    ButtonRelease(ButtonEvent),
    PointerMove(MoveEvent),
    KeyPress(KeyEvent),
    KeyRelease(KeyEvent),
    GestureStart(GestureEvent),
    GestureUpdate(GestureEvent),
    GestureEnd(GestureEvent),
    GestureCanceled(GestureEvent),
    SpatialMotion(SpatialMotionEvent),
}

impl InputEvent {
    /// Pointer position associated with the event. Spatial motion carries no
    /// useful 2D position; it reports the origin.
    pub fn position(&self) -> Point2 {
        match self {
            Self::ButtonPress(e) | Self::ButtonRelease(e) => e.pos,
            Self::PointerMove(e) => e.pos,
            Self::KeyPress(e) | Self::KeyRelease(e) => e.pos,
            Self::GestureStart(e)
            | Self::GestureUpdate(e)
            | Self::GestureEnd(e)
            | Self::GestureCanceled(e) => e.pos,
            Self::SpatialMotion(_) => Point2::default(),
        }
    }

    /// Timestamp, measured from the host-chosen session origin.
    pub fn timestamp(&self) -> Duration {
        match self {
            Self::ButtonPress(e) | Self::ButtonRelease(e) => e.time,
            Self::PointerMove(e) => e.time,
            Self::KeyPress(e) | Self::KeyRelease(e) => e.time,
            Self::GestureStart(e)
            | Self::GestureUpdate(e)
            | Self::GestureEnd(e)
            | Self::GestureCanceled(e) => e.time,
            Self::SpatialMotion(e) => e.time,
        }
    }
}

/// Mutable per-event result pair.
///
/// `consumed`: the machine fully handled the event. `forwarded`: the event
/// (or its postponed predecessors) was explicitly replayed through the
/// default handler, and `consumed` now holds that handler's result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub consumed: bool,
    pub forwarded: bool,
}

/// A raw event plus the button/modifier bitmask that was current when it
/// arrived. All transition predicates live here.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedEvent<'a> {
    pub raw: &'a InputEvent,
    /// Combined bitmask: button bits from the façade's tracker, modifier
    /// bits synced from the event stream.
    pub modifiers: u32,
}

impl<'a> ClassifiedEvent<'a> {
    pub fn new(raw: &'a InputEvent, modifiers: u32) -> Self {
        Self { raw, modifiers }
    }

    #[inline]
    pub fn is_button_event(&self) -> bool {
        matches!(
            self.raw,
            InputEvent::ButtonPress(_) | InputEvent::ButtonRelease(_)
        )
    }

    /// Press of the button with the given 1-based index.
    #[inline]
    pub fn is_press(&self, button_index: u8) -> bool {
        matches!(self.raw, InputEvent::ButtonPress(e) if e.button.index() == button_index)
    }

    /// Release of the button with the given 1-based index.
    #[inline]
    pub fn is_release(&self, button_index: u8) -> bool {
        matches!(self.raw, InputEvent::ButtonRelease(e) if e.button.index() == button_index)
    }

    #[inline]
    pub fn is_pointer_move(&self) -> bool {
        matches!(self.raw, InputEvent::PointerMove(_))
    }

    #[inline]
    pub fn is_keyboard_event(&self) -> bool {
        matches!(self.raw, InputEvent::KeyPress(_) | InputEvent::KeyRelease(_))
    }

    #[inline]
    pub fn is_gesture_event(&self) -> bool {
        matches!(
            self.raw,
            InputEvent::GestureStart(_)
                | InputEvent::GestureUpdate(_)
                | InputEvent::GestureEnd(_)
                | InputEvent::GestureCanceled(_)
        )
    }

    #[inline]
    pub fn is_spatial_event(&self) -> bool {
        matches!(self.raw, InputEvent::SpatialMotion(_))
    }

    /// A gesture is in progress: start or update, but not end/cancel.
    #[inline]
    pub fn is_gesture_active(&self) -> bool {
        matches!(
            self.raw,
            InputEvent::GestureStart(_) | InputEvent::GestureUpdate(_)
        )
    }

    /// Currently-down buttons.
    #[inline]
    pub fn mbstate(&self) -> u32 {
        self.modifiers & MASK_BUTTONS
    }

    /// Currently-held keyboard modifiers.
    #[inline]
    pub fn kbdstate(&self) -> u32 {
        self.modifiers & MASK_MODIFIERS
    }

    #[inline]
    pub fn pos(&self) -> Point2 {
        self.raw.position()
    }

    #[inline]
    pub fn time(&self) -> Duration {
        self.raw.timestamp()
    }

    /// Emit the event on the trace log, mirroring the classification the
    /// machine will see.
    pub fn trace_log(&self) {
        match self.raw {
            InputEvent::ButtonPress(e) => tracing::trace!(
                button = e.button.index(),
                modifiers = format_args!("{:#x}", self.modifiers),
                x = e.pos.x,
                y = e.pos.y,
                "button press"
            ),
            InputEvent::ButtonRelease(e) => tracing::trace!(
                button = e.button.index(),
                modifiers = format_args!("{:#x}", self.modifiers),
                x = e.pos.x,
                y = e.pos.y,
                "button release"
            ),
            InputEvent::PointerMove(e) => {
                tracing::trace!(x = e.pos.x, y = e.pos.y, "pointer move");
            }
            InputEvent::KeyPress(e) => tracing::trace!(key = ?e.key, "key press"),
            InputEvent::KeyRelease(e) => tracing::trace!(key = ?e.key, "key release"),
            InputEvent::GestureStart(e) => {
                tracing::trace!(kind = ?e.kind, x = e.pos.x, y = e.pos.y, "gesture start");
            }
            InputEvent::GestureUpdate(e) => {
                tracing::trace!(kind = ?e.kind, x = e.pos.x, y = e.pos.y, "gesture data");
            }
            InputEvent::GestureEnd(e) => {
                tracing::trace!(x = e.pos.x, y = e.pos.y, "gesture end");
            }
            InputEvent::GestureCanceled(e) => {
                tracing::trace!(x = e.pos.x, y = e.pos.y, "gesture canceled");
            }
            InputEvent::SpatialMotion(_) => tracing::trace!("spatial motion"),
        }
    }
}
