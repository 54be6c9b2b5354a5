//! Gesture-disambiguating navigation for CAD-style 3D viewers.
//!
//! This crate turns a stream of heterogeneous pointer/touch/keyboard events
//! into camera operations (rotate, pan, tilt, zoom, roll, selection) while
//! disambiguating overlapping gesture sources: synthetic mouse events
//! generated by a touch stack, real mouse input and multi-touch gesture
//! events that arrive inconsistently across platforms.
//!
//! The left button serves a dual purpose - selecting objects as well as
//! spinning the view. Events are consumed before the move threshold is
//! detected and refired through the default handler if the button was
//! released without moving. See [`machine`] for the state machine itself
//! and [`dispatch::GestureNavigator`] for the entry point.
//!
//! The host plugs in through [`viewer::ViewerServices`] (camera primitives,
//! picking, popup menu, default handler) and [`settings::SettingsStore`]
//! (thresholds and roll-gesture bindings). Everything is single-threaded
//! and event-driven: one event in flight at a time, no timers - long-press
//! detection compares event timestamps lazily.

pub mod buttons;
pub mod constants;
pub mod coords;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod machine;
pub mod perf;
pub mod settings;
pub mod types;
pub mod viewer;

pub use buttons::ButtonTracker;
pub use coords::{Point2, Vec2};
pub use dispatch::GestureNavigator;
pub use error::{NavError, NavResult};
pub use event::{
    ButtonEvent, ClassifiedEvent, EventOutcome, GestureEvent, GestureKind, InputEvent, Key,
    KeyEvent, Modifiers, MouseButton, MoveEvent, SpatialMotionEvent,
};
pub use machine::{NavMachine, NavState, PostponedEvents};
pub use settings::{MemorySettings, SettingsStore, TimingPolicy};
pub use types::{ModeCell, NavigationMode, RollDirection};
pub use viewer::ViewerServices;
