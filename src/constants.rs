//! Crate-wide constants.
//!
//! Centralizes the button bitmask layout and the gesture timing defaults so
//! the magic numbers appear exactly once.

// ============================================================================
// Button / Modifier Bitmask
// ============================================================================
// bits: 0-shift-ctrl-alt-0-lmb-mmb-rmb

/// Button 1 (left) down
pub const BUTTON1_DOWN: u32 = 0x0000_0100;

/// Button 2 (right) down
pub const BUTTON2_DOWN: u32 = 0x0000_0001;

/// Button 3 (middle) down
pub const BUTTON3_DOWN: u32 = 0x0000_0010;

/// Ctrl held
pub const CTRL_DOWN: u32 = 0x0010_0000;

/// Alt held
pub const ALT_DOWN: u32 = 0x0001_0000;

/// Shift held
pub const SHIFT_DOWN: u32 = 0x0100_0000;

/// All button bits
pub const MASK_BUTTONS: u32 = BUTTON1_DOWN | BUTTON2_DOWN | BUTTON3_DOWN;

/// All modifier bits
pub const MASK_MODIFIERS: u32 = CTRL_DOWN | SHIFT_DOWN | ALT_DOWN;

// ============================================================================
// Gesture Timing Defaults
// ============================================================================

/// Fallback tap-and-hold timeout in milliseconds when neither the platform
/// nor the settings store provides one.
pub const DEFAULT_HOLD_TIMEOUT_MS: u64 = 650;

/// The machine's hold detector runs at this fraction of the platform
/// tap-and-hold timeout, so it always wins the race against the platform's
/// own long-press recognizer.
pub const HOLD_TIMEOUT_TIGHTEN: f64 = 0.9;

/// Default pointer-move distance (pixels) separating a click from a drag.
pub const DEFAULT_MOVE_THRESHOLD: f32 = 5.0;

/// Zoom step applied per PageUp/PageDown key press.
pub const KEY_ZOOM_STEP: f32 = 0.05;
