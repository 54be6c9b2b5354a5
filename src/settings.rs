//! Configuration lookups and the resolved gesture timing policy.
//!
//! The host exposes a plain string-keyed settings store (group path + key +
//! default). The dispatch façade resolves everything the machine needs into
//! a [`TimingPolicy`] up front and hands it to state entry code by
//! reference, so transition logic never performs external lookups.

use parking_lot::RwLock;
use serde_json::Value;
use std::time::Duration;

use crate::constants::{DEFAULT_HOLD_TIMEOUT_MS, DEFAULT_MOVE_THRESHOLD, HOLD_TIMEOUT_TIGHTEN};

/// Settings group holding all gesture navigation parameters.
pub const VIEW_GROUP: &str = "Preferences/View";

pub const KEY_MOVE_THRESHOLD: &str = "GestureMoveThreshold";
pub const KEY_TAP_HOLD_TIMEOUT: &str = "GestureTapHoldTimeout";
pub const KEY_DISABLE_TOUCH_TILT: &str = "DisableTouchTilt";
pub const KEY_ROLL_FWD_COMMAND: &str = "GestureRollFwdCommand";
pub const KEY_ROLL_BACK_COMMAND: &str = "GestureRollBackCommand";

/// String-keyed lookup against an external settings store. Lookups never
/// fail; a missing group or key yields the caller's default.
pub trait SettingsStore: Send + Sync {
    fn get_int(&self, group: &str, key: &str, default: i64) -> i64;
    fn get_bool(&self, group: &str, key: &str, default: bool) -> bool;
    fn get_string(&self, group: &str, key: &str, default: &str) -> String;
}

/// In-memory [`SettingsStore`] backed by a JSON value tree. Group paths are
/// slash-separated object keys, mirroring the host's parameter groups.
#[derive(Debug, Default)]
pub struct MemorySettings {
    root: RwLock<Value>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self { root: RwLock::new(Value::Object(Default::default())) }
    }

    /// Build from an existing JSON tree (e.g. deserialized host config).
    pub fn from_json(root: Value) -> Self {
        Self { root: RwLock::new(root) }
    }

    pub fn set(&self, group: &str, key: &str, value: Value) {
        let mut root = self.root.write();
        let mut node = &mut *root;
        for segment in group.split('/').filter(|s| !s.is_empty()) {
            if !node.is_object() {
                *node = Value::Object(Default::default());
            }
            let Value::Object(map) = node else { return };
            node = map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Default::default()));
        }
        if !node.is_object() {
            *node = Value::Object(Default::default());
        }
        if let Some(map) = node.as_object_mut() {
            map.insert(key.to_string(), value);
        }
    }

    fn lookup(&self, group: &str, key: &str) -> Option<Value> {
        let root = self.root.read();
        let mut node = &*root;
        for segment in group.split('/').filter(|s| !s.is_empty()) {
            node = node.get(segment)?;
        }
        node.get(key).cloned()
    }
}

impl SettingsStore for MemorySettings {
    fn get_int(&self, group: &str, key: &str, default: i64) -> i64 {
        self.lookup(group, key)
            .and_then(|v| v.as_i64())
            .unwrap_or(default)
    }

    fn get_bool(&self, group: &str, key: &str, default: bool) -> bool {
        self.lookup(group, key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    fn get_string(&self, group: &str, key: &str, default: &str) -> String {
        self.lookup(group, key)
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| default.to_string())
    }
}

/// Gesture thresholds and roll bindings, resolved once per initiating press.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingPolicy {
    /// Pointer travel (pixels) separating a click from a drag.
    pub move_threshold: f32,
    /// Long-click threshold. Kept slightly tighter than the platform's
    /// tap-and-hold recognizer so the machine wins races against it.
    pub hold_timeout: Duration,
    /// Timeout to push back into the platform recognizer
    /// (`hold_timeout` un-tightened).
    pub platform_hold_timeout: Duration,
    /// Whether pinch rotation may tilt the camera.
    pub tilt_enabled: bool,
    /// Command identifier bound to the roll-forward chord, empty if unbound.
    pub roll_forward_command: String,
    /// Command identifier bound to the roll-backward chord, empty if unbound.
    pub roll_back_command: String,
}

impl Default for TimingPolicy {
    fn default() -> Self {
        let hold = Duration::from_millis(DEFAULT_HOLD_TIMEOUT_MS);
        Self {
            move_threshold: DEFAULT_MOVE_THRESHOLD,
            hold_timeout: hold,
            platform_hold_timeout: untighten(hold),
            tilt_enabled: false,
            roll_forward_command: String::new(),
            roll_back_command: String::new(),
        }
    }
}

fn untighten(hold: Duration) -> Duration {
    Duration::from_millis((hold.as_millis() as f64 / HOLD_TIMEOUT_TIGHTEN) as u64)
}

impl TimingPolicy {
    /// Resolve the policy from the settings store.
    ///
    /// `platform_hold_timeout` is the platform recognizer's current
    /// tap-and-hold timeout; the machine's own threshold is 90% of it unless
    /// the store overrides it outright. A zero override falls back to the
    /// stock 650 ms.
    pub fn resolve(settings: &dyn SettingsStore, platform_hold_timeout: Duration) -> Self {
        let move_threshold = settings.get_int(
            VIEW_GROUP,
            KEY_MOVE_THRESHOLD,
            DEFAULT_MOVE_THRESHOLD as i64,
        ) as f32;

        let tightened =
            (platform_hold_timeout.as_millis() as f64 * HOLD_TIMEOUT_TIGHTEN) as i64;
        let mut hold_ms = settings.get_int(VIEW_GROUP, KEY_TAP_HOLD_TIMEOUT, tightened);
        if hold_ms <= 0 {
            hold_ms = DEFAULT_HOLD_TIMEOUT_MS as i64;
        }
        let hold_timeout = Duration::from_millis(hold_ms as u64);

        Self {
            move_threshold,
            hold_timeout,
            platform_hold_timeout: untighten(hold_timeout),
            tilt_enabled: !settings.get_bool(VIEW_GROUP, KEY_DISABLE_TOUCH_TILT, true),
            roll_forward_command: settings.get_string(VIEW_GROUP, KEY_ROLL_FWD_COMMAND, ""),
            roll_back_command: settings.get_string(VIEW_GROUP, KEY_ROLL_BACK_COMMAND, ""),
        }
    }
}
