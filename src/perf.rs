//! Performance instrumentation for the event dispatch hot path.
//!
//! Dispatch runs once per input event and must never add visible latency,
//! so instrumentation is opt-in: enable the `profiling` cargo feature to
//! compile the timers in, and `set_profiling_enabled` to toggle them at
//! runtime.
//!
//! Use the macro for zero-cost scoped timing:
//! ```ignore
//! fn dispatch(...) {
//!     profile_scope!("dispatch");
//!     // ... event handling ...
//! }
//! ```

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::debug;

/// Number of samples retained per operation.
const STATS_SAMPLE_COUNT: usize = 100;

/// Global flag to enable/disable profiling at runtime.
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Aggregated per-operation timings, keyed by scope name.
static OP_STATS: Lazy<Mutex<HashMap<&'static str, OperationStats>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Profile a scope with the given name. Zero-cost when profiling is
/// disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if profiling is currently enabled.
#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// Timing statistics for one named scope.
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    samples: Vec<f64>,
    pub count: u64,
    pub max_ms: f64,
    sum_ms: f64,
}

impl OperationStats {
    fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.first().copied() {
                self.samples.remove(0);
                self.sum_ms -= old;
            }
        }
        self.samples.push(ms);
        self.sum_ms += ms;
        self.count += 1;
        if ms > self.max_ms {
            self.max_ms = ms;
        }
    }

    pub fn average_ms(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }
}

/// Snapshot of the aggregated stats for one scope, if it was ever timed.
pub fn stats_for(name: &str) -> Option<OperationStats> {
    OP_STATS.lock().get(name).cloned()
}

/// RAII scope timer: records elapsed time into the aggregated stats when
/// dropped.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn for_profiling(name: &'static str) -> Option<Self> {
        if !is_profiling_enabled() {
            return None;
        }
        Some(Self { name, start: Instant::now() })
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        let mut stats = OP_STATS.lock();
        stats.entry(self.name).or_default().record(ms);
        debug!(scope = self.name, ms, "scope timing");
    }
}
