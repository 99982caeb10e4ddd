//! Time source abstraction for real, shifted, and fixed reference time.
//!
//! The engine itself never reads a clock: every computation takes an
//! explicit reference instant. This module is how the *drivers* obtain that
//! instant. A trait-based abstraction lets the watch loop run against real
//! system time, a constant-offset "time travel" clock for debugging, or a
//! frozen instant in tests, without the engine noticing any difference.

use chrono::{DateTime, Duration as ChronoDuration, Local};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Global time source instance, defaults to RealTimeSource
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting reference-time acquisition.
pub trait TimeSource: Send + Sync {
    /// Get the current reference time.
    fn now(&self) -> DateTime<Local>;

    /// Check if this source applies an artificial offset.
    fn is_shifted(&self) -> bool {
        false
    }
}

/// Real-time implementation that uses the actual system clock.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// System clock plus a fixed offset, for the time travel debug feature.
///
/// The offset is supplied as (hours, minutes, seconds) from configuration
/// and applied to every reading, so the whole application experiences the
/// same shifted "now" - watch loop, one-shot commands, and log timestamps.
pub struct ShiftedTimeSource {
    offset: ChronoDuration,
}

impl ShiftedTimeSource {
    /// Create a source shifted by the given (hours, minutes, seconds) delta.
    /// Components may be negative to travel backwards.
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            offset: ChronoDuration::hours(hours)
                + ChronoDuration::minutes(minutes)
                + ChronoDuration::seconds(seconds),
        }
    }
}

impl TimeSource for ShiftedTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now() + self.offset
    }

    fn is_shifted(&self) -> bool {
        true
    }
}

/// Frozen instant, used by tests that need a deterministic "now".
pub struct FixedTimeSource {
    instant: DateTime<Local>,
}

impl FixedTimeSource {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }

    fn is_shifted(&self) -> bool {
        true
    }
}

/// Initialize the global time source (call once at startup).
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Check if the time source has been initialized.
pub fn is_initialized() -> bool {
    TIME_SOURCE.get().is_some()
}

/// Get the current reference time from the global time source.
pub fn now() -> DateTime<Local> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource)).now()
}

/// Check if we're running with a shifted clock.
pub fn is_shifted() -> bool {
    TIME_SOURCE
        .get_or_init(|| Arc::new(RealTimeSource))
        .is_shifted()
}
