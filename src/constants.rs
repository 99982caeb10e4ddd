//! Shared constants for formats, thresholds, and defaults.
//!
//! All magic values used across the application live here so the engine,
//! the badge renderer, and the configuration system agree on formats and
//! limits without duplicating literals.

/// Number of daily prayer periods (Imsak through Yatsi).
pub const PERIOD_COUNT: usize = 6;

/// Wall-clock format used by the upstream prayer time source ("HH:MM").
pub const TIME_FORMAT: &str = "%H:%M";

/// Calendar date key format used by the upstream source ("DD.MM.YYYY").
/// This is the natural lookup key of the data set, not a display choice.
pub const DATE_KEY_FORMAT: &str = "%d.%m.%Y";

/// Interval between engine ticks in the watch loop.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Cached schedule data older than this is considered stale (2 days).
pub const CACHE_MAX_AGE_SECS: i64 = 172_800;

/// Badge formatting thresholds, in seconds remaining.
pub const BADGE_HOUR_THRESHOLD: i64 = 3600;
pub const BADGE_MINUTES_ONLY_THRESHOLD: i64 = 600;
pub const BADGE_SECONDS_THRESHOLD: i64 = 60;

/// Fallback moon phase key when no schedule data is available.
pub const DEFAULT_MOON_KEY: &str = "dolunay";

/// Per-period minute adjustments are rejected outside this range.
pub const MINIMUM_ADJUSTMENT: i32 = -60;
pub const MAXIMUM_ADJUSTMENT: i32 = 60;

/// Time travel offset components are rejected outside these ranges.
pub const MAXIMUM_TRAVEL_HOURS: i64 = 48;
pub const MAXIMUM_TRAVEL_MINUTES: i64 = 59;
pub const MAXIMUM_TRAVEL_SECONDS: i64 = 59;

/// Default configuration values.
pub const DEFAULT_LANGUAGE: &str = "tr";
pub const DEFAULT_RAMADAN_TIMER: bool = false;
