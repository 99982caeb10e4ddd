//! Prayer schedule data model.
//!
//! Leaf types consumed by the timer engine:
//! - **Period catalog**: the six named daily periods with fixed order and
//!   wraparound successor semantics
//! - **Day record**: one calendar day's six start times plus passthrough
//!   display fields, parsed from the upstream wire format
//! - **Schedule**: the ordered day record set with date lookup, synthetic
//!   yesterday entry, and adjustment application

pub mod day;
pub mod period;
pub mod schedule;

pub use day::PrayerDay;
pub use period::Period;
pub use schedule::{Adjustments, Schedule, ZERO_ADJUSTMENTS};
