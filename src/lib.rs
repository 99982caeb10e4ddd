//! Prayer-time window and countdown engine with a terminal watch loop.
//!
//! vakitler derives the active prayer period, the countdown to the next
//! one, and the Ramadan iftar countdown from a cached Diyanet-style
//! schedule. The library is split into a pure derivation core (`times`,
//! `time_state`, `timer`) and the drivers around it (`vakitler` watch
//! loop, one-shot `commands`, `badge` formatting for status bars).
//!
//! All derivation is a pure function of the schedule and a reference
//! instant; the only clock access goes through `time_source`, which makes
//! the whole pipeline testable and supports simulated time travel.

#[macro_use]
pub mod logger;

pub mod args;
pub mod badge;
pub mod cache;
pub mod commands;
pub mod config;
pub mod constants;
pub mod provider;
pub mod time_source;
pub mod time_state;
pub mod timer;
pub mod times;
pub mod vakitler;

pub use config::Config;
pub use time_state::{Countdown, Window};
pub use timer::{Snapshot, TimerEngine};
pub use times::{Adjustments, Period, PrayerDay, Schedule};
pub use vakitler::Vakitler;
