//! The live timer engine owning raw and adjusted schedules.
//!
//! `TimerEngine` is the object both drivers hold: it owns the unmodified
//! raw schedule, the adjusted schedule derived from it, and the current
//! adjustment vector. It is reconstructed when new data arrives and only
//! re-derives the adjusted set when the vector changes - raw records are
//! never patched in place.
//!
//! The engine never reads a clock. Every query takes an explicit reference
//! instant, so two engines fed the same (records, adjustments, instant)
//! triple produce identical snapshots.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::time_state::{self, Countdown, Window};
use crate::times::schedule::{Adjustments, Schedule, ZERO_ADJUSTMENTS};

/// Everything derived for one reference instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Active and next period, or the placeholder when no data matches.
    pub window: Window,
    /// Countdown to the next period boundary.
    pub next_in: Countdown,
    /// Countdown to the Ramadan evening-meal boundary.
    pub iftar_in: Countdown,
    /// Which moon phase icon applies to this instant.
    pub moon_key: String,
}

impl Snapshot {
    /// True when the engine had no record for the instant's date.
    pub fn is_placeholder(&self) -> bool {
        self.window.is_placeholder()
    }
}

/// Deterministic prayer-window engine over a day-record set.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    raw: Schedule,
    adjusted: Schedule,
    adjustments: Adjustments,
}

impl TimerEngine {
    /// Construct an engine from a raw schedule and an adjustment vector.
    /// The adjusted set is derived immediately.
    pub fn new(raw: Schedule, adjustments: Adjustments) -> Self {
        let adjusted = raw.adjusted(&adjustments);
        Self {
            raw,
            adjusted,
            adjustments,
        }
    }

    /// Construct an engine with no adjustments.
    pub fn without_adjustments(raw: Schedule) -> Self {
        Self::new(raw, ZERO_ADJUSTMENTS)
    }

    /// Replace the adjustment vector and re-derive the adjusted schedule
    /// in full from the untouched raw records.
    pub fn set_adjustments(&mut self, adjustments: Adjustments) {
        self.adjustments = adjustments;
        self.adjusted = self.raw.adjusted(&adjustments);
    }

    pub fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    /// The unmodified day records as delivered by the source.
    pub fn raw(&self) -> &Schedule {
        &self.raw
    }

    /// The adjusted day records all window queries run against.
    pub fn adjusted(&self) -> &Schedule {
        &self.adjusted
    }

    /// Derive the full state for a reference instant.
    pub fn snapshot(&self, now: NaiveDateTime) -> Snapshot {
        let date = now.date();
        let today = self.adjusted.day_for(date);
        let tomorrow = self.adjusted.day_for(date + Duration::days(1));
        let yesterday = self.adjusted.day_for(date - Duration::days(1));

        Snapshot {
            window: time_state::resolve_window(today, now),
            next_in: time_state::time_to_next(today, tomorrow, now),
            iftar_in: time_state::time_to_iftar(today, tomorrow, now),
            moon_key: time_state::moon_icon_key(today, yesterday, now),
        }
    }
}
