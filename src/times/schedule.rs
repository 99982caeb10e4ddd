//! The ordered day-record set and adjustment application.
//!
//! A [`Schedule`] holds one [`PrayerDay`] per calendar day, chronologically
//! ordered. Because the upstream source returns records starting at "today"
//! but the engine needs a day-before entry for midnight-rollover lookups, a
//! synthetic yesterday entry (a copy of the first real record, dated one day
//! earlier) is prepended at construction.
//!
//! Adjustments never mutate raw data: applying a vector produces a derived
//! copy, so the adjusted set can always be re-derived from scratch when the
//! vector changes. Re-derivation is a full recomputation; the data set is a
//! handful of days, so incremental patching is not worth the aliasing risk.

use anyhow::Result;
use chrono::{Duration, NaiveDate};

use crate::constants::PERIOD_COUNT;
use crate::provider::RawDay;
use crate::times::day::PrayerDay;
use crate::times::period::ALL_PERIODS;

/// Per-period minute offsets in catalog order.
pub type Adjustments = [i32; PERIOD_COUNT];

/// The default adjustment vector: no offsets.
pub const ZERO_ADJUSTMENTS: Adjustments = [0; PERIOD_COUNT];

/// Ordered sequence of day records, one per calendar day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schedule {
    days: Vec<PrayerDay>,
}

impl Schedule {
    /// Build a schedule from already-typed day records, as delivered
    /// (no synthetic yesterday entry is added).
    pub fn new(days: Vec<PrayerDay>) -> Self {
        Self { days }
    }

    /// Build a schedule from upstream wire records.
    ///
    /// Every record must parse; a malformed time or date key aborts the
    /// whole conversion. On success a synthetic yesterday entry is
    /// prepended, cloned from the first real record with its date set one
    /// day earlier.
    pub fn from_raw(raw: &[RawDay]) -> Result<Self> {
        let days = raw
            .iter()
            .map(PrayerDay::try_from)
            .collect::<Result<Vec<_>>>()?;
        let mut schedule = Self::new(days);
        schedule.prepend_synthetic_yesterday();
        Ok(schedule)
    }

    /// Prepend a copy of the first record dated one day earlier.
    ///
    /// The upstream source starts at "today"; the rollover lookup after
    /// midnight needs yesterday's record (for the moon icon derivation).
    fn prepend_synthetic_yesterday(&mut self) {
        if let Some(first) = self.days.first() {
            let mut yesterday = first.clone();
            yesterday.date -= Duration::days(1);
            self.days.insert(0, yesterday);
        }
    }

    /// Look up the record for the given calendar date.
    pub fn day_for(&self, date: NaiveDate) -> Option<&PrayerDay> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Derive a new schedule with the adjustment vector applied.
    ///
    /// Each period's time gets the corresponding offset in minutes, with
    /// minute/hour carry wrapping within the same nominal day - the date
    /// key never rolls forward on overflow, matching upstream behavior.
    /// The result is always a distinct copy, even for the zero vector.
    pub fn adjusted(&self, adjustments: &Adjustments) -> Schedule {
        let days = self
            .days
            .iter()
            .map(|day| {
                let mut adjusted = day.clone();
                for period in ALL_PERIODS {
                    let minutes = adjustments[period.index()];
                    if minutes != 0 {
                        let shifted = day.time_of(period) + Duration::minutes(minutes as i64);
                        adjusted.set_time(period, shifted);
                    }
                }
                adjusted
            })
            .collect();
        Schedule { days }
    }

    pub fn days(&self) -> &[PrayerDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
