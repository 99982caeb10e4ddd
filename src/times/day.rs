//! One calendar day's prayer schedule.
//!
//! A [`PrayerDay`] is the typed form of a single upstream record: a calendar
//! date plus six wall-clock start times, one per [`Period`]. Conversion from
//! the wire format is the one place where malformed data fails hard - a
//! `"HH:MM"` or `"DD.MM.YYYY"` string that does not parse is an upstream
//! contract breach, not a recoverable runtime state.
//!
//! Well-formed records have non-decreasing times in catalog order. The
//! engine trusts the upstream source on this and does not validate it.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_KEY_FORMAT, TIME_FORMAT};
use crate::provider::RawDay;
use crate::times::period::Period;

/// One calendar day's six period start times plus passthrough display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerDay {
    /// Calendar date, parsed from the upstream "DD.MM.YYYY" key.
    pub date: NaiveDate,

    pub imsak: NaiveTime,
    pub gunes: NaiveTime,
    pub ogle: NaiveTime,
    pub ikindi: NaiveTime,
    pub aksam: NaiveTime,
    pub yatsi: NaiveTime,

    /// Qibla time, passed through for display only.
    pub qibla_time: String,
    /// Long-form Hijri date, passed through for display only.
    pub hijri_date: String,
    /// Short Gregorian date as the upstream formats it, display only.
    pub gregorian_short: String,
    /// Moon phase icon URL, consumed by the moon icon derivation.
    pub moon_phase_url: String,
}

impl PrayerDay {
    /// Returns the start time of the given period.
    pub fn time_of(&self, period: Period) -> NaiveTime {
        match period {
            Period::Imsak => self.imsak,
            Period::Gunes => self.gunes,
            Period::Ogle => self.ogle,
            Period::Ikindi => self.ikindi,
            Period::Aksam => self.aksam,
            Period::Yatsi => self.yatsi,
        }
    }

    /// Replaces the start time of the given period.
    pub(crate) fn set_time(&mut self, period: Period, time: NaiveTime) {
        match period {
            Period::Imsak => self.imsak = time,
            Period::Gunes => self.gunes = time,
            Period::Ogle => self.ogle = time,
            Period::Ikindi => self.ikindi = time,
            Period::Aksam => self.aksam = time,
            Period::Yatsi => self.yatsi = time,
        }
    }

    /// Formats the date back into the upstream "DD.MM.YYYY" key.
    pub fn date_key(&self) -> String {
        self.date.format(DATE_KEY_FORMAT).to_string()
    }

    /// Parse an upstream "HH:MM" wall-clock value.
    pub fn parse_time(value: &str) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(value, TIME_FORMAT)
            .with_context(|| format!("Invalid prayer time '{value}', expected HH:MM"))
    }

    /// Parse an upstream "DD.MM.YYYY" date key.
    pub fn parse_date_key(value: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
            .with_context(|| format!("Invalid date key '{value}', expected DD.MM.YYYY"))
    }
}

impl TryFrom<&RawDay> for PrayerDay {
    type Error = anyhow::Error;

    fn try_from(raw: &RawDay) -> Result<Self> {
        let date = Self::parse_date_key(&raw.gregorian_short)?;
        Ok(Self {
            date,
            imsak: Self::parse_time(&raw.imsak)?,
            gunes: Self::parse_time(&raw.gunes)?,
            ogle: Self::parse_time(&raw.ogle)?,
            ikindi: Self::parse_time(&raw.ikindi)?,
            aksam: Self::parse_time(&raw.aksam)?,
            yatsi: Self::parse_time(&raw.yatsi)?,
            qibla_time: raw.qibla_time.clone(),
            hijri_date: raw.hijri_date.clone(),
            gregorian_short: raw.gregorian_short.clone(),
            moon_phase_url: raw.moon_phase_url.clone(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::sample_raw;
    use super::*;
    use crate::constants::test_constants::*;

    #[test]
    fn converts_well_formed_record() {
        let day = PrayerDay::try_from(&sample_raw(TEST_TODAY_KEY)).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
        assert_eq!(day.imsak, NaiveTime::from_hms_opt(5, 0, 0).unwrap());
        assert_eq!(day.yatsi, NaiveTime::from_hms_opt(19, 50, 0).unwrap());
        assert_eq!(day.date_key(), TEST_TODAY_KEY);
    }

    #[test]
    fn rejects_malformed_time() {
        let mut raw = sample_raw(TEST_TODAY_KEY);
        raw.ogle = "25:99".to_string();
        assert!(PrayerDay::try_from(&raw).is_err());

        raw.ogle = "noon".to_string();
        assert!(PrayerDay::try_from(&raw).is_err());
    }

    #[test]
    fn rejects_malformed_date_key() {
        let mut raw = sample_raw(TEST_TODAY_KEY);
        raw.gregorian_short = "2023-02-28".to_string();
        assert!(PrayerDay::try_from(&raw).is_err());
    }

    #[test]
    fn time_of_matches_catalog_order() {
        let day = PrayerDay::try_from(&sample_raw(TEST_TODAY_KEY)).unwrap();
        let mut previous = day.time_of(Period::Imsak);
        for period in crate::times::period::ALL_PERIODS.iter().skip(1) {
            let current = day.time_of(*period);
            assert!(current > previous);
            previous = current;
        }
    }
}
