//! External prayer-time source interface and wire model.
//!
//! The engine does not own any network I/O; it only defines the shape of
//! what a remote source must deliver. [`RawDay`] mirrors the upstream JSON
//! record exactly (Turkish Diyanet field names, `"HH:MM"` strings and a
//! `"DD.MM.YYYY"` date key). A concrete fetcher implements
//! [`TimesProvider`]; the cache layer stores the raw records untouched so
//! the typed schedule can always be re-derived.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One day's record exactly as the upstream API returns it.
///
/// Field names follow the upstream JSON keys. Values stay as strings here;
/// conversion into the typed [`PrayerDay`](crate::times::PrayerDay) is
/// where malformed data is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDay {
    #[serde(rename = "Imsak")]
    pub imsak: String,
    #[serde(rename = "Gunes")]
    pub gunes: String,
    #[serde(rename = "Ogle")]
    pub ogle: String,
    #[serde(rename = "Ikindi")]
    pub ikindi: String,
    #[serde(rename = "Aksam")]
    pub aksam: String,
    #[serde(rename = "Yatsi")]
    pub yatsi: String,
    #[serde(rename = "KibleSaati", default)]
    pub qibla_time: String,
    #[serde(rename = "HicriTarihUzun", default)]
    pub hijri_date: String,
    #[serde(rename = "MiladiTarihKisa")]
    pub gregorian_short: String,
    #[serde(rename = "AyinSekliURL", default)]
    pub moon_phase_url: String,
}

/// A source of per-day prayer time records for a location.
///
/// Implementations fetch an ordered, chronologically contiguous list
/// starting at "today" for the given city identifier. The caller handles
/// the synthetic yesterday entry and caching.
pub trait TimesProvider {
    fn fetch(&self, city_id: &str) -> Result<Vec<RawDay>>;
}
