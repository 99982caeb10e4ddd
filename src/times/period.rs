//! The fixed catalog of six daily prayer periods.
//!
//! Periods carry the upstream source's names (Diyanet API field names) and
//! a fixed total order: `Imsak < Gunes < Ogle < Ikindi < Aksam < Yatsi`.
//! The order matters for interval checks and for wraparound: the successor
//! of `Yatsi` is `Imsak` of the following day.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Language;

/// One of the six daily prayer periods, in catalog order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Dawn - start of the fast, first period of the day
    Imsak,

    /// Sunrise
    Gunes,

    /// Midday
    Ogle,

    /// Afternoon
    Ikindi,

    /// Sunset - end of the fast (iftar boundary)
    Aksam,

    /// Night - last period, spans midnight into the next Imsak
    Yatsi,
}

/// All periods in catalog order. Indexing matches the adjustment vector.
pub const ALL_PERIODS: [Period; 6] = [
    Period::Imsak,
    Period::Gunes,
    Period::Ogle,
    Period::Ikindi,
    Period::Aksam,
    Period::Yatsi,
];

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Period {
    /// Returns the canonical upstream name of this period.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Imsak => "Imsak",
            Self::Gunes => "Gunes",
            Self::Ogle => "Ogle",
            Self::Ikindi => "Ikindi",
            Self::Aksam => "Aksam",
            Self::Yatsi => "Yatsi",
        }
    }

    /// Returns the position of this period in catalog order (0..6).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the next period in the daily cycle, wrapping `Yatsi → Imsak`.
    pub fn successor(&self) -> Period {
        match self {
            Self::Imsak => Self::Gunes,
            Self::Gunes => Self::Ogle,
            Self::Ogle => Self::Ikindi,
            Self::Ikindi => Self::Aksam,
            Self::Aksam => Self::Yatsi,
            Self::Yatsi => Self::Imsak,
        }
    }

    /// Returns the localized display label for this period.
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Turkish => match self {
                Self::Imsak => "İmsak",
                Self::Gunes => "Güneş",
                Self::Ogle => "Öğle",
                Self::Ikindi => "İkindi",
                Self::Aksam => "Akşam",
                Self::Yatsi => "Yatsı",
            },
            Language::English => match self {
                Self::Imsak => "Dawn",
                Self::Gunes => "Sunrise",
                Self::Ogle => "Midday",
                Self::Ikindi => "Afternoon",
                Self::Aksam => "Sunset",
                Self::Yatsi => "Night",
            },
        }
    }
}
