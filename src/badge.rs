//! Compact badge rendering for the passive indicator surface.
//!
//! The badge shows the time remaining until the next period boundary in
//! the shortest form that still reads at a glance, switching formats as
//! the boundary approaches. Unit suffixes follow the configured language.

use crate::config::Language;
use crate::constants::{
    BADGE_HOUR_THRESHOLD, BADGE_MINUTES_ONLY_THRESHOLD, BADGE_SECONDS_THRESHOLD,
};
use crate::times::period::Period;

/// Format the remaining seconds as badge text.
///
/// - one hour or more: `H:MM`
/// - ten minutes or more: `Ndk` / `Nm`
/// - one minute or more: `M:SS`
/// - under a minute: `Nsn` / `Ns`, never showing less than 1
///
/// Zero or negative input (no data, boundary just passed) yields an empty
/// badge.
pub fn badge_text(remaining_secs: i64, language: Language) -> String {
    if remaining_secs <= 0 {
        return String::new();
    }

    if remaining_secs >= BADGE_HOUR_THRESHOLD {
        let hours = remaining_secs / 3600;
        let minutes = (remaining_secs % 3600) / 60;
        format!("{hours}:{minutes:02}")
    } else if remaining_secs >= BADGE_MINUTES_ONLY_THRESHOLD {
        let minutes = remaining_secs / 60;
        match language {
            Language::Turkish => format!("{minutes}dk"),
            Language::English => format!("{minutes}m"),
        }
    } else if remaining_secs >= BADGE_SECONDS_THRESHOLD {
        let minutes = remaining_secs / 60;
        let seconds = remaining_secs % 60;
        format!("{minutes}:{seconds:02}")
    } else {
        let seconds = remaining_secs.max(1);
        match language {
            Language::Turkish => format!("{seconds}sn"),
            Language::English => format!("{seconds}s"),
        }
    }
}

/// Badge background color for the active period, as a hex string.
pub fn badge_color(active: Option<Period>) -> &'static str {
    match active {
        Some(Period::Imsak) => "#0ea5e9",
        Some(Period::Gunes) => "#f97316",
        Some(Period::Ogle) => "#eab308",
        Some(Period::Ikindi) => "#f97316",
        Some(Period::Aksam) => "#3b82f6",
        Some(Period::Yatsi) => "#6366f1",
        None => "#4caf50",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_format() {
        assert_eq!(badge_text(7200, Language::Turkish), "2:00");
        assert_eq!(badge_text(3660, Language::English), "1:01");
    }

    #[test]
    fn whole_minutes_format_by_language() {
        assert_eq!(badge_text(1800, Language::Turkish), "30dk");
        assert_eq!(badge_text(600, Language::Turkish), "10dk");
        assert_eq!(badge_text(1800, Language::English), "30m");
    }

    #[test]
    fn minute_second_format_below_ten_minutes() {
        assert_eq!(badge_text(599, Language::Turkish), "9:59");
        assert_eq!(badge_text(60, Language::English), "1:00");
    }

    #[test]
    fn seconds_format_below_a_minute() {
        assert_eq!(badge_text(59, Language::Turkish), "59sn");
        assert_eq!(badge_text(59, Language::English), "59s");
        assert_eq!(badge_text(1, Language::Turkish), "1sn");
    }

    #[test]
    fn empty_badge_without_remaining_time() {
        assert_eq!(badge_text(0, Language::Turkish), "");
        assert_eq!(badge_text(-5, Language::English), "");
    }

    #[test]
    fn colors_cover_all_periods() {
        use crate::times::period::ALL_PERIODS;
        for period in ALL_PERIODS {
            assert!(badge_color(Some(period)).starts_with('#'));
        }
        assert_eq!(badge_color(None), "#4caf50");
    }
}
