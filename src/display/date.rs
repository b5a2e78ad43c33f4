//! Relative and locale-aware date rendering
//!
//! Movement dates within the last week render as relative phrases; older
//! ones fall back to a locale-formatted calendar date. Both functions are
//! pure: "now" is an argument, never sampled here.

use chrono::{DateTime, Locale, Utc};

/// Map a BCP 47 tag ("pt-PT") onto a chrono locale, falling back to en_US
fn chrono_locale(tag: &str) -> Locale {
    let normalized = tag.replace('-', "_");
    Locale::try_from(normalized.as_str()).unwrap_or(Locale::en_US)
}

/// Render a movement timestamp relative to `now`
///
/// Under one day (rounded) is "Today", one day is "Yesterday", up to seven
/// days is "N days ago", anything older is a locale calendar date.
pub fn format_movement_date(date: DateTime<Utc>, now: DateTime<Utc>, locale: &str) -> String {
    let days = ((now - date).num_seconds().abs() as f64 / 86_400.0).round() as i64;

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=7 => format!("{} days ago", days),
        _ => date
            .format_localized("%x", chrono_locale(locale))
            .to_string(),
    }
}

/// Render the login timestamp shown in the dashboard header
pub fn format_login_stamp(now: DateTime<Utc>, locale: &str) -> String {
    now.format_localized("%x, %R", chrono_locale(locale))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 9, 25, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_today() {
        let date = now() - Duration::hours(2);
        assert_eq!(format_movement_date(date, now(), "en-US"), "Today");
    }

    #[test]
    fn test_yesterday() {
        let date = now() - Duration::days(1);
        assert_eq!(format_movement_date(date, now(), "en-US"), "Yesterday");
    }

    #[test]
    fn test_days_ago() {
        let date = now() - Duration::days(4);
        assert_eq!(format_movement_date(date, now(), "en-US"), "4 days ago");
        let date = now() - Duration::days(7);
        assert_eq!(format_movement_date(date, now(), "en-US"), "7 days ago");
    }

    #[test]
    fn test_rounding_to_nearest_day() {
        // 36 hours rounds to 2 days
        let date = now() - Duration::hours(36);
        assert_eq!(format_movement_date(date, now(), "en-US"), "2 days ago");
    }

    #[test]
    fn test_future_dates_use_absolute_difference() {
        let date = now() + Duration::days(1);
        assert_eq!(format_movement_date(date, now(), "en-US"), "Yesterday");
    }

    #[test]
    fn test_older_dates_fall_back_to_calendar() {
        let date = Utc.with_ymd_and_hms(2020, 1, 28, 9, 15, 4).unwrap();
        let rendered = format_movement_date(date, now(), "en-US");
        assert!(rendered.contains("2020"), "got {rendered}");
        assert!(rendered.contains("28"), "got {rendered}");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let date = Utc.with_ymd_and_hms(2020, 1, 28, 9, 15, 4).unwrap();
        let rendered = format_movement_date(date, now(), "xx-XX");
        assert!(rendered.contains("2020"));
    }

    #[test]
    fn test_login_stamp_has_time() {
        let stamp = format_login_stamp(now(), "en-US");
        assert!(stamp.contains("12:00"), "got {stamp}");
    }
}
