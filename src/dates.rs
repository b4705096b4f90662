//! Date-key helpers shared by the booking flow and the dashboard.
//!
//! The platform works in date keys (`YYYY-MM-DD`) and UTC-midnight ISO
//! timestamps; these functions convert between the two and build the
//! next-N-day list used by the slot picker.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

const WEEKDAYS_ID: [&str; 7] = ["Sen", "Sel", "Rab", "Kam", "Jum", "Sab", "Min"];
const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

pub fn pad(n: u32) -> String {
    format!("{n:02}")
}

/// Normalize a date-ish string to a `YYYY-MM-DD` key.
///
/// Accepts a bare date key, an RFC 3339 timestamp, or a
/// `YYYY-MM-DD HH:MM:SS` datetime. Returns `None` for anything else.
pub fn to_date_key(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.format("%Y-%m-%d").to_string());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }

    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date().format("%Y-%m-%d").to_string());
    }

    None
}

pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    to_date_key(value).and_then(|key| NaiveDate::parse_from_str(&key, "%Y-%m-%d").ok())
}

/// `YYYY-MM-DDT00:00:00.000Z` for the given date-ish string.
pub fn to_utc_midnight_iso(value: &str) -> Option<String> {
    to_date_key(value).map(|key| format!("{key}T00:00:00.000Z"))
}

/// Indonesian short label, e.g. `Sen, 5 Agu`.
pub fn day_label(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => WEEKDAYS_ID[0],
        Weekday::Tue => WEEKDAYS_ID[1],
        Weekday::Wed => WEEKDAYS_ID[2],
        Weekday::Thu => WEEKDAYS_ID[3],
        Weekday::Fri => WEEKDAYS_ID[4],
        Weekday::Sat => WEEKDAYS_ID[5],
        Weekday::Sun => WEEKDAYS_ID[6],
    };
    let month = MONTHS_ID[date.month0() as usize];
    format!("{weekday}, {} {month}", date.day())
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayOption {
    pub label: String,
    pub value: String,
}

/// The next `n` selectable booking days from `today`.
pub fn next_n_days(today: NaiveDate, n: usize, start_from_tomorrow: bool) -> Vec<DayOption> {
    let start_offset = if start_from_tomorrow { 1 } else { 0 };

    (start_offset..n + start_offset)
        .map(|i| {
            let date = today + Duration::days(i as i64);
            DayOption {
                label: day_label(date),
                value: format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad(5), "05");
        assert_eq!(pad(12), "12");
    }

    #[test]
    fn test_to_date_key_from_key() {
        assert_eq!(to_date_key("2025-08-08").as_deref(), Some("2025-08-08"));
    }

    #[test]
    fn test_to_date_key_from_iso() {
        assert_eq!(
            to_date_key("2025-08-08T00:00:00.000Z").as_deref(),
            Some("2025-08-08")
        );
    }

    #[test]
    fn test_to_date_key_from_datetime() {
        assert_eq!(
            to_date_key("2025-08-08 14:30:00").as_deref(),
            Some("2025-08-08")
        );
    }

    #[test]
    fn test_to_date_key_rejects_garbage() {
        assert_eq!(to_date_key("not a date"), None);
        assert_eq!(to_date_key(""), None);
        assert_eq!(to_date_key("2025-13-40"), None);
    }

    #[test]
    fn test_to_utc_midnight_iso() {
        assert_eq!(
            to_utc_midnight_iso("2025-08-08T17:45:00.000Z").as_deref(),
            Some("2025-08-08T00:00:00.000Z")
        );
    }

    #[test]
    fn test_day_label() {
        // 2025-08-04 is a Monday
        assert_eq!(day_label(date("2025-08-04")), "Sen, 4 Agu");
        assert_eq!(day_label(date("2025-08-10")), "Min, 10 Agu");
        assert_eq!(day_label(date("2025-05-01")), "Kam, 1 Mei");
    }

    #[test]
    fn test_next_n_days_starts_tomorrow() {
        let days = next_n_days(date("2025-08-04"), 7, true);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].value, "2025-08-05T00:00:00.000Z");
        assert_eq!(days[0].label, "Sel, 5 Agu");
        assert_eq!(days[6].value, "2025-08-11T00:00:00.000Z");
    }

    #[test]
    fn test_next_n_days_from_today() {
        let days = next_n_days(date("2025-08-04"), 3, false);
        assert_eq!(days[0].value, "2025-08-04T00:00:00.000Z");
        assert_eq!(days.len(), 3);
    }
}
