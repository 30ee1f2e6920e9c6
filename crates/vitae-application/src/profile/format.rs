//! Calendar date formatting for timestamps sent by the backend.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Rendered in place of a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Formats `raw` as a calendar date using a chrono format string.
///
/// Timestamps with an offset are shown in the viewer's local time zone.
/// Date-only and offset-less values are taken as given. An unusable format
/// string renders as [`INVALID_DATE`].
pub fn format_date(raw: &str, format: &str) -> String {
    if !is_valid_format(format) {
        tracing::warn!("[format_date] Invalid date format {:?}", format);
        return INVALID_DATE.to_string();
    }
    match parse_date(raw) {
        Some(date) => date.format(format).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Whether chrono can render `format` without failing.
pub fn is_valid_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Local).date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|datetime| datetime.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BR: &str = "%d/%m/%Y";

    #[test]
    fn test_rfc3339_midday_is_stable_across_zones() {
        assert_eq!(format_date("2023-05-02T12:00:00.000Z", BR), "02/05/2023");
    }

    #[test]
    fn test_date_only_and_naive_values() {
        assert_eq!(format_date("2020-01-31", BR), "31/01/2020");
        assert_eq!(format_date("2020-01-31T08:30:00", BR), "31/01/2020");
        assert_eq!(format_date("2020-01-31 08:30:00.123", BR), "31/01/2020");
    }

    #[test]
    fn test_unparseable_values() {
        assert_eq!(format_date("", BR), INVALID_DATE);
        assert_eq!(format_date("ontem", BR), INVALID_DATE);
    }

    #[test]
    fn test_invalid_format_does_not_panic() {
        assert!(!is_valid_format("%Q"));
        assert!(is_valid_format(BR));
        assert_eq!(format_date("2020-01-31", "%Q"), INVALID_DATE);
        assert_eq!(format_date("2020-01-31", "%d/%"), INVALID_DATE);
    }

    #[test]
    fn test_custom_format() {
        assert_eq!(format_date("2020-01-31", "%Y-%m-%d"), "2020-01-31");
    }
}
