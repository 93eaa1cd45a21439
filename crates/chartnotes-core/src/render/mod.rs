//! Presentation formatting for plans and medication timelines.
//!
//! Markdown table rendering plus the timeline helpers (intensity color,
//! trend icon, tooltip text). All functions are pure and total: missing
//! or malformed input falls back to a neutral rendering instead of
//! failing. Dates are interpreted in UTC for display.

mod table;
mod timeline;

pub use table::*;
pub use timeline::*;

use chrono::{DateTime, Utc};

/// Parse an RFC 3339 / ISO-8601 timestamp for display, normalized to UTC.
pub(crate) fn parse_display_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_display_date_accepts_utc_and_offsets() {
        let zulu = parse_display_date("2023-01-15T00:00:00.000Z").unwrap();
        assert_eq!((zulu.year(), zulu.month(), zulu.day()), (2023, 1, 15));

        let offset = parse_display_date("2023-06-01T23:30:00+05:00").unwrap();
        assert_eq!((offset.month(), offset.day()), (6, 1));
    }

    #[test]
    fn test_parse_display_date_rejects_garbage() {
        assert!(parse_display_date("not-a-date").is_none());
        assert!(parse_display_date("").is_none());
        assert!(parse_display_date("2023-13-45").is_none());
    }
}
