//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Display format for post dates, e.g. "January 15, 2024"
pub const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Parse a front-matter date in any of the common formats
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Today's date (UTC) as `YYYY-MM-DD`
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Format a post date for display; unparsable dates are shown as written
pub fn display_date(date: &str, format: &str) -> String {
    match parse_date(date) {
        Some(dt) => dt.format(format).to_string(),
        None => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let dt = parse_date("2024-01-15").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 00:00");
    }

    #[test]
    fn test_parse_datetime_formats() {
        assert!(parse_date("2024-01-15 10:30:00").is_some());
        assert!(parse_date("2024/01/15").is_some());
        assert!(parse_date("2024-01-15T10:30:00").is_some());
        assert!(parse_date("not a date").is_none());
    }

    #[test]
    fn test_parse_rfc3339_normalizes_to_utc() {
        let dt = parse_date("2024-01-15T01:00:00+02:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-14 23:00");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-01-05", DISPLAY_FORMAT), "January 5, 2024");
        assert_eq!(display_date("2023-12-20", "%Y/%m/%d"), "2023/12/20");
        assert_eq!(display_date("someday", DISPLAY_FORMAT), "someday");
    }

    #[test]
    fn test_today_is_iso() {
        assert!(NaiveDate::parse_from_str(&today(), "%Y-%m-%d").is_ok());
    }
}
