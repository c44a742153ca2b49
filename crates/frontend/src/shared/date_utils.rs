//! Utilities for date and time formatting
//!
//! The API sends RFC 3339 timestamps; the dashboard shows them as DD.MM.YYYY.

use chrono::{DateTime, NaiveDate, Utc};

/// Format ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.with_timezone(&Utc).format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Optional timestamps render as a dash.
pub fn format_optional_date(date_str: Option<&str>) -> String {
    date_str
        .filter(|s| !s.is_empty())
        .map(format_date)
        .unwrap_or_else(|| "—".to_string())
}

/// "01.03.2024 – 31.03.2024"
pub fn format_period(start: &str, end: &str) -> String {
    format!("{} – {}", format_date(start), format_date(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59+00:00"), "31.12.2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_optional_date(None), "—");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_period() {
        assert_eq!(format_period("2024-03-01", "2024-03-31"), "01.03.2024 – 31.03.2024");
    }
}
