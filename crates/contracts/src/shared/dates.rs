//! Utilities for date formatting
//!
//! Provides consistent date formatting across the application

use chrono::{DateTime, NaiveDate, Utc};

/// Format calendar date to DD.MM.YYYY
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format UTC timestamp to DD.MM.YYYY HH:MM:SS
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Parse a date from an `<input type="date">` value ("YYYY-MM-DD")
pub fn parse_input_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Некорректная дата: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_date_uses_dotted_order() {
        let d = NaiveDate::parse_from_str("2024-03-15", "%Y-%m-%d").unwrap();
        assert_eq!(format_date(d), "15.03.2024");
    }

    #[test]
    fn format_datetime_includes_time() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(dt), "15.03.2024 14:02:26");
    }

    #[test]
    fn parse_input_date_roundtrips_html_value() {
        let d = parse_input_date("2024-03-15").unwrap();
        assert_eq!(d.to_string(), "2024-03-15");
    }

    #[test]
    fn parse_input_date_rejects_garbage() {
        assert!(parse_input_date("15/03/2024").is_err());
        assert!(parse_input_date("").is_err());
    }
}
