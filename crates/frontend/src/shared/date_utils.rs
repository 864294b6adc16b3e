//! Date and time formatting for table cells.

use chrono::{DateTime, Local, NaiveDate};

/// Format an RFC 3339 timestamp as "15 Mar 2024, 14:02" (UTC wall clock)
/// Example: "2024-03-15T14:02:26.123Z" -> "15 Mar 2024, 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.naive_utc().format("%d %b %Y, %H:%M").to_string(),
        Err(_) => format_date(datetime_str),
    }
}

/// Format the date part of an ISO string as "15 Mar 2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Optional timestamp cell; missing values render as a dash
pub fn format_optional_datetime(value: Option<&str>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

/// Today in the browser's timezone, as sent to the daily-orders endpoints
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15 Mar 2024, 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31 Dec 2024, 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_optional_datetime(None), "-");
    }

    #[test]
    fn test_today_is_iso_date() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
