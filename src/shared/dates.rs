//! ISO-8601 date parsing for request fields.
//!
//! Clients send either a plain calendar date (`2025-01-10`), an RFC 3339
//! timestamp (`2025-01-10T08:30:00Z`) or a naive timestamp
//! (`2025-01-10T08:30:00`, `2025-01-10 08:30:00`). Only the calendar date is
//! kept.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::core::error::{AppError, Result};

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

/// Parse a required date field.
///
/// `missing_message` is returned when the field is absent or blank; a value
/// that cannot be parsed yields "Invalid date format".
pub fn require_date(value: Option<&str>, missing_message: &str) -> Result<NaiveDate> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(missing_message.to_string()))?;

    parse_iso_date(value).ok_or_else(|| AppError::Validation("Invalid date format".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_accepted_formats() {
        assert_eq!(parse_iso_date("2025-01-10"), Some(date(2025, 1, 10)));
        assert_eq!(
            parse_iso_date("2025-01-10T08:30:00Z"),
            Some(date(2025, 1, 10))
        );
        assert_eq!(
            parse_iso_date("2025-01-10T08:30:00.123+01:00"),
            Some(date(2025, 1, 10))
        );
        assert_eq!(
            parse_iso_date("2025-02-01 14:00:00"),
            Some(date(2025, 2, 1))
        );
        assert_eq!(
            parse_iso_date(" 2025-02-01T14:00:00 "),
            Some(date(2025, 2, 1))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_iso_date("10/01/2025"), None);
        assert_eq!(parse_iso_date("2025-13-01"), None);
        assert_eq!(parse_iso_date("tomorrow"), None);
    }

    #[test]
    fn test_require_date_errors() {
        match require_date(None, "Examination date is required") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Examination date is required"),
            other => panic!("unexpected: {:?}", other),
        }
        match require_date(Some("   "), "Assignment date is required") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Assignment date is required"),
            other => panic!("unexpected: {:?}", other),
        }
        match require_date(Some("not-a-date"), "required") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Invalid date format"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
