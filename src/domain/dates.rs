use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::AppError;

/// Parses a client-supplied date string into a UTC date-time.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates; bare dates map
/// to midnight UTC. The field name is carried into the validation error.
pub fn parse_date_time(field: &str, raw: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(AppError::invalid_field(
        field,
        format!("Invalid date: '{raw}' (expected RFC 3339 or YYYY-MM-DD)"),
    ))
}

/// Normalizes an optional date string; blank values count as absent.
pub fn parse_optional_date_time(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date_time(field, value).map(Some),
    }
}
