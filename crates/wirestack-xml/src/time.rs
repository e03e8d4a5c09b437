//! Timestamp formats used on the S3 wire.
//!
//! XML bodies and query strings carry ISO 8601 with milliseconds; headers carry
//! RFC 7231 HTTP-dates. Readers accept either form, plus RFC 3339 offsets.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::XmlError;

/// Format a timestamp as ISO 8601 with milliseconds and `Z` suffix.
#[must_use]
pub fn format_iso8601(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Format a timestamp as an RFC 7231 HTTP-date (`Sun, 06 Nov 1994 08:49:37 GMT`).
#[must_use]
pub fn format_http_date(dt: &DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse a timestamp in any of the formats S3 emits.
///
/// # Errors
///
/// Returns [`XmlError::ParseError`] when no format matches.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, XmlError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ") {
        return Ok(ndt.and_utc());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S GMT") {
        return Ok(ndt.and_utc());
    }
    DateTime::parse_from_rfc2822(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| XmlError::ParseError(format!("invalid timestamp '{s}': {e}")))
}
