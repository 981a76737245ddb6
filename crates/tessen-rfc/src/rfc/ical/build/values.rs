//! Canonical value encoders (RFC 5545 §3.3).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};

/// Encodes a BINARY value with the standard padded base64 alphabet.
#[must_use]
pub fn format_binary(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Encodes a span as `[-]PT<n>S`, whole seconds truncated toward zero.
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds();
    let sign = if seconds < 0 { "-" } else { "" };
    format!("{sign}PT{}S", seconds.unsigned_abs())
}

/// Encodes an instant in the UTC DATE-TIME form `YYYYMMDDThhmmssZ`.
///
/// Sub-second precision is dropped.
#[must_use]
pub fn format_utc_date_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc).format("%Y%m%dT%H%M%SZ").to_string()
}

/// Encodes a DATE value as `YYYYMMDD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Encodes a BOOLEAN value.
#[must_use]
pub const fn format_boolean(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}
