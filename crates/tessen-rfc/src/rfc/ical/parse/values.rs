//! Scalar and date value decoders (RFC 5545 §3.3).
//!
//! These functions only know the wire grammars. Type resolution and the
//! property name in error messages are handled by
//! [`Property`](crate::rfc::ical::core::Property).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::rfc::ical::core::{Malformed, MalformedKind};

const DATE_FORMAT: &str = "%Y%m%d";
const LOCAL_DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Decodes a BINARY value (RFC 5545 §3.3.1) using the standard base64 alphabet.
///
/// ## Errors
/// Returns [`MalformedKind::InvalidBinary`], positioned at the offending
/// byte when the decoder reports one.
pub fn parse_binary(s: &str) -> Result<Vec<u8>, Malformed> {
    STANDARD.decode(s).map_err(|e| {
        let malformed = Malformed::new(MalformedKind::InvalidBinary, s);
        match e {
            base64::DecodeError::InvalidByte(offset, _)
            | base64::DecodeError::InvalidLastSymbol(offset, _) => malformed.at(offset),
            _ => malformed,
        }
    })
}

/// Decodes a BOOLEAN value (RFC 5545 §3.3.2).
///
/// ## Errors
/// Returns [`MalformedKind::InvalidBoolean`] unless the token is `TRUE` or
/// `FALSE` in any letter case.
pub fn parse_boolean(s: &str) -> Result<bool, Malformed> {
    if s.eq_ignore_ascii_case("TRUE") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("FALSE") {
        Ok(false)
    } else {
        Err(Malformed::new(MalformedKind::InvalidBoolean, s))
    }
}

/// Decodes an INTEGER value (RFC 5545 §3.3.8).
///
/// ## Errors
/// Returns [`MalformedKind::InvalidInteger`] if the token is not a base-10
/// signed 32-bit integer.
pub fn parse_integer(s: &str) -> Result<i32, Malformed> {
    s.parse()
        .map_err(|_e| Malformed::new(MalformedKind::InvalidInteger, s))
}

/// Decodes a FLOAT value (RFC 5545 §3.3.7).
///
/// ## Errors
/// Returns [`MalformedKind::InvalidFloat`] if the token is not a decimal
/// number, or names an infinity or `NaN`.
pub fn parse_float(s: &str) -> Result<f64, Malformed> {
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .ok_or_else(|| Malformed::new(MalformedKind::InvalidFloat, s))
}

/// Returns whether `s` has exactly the digit layout of `pattern`, where `9`
/// stands for an ASCII digit and anything else must match literally.
fn has_shape(s: &str, pattern: &str) -> bool {
    s.len() == pattern.len()
        && s.bytes().zip(pattern.bytes()).all(|(c, p)| match p {
            b'9' => c.is_ascii_digit(),
            _ => c == p,
        })
}

/// Decodes a DATE value (RFC 5545 §3.3.4), `YYYYMMDD`.
///
/// ## Errors
/// Returns [`MalformedKind::InvalidDate`] if the token is not eight digits
/// forming a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, Malformed> {
    if !has_shape(s, "99999999") {
        return Err(Malformed::new(MalformedKind::InvalidDate, s));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_e| Malformed::new(MalformedKind::InvalidDate, s))
}

/// Decodes the local ("floating") DATE-TIME form `YYYYMMDDThhmmss`.
///
/// ## Errors
/// Returns [`MalformedKind::InvalidDateTime`] for any other shape,
/// including the UTC form with its trailing `Z`.
pub fn parse_local_date_time(s: &str) -> Result<NaiveDateTime, Malformed> {
    if !has_shape(s, "99999999T999999") {
        return Err(Malformed::new(MalformedKind::InvalidDateTime, s));
    }
    NaiveDateTime::parse_from_str(s, LOCAL_DATE_TIME_FORMAT)
        .map_err(|_e| Malformed::new(MalformedKind::InvalidDateTime, s))
}

/// Decodes the UTC DATE-TIME form `YYYYMMDDThhmmssZ`.
///
/// ## Errors
/// Returns [`MalformedKind::InvalidDateTime`] for any other shape.
pub fn parse_utc_date_time(s: &str) -> Result<DateTime<Utc>, Malformed> {
    if !has_shape(s, "99999999T999999Z") {
        return Err(Malformed::new(MalformedKind::InvalidDateTime, s));
    }
    NaiveDateTime::parse_from_str(s, UTC_DATE_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_e| Malformed::new(MalformedKind::InvalidDateTime, s))
}

/// Places a wall-clock time in `tz`.
///
/// Ambiguous times (DST fold) resolve to the earliest instant. Times inside
/// a DST gap are shifted forward by one hour. A time that stays unresolvable
/// after the shift (a gap wider than an hour, or the edge of the supported
/// range) is read as UTC wall-clock time.
#[must_use]
pub fn localize(local: NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _latest) => earliest,
        LocalResult::None => {
            tracing::trace!(%local, %tz, "Local time falls in a DST gap; shifting forward");
            local
                .checked_add_signed(TimeDelta::hours(1))
                .and_then(|shifted| tz.from_local_datetime(&shifted).earliest())
                .unwrap_or_else(|| {
                    tracing::trace!(
                        %local,
                        %tz,
                        "Shifted time still falls in a gap; reading it as UTC"
                    );
                    tz.from_utc_datetime(&local)
                })
        }
    }
}

/// Places midnight of `date` in `tz`.
#[must_use]
pub fn localize_date(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    localize(date.and_time(NaiveTime::MIN), tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_binary_standard_alphabet() {
        assert_eq!(parse_binary("SGVsbG8=").unwrap(), b"Hello");
        assert_eq!(parse_binary("").unwrap(), b"");
    }

    #[test]
    fn parse_binary_invalid() {
        let err = parse_binary("SGV*bG8=").unwrap_err();
        assert_eq!(err.kind, MalformedKind::InvalidBinary);
        assert_eq!(err.position, Some(3));

        assert_eq!(
            parse_binary("SGVsbG8").unwrap_err().kind,
            MalformedKind::InvalidBinary
        );
    }

    #[test]
    fn parse_boolean_tokens() {
        assert!(parse_boolean("true").unwrap());
        assert!(parse_boolean("TRUE").unwrap());
        assert!(!parse_boolean("FALSE").unwrap());
        assert!(!parse_boolean("False").unwrap());
        assert_eq!(
            parse_boolean("yes").unwrap_err().kind,
            MalformedKind::InvalidBoolean
        );
        assert!(parse_boolean("").is_err());
    }

    #[test]
    fn parse_integer_values() {
        assert_eq!(parse_integer("42").unwrap(), 42);
        assert_eq!(parse_integer("-7").unwrap(), -7);
        assert_eq!(parse_integer("+3").unwrap(), 3);
        assert!(parse_integer("1.5").is_err());
        assert!(parse_integer("2147483648").is_err());
        assert_eq!(
            parse_integer("abc").unwrap_err().kind,
            MalformedKind::InvalidInteger
        );
    }

    #[test]
    fn parse_float_values() {
        assert!((parse_float("37.386013").unwrap() - 37.386_013).abs() < f64::EPSILON);
        assert!((parse_float("-1.5e2").unwrap() + 150.0).abs() < f64::EPSILON);
        assert!((parse_float("10").unwrap() - 10.0).abs() < f64::EPSILON);
        assert_eq!(
            parse_float("1,5").unwrap_err().kind,
            MalformedKind::InvalidFloat
        );
        assert!(parse_float("inf").is_err());
        assert!(parse_float("NaN").is_err());
    }

    #[test]
    fn parse_date_basic() {
        let date = parse_date("20260123").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 1, 23));
    }

    #[test]
    fn parse_date_invalid() {
        assert!(parse_date("2026012").is_err());
        assert!(parse_date("20261301").is_err());
        assert!(parse_date("20260230").is_err());
        assert!(parse_date("+2026012").is_err());
        assert_eq!(
            parse_date("2026-01-23").unwrap_err().kind,
            MalformedKind::InvalidDate
        );
    }

    #[test]
    fn parse_local_date_time_rejects_utc_form() {
        let dt = parse_local_date_time("20230615T140000").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (14, 0, 0));

        assert_eq!(
            parse_local_date_time("20230615T140000Z").unwrap_err().kind,
            MalformedKind::InvalidDateTime
        );
    }

    #[test]
    fn parse_utc_date_time_requires_suffix() {
        let dt = parse_utc_date_time("20230615T140000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 6, 15, 14, 0, 0).unwrap());

        assert!(parse_utc_date_time("20230615T140000").is_err());
        assert!(parse_utc_date_time("20230615T250000Z").is_err());
        assert!(parse_utc_date_time("20230615t140000z").is_err());
    }

    #[test]
    fn localize_single() {
        let local = parse_local_date_time("20230615T140000").unwrap();
        let dt = localize(local, chrono_tz::Europe::Berlin);
        assert_eq!(
            dt.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn localize_ambiguous_takes_earliest() {
        // 02:30 occurs twice in Berlin on 2023-10-29
        let local = parse_local_date_time("20231029T023000").unwrap();
        let dt = localize(local, chrono_tz::Europe::Berlin);
        assert_eq!(
            dt.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2023, 10, 29, 0, 30, 0).unwrap()
        );
    }

    #[test]
    fn localize_gap_shifts_forward() {
        // 02:30 does not exist in Berlin on 2023-03-26
        let local = parse_local_date_time("20230326T023000").unwrap();
        let dt = localize(local, chrono_tz::Europe::Berlin);
        assert_eq!(dt.hour(), 3);
        assert_eq!(dt.minute(), 30);
        assert_eq!(
            dt.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2023, 3, 26, 1, 30, 0).unwrap()
        );
    }

    #[test_log::test]
    fn localize_day_long_gap_reads_as_utc() {
        // Samoa skipped 2011-12-30 when it crossed the date line.
        let local = parse_local_date_time("20111230T120000").unwrap();
        let dt = localize(local, chrono_tz::Pacific::Apia);
        assert_eq!(
            dt.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2011, 12, 30, 12, 0, 0).unwrap()
        );
        assert_eq!(dt.timezone(), chrono_tz::Pacific::Apia);
    }

    #[test]
    fn localize_date_is_midnight() {
        let date = parse_date("20230615").unwrap();
        let dt = localize_date(date, chrono_tz::America::New_York);
        assert_eq!((dt.hour(), dt.minute()), (0, 0));
        assert_eq!(
            dt.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2023, 6, 15, 4, 0, 0).unwrap()
        );
    }
}
