//! iCalendar properties and their typed value codecs (RFC 5545 §3.3, §3.8).

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone};
use chrono_tz::Tz;

use super::parameter::names as param_names;
use super::{Malformed, MalformedKind, Params, TypeCheck, ValueError, ValueType};
use crate::rfc::ical::build::{
    format_binary, format_boolean, format_date, format_duration, format_text_list,
    format_utc_date_time,
};
use crate::rfc::ical::parse::{
    localize, localize_date, parse_binary, parse_boolean, parse_date, parse_duration, parse_float,
    parse_integer, parse_local_date_time, parse_text_list, parse_utc_date_time,
};

/// A component property: a name, its parameters and the raw wire value.
///
/// The raw value is kept exactly as read (after unfolding, before
/// unescaping). Typed access goes through the accessor pairs below, which
/// resolve the value type, validate it, and decode or encode the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    /// Parameters in order of appearance.
    pub params: Params,
    /// Raw value string.
    pub raw_value: String,
}

impl Property {
    /// Creates a property. The name is stored upper-case.
    #[must_use]
    pub fn new(name: &str, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            params: Params::new(),
            raw_value: raw_value.into(),
        }
    }

    /// Returns the property name (upper-case).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves the value type.
    ///
    /// A non-empty `VALUE` parameter wins. Otherwise the registered default
    /// for the property name applies, and unknown names resolve to
    /// [`ValueType::Unspecified`].
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self.params.get(param_names::VALUE) {
            Some(token) if !token.is_empty() => ValueType::parse(token),
            _ => ValueType::default_for(&self.name)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Records `value_type` in the `VALUE` parameter.
    ///
    /// The parameter is removed instead when `value_type` is
    /// [`ValueType::Unspecified`] or equal to the property's default, so
    /// defaults are never written out explicitly.
    pub fn set_value_type(&mut self, value_type: &ValueType) {
        let is_default = ValueType::default_for(&self.name) == Some(value_type);
        if value_type.is_unspecified() || is_default {
            self.params.remove(param_names::VALUE);
        } else {
            self.params.set(param_names::VALUE, value_type.as_str());
        }
    }

    /// Checks the resolved value type against the type an accessor reads.
    #[must_use]
    pub fn check_value_type(&self, wanted: &ValueType) -> TypeCheck {
        match self.value_type() {
            ValueType::Unspecified => TypeCheck::Unconstrained,
            actual if actual == *wanted => TypeCheck::Matches,
            actual => TypeCheck::Conflicts(actual),
        }
    }

    /// Fails unless reading the value as `wanted` is allowed.
    ///
    /// ## Errors
    /// Returns [`ValueError::TypeMismatch`] when the resolved type is a
    /// different concrete type.
    pub fn expect_value_type(&self, wanted: &ValueType) -> Result<(), ValueError> {
        match self.check_value_type(wanted) {
            TypeCheck::Conflicts(actual) => Err(self.type_mismatch(wanted, actual)),
            TypeCheck::Unconstrained | TypeCheck::Matches => Ok(()),
        }
    }

    fn type_mismatch(&self, expected: &ValueType, actual: ValueType) -> ValueError {
        tracing::trace!(
            property = %self.name,
            %expected,
            %actual,
            "Property value type mismatch"
        );
        ValueError::TypeMismatch {
            property: self.name.clone(),
            expected: expected.clone(),
            actual,
        }
    }

    /// Decodes a BINARY value.
    ///
    /// ## Errors
    /// Returns a type mismatch or a malformed-value error for invalid base64.
    pub fn binary(&self) -> Result<Vec<u8>, ValueError> {
        self.expect_value_type(&ValueType::Binary)?;
        parse_binary(&self.raw_value).map_err(|m| m.for_property(&self.name))
    }

    /// Stores `bytes` as a base64 BINARY value.
    pub fn set_binary(&mut self, bytes: &[u8]) {
        self.set_value_type(&ValueType::Binary);
        self.raw_value = format_binary(bytes);
    }

    /// Decodes a BOOLEAN value.
    ///
    /// ## Errors
    /// Returns a type mismatch or a malformed-value error for tokens other
    /// than `TRUE`/`FALSE`.
    pub fn boolean(&self) -> Result<bool, ValueError> {
        self.expect_value_type(&ValueType::Boolean)?;
        parse_boolean(&self.raw_value).map_err(|m| m.for_property(&self.name))
    }

    /// Stores `value` as `TRUE` or `FALSE`.
    pub fn set_boolean(&mut self, value: bool) {
        self.set_value_type(&ValueType::Boolean);
        format_boolean(value).clone_into(&mut self.raw_value);
    }

    /// Decodes a DATE-TIME or DATE value.
    ///
    /// `tz` is the zone for floating date-times and dates; `None` means UTC.
    /// For an unconstrained or DATE-TIME property the local form is tried
    /// first, then the UTC form, which always yields an instant in UTC. A
    /// DATE resolves to midnight in `tz`. The `TZID` parameter is not
    /// consulted.
    ///
    /// ## Errors
    /// Returns a type mismatch when the resolved type is neither DATE nor
    /// DATE-TIME, or a malformed-value error when the grammar fails.
    pub fn date_time(&self, tz: Option<Tz>) -> Result<DateTime<Tz>, ValueError> {
        let tz = tz.unwrap_or(Tz::UTC);
        match self.value_type() {
            ValueType::Unspecified | ValueType::DateTime => {
                if let Ok(local) = parse_local_date_time(&self.raw_value) {
                    return Ok(localize(local, tz));
                }
                parse_utc_date_time(&self.raw_value)
                    .map(|utc| utc.with_timezone(&Tz::UTC))
                    .map_err(|m| m.for_property(&self.name))
            }
            ValueType::Date => parse_date(&self.raw_value)
                .map(|date| localize_date(date, tz))
                .map_err(|m| m.for_property(&self.name)),
            actual => Err(self.type_mismatch(&ValueType::DateTime, actual)),
        }
    }

    /// Stores an instant as a UTC DATE-TIME (`YYYYMMDDThhmmssZ`).
    pub fn set_date_time<Z: TimeZone>(&mut self, dt: &DateTime<Z>) {
        self.set_value_type(&ValueType::DateTime);
        self.raw_value = format_utc_date_time(dt);
    }

    /// Stores a calendar date as a DATE value.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.set_value_type(&ValueType::Date);
        self.raw_value = format_date(date);
    }

    /// Decodes a DURATION value.
    ///
    /// ## Errors
    /// Returns a type mismatch or a malformed-value error describing the
    /// first offending character.
    pub fn duration(&self) -> Result<TimeDelta, ValueError> {
        self.expect_value_type(&ValueType::Duration)?;
        parse_duration(&self.raw_value).map_err(|m| m.for_property(&self.name))
    }

    /// Stores a span as `[-]PT<n>S`.
    pub fn set_duration(&mut self, duration: TimeDelta) {
        self.set_value_type(&ValueType::Duration);
        self.raw_value = format_duration(duration);
    }

    /// Decodes a FLOAT value.
    ///
    /// ## Errors
    /// Returns a type mismatch or a malformed-value error.
    pub fn float(&self) -> Result<f64, ValueError> {
        self.expect_value_type(&ValueType::Float)?;
        parse_float(&self.raw_value).map_err(|m| m.for_property(&self.name))
    }

    /// Stores a FLOAT value.
    ///
    /// ## Errors
    /// Returns [`MalformedKind::InvalidFloat`] for infinities and `NaN`,
    /// which FLOAT cannot represent. The property is left unchanged.
    pub fn set_float(&mut self, value: f64) -> Result<(), ValueError> {
        if !value.is_finite() {
            return Err(
                Malformed::new(MalformedKind::InvalidFloat, value.to_string())
                    .for_property(&self.name),
            );
        }
        self.set_value_type(&ValueType::Float);
        self.raw_value = value.to_string();
        Ok(())
    }

    /// Decodes an INTEGER value.
    ///
    /// ## Errors
    /// Returns a type mismatch or a malformed-value error.
    pub fn integer(&self) -> Result<i32, ValueError> {
        self.expect_value_type(&ValueType::Integer)?;
        parse_integer(&self.raw_value).map_err(|m| m.for_property(&self.name))
    }

    /// Stores an INTEGER value.
    pub fn set_integer(&mut self, value: i32) {
        self.set_value_type(&ValueType::Integer);
        self.raw_value = value.to_string();
    }

    /// Decodes a comma-separated list of TEXT values.
    ///
    /// ## Errors
    /// Returns a type mismatch or a malformed-value error for a bad escape.
    pub fn text_list(&self) -> Result<Vec<String>, ValueError> {
        self.expect_value_type(&ValueType::Text)?;
        parse_text_list(&self.raw_value).map_err(|m| m.for_property(&self.name))
    }

    /// Stores a list of TEXT values.
    pub fn set_text_list<S: AsRef<str>>(&mut self, items: &[S]) {
        self.set_value_type(&ValueType::Text);
        self.raw_value = format_text_list(items);
    }

    /// Decodes a TEXT value: the first item of [`Property::text_list`].
    ///
    /// ## Errors
    /// Same as [`Property::text_list`].
    pub fn text(&self) -> Result<String, ValueError> {
        Ok(self.text_list()?.into_iter().next().unwrap_or_default())
    }

    /// Stores a single TEXT value.
    pub fn set_text(&mut self, text: &str) {
        self.set_text_list(&[text]);
    }
}

/// Property names from RFC 5545 §3.7 and §3.8.
pub mod names {
    // Calendar properties
    pub const CALSCALE: &str = "CALSCALE";
    pub const METHOD: &str = "METHOD";
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";

    // Descriptive properties
    pub const ATTACH: &str = "ATTACH";
    pub const CATEGORIES: &str = "CATEGORIES";
    pub const CLASS: &str = "CLASS";
    pub const COMMENT: &str = "COMMENT";
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const GEO: &str = "GEO";
    pub const LOCATION: &str = "LOCATION";
    pub const PERCENT_COMPLETE: &str = "PERCENT-COMPLETE";
    pub const PRIORITY: &str = "PRIORITY";
    pub const RESOURCES: &str = "RESOURCES";
    pub const STATUS: &str = "STATUS";
    pub const SUMMARY: &str = "SUMMARY";

    // Date and time properties
    pub const COMPLETED: &str = "COMPLETED";
    pub const DTEND: &str = "DTEND";
    pub const DUE: &str = "DUE";
    pub const DTSTART: &str = "DTSTART";
    pub const DURATION: &str = "DURATION";
    pub const FREEBUSY: &str = "FREEBUSY";
    pub const TRANSP: &str = "TRANSP";

    // Timezone properties
    pub const TZID: &str = "TZID";
    pub const TZNAME: &str = "TZNAME";
    pub const TZOFFSETFROM: &str = "TZOFFSETFROM";
    pub const TZOFFSETTO: &str = "TZOFFSETTO";
    pub const TZURL: &str = "TZURL";

    // Relationship properties
    pub const ATTENDEE: &str = "ATTENDEE";
    pub const CONTACT: &str = "CONTACT";
    pub const ORGANIZER: &str = "ORGANIZER";
    pub const RECURRENCE_ID: &str = "RECURRENCE-ID";
    pub const RELATED_TO: &str = "RELATED-TO";
    pub const URL: &str = "URL";
    pub const UID: &str = "UID";

    // Recurrence properties
    pub const EXDATE: &str = "EXDATE";
    pub const RDATE: &str = "RDATE";
    pub const RRULE: &str = "RRULE";

    // Alarm properties
    pub const ACTION: &str = "ACTION";
    pub const REPEAT: &str = "REPEAT";
    pub const TRIGGER: &str = "TRIGGER";

    // Change management properties
    pub const CREATED: &str = "CREATED";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const LAST_MODIFIED: &str = "LAST-MODIFIED";
    pub const SEQUENCE: &str = "SEQUENCE";

    // Miscellaneous properties
    pub const REQUEST_STATUS: &str = "REQUEST-STATUS";
}
