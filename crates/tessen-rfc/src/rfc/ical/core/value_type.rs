//! Value data types (RFC 5545 §3.3) and per-property defaults.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use super::property::names;

/// Value data type of a property, as named by the `VALUE` parameter.
///
/// `Unspecified` is not a real data type: it stands for "no explicit
/// override" when assigning, and for "no constraint known" when resolving.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    /// No explicit type and no registered default.
    #[default]
    Unspecified,
    /// BINARY (§3.3.1).
    Binary,
    /// BOOLEAN (§3.3.2).
    Boolean,
    /// CAL-ADDRESS (§3.3.3).
    CalAddress,
    /// DATE (§3.3.4).
    Date,
    /// DATE-TIME (§3.3.5).
    DateTime,
    /// DURATION (§3.3.6).
    Duration,
    /// FLOAT (§3.3.7).
    Float,
    /// INTEGER (§3.3.8).
    Integer,
    /// PERIOD (§3.3.9).
    Period,
    /// RECUR (§3.3.10).
    Recur,
    /// TEXT (§3.3.11).
    Text,
    /// TIME (§3.3.12).
    Time,
    /// URI (§3.3.13).
    Uri,
    /// UTC-OFFSET (§3.3.14).
    UtcOffset,
    /// An x-name or IANA token this library does not know (upper-cased).
    Extension(String),
}

impl ValueType {
    /// Returns the wire token used in the `VALUE` parameter.
    ///
    /// `Unspecified` has no token and yields the empty string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unspecified => "",
            Self::Binary => "BINARY",
            Self::Boolean => "BOOLEAN",
            Self::CalAddress => "CAL-ADDRESS",
            Self::Date => "DATE",
            Self::DateTime => "DATE-TIME",
            Self::Duration => "DURATION",
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::Period => "PERIOD",
            Self::Recur => "RECUR",
            Self::Text => "TEXT",
            Self::Time => "TIME",
            Self::Uri => "URI",
            Self::UtcOffset => "UTC-OFFSET",
            Self::Extension(token) => token,
        }
    }

    /// Parses a `VALUE` parameter token (case-insensitive).
    ///
    /// The empty token is `Unspecified`; unknown tokens become `Extension`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "" => Self::Unspecified,
            "BINARY" => Self::Binary,
            "BOOLEAN" => Self::Boolean,
            "CAL-ADDRESS" => Self::CalAddress,
            "DATE" => Self::Date,
            "DATE-TIME" => Self::DateTime,
            "DURATION" => Self::Duration,
            "FLOAT" => Self::Float,
            "INTEGER" => Self::Integer,
            "PERIOD" => Self::Period,
            "RECUR" => Self::Recur,
            "TEXT" => Self::Text,
            "TIME" => Self::Time,
            "URI" => Self::Uri,
            "UTC-OFFSET" => Self::UtcOffset,
            other => Self::Extension(other.to_string()),
        }
    }

    /// Returns whether this is the `Unspecified` sentinel.
    #[must_use]
    pub const fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }

    /// Returns the default value type registered for a property name.
    ///
    /// Lookup is by exact canonical (upper-case) name.
    #[must_use]
    pub fn default_for(property_name: &str) -> Option<&'static ValueType> {
        DEFAULT_VALUE_TYPES.get(property_name)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unspecified() {
            write!(f, "unspecified")
        } else {
            write!(f, "{}", self.as_str())
        }
    }
}

/// Outcome of checking a property against the type an accessor reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCheck {
    /// Nothing constrains the type; any reading is allowed.
    Unconstrained,
    /// The resolved type is the wanted type.
    Matches,
    /// The resolved type is a different type.
    Conflicts(ValueType),
}

impl TypeCheck {
    /// Returns whether the accessor may proceed.
    #[must_use]
    pub const fn is_compatible(&self) -> bool {
        !matches!(self, Self::Conflicts(_))
    }
}

/// Default value types from RFC 5545 §3.7 and §3.8.
///
/// Built on first use and never mutated afterwards.
static DEFAULT_VALUE_TYPES: LazyLock<HashMap<&'static str, ValueType>> = LazyLock::new(|| {
    HashMap::from([
        // Calendar properties
        (names::CALSCALE, ValueType::Text),
        (names::METHOD, ValueType::Text),
        (names::PRODID, ValueType::Text),
        (names::VERSION, ValueType::Text),
        // Descriptive properties
        (names::ATTACH, ValueType::Uri), // can be binary
        (names::CATEGORIES, ValueType::Text),
        (names::CLASS, ValueType::Text),
        (names::COMMENT, ValueType::Text),
        (names::DESCRIPTION, ValueType::Text),
        (names::GEO, ValueType::Float),
        (names::LOCATION, ValueType::Text),
        (names::PERCENT_COMPLETE, ValueType::Integer),
        (names::PRIORITY, ValueType::Integer),
        (names::RESOURCES, ValueType::Text),
        (names::STATUS, ValueType::Text),
        (names::SUMMARY, ValueType::Text),
        // Date and time properties
        (names::COMPLETED, ValueType::DateTime),
        (names::DTEND, ValueType::DateTime), // can be date
        (names::DUE, ValueType::DateTime),   // can be date
        (names::DTSTART, ValueType::DateTime), // can be date
        (names::DURATION, ValueType::Duration),
        (names::FREEBUSY, ValueType::Period),
        (names::TRANSP, ValueType::Text),
        // Timezone properties
        (names::TZID, ValueType::Text),
        (names::TZNAME, ValueType::Text),
        (names::TZOFFSETFROM, ValueType::UtcOffset),
        (names::TZOFFSETTO, ValueType::UtcOffset),
        (names::TZURL, ValueType::Uri),
        // Relationship properties
        (names::ATTENDEE, ValueType::CalAddress),
        (names::CONTACT, ValueType::Text),
        (names::ORGANIZER, ValueType::CalAddress),
        (names::RECURRENCE_ID, ValueType::DateTime), // can be date
        (names::RELATED_TO, ValueType::Text),
        (names::URL, ValueType::Uri),
        (names::UID, ValueType::Text),
        // Recurrence properties
        (names::EXDATE, ValueType::DateTime), // can be date
        (names::RDATE, ValueType::DateTime),  // can be date or period
        (names::RRULE, ValueType::Recur),
        // Alarm properties
        (names::ACTION, ValueType::Text),
        (names::REPEAT, ValueType::Integer),
        (names::TRIGGER, ValueType::Duration), // can be date-time
        // Change management properties
        (names::CREATED, ValueType::DateTime),
        (names::DTSTAMP, ValueType::DateTime),
        (names::LAST_MODIFIED, ValueType::DateTime),
        (names::SEQUENCE, ValueType::Integer),
        // Miscellaneous properties
        (names::REQUEST_STATUS, ValueType::Text),
    ])
});
