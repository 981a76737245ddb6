//! Value-level error types for typed property access.

use std::fmt;

use thiserror::Error;

use super::ValueType;

/// Error returned by the typed property accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The resolved value type conflicts with the type the accessor reads.
    #[error("property {property:?}: expected type {expected}, got {actual}")]
    TypeMismatch {
        property: String,
        expected: ValueType,
        actual: ValueType,
    },

    /// The raw value does not conform to the grammar of the target type.
    #[error("property {property:?}: {source}")]
    MalformedValue { property: String, source: Malformed },
}

impl ValueError {
    /// Returns the name of the property that failed.
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            Self::TypeMismatch { property, .. } | Self::MalformedValue { property, .. } => property,
        }
    }

    /// Returns the grammar failure, if this is a malformed-value error.
    #[must_use]
    pub fn malformed(&self) -> Option<&Malformed> {
        match self {
            Self::MalformedValue { source, .. } => Some(source),
            Self::TypeMismatch { .. } => None,
        }
    }
}

/// A grammar failure detected while decoding a raw value.
///
/// Produced by the value parsers, which know nothing about properties;
/// the property accessors attach the property name via [`Malformed::for_property`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Malformed {
    /// Kind of failure.
    pub kind: MalformedKind,
    /// Byte offset into the raw value where the failure was detected.
    pub position: Option<usize>,
    /// The offending token (or the whole value when no finer token applies).
    pub token: String,
}

impl Malformed {
    /// Creates a failure without position information.
    #[must_use]
    pub fn new(kind: MalformedKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            position: None,
            token: token.into(),
        }
    }

    /// Records the byte offset at which the failure was detected.
    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Wraps this failure into a [`ValueError`] for the named property.
    #[must_use]
    pub fn for_property(self, property: &str) -> ValueError {
        tracing::trace!(property, kind = %self.kind, "Malformed property value");
        ValueError::MalformedValue {
            property: property.to_string(),
            source: self,
        }
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(position) = self.position {
            write!(f, " at offset {position}")?;
        }
        write!(f, ": {:?}", self.token)
    }
}

impl std::error::Error for Malformed {}

/// Kinds of malformed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// Not valid standard base64.
    InvalidBinary,
    /// Not `TRUE` or `FALSE`.
    InvalidBoolean,
    /// Not a base-10 32-bit integer.
    InvalidInteger,
    /// Not a finite decimal number.
    InvalidFloat,
    /// Not `YYYYMMDD`.
    InvalidDate,
    /// Neither `YYYYMMDDThhmmss` nor `YYYYMMDDThhmmssZ`.
    InvalidDateTime,
    /// Duration does not start with an optional sign and `P`.
    MissingDurationDesignator,
    /// Duration unit not preceded by a digit.
    ExpectedDigit,
    /// Unit letter other than `W` or `D` before `T`.
    InvalidDateUnit,
    /// Unit letter other than `H`, `M` or `S` after `T`.
    InvalidTimeUnit,
    /// Duration total does not fit the supported range.
    DurationOutOfRange,
    /// Backslash followed by a character that cannot be escaped.
    InvalidEscape,
    /// Backslash as the last character of the value.
    EscapeAtEnd,
    /// `STATUS` token not allowed on an event.
    InvalidEventStatus,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBinary => write!(f, "invalid base64 binary"),
            Self::InvalidBoolean => write!(f, "invalid boolean"),
            Self::InvalidInteger => write!(f, "invalid integer"),
            Self::InvalidFloat => write!(f, "invalid float"),
            Self::InvalidDate => write!(f, "invalid date"),
            Self::InvalidDateTime => write!(f, "invalid date-time"),
            Self::MissingDurationDesignator => write!(f, "invalid duration: expected 'P'"),
            Self::ExpectedDigit => write!(f, "invalid duration: expected a digit"),
            Self::InvalidDateUnit => write!(f, "invalid duration: expected 'D' or 'W'"),
            Self::InvalidTimeUnit => write!(f, "invalid duration: expected 'H', 'M' or 'S'"),
            Self::DurationOutOfRange => write!(f, "duration out of range"),
            Self::InvalidEscape => write!(f, "malformed text: invalid escape sequence"),
            Self::EscapeAtEnd => write!(f, "malformed text: escape at end of text"),
            Self::InvalidEventStatus => write!(f, "invalid VEVENT STATUS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_with_position() {
        let err = Malformed::new(MalformedKind::InvalidDateUnit, "X").at(2);
        assert_eq!(
            err.to_string(),
            "invalid duration: expected 'D' or 'W' at offset 2: \"X\""
        );
    }

    #[test]
    fn value_error_names_property() {
        let err = Malformed::new(MalformedKind::InvalidBoolean, "yes").for_property("RSVP");
        assert_eq!(err.property(), "RSVP");
        assert_eq!(
            err.malformed().map(|m| m.kind),
            Some(MalformedKind::InvalidBoolean)
        );
        assert_eq!(err.to_string(), "property \"RSVP\": invalid boolean: \"yes\"");
    }

    #[test]
    fn type_mismatch_display() {
        let err = ValueError::TypeMismatch {
            property: "DTSTART".to_string(),
            expected: ValueType::Duration,
            actual: ValueType::DateTime,
        };
        assert_eq!(
            err.to_string(),
            "property \"DTSTART\": expected type DURATION, got DATE-TIME"
        );
        assert!(err.malformed().is_none());
    }
}
