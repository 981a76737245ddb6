//! iCalendar parameter types (RFC 5545 §3.2).

use std::fmt;

use crate::rfc::ical::build::escape_param_value;

/// A single iCalendar property parameter.
///
/// Parameters modify or provide metadata for a property value.
/// For example: `DTSTART;TZID=America/New_York:20260123T120000`
///
/// The `TZID` is a parameter with name `TZID` and value `America/New_York`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    values: Vec<String>,
}

impl Parameter {
    /// Returns the parameter name (upper-case).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all values in order. Never empty.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the first (and usually only) value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.name)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", escape_param_value(value))?;
        }
        Ok(())
    }
}

/// The parameters of one property.
///
/// Names are case-insensitive (stored upper-case) and each name maps to an
/// ordered, non-empty list of values. A name is either present with at
/// least one value or absent. Insertion order of names is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    entries: Vec<Parameter>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first value of `name`.
    ///
    /// Later values of a multi-valued parameter are only reachable through
    /// [`Params::get_all`].
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).and_then(|i| self.entries[i].value())
    }

    /// Returns every value of `name`, or an empty slice when absent.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        match self.position(name) {
            Some(i) => self.entries[i].values(),
            None => &[],
        }
    }

    /// Returns whether `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Replaces all values of `name` with the single `value`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.position(name) {
            Some(i) => self.entries[i].values = vec![value],
            None => self.entries.push(Parameter {
                name: name.to_ascii_uppercase(),
                values: vec![value],
            }),
        }
    }

    /// Appends `value` to the values of `name`.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.position(name) {
            Some(i) => self.entries[i].values.push(value),
            None => self.entries.push(Parameter {
                name: name.to_ascii_uppercase(),
                values: vec![value],
            }),
        }
    }

    /// Removes `name`, returning its values if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        let i = self.position(name)?;
        Some(self.entries.remove(i).values)
    }

    /// Iterates over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.iter()
    }

    /// Returns the number of distinct parameter names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no parameter is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Common parameter names as constants.
pub mod names {
    /// Alternate text representation.
    pub const ALTREP: &str = "ALTREP";
    /// Common name.
    pub const CN: &str = "CN";
    /// Calendar user type.
    pub const CUTYPE: &str = "CUTYPE";
    /// Delegators.
    pub const DELEGATED_FROM: &str = "DELEGATED-FROM";
    /// Delegatees.
    pub const DELEGATED_TO: &str = "DELEGATED-TO";
    /// Directory entry.
    pub const DIR: &str = "DIR";
    /// Inline encoding.
    pub const ENCODING: &str = "ENCODING";
    /// Format type.
    pub const FMTTYPE: &str = "FMTTYPE";
    /// Free/busy time type.
    pub const FBTYPE: &str = "FBTYPE";
    /// Language.
    pub const LANGUAGE: &str = "LANGUAGE";
    /// Group or list membership.
    pub const MEMBER: &str = "MEMBER";
    /// Participation status.
    pub const PARTSTAT: &str = "PARTSTAT";
    /// Recurrence identifier range.
    pub const RANGE: &str = "RANGE";
    /// Alarm trigger relationship.
    pub const RELATED: &str = "RELATED";
    /// Relationship type.
    pub const RELTYPE: &str = "RELTYPE";
    /// Participation role.
    pub const ROLE: &str = "ROLE";
    /// RSVP expectation.
    pub const RSVP: &str = "RSVP";
    /// Sent by.
    pub const SENT_BY: &str = "SENT-BY";
    /// Time zone identifier.
    pub const TZID: &str = "TZID";
    /// Value data type.
    pub const VALUE: &str = "VALUE";
}
