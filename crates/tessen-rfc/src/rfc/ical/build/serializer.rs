//! iCalendar document writer (RFC 5545).
//!
//! Raw values are written verbatim; typed encoding already happened when a
//! setter stored them. Output uses CRLF line endings and folded lines.

use tessen_core::config::{DEFAULT_FOLD_WIDTH, IcalConfig};

use super::fold::fold_line;
use crate::rfc::ical::core::{Calendar, Component, Property, prop_names};

/// Writer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Maximum octets per physical line.
    pub fold_width: usize,
    /// Sort properties into canonical order instead of insertion order.
    pub canonical_order: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            fold_width: DEFAULT_FOLD_WIDTH,
            canonical_order: true,
        }
    }
}

impl From<&IcalConfig> for EncodeOptions {
    fn from(config: &IcalConfig) -> Self {
        Self {
            fold_width: config.fold_width,
            canonical_order: config.canonical_order,
        }
    }
}

/// Encodes a calendar to iCalendar text.
#[must_use]
pub fn encode(calendar: &Calendar, options: &EncodeOptions) -> String {
    let output = encode_component(&calendar.root, options);
    tracing::trace!(len = output.len(), "Encoded iCalendar document");
    output
}

/// Encodes a component, its properties and its children.
#[must_use]
pub fn encode_component(component: &Component, options: &EncodeOptions) -> String {
    let mut output = String::new();
    write_component(&mut output, component, options);
    output
}

/// Encodes one property as a folded content line ending in CRLF.
#[must_use]
pub fn encode_property(property: &Property, options: &EncodeOptions) -> String {
    let mut line = property.name().to_string();
    for param in &property.params {
        line.push(';');
        line.push_str(&param.to_string());
    }
    line.push(':');
    line.push_str(&property.raw_value);

    let mut folded = fold_line(&line, options.fold_width);
    folded.push_str("\r\n");
    folded
}

fn write_component(output: &mut String, component: &Component, options: &EncodeOptions) {
    push_line(output, "BEGIN", component.name());

    let mut properties: Vec<&Property> = component.props.iter().collect();
    if options.canonical_order {
        properties.sort_by_key(|p| property_rank(p.name()));
    }
    for property in properties {
        output.push_str(&encode_property(property, options));
    }

    for child in &component.children {
        write_component(output, child, options);
    }

    push_line(output, "END", component.name());
}

fn push_line(output: &mut String, name: &str, value: &str) {
    output.push_str(name);
    output.push(':');
    output.push_str(value);
    output.push_str("\r\n");
}

/// Canonical position of a property within its component.
///
/// Identification and scheduling properties come first. Everything else,
/// including extensions, keeps its relative insertion order after them.
fn property_rank(name: &str) -> usize {
    const ORDER: &[&str] = &[
        prop_names::VERSION,
        prop_names::PRODID,
        prop_names::CALSCALE,
        prop_names::METHOD,
        prop_names::UID,
        prop_names::DTSTAMP,
        prop_names::SEQUENCE,
        prop_names::DTSTART,
        prop_names::DTEND,
        prop_names::DUE,
        prop_names::DURATION,
        prop_names::RRULE,
        prop_names::RDATE,
        prop_names::EXDATE,
        prop_names::RECURRENCE_ID,
        prop_names::SUMMARY,
        prop_names::DESCRIPTION,
        prop_names::LOCATION,
        prop_names::STATUS,
    ];

    ORDER
        .iter()
        .position(|&n| n == name)
        .unwrap_or(ORDER.len())
}
