//! iCalendar (RFC 5545).
//!
//! - `core`: properties, parameters, components and the typed value codecs
//! - `parse`: value grammars and the document reader
//! - `build`: canonical value encoders and the document writer

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

/// MIME type for iCalendar data (RFC 5545 §8.1).
pub const MIME_TYPE: &str = "text/calendar";

/// File extension for iCalendar data (RFC 5545 §8.1).
pub const EXTENSION: &str = "ics";
