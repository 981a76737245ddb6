//! iCalendar parsing (RFC 5545).
//!
//! Two layers live here:
//!
//! - value grammars that turn one raw property value into a typed value
//!   (`parse_duration`, `parse_text_list`, `parse_date`, ...)
//! - the document reader that turns a whole `.ics` text into a [`Calendar`]
//!
//! ## Usage
//!
//! ```rust
//! use tessen_rfc::rfc::ical::parse;
//!
//! let input = "\
//! BEGIN:VCALENDAR\r\n\
//! VERSION:2.0\r\n\
//! BEGIN:VEVENT\r\n\
//! UID:1@example.com\r\n\
//! DURATION:PT1H30M\r\n\
//! END:VEVENT\r\n\
//! END:VCALENDAR\r\n";
//!
//! let cal = parse::decode(input).unwrap();
//! let event = cal.events().next().unwrap();
//! let duration = event.props().get("DURATION").unwrap().duration().unwrap();
//! assert_eq!(duration.num_seconds(), 5400);
//! ```
//!
//! [`Calendar`]: crate::rfc::ical::core::Calendar

mod duration;
mod error;
mod lexer;
mod parser;
mod text;
mod values;

pub use duration::parse_duration;
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{parse_content_line, split_lines};
pub use parser::{MAX_NESTING_DEPTH, decode};
pub use text::parse_text_list;
pub use values::{
    localize, localize_date, parse_binary, parse_boolean, parse_date, parse_float, parse_integer,
    parse_local_date_time, parse_utc_date_time,
};
