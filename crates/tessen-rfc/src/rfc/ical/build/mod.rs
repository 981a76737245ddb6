//! iCalendar serialization (RFC 5545).
//!
//! This module provides serializers for iCalendar content:
//! - Values: canonical encoders used by the typed property setters
//! - Escape: Text and parameter value escaping
//! - Fold: Content line folding
//! - Serializer: Full document serialization with canonical ordering

mod escape;
mod fold;
mod serializer;
mod values;

pub use escape::{escape_param_value, escape_text, format_text_list};
pub use fold::fold_line;
pub use serializer::{EncodeOptions, encode, encode_component, encode_property};
pub use values::{
    format_binary, format_boolean, format_date, format_duration, format_utc_date_time,
};
