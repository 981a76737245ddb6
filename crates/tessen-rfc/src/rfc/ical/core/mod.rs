//! iCalendar core models (RFC 5545).
//!
//! This module defines the data structures for iCalendar content and the
//! typed codecs over raw property values:
//! - Round-trip fidelity: raw values, unknown properties and parameters are kept as read
//! - Value types: the `VALUE` parameter and per-property defaults decide how a value is read
//! - Event semantics: start, derived end and status of a VEVENT

mod component;
mod error;
mod event;
mod parameter;
mod properties;
mod property;
mod value_type;

pub use component::{Calendar, Component, ComponentKind, DEFAULT_PRODUCT_ID};
pub use component::names as component_names;
pub use error::{Malformed, MalformedKind, ValueError};
pub use event::{Event, EventStatus};
pub use parameter::names as param_names;
pub use parameter::{Parameter, Params};
pub use properties::Properties;
pub use property::Property;
pub use property::names as prop_names;
pub use value_type::{TypeCheck, ValueType};
