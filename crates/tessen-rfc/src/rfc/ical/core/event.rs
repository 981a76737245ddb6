//! VEVENT semantics (RFC 5545 §3.6.1).

use std::borrow::{Borrow, BorrowMut};
use std::fmt;

use chrono::{DateTime, TimeDelta};
use chrono_tz::Tz;

use super::component::{Component, ComponentKind};
use super::property::names as prop_names;
use super::{Malformed, MalformedKind, Properties, Property, ValueError, ValueType};

/// Overall status of an event (`STATUS`, RFC 5545 §3.8.1.11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Tentative,
    Confirmed,
    Cancelled,
}

impl EventStatus {
    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tentative => "TENTATIVE",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parses a wire token (case-insensitive).
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "TENTATIVE" => Some(Self::Tentative),
            "CONFIRMED" => Some(Self::Confirmed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A view of a VEVENT component.
///
/// `C` is the component itself for an owned event, or a reference into a
/// [`Calendar`](super::Calendar) for borrowed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<C = Component> {
    component: C,
}

impl<C> Event<C> {
    /// Wraps a component. The component kind is not checked.
    #[must_use]
    pub const fn new(component: C) -> Self {
        Self { component }
    }

    /// Returns the wrapped component.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.component
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new(Component::from(ComponentKind::Event))
    }
}

impl<C: Borrow<Component>> Event<C> {
    /// Returns the underlying component.
    #[must_use]
    pub fn component(&self) -> &Component {
        self.component.borrow()
    }

    /// Returns the event's properties.
    #[must_use]
    pub fn props(&self) -> &Properties {
        &self.component().props
    }

    /// Returns the inclusive start (`DTSTART`), or `None` when absent.
    ///
    /// ## Errors
    /// Same as [`Property::date_time`](super::Property::date_time).
    pub fn date_time_start(&self, tz: Option<Tz>) -> Result<Option<DateTime<Tz>>, ValueError> {
        self.props().date_time(prop_names::DTSTART, tz)
    }

    /// Returns the non-inclusive end of the event.
    ///
    /// In order of precedence: `DTEND`; `DTSTART` plus `DURATION`;
    /// `DTSTART` plus one day when `DTSTART` is a DATE; `DTSTART` itself.
    /// `None` when neither `DTEND` nor `DTSTART` is present.
    ///
    /// ## Errors
    /// Returns the first decoding error of the properties consulted, or a
    /// malformed-value error on the property that supplied the span (`DURATION`,
    /// or `DTSTART` for all-day events) when the end is out of range.
    pub fn date_time_end(&self, tz: Option<Tz>) -> Result<Option<DateTime<Tz>>, ValueError> {
        let props = self.props();
        if let Some(end) = props.get(prop_names::DTEND) {
            return end.date_time(tz).map(Some);
        }

        let Some(start_prop) = props.get(prop_names::DTSTART) else {
            return Ok(None);
        };
        let start = start_prop.date_time(tz)?;

        if let Some(duration) = props.get(prop_names::DURATION) {
            let span = duration.duration()?;
            return end_after(start, span, duration).map(Some);
        }

        // All-day events without DTEND or DURATION last one day.
        if start_prop.value_type() == ValueType::Date {
            return end_after(start, TimeDelta::days(1), start_prop).map(Some);
        }

        Ok(Some(start))
    }

    /// Returns the event status, or `None` when `STATUS` is absent or empty.
    ///
    /// ## Errors
    /// Returns a malformed-value error for tokens that are not valid on an
    /// event, or a decoding error of the TEXT value.
    pub fn status(&self) -> Result<Option<EventStatus>, ValueError> {
        let token = self.props().text(prop_names::STATUS)?;
        if token.is_empty() {
            return Ok(None);
        }
        EventStatus::parse(&token).map(Some).ok_or_else(|| {
            Malformed::new(MalformedKind::InvalidEventStatus, token).for_property(prop_names::STATUS)
        })
    }
}

impl<C: BorrowMut<Component>> Event<C> {
    /// Returns the underlying component, mutably.
    pub fn component_mut(&mut self) -> &mut Component {
        self.component.borrow_mut()
    }

    /// Returns the event's properties, mutably.
    pub fn props_mut(&mut self) -> &mut Properties {
        &mut self.component_mut().props
    }

    /// Sets `STATUS`, or removes it for `None`.
    pub fn set_status(&mut self, status: Option<EventStatus>) {
        match status {
            Some(status) => self.props_mut().set_text(prop_names::STATUS, status.as_str()),
            None => {
                self.props_mut().remove(prop_names::STATUS);
            }
        }
    }
}

/// Adds `span` to `start`, blaming `source` when the result is out of range.
fn end_after(
    start: DateTime<Tz>,
    span: TimeDelta,
    source: &Property,
) -> Result<DateTime<Tz>, ValueError> {
    start.checked_add_signed(span).ok_or_else(|| {
        Malformed::new(MalformedKind::DurationOutOfRange, source.raw_value.as_str())
            .for_property(source.name())
    })
}
