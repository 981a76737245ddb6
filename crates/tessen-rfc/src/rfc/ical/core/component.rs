//! iCalendar component types (RFC 5545 §3.4-3.6).

use super::event::Event;
use super::property::names as prop_names;
use super::{Properties, Property, ValueError};

/// Product identifier written by [`Calendar::new`].
pub const DEFAULT_PRODUCT_ID: &str = "-//tessen//tessen//EN";

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VJOURNAL component.
    Journal,
    /// VFREEBUSY component.
    FreeBusy,
    /// VTIMEZONE component.
    Timezone,
    /// VALARM component (nested within VEVENT/VTODO).
    Alarm,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
    /// Unknown/X-component.
    Unknown,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => names::VCALENDAR,
            Self::Event => names::VEVENT,
            Self::Todo => names::VTODO,
            Self::Journal => names::VJOURNAL,
            Self::FreeBusy => names::VFREEBUSY,
            Self::Timezone => names::VTIMEZONE,
            Self::Alarm => names::VALARM,
            Self::Standard => names::STANDARD,
            Self::Daylight => names::DAYLIGHT,
            Self::Unknown => "X-UNKNOWN",
        }
    }

    /// Parses a component kind from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            names::VCALENDAR => Self::Calendar,
            names::VEVENT => Self::Event,
            names::VTODO => Self::Todo,
            names::VJOURNAL => Self::Journal,
            names::VFREEBUSY => Self::FreeBusy,
            names::VTIMEZONE => Self::Timezone,
            names::VALARM => Self::Alarm,
            names::STANDARD => Self::Standard,
            names::DAYLIGHT => Self::Daylight,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An iCalendar component.
///
/// Components can contain properties and nested sub-components.
/// For example, a VCALENDAR contains VEVENTs, which may contain VALARMs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    /// Properties in order of appearance.
    pub props: Properties,
    /// Nested sub-components.
    pub children: Vec<Component>,
}

impl Component {
    /// Creates an empty component. The name is stored upper-case, so
    /// X-components keep their own name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            props: Properties::new(),
            children: Vec::new(),
        }
    }

    /// Returns the component name (upper-case).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classifies the component by name.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        ComponentKind::parse(&self.name)
    }

    /// Returns children of a specific kind.
    pub fn children_of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.children.iter().filter(move |c| c.kind() == kind)
    }
}

impl From<ComponentKind> for Component {
    fn from(kind: ComponentKind) -> Self {
        Self::new(kind.as_str())
    }
}

/// Top-level iCalendar object.
///
/// This is a convenience wrapper around a VCALENDAR component
/// with helper methods for common operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    /// The root VCALENDAR component.
    pub root: Component,
}

impl Calendar {
    /// Creates a calendar carrying `VERSION:2.0` and the default `PRODID`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_product_id(DEFAULT_PRODUCT_ID)
    }

    /// Creates a calendar carrying `VERSION:2.0` and the given `PRODID`.
    #[must_use]
    pub fn with_product_id(product_id: &str) -> Self {
        let mut root = Component::from(ComponentKind::Calendar);
        root.props.add(Property::new(prop_names::VERSION, "2.0"));
        root.props.set_text(prop_names::PRODID, product_id);
        Self { root }
    }

    /// Returns the PRODID value, or the empty string when absent.
    ///
    /// ## Errors
    /// Returns an error if the value is not valid TEXT.
    pub fn product_id(&self) -> Result<String, ValueError> {
        self.root.props.text(prop_names::PRODID)
    }

    /// Returns the VERSION value, or the empty string when absent.
    ///
    /// ## Errors
    /// Returns an error if the value is not valid TEXT.
    pub fn version(&self) -> Result<String, ValueError> {
        self.root.props.text(prop_names::VERSION)
    }

    /// Iterates over the VEVENT children.
    pub fn events(&self) -> impl Iterator<Item = Event<&Component>> {
        self.root
            .children_of_kind(ComponentKind::Event)
            .map(Event::new)
    }

    /// Iterates mutably over the VEVENT children.
    pub fn events_mut(&mut self) -> impl Iterator<Item = Event<&mut Component>> {
        self.root
            .children
            .iter_mut()
            .filter(|c| c.kind() == ComponentKind::Event)
            .map(Event::new)
    }

    /// Appends an event to the calendar.
    pub fn add_event(&mut self, event: Event) {
        self.root.children.push(event.into_inner());
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

/// Component names from RFC 5545 §3.6.
pub mod names {
    pub const VCALENDAR: &str = "VCALENDAR";
    pub const VEVENT: &str = "VEVENT";
    pub const VTODO: &str = "VTODO";
    pub const VJOURNAL: &str = "VJOURNAL";
    pub const VFREEBUSY: &str = "VFREEBUSY";
    pub const VTIMEZONE: &str = "VTIMEZONE";
    pub const VALARM: &str = "VALARM";
    pub const STANDARD: &str = "STANDARD";
    pub const DAYLIGHT: &str = "DAYLIGHT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_kind_parse() {
        assert_eq!(ComponentKind::parse("VEVENT"), ComponentKind::Event);
        assert_eq!(ComponentKind::parse("vtodo"), ComponentKind::Todo);
        assert_eq!(ComponentKind::parse("X-CUSTOM"), ComponentKind::Unknown);
    }

    #[test]
    fn component_keeps_custom_name() {
        let component = Component::new("x-widget");
        assert_eq!(component.name(), "X-WIDGET");
        assert_eq!(component.kind(), ComponentKind::Unknown);
    }

    #[test]
    fn calendar_new() {
        let cal = Calendar::with_product_id("-//Test//Test//EN");
        assert_eq!(cal.version().unwrap(), "2.0");
        assert_eq!(cal.product_id().unwrap(), "-//Test//Test//EN");
        assert_eq!(cal.root.kind(), ComponentKind::Calendar);
        assert_eq!(Calendar::default().product_id().unwrap(), DEFAULT_PRODUCT_ID);
    }

    #[test]
    fn calendar_events_skip_other_components() {
        let mut cal = Calendar::new();

        let mut event1 = Event::new(Component::from(ComponentKind::Event));
        event1.props_mut().set_text("UID", "event1");
        cal.add_event(event1);

        cal.root.children.push(Component::from(ComponentKind::Todo));

        let mut event2 = Event::default();
        event2.props_mut().set_text("UID", "event2");
        cal.add_event(event2);

        let uids: Vec<String> = cal
            .events()
            .map(|e| e.props().text("UID").unwrap())
            .collect();
        assert_eq!(uids, ["event1", "event2"]);
        assert_eq!(cal.root.children.len(), 3);
    }

    #[test]
    fn calendar_events_mut() {
        let mut cal = Calendar::new();
        cal.add_event(Event::default());

        for mut event in cal.events_mut() {
            event.props_mut().set_text("SUMMARY", "Edited");
        }

        let event = cal.events().next().unwrap();
        assert_eq!(event.props().text("SUMMARY").unwrap(), "Edited");
    }
}
