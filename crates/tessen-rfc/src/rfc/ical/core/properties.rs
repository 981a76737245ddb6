//! Ordered, multi-valued property container of a component.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

use super::{Property, ValueError};

/// The properties of one component.
///
/// Several properties may share a name (`ATTENDEE`, `CATEGORIES`, ...).
/// Lookups are case-insensitive and insertion order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Properties {
    entries: Vec<Property>,
}

impl Properties {
    /// Creates an empty container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the first property named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.entries
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Returns the first property named `name`, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.entries
            .iter_mut()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Returns every property named `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Property> + 'a {
        self.entries
            .iter()
            .filter(move |p| p.name().eq_ignore_ascii_case(name))
    }

    /// Replaces every property sharing `property`'s name with `property`.
    ///
    /// The replacement takes the position of the first one replaced, or is
    /// appended when none existed.
    pub fn set(&mut self, property: Property) {
        match self.entries.iter().position(|p| p.name() == property.name()) {
            Some(first) => {
                let name = property.name().to_string();
                self.entries[first] = property;
                let mut index = 0;
                self.entries.retain(|p| {
                    let keep = index <= first || p.name() != name;
                    index += 1;
                    keep
                });
            }
            None => self.entries.push(property),
        }
    }

    /// Appends `property`, keeping any others of the same name.
    pub fn add(&mut self, property: Property) {
        self.entries.push(property);
    }

    /// Removes every property named `name`. Returns whether any was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| !p.name().eq_ignore_ascii_case(name));
        self.entries.len() != before
    }

    /// Iterates over all properties in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.entries.iter()
    }

    /// Returns the total number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the container is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decodes the TEXT value of the first `name` property.
    ///
    /// An absent property yields the empty string.
    ///
    /// ## Errors
    /// Same as [`Property::text`].
    pub fn text(&self, name: &str) -> Result<String, ValueError> {
        self.get(name).map_or_else(|| Ok(String::new()), Property::text)
    }

    /// Replaces all `name` properties with one TEXT property.
    pub fn set_text(&mut self, name: &str, text: &str) {
        let mut property = Property::new(name, "");
        property.set_text(text);
        self.set(property);
    }

    /// Decodes the DATE-TIME or DATE value of the first `name` property.
    ///
    /// An absent property yields `None`.
    ///
    /// ## Errors
    /// Same as [`Property::date_time`].
    pub fn date_time(&self, name: &str, tz: Option<Tz>) -> Result<Option<DateTime<Tz>>, ValueError> {
        self.get(name).map(|p| p.date_time(tz)).transpose()
    }

    /// Replaces all `name` properties with one UTC DATE-TIME property.
    pub fn set_date_time<Z: TimeZone>(&mut self, name: &str, dt: &DateTime<Z>) {
        let mut property = Property::new(name, "");
        property.set_date_time(dt);
        self.set(property);
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
