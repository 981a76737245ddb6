//! Document-level tests for the iCalendar model.

mod fixtures;
mod properties;
