//! Property-based tests for the typed value codecs.

use chrono::{DateTime, TimeDelta, Utc};
use proptest::prelude::*;

use crate::rfc::ical::core::{Property, TypeCheck, ValueType, param_names, prop_names};

/// Value types that have a decoder.
fn decodable_type() -> impl Strategy<Value = ValueType> {
    prop::sample::select(vec![
        ValueType::Binary,
        ValueType::Boolean,
        ValueType::Date,
        ValueType::DateTime,
        ValueType::Duration,
        ValueType::Float,
        ValueType::Integer,
        ValueType::Text,
    ])
}

/// Every concrete value type, including the ones only carried as tokens.
fn any_type() -> impl Strategy<Value = ValueType> {
    prop_oneof![
        decodable_type(),
        prop::sample::select(vec![
            ValueType::CalAddress,
            ValueType::Period,
            ValueType::Recur,
            ValueType::Time,
            ValueType::Uri,
            ValueType::UtcOffset,
        ]),
    ]
}

/// Registered property names plus a few unknown ones.
fn property_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        prop_names::ATTACH,
        prop_names::CATEGORIES,
        prop_names::DTSTART,
        prop_names::DURATION,
        prop_names::GEO,
        prop_names::PRIORITY,
        prop_names::RRULE,
        prop_names::SUMMARY,
        prop_names::TRIGGER,
        prop_names::TZOFFSETTO,
        "X-CUSTOM",
        "X-WR-CALNAME",
    ])
}

fn text_item() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \\\\;,:\"\n\t]{0,16}"
}

proptest! {
    #[test]
    fn assigned_type_is_legible(name in property_name(), value_type in any_type()) {
        let mut property = Property::new(name, "");
        property.set_value_type(&value_type);
        prop_assert!(property.check_value_type(&value_type).is_compatible());
    }

    #[test]
    fn default_type_is_never_written(name in property_name()) {
        let mut property = Property::new(name, "");
        if let Some(default) = ValueType::default_for(name) {
            prop_assert_eq!(&property.value_type(), default);
            property.set_value_type(default);
            prop_assert!(!property.params.contains(param_names::VALUE));
            prop_assert_eq!(property.check_value_type(default), TypeCheck::Matches);
        }
    }

    #[test]
    fn unknown_names_are_unconstrained(suffix in "[A-Z]{1,8}", wanted in any_type()) {
        let property = Property::new(&format!("X-{suffix}"), "");
        prop_assert_eq!(property.check_value_type(&wanted), TypeCheck::Unconstrained);
    }

    #[test]
    fn duration_seconds_round_trip(seconds in -1_000_000_000_000_i64..=1_000_000_000_000) {
        let mut property = Property::new(prop_names::DURATION, "");
        property.set_duration(TimeDelta::seconds(seconds));

        let expected = if seconds < 0 {
            format!("-PT{}S", seconds.unsigned_abs())
        } else {
            format!("PT{seconds}S")
        };
        prop_assert_eq!(&property.raw_value, &expected);
        prop_assert_eq!(property.duration().unwrap().num_seconds(), seconds);
    }

    #[test]
    fn text_list_round_trip(items in prop::collection::vec(text_item(), 1..6)) {
        let mut property = Property::new(prop_names::CATEGORIES, "");
        property.set_text_list(items.as_slice());
        prop_assert_eq!(property.text_list().unwrap(), items);
    }

    #[test]
    fn single_text_round_trip(text in text_item()) {
        let mut property = Property::new(prop_names::SUMMARY, "");
        property.set_text(&text);
        prop_assert_eq!(property.text_list().unwrap().len(), 1);
        prop_assert_eq!(property.text().unwrap(), text);
    }

    #[test]
    fn utc_date_time_round_trip(timestamp in 0_i64..4_102_444_800) {
        let dt = DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap();
        let mut property = Property::new(prop_names::DTSTART, "");
        property.set_date_time(&dt);

        prop_assert!(property.raw_value.ends_with('Z'));
        prop_assert_eq!(property.date_time(Some(chrono_tz::Asia::Kolkata)).unwrap(), dt);
    }

    #[test]
    fn integers_round_trip(value in any::<i32>()) {
        let mut property = Property::new(prop_names::PRIORITY, "");
        property.set_integer(value);
        prop_assert_eq!(property.integer().unwrap(), value);
    }

    #[test]
    fn binary_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut property = Property::new("X-BLOB", "");
        property.set_binary(&bytes);
        prop_assert_eq!(property.value_type(), ValueType::Binary);
        prop_assert_eq!(property.binary().unwrap(), bytes);
    }

    #[test]
    fn decoders_never_panic(raw in "\\PC{0,24}", value_type in decodable_type()) {
        let mut property = Property::new("X-ANY", raw);
        property.set_value_type(&value_type);
        let _text = property.text_list();
        let _duration = property.duration();
        let _date_time = property.date_time(None);
        let _binary = property.binary();
        let _float = property.float();
    }
}
