//! DURATION value parser (RFC 5545 §3.3.6).
//!
//! Grammar accepted:
//!
//! ```text
//! [+|-] "P" *(n ("W" | "D")) ["T" *(n ("H" | "M" | "S"))]
//! ```
//!
//! Unit letters are phase-sensitive: `W`/`D` before `T`, `H`/`M`/`S` after.
//! Components may repeat and are summed. `P` and `PT` with no component are
//! accepted as a zero duration.

use chrono::TimeDelta;

use crate::rfc::ical::core::{Malformed, MalformedKind};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Before `T`: weeks and days.
    Date,
    /// After `T`: hours, minutes and seconds.
    Time,
}

/// Cursor over an upper-cased duration string.
struct DurationParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> DurationParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn consume(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// The character at the cursor, for error reporting.
    fn current_token(&self) -> String {
        self.input[self.pos..]
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default()
    }

    fn parse_count(&mut self) -> Result<u64, Malformed> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(Malformed::new(MalformedKind::ExpectedDigit, self.current_token()).at(start));
        }

        let digits = &self.input[start..self.pos];
        digits
            .parse::<u64>()
            .map_err(|_e| Malformed::new(MalformedKind::DurationOutOfRange, digits).at(start))
    }

    fn unit_seconds(&mut self, phase: Phase) -> Result<u64, Malformed> {
        let at = self.pos;
        let seconds = match (phase, self.peek()) {
            (Phase::Date, Some(b'W')) => SECONDS_PER_WEEK,
            (Phase::Date, Some(b'D')) => SECONDS_PER_DAY,
            (Phase::Time, Some(b'H')) => SECONDS_PER_HOUR,
            (Phase::Time, Some(b'M')) => SECONDS_PER_MINUTE,
            (Phase::Time, Some(b'S')) => 1,
            (Phase::Date, _) => {
                return Err(Malformed::new(MalformedKind::InvalidDateUnit, self.current_token()).at(at));
            }
            (Phase::Time, _) => {
                return Err(Malformed::new(MalformedKind::InvalidTimeUnit, self.current_token()).at(at));
            }
        };
        self.pos += 1;
        Ok(seconds)
    }

    fn parse(mut self) -> Result<TimeDelta, Malformed> {
        let negative = self.consume(b'-');
        if !negative {
            self.consume(b'+');
        }

        if !self.consume(b'P') {
            return Err(
                Malformed::new(MalformedKind::MissingDurationDesignator, self.current_token())
                    .at(self.pos),
            );
        }

        let input = self.input;
        let out_of_range = || Malformed::new(MalformedKind::DurationOutOfRange, input);

        let mut phase = Phase::Date;
        let mut total: u64 = 0;
        while !self.is_at_end() {
            if phase == Phase::Date && self.consume(b'T') {
                phase = Phase::Time;
                continue;
            }

            let count = self.parse_count()?;
            let unit = self.unit_seconds(phase)?;
            total = count
                .checked_mul(unit)
                .and_then(|seconds| total.checked_add(seconds))
                .ok_or_else(out_of_range)?;
        }

        let magnitude = i64::try_from(total).map_err(|_e| out_of_range())?;
        let seconds = if negative { -magnitude } else { magnitude };
        TimeDelta::try_seconds(seconds).ok_or_else(out_of_range)
    }
}

/// Parses a DURATION value into a signed span with second granularity.
///
/// Unit letters are matched case-insensitively.
///
/// ## Errors
/// Returns a [`Malformed`] describing the first offending character when the
/// value does not follow the duration grammar, or when the total does not fit.
pub fn parse_duration(s: &str) -> Result<TimeDelta, Malformed> {
    let upper = s.to_ascii_uppercase();
    DurationParser::new(&upper).parse()
}
