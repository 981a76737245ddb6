//! iCalendar document reader (RFC 5545).
//!
//! Nests BEGIN/END blocks into components. Property values are kept raw;
//! typed decoding happens on demand through the [`Property`] accessors.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{parse_content_line, split_lines};
use crate::rfc::ical::core::{Calendar, Component, ComponentKind, Property};

const BEGIN: &str = "BEGIN";
const END: &str = "END";

/// Deepest component nesting accepted, counting `VCALENDAR` as level 1.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Decodes an iCalendar document from a string.
///
/// ## Errors
///
/// Returns an error if the input is not a well-formed `VCALENDAR`, or if
/// components nest deeper than [`MAX_NESTING_DEPTH`].
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn decode(input: &str) -> ParseResult<Calendar> {
    tracing::debug!("Decoding iCalendar document");

    let lines = split_lines(input);

    if lines.is_empty() {
        tracing::warn!("Empty iCalendar input");
        return Err(ParseError::new(ParseErrorKind::MissingBegin, 1, 1));
    }

    tracing::trace!(count = lines.len(), "Split lines");

    let content_lines: Vec<(usize, Property)> = lines
        .into_iter()
        .map(|(line_num, line)| parse_content_line(&line, line_num).map(|p| (line_num, p)))
        .collect::<ParseResult<_>>()?;

    let mut iter = content_lines.into_iter();

    let (line_num, begin) = iter
        .next()
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingBegin, 1, 1))?;
    if begin.name() != BEGIN {
        return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
            .with_context(format!("found {}", begin.name())));
    }

    let root = parse_component(&mut iter, line_num, &begin.raw_value, 1)?;

    if root.kind() != ComponentKind::Calendar {
        tracing::warn!(name = root.name(), "Root component is not VCALENDAR");
        return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
            .with_context(format!("expected VCALENDAR, got {}", root.name())));
    }

    if let Some((line_num, _)) = iter.next() {
        return Err(ParseError::new(ParseErrorKind::UnexpectedContent, line_num, 1)
            .with_context("content after END:VCALENDAR"));
    }

    tracing::debug!(
        children = root.children.len(),
        "iCalendar document decoded successfully"
    );

    Ok(Calendar { root })
}

/// Parses the body of a component whose BEGIN line was already consumed.
fn parse_component<I>(
    iter: &mut I,
    begin_line_num: usize,
    name: &str,
    depth: usize,
) -> ParseResult<Component>
where
    I: Iterator<Item = (usize, Property)>,
{
    if name.is_empty() {
        return Err(ParseError::new(ParseErrorKind::MissingBegin, begin_line_num, 1)
            .with_context("BEGIN without a component name"));
    }

    if depth > MAX_NESTING_DEPTH {
        tracing::warn!(depth, name, "Component nesting too deep");
        return Err(
            ParseError::new(ParseErrorKind::NestingTooDeep, begin_line_num, 1).with_context(
                format!("BEGIN:{name} exceeds {MAX_NESTING_DEPTH} levels"),
            ),
        );
    }

    let mut component = Component::new(name);
    let mut last_line_num = begin_line_num;

    loop {
        let Some((line_num, property)) = iter.next() else {
            return Err(ParseError::new(ParseErrorKind::MissingEnd, last_line_num, 1)
                .with_context(format!("missing END:{}", component.name())));
        };
        last_line_num = line_num;

        match property.name() {
            BEGIN => {
                let nested = parse_component(iter, line_num, &property.raw_value, depth + 1)?;
                component.children.push(nested);
            }
            END => {
                if !property.raw_value.eq_ignore_ascii_case(component.name()) {
                    return Err(
                        ParseError::new(ParseErrorKind::MismatchedComponent, line_num, 1)
                            .with_context(format!(
                                "expected END:{}, got END:{}",
                                component.name(),
                                property.raw_value
                            )),
                    );
                }
                return Ok(component);
            }
            _ => component.props.add(property),
        }
    }
}
