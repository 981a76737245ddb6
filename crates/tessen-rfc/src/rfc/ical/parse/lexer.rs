//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of content lines.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{Params, Property};

type Chars<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

/// Splits input into content lines, merging folded continuations.
///
/// Handles both CRLF and bare LF line endings. Lines starting with SP/HTAB are
/// treated as continuations of the previous line. Per RFC 5545 §3.1, unfolding
/// removes the CRLF and the whitespace character (no space is inserted).
/// Blank lines are skipped. Each line carries its 1-based physical line number.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (i, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some((_, prev)) = lines.last_mut() {
                prev.push_str(continuation);
            } else {
                lines.push((i + 1, continuation.to_string()));
            }
        } else {
            lines.push((i + 1, line.to_string()));
        }
    }

    lines
}

/// Parses a single unfolded content line into a [`Property`].
///
/// Format: `name *(";" param) ":" value`. The value is kept raw.
///
/// ## Errors
/// Returns an error if the name or a parameter is malformed, a quoted
/// parameter value is not closed, or the `:` before the value is missing.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<Property> {
    let mut chars = line.char_indices().peekable();
    let mut name_end = line.len();
    let mut delimiter = None;

    // Property name ends at ';' or ':'
    for (i, c) in chars.by_ref() {
        if c == ';' || c == ':' {
            name_end = i;
            delimiter = Some(c);
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(
                ParseErrorKind::InvalidPropertyName,
                line_num,
                i + 1,
            ));
        }
    }

    if name_end == 0 {
        return Err(ParseError::new(
            ParseErrorKind::MissingPropertyName,
            line_num,
            1,
        ));
    }

    let Some(mut delimiter) = delimiter else {
        return Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.len() + 1,
        ));
    };

    let mut params = Params::new();
    let mut value_start = name_end + 1;
    while delimiter == ';' {
        let (next, at) = parse_parameter(&mut chars, &mut params, line, line_num)?;
        delimiter = next;
        value_start = at + 1;
    }

    let mut property = Property::new(&line[..name_end], &line[value_start..]);
    property.params = params;
    Ok(property)
}

/// Parses one `name=value *("," value)` parameter into `params`.
///
/// Returns the delimiter that ended it (`;` or `:`) and its byte offset.
fn parse_parameter(
    chars: &mut Chars<'_>,
    params: &mut Params,
    line: &str,
    line_num: usize,
) -> ParseResult<(char, usize)> {
    let start = chars.peek().map_or(line.len(), |&(i, _)| i);

    // Parameter name (up to '=')
    let mut name_end = None;
    for (i, c) in chars.by_ref() {
        if c == '=' {
            name_end = Some(i);
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                i + 1,
            ));
        }
    }

    let name = match name_end {
        Some(end) if end > start => &line[start..end],
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                start + 1,
            ));
        }
    };

    // Parameter values (comma-separated, may be quoted)
    loop {
        let value = parse_param_value(chars, line, line_num)?;
        params.add(name, value);

        match chars.next() {
            Some((_, ',')) => {}
            Some((i, delimiter @ (';' | ':'))) => return Ok((delimiter, i)),
            Some((i, c)) => {
                return Err(
                    ParseError::new(ParseErrorKind::InvalidParameter, line_num, i + 1)
                        .with_context(format!("unexpected character '{c}'")),
                );
            }
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::MissingColon,
                    line_num,
                    line.len() + 1,
                ));
            }
        }
    }
}

/// Parses a parameter value (possibly quoted), decoding RFC 6868 carets.
fn parse_param_value(chars: &mut Chars<'_>, line: &str, line_num: usize) -> ParseResult<String> {
    let Some(&(start, first)) = chars.peek() else {
        return Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.len() + 1,
        ));
    };

    if first == '"' {
        chars.next(); // opening quote
        let content_start = start + 1;
        for (i, c) in chars.by_ref() {
            if c == '"' {
                return Ok(decode_caret(&line[content_start..i]));
            }
        }
        Err(ParseError::new(
            ParseErrorKind::UnclosedQuote,
            line_num,
            start + 1,
        ))
    } else {
        // Unquoted value (ends at ',' ';' or ':')
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if c == ',' || c == ';' || c == ':' {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        Ok(decode_caret(&line[start..end]))
    }
}

/// Decodes RFC 6868 caret escapes: `^^` `^n` `^'`.
///
/// Any other caret is kept as-is.
fn decode_caret(raw: &str) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '^' {
            value.push(c);
            continue;
        }
        match chars.peek() {
            Some('^') => {
                value.push('^');
                chars.next();
            }
            Some('n') => {
                value.push('\n');
                chars.next();
            }
            Some('\'') => {
                value.push('"');
                chars.next();
            }
            _ => value.push('^'),
        }
    }

    value
}
