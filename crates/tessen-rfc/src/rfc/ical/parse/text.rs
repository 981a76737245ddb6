//! TEXT value tokenizer (RFC 5545 §3.3.11).

use crate::rfc::ical::core::{Malformed, MalformedKind};

/// Splits a raw TEXT value on unescaped commas and unescapes each item.
///
/// Escape sequences: `\\` `\;` `\,` `\n` `\N`. The result always holds at
/// least one item, which may be empty.
///
/// ## Errors
/// Returns [`MalformedKind::InvalidEscape`] for any other escaped character
/// and [`MalformedKind::EscapeAtEnd`] for a trailing backslash, both
/// positioned at the backslash.
pub fn parse_text_list(s: &str) -> Result<Vec<String>, Malformed> {
    let mut items = Vec::new();
    let mut current = String::with_capacity(s.len());
    let mut chars = s.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, escaped @ ('\\' | ';' | ','))) => current.push(escaped),
                Some((_, 'n' | 'N')) => current.push('\n'),
                Some((_, other)) => {
                    return Err(
                        Malformed::new(MalformedKind::InvalidEscape, format!("\\{other}")).at(i),
                    );
                }
                None => return Err(Malformed::new(MalformedKind::EscapeAtEnd, "\\").at(i)),
            },
            ',' => items.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    items.push(current);

    Ok(items)
}
