//! iCalendar line folding (RFC 5545 §3.1).

use tessen_core::config::MIN_FOLD_WIDTH;

/// Folds a content line so that no physical line exceeds `width` octets.
///
/// Folding inserts CRLF + space; the leading space counts toward the width
/// of continuation lines. Folds land on UTF-8 character boundaries, and
/// every physical line carries at least one character, so a character wider
/// than the room left after the space overruns its line. Widths below
/// [`MIN_FOLD_WIDTH`] are raised to it.
#[must_use]
pub fn fold_line(line: &str, width: usize) -> String {
    let width = width.max(MIN_FOLD_WIDTH);
    if line.len() <= width {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / width * 3);
    // Octets of the current physical line that precede its content.
    let mut indent = 0;
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len > indent && current_len + char_len > width {
            result.push_str("\r\n ");
            indent = 1;
            current_len = indent;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}
