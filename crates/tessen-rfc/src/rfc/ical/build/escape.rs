//! Text and parameter value escaping (RFC 5545 §3.3.11, RFC 6868).

/// Escapes a TEXT value.
///
/// Backslash, semicolon and comma gain a backslash; a line feed becomes
/// the two characters `\n`. Carriage returns are written through unchanged.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    result
}

/// Encodes a list of TEXT items as one raw value: each item escaped,
/// joined with unescaped commas.
#[must_use]
pub fn format_text_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| escape_text(item.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Encodes a parameter value for the wire.
///
/// Applies RFC 6868 caret encoding and wraps the value in double quotes
/// when it contains `,` `;` or `:`.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '^' => encoded.push_str("^^"),
            '\n' => encoded.push_str("^n"),
            '"' => encoded.push_str("^'"),
            _ => encoded.push(c),
        }
    }

    if encoded.contains([',', ';', ':']) {
        format!("\"{encoded}\"")
    } else {
        encoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_text_specials() {
        assert_eq!(escape_text("Hello, World"), "Hello\\, World");
        assert_eq!(escape_text("a;b\\c"), "a\\;b\\\\c");
        assert_eq!(escape_text("Line 1\nLine 2"), "Line 1\\nLine 2");
    }

    #[test]
    fn escape_text_keeps_carriage_return() {
        assert_eq!(escape_text("a\r\nb"), "a\r\\nb");
    }

    #[test]
    fn format_text_list_joins_escaped_items() {
        assert_eq!(format_text_list(&["a,b", "c"]), "a\\,b,c");
        assert_eq!(format_text_list(&[""]), "");
        assert_eq!(format_text_list::<&str>(&[]), "");
    }

    #[test]
    fn escape_param_value_plain() {
        assert_eq!(escape_param_value("America/New_York"), "America/New_York");
        assert_eq!(escape_param_value("DATE"), "DATE");
    }

    #[test]
    fn escape_param_value_quotes_separators() {
        assert_eq!(escape_param_value("Doe, Jane"), "\"Doe, Jane\"");
        assert_eq!(
            escape_param_value("mailto:a@example.com"),
            "\"mailto:a@example.com\""
        );
    }

    #[test]
    fn escape_param_value_caret_encoding() {
        assert_eq!(escape_param_value("Test\nName"), "Test^nName");
        assert_eq!(escape_param_value("say \"hi\" ^"), "say ^'hi^' ^^");
    }
}
