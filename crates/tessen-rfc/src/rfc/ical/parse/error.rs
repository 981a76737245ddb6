//! iCalendar document parse error types.

use std::fmt;

/// Result type for iCalendar document parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while reading an iCalendar document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based, after unfolding).
    pub line: usize,
    /// Column where the error occurred (1-based, in bytes).
    pub column: usize,
    /// Additional context, if any.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error without context.
    #[must_use]
    pub const fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    /// Attaches a human-readable context message.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}: {}", self.line, self.column, self.kind)?;
        if let Some(context) = &self.context {
            write!(f, " ({context})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No `BEGIN` line where a component must start.
    MissingBegin,
    /// Input ended before the matching `END` line.
    MissingEnd,
    /// `END` names a different component than the open one.
    MismatchedComponent,
    /// Content line starts with `;` or `:`.
    MissingPropertyName,
    /// Property name contains characters other than letters, digits and `-`.
    InvalidPropertyName,
    /// Malformed parameter name or value.
    InvalidParameter,
    /// Content line has no `:` separating the value.
    MissingColon,
    /// Quoted parameter value without a closing quote.
    UnclosedQuote,
    /// Content after the root component's `END` line.
    UnexpectedContent,
    /// Components nest deeper than the reader accepts.
    NestingTooDeep,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBegin => write!(f, "missing BEGIN"),
            Self::MissingEnd => write!(f, "missing END"),
            Self::MismatchedComponent => write!(f, "mismatched component"),
            Self::MissingPropertyName => write!(f, "missing property name"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
            Self::InvalidParameter => write!(f, "invalid parameter"),
            Self::MissingColon => write!(f, "missing ':' before value"),
            Self::UnclosedQuote => write!(f, "unclosed quoted parameter value"),
            Self::UnexpectedContent => write!(f, "unexpected content after END"),
            Self::NestingTooDeep => write!(f, "components nested too deeply"),
        }
    }
}
