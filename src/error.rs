use crate::cursor::LineCursor;
use crate::position::Position;
use thiserror::Error;

/// Diagnostic snapshot taken from a cursor at the moment a parse step fails.
///
/// The offending line is cloned so the error can outlive the source text.
/// `current_line` is `None` when the failure happened past the end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPosition {
    pub current_line: Option<String>,
    pub position: Position,
}

impl ErrorPosition {
    pub fn from_cursor(cursor: &LineCursor<'_>) -> Self {
        ErrorPosition {
            current_line: cursor.current_line().map(str::to_string),
            position: cursor.position(),
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// The text of the offending line, or the empty string when the failure
    /// happened past the end of input
    pub fn line_text(&self) -> &str {
        self.current_line.as_deref().unwrap_or("")
    }

    /// A `^` marker padded out to the failing column
    pub fn caret(&self) -> String {
        format!("{:>width$}", "^", width = self.position.column + 1)
    }
}

/// An ordinary parse failure: which named parser failed, why, and where.
///
/// This is the engine's expected, recoverable error. It flows back through
/// `Result` chains and is discarded freely by alternation; nothing in the
/// library panics on it.
///
/// The rendered form is consumed by external tooling and is fixed:
///
/// ```text
/// Line {line} column {column}: error parsing {label}
/// {offending line}
/// {caret}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Line {} column {}: error parsing {}\n{}\n{}\n",
    .position.line(),
    .position.column(),
    .label,
    .position.line_text(),
    .position.caret()
)]
pub struct ParseError {
    pub label: String,
    pub message: String,
    pub position: ErrorPosition,
}

impl ParseError {
    pub fn new(
        label: impl Into<String>,
        message: impl Into<String>,
        cursor: &LineCursor<'_>,
    ) -> Self {
        ParseError {
            label: label.into(),
            message: message.into(),
            position: ErrorPosition::from_cursor(cursor),
        }
    }

    /// The error produced when a parser needed a character and none remained
    pub fn end_of_input(cursor: &LineCursor<'_>) -> Self {
        ParseError::new("", "", cursor)
    }
}
