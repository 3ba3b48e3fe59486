use crate::cursor::LineCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches a literal string against the remainder of the
/// current line.
///
/// The whole literal is checked in one step against the line under the
/// cursor, so a literal can never match across a line boundary. On success
/// the column advances by the literal's length in characters.
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Literal { text: text.into() }
    }

    fn matches_at(&self, cursor: &LineCursor<'_>) -> bool {
        let Some(line) = cursor.current_line() else {
            return false;
        };
        let mut remainder = line.chars().skip(cursor.position().column);
        self.text.chars().all(|expected| remainder.next() == Some(expected))
    }
}

impl<'src> Parser<'src> for Literal {
    type Output = String;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, String> {
        if self.matches_at(&cursor) {
            let advanced = cursor.advance_columns(self.text.chars().count());
            Ok((self.text.clone(), advanced))
        } else {
            Err(ParseError::new(self.label(), "", &cursor))
        }
    }

    fn label(&self) -> String {
        format!("string {}", self.text)
    }
}

/// Convenience function to create a Literal parser
pub fn literal(text: impl Into<String>) -> Literal {
    Literal::new(text)
}
