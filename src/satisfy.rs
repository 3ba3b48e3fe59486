use crate::cursor::LineCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// The primitive single-character parser: steps the cursor once and accepts
/// the character if the predicate holds.
///
/// Every character-class parser in the library is a `Satisfy` with a
/// different predicate and label. Failures carry the label and the position
/// the step started from; exhausted input fails with an empty label.
pub struct Satisfy<F> {
    predicate: F,
    label: String,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F, label: impl Into<String>) -> Self {
        Satisfy {
            predicate,
            label: label.into(),
        }
    }
}

impl<'src, F> Parser<'src> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, char> {
        let (next, character) = cursor.next_char();
        match character {
            None => Err(ParseError::end_of_input(&cursor)),
            Some(c) if (self.predicate)(c) => Ok((c, next)),
            Some(c) => Err(ParseError::new(
                self.label.as_str(),
                format!("Unexpected '{c}'"),
                &cursor,
            )),
        }
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F, label: impl Into<String>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, label)
}
