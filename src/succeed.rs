use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// Parser that always succeeds with a fixed value and consumes nothing.
///
/// The monadic unit: `bind` chains end in one of these, and repetition
/// combinators use it as their empty base case.
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'src, T> Parser<'src> for Succeed<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, T> {
        Ok((self.value.clone(), cursor))
    }

    fn label(&self) -> String {
        "succeed".to_string()
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}
