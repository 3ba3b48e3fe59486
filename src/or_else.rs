use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// Ordered alternative with full backtracking.
///
/// Runs the first parser; on failure, runs the second against the same
/// original cursor. Cursors are `Copy`, so whatever the first parser
/// consumed before failing is simply never observed. The first branch's
/// error is discarded when the second branch is attempted.
pub struct OrElse<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> OrElse<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        OrElse { first, second }
    }
}

impl<'src, P1, P2, O> Parser<'src> for OrElse<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, O> {
        match self.first.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.second.parse(cursor),
        }
    }

    fn label(&self) -> String {
        format!("{} or else {}", self.first.label(), self.second.label())
    }
}

/// Extension trait to add .or_else() method support for parsers
pub trait OrElseExt<'src>: Parser<'src> + Sized {
    fn or_else<P>(self, other: P) -> OrElse<Self, P>
    where
        P: Parser<'src, Output = Self::Output>,
    {
        OrElse::new(self, other)
    }
}

/// Implement OrElseExt for all parsers
impl<'src, P> OrElseExt<'src> for P where P: Parser<'src> {}
