use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of a parser.
///
/// Never fails: zero matches is success with an empty vector and the
/// original cursor. Matching is a loop, not recursion, so long runs of
/// input cost no stack.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let mut values = Vec::new();
        let mut cursor = cursor;

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    values.push(value);
                    cursor = next;
                }
                Err(_) => break,
            }
        }

        Ok((values, cursor))
    }

    fn label(&self) -> String {
        format!("many {}", self.parser.label())
    }
}

/// One-or-more variant of `Many`: fails if the first application fails
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'src, P> Parser<'src> for Many1<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let (first, cursor) = self.parser.parse(cursor)?;
        let (mut rest, cursor) = Many::new(&self.parser).parse(cursor)?;
        rest.insert(0, first);
        Ok((rest, cursor))
    }

    fn label(&self) -> String {
        format!("many1 {}", self.parser.label())
    }
}

/// Extension trait to add repetition methods to all parsers
pub trait ManyExt<'src>: Parser<'src> + Sized {
    /// Zero or more occurrences; never fails
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    /// One or more occurrences; fails if the first is missing
    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'src, P> ManyExt<'src> for P where P: Parser<'src> {}
