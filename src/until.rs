use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// Accumulates values of a parser until a stop parser succeeds.
///
/// Each round first tries `stop` — when it matches, its consumption is kept
/// and accumulation ends. Otherwise one element is parsed. If the element
/// parser fails before `stop` ever matches, accumulation stops early and the
/// values gathered so far are still a success. This combinator never fails.
pub struct Until<P, S> {
    parser: P,
    stop: S,
}

impl<P, S> Until<P, S> {
    pub fn new(parser: P, stop: S) -> Self {
        Until { parser, stop }
    }
}

impl<'src, P, S> Parser<'src> for Until<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let mut values = Vec::new();
        let mut cursor = cursor;

        loop {
            if let Ok((_, next)) = self.stop.parse(cursor) {
                cursor = next;
                break;
            }
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
        format!("until {}", self.stop.label())
    }
}

/// One-or-more variant of `Until`: fails if the first element fails
pub struct Until1<P, S> {
    parser: P,
    stop: S,
}

impl<P, S> Until1<P, S> {
    pub fn new(parser: P, stop: S) -> Self {
        Until1 { parser, stop }
    }
}

impl<'src, P, S> Parser<'src> for Until1<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let (first, cursor) = self.parser.parse(cursor)?;
        let (mut rest, cursor) = Until::new(&self.parser, &self.stop).parse(cursor)?;
        rest.insert(0, first);
        Ok((rest, cursor))
    }

    fn label(&self) -> String {
        format!("until1 {}", self.stop.label())
    }
}

/// Extension trait to add .until() and .until1() method support to parsers
pub trait UntilExt<'src>: Parser<'src> + Sized {
    /// Accumulate until `stop` matches (consuming it); never fails
    fn until<S>(self, stop: S) -> Until<Self, S>
    where
        S: Parser<'src>,
    {
        Until::new(self, stop)
    }

    /// Like `until`, but requires at least one leading element
    fn until1<S>(self, stop: S) -> Until1<Self, S>
    where
        S: Parser<'src>,
    {
        Until1::new(self, stop)
    }
}

/// Implement UntilExt for all parsers
impl<'src, P> UntilExt<'src> for P where P: Parser<'src> {}
