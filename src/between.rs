use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// Parser that matches content wrapped in delimiters: `left`, then the
/// content, then `right`, keeping only the content's value.
pub struct Between<L, P, R> {
    left: L,
    content: P,
    right: R,
}

impl<L, P, R> Between<L, P, R> {
    pub fn new(left: L, content: P, right: R) -> Self {
        Between {
            left,
            content,
            right,
        }
    }
}

impl<'src, L, P, R> Parser<'src> for Between<L, P, R>
where
    L: Parser<'src>,
    P: Parser<'src>,
    R: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let (_, cursor) = self.left.parse(cursor)?;
        let (value, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.right.parse(cursor)?;
        Ok((value, cursor))
    }

    fn label(&self) -> String {
        self.content.label()
    }
}

/// Extension trait to add .between() method support for parsers
pub trait BetweenExt<'src>: Parser<'src> + Sized {
    fn between<L, R>(self, left: L, right: R) -> Between<L, Self, R>
    where
        L: Parser<'src>,
        R: Parser<'src>,
    {
        Between::new(left, self, right)
    }
}

/// Implement BetweenExt for all parsers
impl<'src, P> BetweenExt<'src> for P where P: Parser<'src> {}
