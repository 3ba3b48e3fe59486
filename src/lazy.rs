use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// A lazy parser that defers construction of the actual parser until parse
/// time. This breaks the cycle when a grammar refers to itself.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    pub fn new(factory: F) -> Self {
        Lazy { factory }
    }
}

impl<'src, F, P> Parser<'src> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        (self.factory)().parse(cursor)
    }

    fn label(&self) -> String {
        (self.factory)().label()
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
{
    Lazy::new(factory)
}
