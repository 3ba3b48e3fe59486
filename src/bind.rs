use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// Monadic sequencing: runs the first parser, then feeds its value to a
/// function that decides the next parser.
///
/// The continuation runs against the cursor after the first parser's
/// consumption. A failure anywhere short-circuits with the error untouched.
/// The label is inherited from the first parser.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'src, P, F, Q> Parser<'src> for Bind<P, F>
where
    P: Parser<'src>,
    Q: Parser<'src>,
    F: Fn(P::Output) -> Q,
{
    type Output = Q::Output;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }

    fn label(&self) -> String {
        self.parser.label()
    }
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'src>: Parser<'src> + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        Q: Parser<'src>,
        F: Fn(Self::Output) -> Q,
    {
        Bind::new(self, binder)
    }
}

/// Implement BindExt for all parsers
impl<'src, P> BindExt<'src> for P where P: Parser<'src> {}
