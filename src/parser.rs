use crate::cursor::LineCursor;
use crate::error::ParseError;

/// The outcome of one parse attempt: the produced value paired with the
/// cursor after consumption, or a position-aware error.
pub type ParseResult<'src, T> = Result<(T, LineCursor<'src>), ParseError>;

/// Core parser trait for parser combinators.
///
/// A parser is a pure function from cursor to result. Combinators build new
/// parsers from existing ones without running them; nothing executes until
/// `parse` is called on the top-level parser with an initial cursor.
pub trait Parser<'src> {
    type Output;

    /// Attempt to parse from the given cursor position.
    ///
    /// Returns the parsed value and the advanced cursor on success. On
    /// failure the caller's cursor copy is untouched, so alternatives can
    /// re-run from the same position.
    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output>;

    /// Human-readable name for this parser, used in diagnostics
    fn label(&self) -> String;
}

impl<'src, P> Parser<'src> for &P
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        (**self).parse(cursor)
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

impl<'src, P> Parser<'src> for Box<P>
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        (**self).parse(cursor)
    }

    fn label(&self) -> String {
        (**self).label()
    }
}
