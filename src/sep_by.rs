use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// One-or-more occurrences of a parser separated by a separator parser.
///
/// After the first element, each round tries separator-then-element as a
/// unit: if the element fails after a separator matched, the round is
/// abandoned and the cursor stays before the separator.
pub struct SepBy1<P, S> {
    parser: P,
    separator: S,
}

impl<P, S> SepBy1<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        SepBy1 { parser, separator }
    }
}

impl<'src, P, S> Parser<'src> for SepBy1<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let (first, mut cursor) = self.parser.parse(cursor)?;
        let mut values = vec![first];

        loop {
            let Ok((_, after_separator)) = self.separator.parse(cursor) else {
                break;
            };
            match self.parser.parse(after_separator) {
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
        format!(
            "{} separated by {}",
            self.parser.label(),
            self.separator.label()
        )
    }
}

/// Zero-or-more variant of `SepBy1`: never fails, an absent first element
/// yields an empty vector with the cursor unchanged
pub struct SepBy<P, S> {
    inner: SepBy1<P, S>,
}

impl<P, S> SepBy<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        SepBy {
            inner: SepBy1::new(parser, separator),
        }
    }
}

impl<'src, P, S> Parser<'src> for SepBy<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        match self.inner.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((Vec::new(), cursor)),
        }
    }

    fn label(&self) -> String {
        self.inner.label()
    }
}

/// Extension trait to add separated-list methods to all parsers
pub trait SepByExt<'src>: Parser<'src> + Sized {
    /// At least one element, separated by `separator`
    fn sep_by1<S>(self, separator: S) -> SepBy1<Self, S>
    where
        S: Parser<'src>,
    {
        SepBy1::new(self, separator)
    }

    /// Zero or more elements, separated by `separator`; never fails
    fn sep_by<S>(self, separator: S) -> SepBy<Self, S>
    where
        S: Parser<'src>,
    {
        SepBy::new(self, separator)
    }
}

/// Implement SepByExt for all parsers
impl<'src, P> SepByExt<'src> for P where P: Parser<'src> {}
