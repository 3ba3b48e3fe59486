use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both values as a
/// tuple. Fails if either side fails, at that side's position.
pub struct AndThen<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> AndThen<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        AndThen { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for AndThen<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let (left, cursor) = self.first.parse(cursor)?;
        let (right, cursor) = self.second.parse(cursor)?;
        Ok(((left, right), cursor))
    }

    fn label(&self) -> String {
        format!("{} and then {}", self.first.label(), self.second.label())
    }
}

/// Sequences two parsers and keeps only the left value
pub struct AndThenLeft<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> AndThenLeft<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        AndThenLeft { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for AndThenLeft<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let (left, cursor) = self.first.parse(cursor)?;
        let (_, cursor) = self.second.parse(cursor)?;
        Ok((left, cursor))
    }

    fn label(&self) -> String {
        self.first.label()
    }
}

/// Sequences two parsers and keeps only the right value
pub struct AndThenRight<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> AndThenRight<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        AndThenRight { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for AndThenRight<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let (_, cursor) = self.first.parse(cursor)?;
        let (right, cursor) = self.second.parse(cursor)?;
        Ok((right, cursor))
    }

    fn label(&self) -> String {
        self.first.label()
    }
}

/// Extension trait to add sequencing methods to all parsers
pub trait AndThenExt<'src>: Parser<'src> + Sized {
    /// Run `self` then `other`, pairing their values
    fn and_then<P>(self, other: P) -> AndThen<Self, P>
    where
        P: Parser<'src>,
    {
        AndThen::new(self, other)
    }

    /// Run `self` then `other`, keeping only `self`'s value
    fn and_then_left<P>(self, other: P) -> AndThenLeft<Self, P>
    where
        P: Parser<'src>,
    {
        AndThenLeft::new(self, other)
    }

    /// Run `self` then `other`, keeping only `other`'s value
    fn and_then_right<P>(self, other: P) -> AndThenRight<Self, P>
    where
        P: Parser<'src>,
    {
        AndThenRight::new(self, other)
    }
}

/// Implement AndThenExt for all parsers
impl<'src, P> AndThenExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{digit, is_char};
    use crate::cursor::Source;

    #[test]
    fn test_and_then_pairs_values() {
        let src = Source::from_string("a5x");
        let parser = is_char('a').and_then(digit());

        let ((a, d), cursor) = parser.parse(src.cursor()).unwrap();
        assert_eq!(a, 'a');
        assert_eq!(d, '5');
        assert_eq!(cursor.position().column, 2);
    }

    #[test]
    fn test_and_then_first_fails() {
        let src = Source::from_string("5a");
        let parser = is_char('a').and_then(digit());

        let error = parser.parse(src.cursor()).unwrap_err();
        assert_eq!(error.label, "a");
        assert_eq!(error.position.column(), 0);
    }

    #[test]
    fn test_and_then_second_fails() {
        let src = Source::from_string("ab");
        let parser = is_char('a').and_then(digit());

        let error = parser.parse(src.cursor()).unwrap_err();
        assert_eq!(error.label, "digit");
        assert_eq!(error.position.column(), 1);
    }

    #[test]
    fn test_and_then_label() {
        let parser = is_char('a').and_then(digit());
        assert_eq!(parser.label(), "a and then digit");
    }

    #[test]
    fn test_and_then_left() {
        let src = Source::from_string("a;rest");
        let parser = is_char('a').and_then_left(is_char(';'));

        let (value, cursor) = parser.parse(src.cursor()).unwrap();
        assert_eq!(value, 'a');
        assert_eq!(cursor.position().column, 2);
    }

    #[test]
    fn test_and_then_right() {
        let src = Source::from_string(";a");
        let parser = is_char(';').and_then_right(is_char('a'));

        let (value, cursor) = parser.parse(src.cursor()).unwrap();
        assert_eq!(value, 'a');
        assert_eq!(cursor.position().column, 2);
    }

    #[test]
    fn test_and_then_chain_nests_tuples() {
        let src = Source::from_string("abc");
        let parser = is_char('a').and_then(is_char('b')).and_then(is_char('c'));

        let (((a, b), c), _) = parser.parse(src.cursor()).unwrap();
        assert_eq!((a, b, c), ('a', 'b', 'c'));
    }
}
