use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// Runs a sequence of parsers in order, collecting every value.
///
/// All-or-nothing: the first failure aborts the whole sequence with that
/// parser's error. The loop is iterative, so long sequences cost no stack.
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<'src, P> Parser<'src> for Sequence<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let mut values = Vec::with_capacity(self.parsers.len());
        let mut cursor = cursor;

        for parser in &self.parsers {
            let (value, next) = parser.parse(cursor)?;
            values.push(value);
            cursor = next;
        }

        Ok((values, cursor))
    }

    fn label(&self) -> String {
        let labels: Vec<String> = self.parsers.iter().map(|p| p.label()).collect();
        format!("sequence of {}", labels.join(", "))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<P>(parsers: Vec<P>) -> Sequence<P> {
    Sequence::new(parsers)
}

/// Runs one parser exactly `n` times, collecting the values
pub struct NTimes<P> {
    parser: P,
    count: usize,
}

impl<P> NTimes<P> {
    pub fn new(parser: P, count: usize) -> Self {
        NTimes { parser, count }
    }
}

impl<'src, P> Parser<'src> for NTimes<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let mut values = Vec::with_capacity(self.count);
        let mut cursor = cursor;

        for _ in 0..self.count {
            let (value, next) = self.parser.parse(cursor)?;
            values.push(value);
            cursor = next;
        }

        Ok((values, cursor))
    }

    fn label(&self) -> String {
        format!("{} times {}", self.count, self.parser.label())
    }
}

/// Extension trait to add .n_times() method support for parsers
pub trait NTimesExt<'src>: Parser<'src> + Sized {
    fn n_times(self, count: usize) -> NTimes<Self> {
        NTimes::new(self, count)
    }
}

/// Implement NTimesExt for all parsers
impl<'src, P> NTimesExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{digit, is_char};
    use crate::cursor::Source;

    #[test]
    fn test_sequence_collects_in_order() {
        let src = Source::from_string("abc");
        let parser = sequence(vec![is_char('a'), is_char('b'), is_char('c')]);

        let (values, cursor) = parser.parse(src.cursor()).unwrap();
        assert_eq!(values, vec!['a', 'b', 'c']);
        assert_eq!(cursor.position().column, 3);
    }

    #[test]
    fn test_sequence_fails_on_first_mismatch() {
        let src = Source::from_string("axc");
        let parser = sequence(vec![is_char('a'), is_char('b'), is_char('c')]);

        let error = parser.parse(src.cursor()).unwrap_err();
        assert_eq!(error.label, "b");
        assert_eq!(error.position.column(), 1);
    }

    #[test]
    fn test_empty_sequence_succeeds() {
        let src = Source::from_string("abc");
        let parser: Sequence<crate::satisfy::Satisfy<fn(char) -> bool>> = sequence(vec![]);

        let (values, cursor) = parser.parse(src.cursor()).unwrap();
        assert!(values.is_empty());
        assert_eq!(cursor.position().column, 0);
    }

    #[test]
    fn test_n_times_exact() {
        let src = Source::from_string("1234rest");
        let parser = digit().n_times(4);

        let (values, cursor) = parser.parse(src.cursor()).unwrap();
        assert_eq!(values, vec!['1', '2', '3', '4']);
        assert_eq!(cursor.position().column, 4);
    }

    #[test]
    fn test_n_times_too_few() {
        let src = Source::from_string("12x4");
        let parser = digit().n_times(4);

        let error = parser.parse(src.cursor()).unwrap_err();
        assert_eq!(error.label, "digit");
        assert_eq!(error.position.column(), 2);
    }

    #[test]
    fn test_n_times_zero() {
        let src = Source::from_string("abc");
        let parser = digit().n_times(0);

        let (values, cursor) = parser.parse(src.cursor()).unwrap();
        assert!(values.is_empty());
        assert_eq!(cursor.position().column, 0);
    }
}
