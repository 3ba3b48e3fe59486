use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// Makes a parser optional: success wraps the value in `Some`, failure
/// becomes a success with `None` and the cursor unchanged.
///
/// The underlying error is dropped; callers that need it should not make
/// the parser optional.
pub struct Opt<P> {
    parser: P,
}

impl<P> Opt<P> {
    pub fn new(parser: P) -> Self {
        Opt { parser }
    }
}

impl<'src, P> Parser<'src> for Opt<P>
where
    P: Parser<'src>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, next)) => Ok((Some(value), next)),
            Err(_) => Ok((None, cursor)),
        }
    }

    fn label(&self) -> String {
        format!("opt {}", self.parser.label())
    }
}

/// Extension trait to add .opt() method support for parsers
pub trait OptExt<'src>: Parser<'src> + Sized {
    fn opt(self) -> Opt<Self> {
        Opt::new(self)
    }
}

/// Implement OptExt for all parsers
impl<'src, P> OptExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::is_char;
    use crate::cursor::Source;

    #[test]
    fn test_opt_present() {
        let src = Source::from_string("-5");
        let parser = is_char('-').opt();

        let (value, cursor) = parser.parse(src.cursor()).unwrap();
        assert_eq!(value, Some('-'));
        assert_eq!(cursor.position().column, 1);
    }

    #[test]
    fn test_opt_absent() {
        let src = Source::from_string("5");
        let parser = is_char('-').opt();

        let (value, cursor) = parser.parse(src.cursor()).unwrap();
        assert_eq!(value, None);
        assert_eq!(cursor.position().column, 0);
    }

    #[test]
    fn test_opt_on_empty_input() {
        let src = Source::from_string("");
        let parser = is_char('-').opt();

        let (value, _) = parser.parse(src.cursor()).unwrap();
        assert_eq!(value, None);
    }
}
