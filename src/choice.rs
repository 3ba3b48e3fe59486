use crate::character::is_char;
use crate::cursor::LineCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::with_label::WithLabelExt;

/// Ordered choice over a sequence of parsers of the same type.
///
/// Alternatives are tried left to right against the same original cursor;
/// the first success wins. When every alternative fails, the last
/// alternative's error is reported, matching a right-leaning `or_else` fold.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'src, P> Parser<'src> for Choice<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        let mut last_error = None;
        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(error) => last_error = Some(error),
            }
        }
        // An empty choice can match nothing; fail rather than panic
        Err(last_error
            .unwrap_or_else(|| ParseError::new(self.label(), "no alternatives", &cursor)))
    }

    fn label(&self) -> String {
        let labels: Vec<String> = self.parsers.iter().map(|p| p.label()).collect();
        format!("choice of {}", labels.join(", "))
    }
}

/// Convenience function to create a Choice parser
pub fn choice<P>(parsers: Vec<P>) -> Choice<P> {
    Choice::new(parsers)
}

/// Parser that matches any one of the given characters
pub fn any_of<'src>(
    chars: impl IntoIterator<Item = char>,
) -> impl Parser<'src, Output = char> {
    let chars: Vec<char> = chars.into_iter().collect();
    let label = format!(
        "any of {}",
        chars
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    choice(chars.into_iter().map(is_char).collect()).with_label(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Source;
    use crate::map::MapExt;

    #[test]
    fn test_choice_first_match_wins() {
        let src = Source::from_string("b");
        let parser = choice(vec![is_char('a'), is_char('b'), is_char('c')]);

        let (c, _) = parser.parse(src.cursor()).unwrap();
        assert_eq!(c, 'b');
    }

    #[test]
    fn test_choice_all_fail() {
        let src = Source::from_string("z");
        let parser = choice(vec![is_char('a'), is_char('b')]);

        let error = parser.parse(src.cursor()).unwrap_err();
        assert_eq!(error.label, "b");
    }

    #[test]
    fn test_choice_backtracks_between_alternatives() {
        let src = Source::from_string("c");
        let parser = choice(vec![is_char('a'), is_char('b'), is_char('c')]);

        let (c, cursor) = parser.parse(src.cursor()).unwrap();
        assert_eq!(c, 'c');
        assert_eq!(cursor.position().column, 1);
    }

    #[test]
    fn test_choice_label() {
        let parser = choice(vec![is_char('a'), is_char('b')]);
        assert_eq!(parser.label(), "choice of a, b");
    }

    #[test]
    fn test_empty_choice_fails_cleanly() {
        let src = Source::from_string("a");
        let parser: Choice<crate::satisfy::Satisfy<fn(char) -> bool>> = choice(vec![]);

        let error = parser.parse(src.cursor()).unwrap_err();
        assert_eq!(error.message, "no alternatives");
    }

    #[test]
    fn test_choice_of_mapped_parsers() {
        // The mapping functions must share one type for the Vec to unify
        let src = Source::from_string("-");
        let parser = choice(vec![
            is_char('+').map((|_| 1) as fn(char) -> i64),
            is_char('-').map((|_| -1) as fn(char) -> i64),
        ]);

        let (sign, _) = parser.parse(src.cursor()).unwrap();
        assert_eq!(sign, -1);
    }

    #[test]
    fn test_any_of() {
        let src = Source::from_string("y");
        let parser = any_of(['x', 'y', 'z']);

        let (c, _) = parser.parse(src.cursor()).unwrap();
        assert_eq!(c, 'y');
    }

    #[test]
    fn test_any_of_label() {
        let parser = any_of(['a', 'b', 'c']);
        assert_eq!(parser.label(), "any of a, b, c");
    }

    #[test]
    fn test_any_of_no_match() {
        let src = Source::from_string("q");
        assert!(any_of(['x', 'y']).parse(src.cursor()).is_err());
    }
}
