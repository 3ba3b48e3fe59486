use crate::character::{digit, is_char};
use crate::cursor::LineCursor;
use crate::error::ParseError;
use crate::many::ManyExt;
use crate::option::OptionExt;
use crate::opt::OptExt;
use crate::parser::{ParseResult, Parser};

/// Parser that matches a signed integer: an optional `-` followed by one or
/// more digits, parsed with the standard library's integer parse.
///
/// A digit run too large for `i64` fails as an ordinary parse error at the
/// position where the number began.
pub struct Integer;

impl<'src> Parser<'src> for Integer {
    type Output = i64;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, i64> {
        let start = cursor;
        let (sign, cursor) = is_char('-').opt().parse(cursor)?;
        let (digits, cursor) = digit().many1().parse(cursor)?;

        let text: String = digits.into_iter().collect();
        let magnitude: i64 = text
            .parse()
            .map_err(|e: std::num::ParseIntError| ParseError::new("int", e.to_string(), &start))?;

        let multiplier = sign.fold(1, |_, _| -1);
        Ok((multiplier * magnitude, cursor))
    }

    fn label(&self) -> String {
        "int".to_string()
    }
}

/// Convenience function to create an Integer parser
pub fn integer() -> Integer {
    Integer
}

/// An `Integer` constrained to an inclusive range.
///
/// Out-of-range values fail with an error naming the range and the value,
/// positioned where the integer began.
pub struct IntegerInRange {
    lower: i64,
    upper: i64,
}

impl IntegerInRange {
    pub fn new(lower: i64, upper: i64) -> Self {
        IntegerInRange { lower, upper }
    }
}

impl<'src> Parser<'src> for IntegerInRange {
    type Output = i64;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, i64> {
        let (value, next) = integer().parse(cursor)?;
        if value < self.lower || value > self.upper {
            Err(ParseError::new(
                self.label(),
                format!("{value} is outside range"),
                &cursor,
            ))
        } else {
            Ok((value, next))
        }
    }

    fn label(&self) -> String {
        format!("integer range {}-{}", self.lower, self.upper)
    }
}

/// Convenience function to create an IntegerInRange parser
pub fn integer_in_range(lower: i64, upper: i64) -> IntegerInRange {
    IntegerInRange::new(lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Source;

    #[test]
    fn test_positive_integer() {
        let src = Source::from_string("123abc");
        let (value, cursor) = integer().parse(src.cursor()).unwrap();
        assert_eq!(value, 123);
        assert_eq!(cursor.position().column, 3);
    }

    #[test]
    fn test_negative_integer() {
        let src = Source::from_string("-456");
        let (value, cursor) = integer().parse(src.cursor()).unwrap();
        assert_eq!(value, -456);
        assert_eq!(cursor.position().column, 4);
    }

    #[test]
    fn test_zero() {
        let src = Source::from_string("0");
        let (value, _) = integer().parse(src.cursor()).unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn test_no_digits_fails() {
        let src = Source::from_string("abc");
        let error = integer().parse(src.cursor()).unwrap_err();
        assert_eq!(error.label, "digit");
    }

    #[test]
    fn test_minus_without_digits_fails() {
        let src = Source::from_string("-abc");
        let error = integer().parse(src.cursor()).unwrap_err();
        assert_eq!(error.label, "digit");
        assert_eq!(error.position.column(), 1);
    }

    #[test]
    fn test_integer_stops_at_non_digit() {
        let src = Source::from_string("42,");
        let (value, cursor) = integer().parse(src.cursor()).unwrap();
        assert_eq!(value, 42);
        assert_eq!(cursor.position().column, 2);
    }

    #[test]
    fn test_overflow_is_an_ordinary_error() {
        let src = Source::from_string("99999999999999999999999999");
        let error = integer().parse(src.cursor()).unwrap_err();
        assert_eq!(error.label, "int");
        assert_eq!(error.position.column(), 0);
    }

    #[test]
    fn test_in_range_accepts() {
        let src = Source::from_string("42");
        let (value, _) = integer_in_range(0, 99).parse(src.cursor()).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_in_range_accepts_bounds() {
        let src = Source::from_string("99");
        let (value, _) = integer_in_range(0, 99).parse(src.cursor()).unwrap();
        assert_eq!(value, 99);

        let src = Source::from_string("0");
        let (value, _) = integer_in_range(0, 99).parse(src.cursor()).unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn test_out_of_range_fails_at_start() {
        let src = Source::from_string("150");
        let error = integer_in_range(0, 99).parse(src.cursor()).unwrap_err();

        assert_eq!(error.label, "integer range 0-99");
        assert_eq!(error.message, "150 is outside range");
        assert_eq!(error.position.column(), 0);
    }

    #[test]
    fn test_negative_in_range() {
        let src = Source::from_string("-5");
        let (value, _) = integer_in_range(-10, 10).parse(src.cursor()).unwrap();
        assert_eq!(value, -5);
    }
}
