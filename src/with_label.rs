use crate::cursor::LineCursor;
use crate::parser::{ParseResult, Parser};

/// Overrides the label a parser reports, leaving its behavior untouched.
///
/// Errors produced by the wrapped parser keep the labels they were created
/// with; only `label()` changes.
pub struct WithLabel<P> {
    parser: P,
    label: String,
}

impl<P> WithLabel<P> {
    pub fn new(parser: P, label: impl Into<String>) -> Self {
        WithLabel {
            parser,
            label: label.into(),
        }
    }
}

impl<'src, P> Parser<'src> for WithLabel<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, cursor: LineCursor<'src>) -> ParseResult<'src, Self::Output> {
        self.parser.parse(cursor)
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Extension trait to add .with_label() method support for parsers
pub trait WithLabelExt<'src>: Parser<'src> + Sized {
    fn with_label(self, label: impl Into<String>) -> WithLabel<Self> {
        WithLabel::new(self, label)
    }
}

/// Implement WithLabelExt for all parsers
impl<'src, P> WithLabelExt<'src> for P where P: Parser<'src> {}
