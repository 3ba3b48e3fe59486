//! # Linecomb - Line-Oriented Parser Combinators
//!
//! A character-level parser combinator library over line-split input.
//! Small parsers combine into larger ones, and every failure carries a
//! line/column diagnostic with the offending line and a caret. The library
//! emphasizes:
//!
//! - **Zero panics**: ordinary parse failure is an `Err` value; nothing in
//!   the library unwinds
//! - **Cheap backtracking**: cursors are `Copy`, so an alternative re-runs
//!   from the original position by reusing the old cursor value
//! - **Composability**: combinators build new parsers from existing ones
//!   without running them
//! - **Readable diagnostics**: every parser carries a label, and errors
//!   render as a position, the source line, and a caret
//!
//! ```
//! use linecomb::{Parser, SepByExt, Source, integer, is_char};
//!
//! let src = Source::from_string("1,2,3");
//! let parser = integer().sep_by1(is_char(','));
//!
//! let (values, _) = parser.parse(src.cursor()).unwrap();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

pub mod and_then;
pub mod between;
pub mod bind;
pub mod character;
pub mod choice;
pub mod cursor;
pub mod error;
pub mod lazy;
pub mod many;
pub mod map;
pub mod number;
pub mod opt;
pub mod option;
pub mod or_else;
pub mod parser;
pub mod position;
pub mod satisfy;
pub mod sep_by;
pub mod sequence;
pub mod string;
pub mod succeed;
pub mod until;
pub mod with_label;

pub use and_then::{AndThen, AndThenExt, AndThenLeft, AndThenRight};
pub use between::{Between, BetweenExt};
pub use bind::{Bind, BindExt};
pub use character::{any_char, digit, is_char, non_whitespace, whitespace};
pub use choice::{Choice, any_of, choice};
pub use cursor::{LineCursor, Source};
pub use error::{ErrorPosition, ParseError};
pub use lazy::{Lazy, lazy};
pub use many::{Many, Many1, ManyExt};
pub use map::{Map, MapExt};
pub use number::{Integer, IntegerInRange, integer, integer_in_range};
pub use opt::{Opt, OptExt};
pub use option::OptionExt;
pub use or_else::{OrElse, OrElseExt};
pub use parser::{ParseResult, Parser};
pub use position::Position;
pub use satisfy::{Satisfy, satisfy};
pub use sep_by::{SepBy, SepBy1, SepByExt};
pub use sequence::{NTimes, NTimesExt, Sequence, sequence};
pub use string::{Literal, literal};
pub use succeed::{Succeed, succeed};
pub use until::{Until, Until1, UntilExt};
pub use with_label::{WithLabel, WithLabelExt};
