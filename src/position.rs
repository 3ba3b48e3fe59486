/// A zero-based line/column position within line-split input.
///
/// Positions are plain values; advancing produces a new `Position` and never
/// mutates the original. Columns count `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The starting position: line 0, column 0
    pub fn initial() -> Self {
        Position { line: 0, column: 0 }
    }

    /// Advance one column on the same line
    pub fn increment_column(self) -> Self {
        Position {
            line: self.line,
            column: self.column + 1,
        }
    }

    /// Advance to the start of the next line
    pub fn increment_line(self) -> Self {
        Position {
            line: self.line + 1,
            column: 0,
        }
    }
}
