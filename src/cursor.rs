use crate::position::Position;

/// Owned, line-split input text.
///
/// The raw text is split on `'\n'` exactly once, up front. Parsing never
/// touches the raw text again; cursors borrow the line table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    lines: Vec<String>,
}

impl Source {
    /// Split raw text into lines. An empty string yields a single empty line.
    pub fn from_string(raw: &str) -> Self {
        Source {
            lines: raw.split('\n').map(str::to_string).collect(),
        }
    }

    /// A cursor at line 0, column 0 of this source
    pub fn cursor(&self) -> LineCursor<'_> {
        LineCursor {
            lines: &self.lines,
            position: Position::initial(),
        }
    }
}

/// An immutable read position within line-split input.
///
/// The cursor is `Copy`: saving one before an attempt and re-using it after a
/// failure is the entire backtracking mechanism. Advancing returns a new
/// cursor and leaves the original untouched.
///
/// `position.line == lines.len()` means the input is exhausted.
#[derive(Debug, Clone, Copy)]
pub struct LineCursor<'src> {
    lines: &'src [String],
    position: Position,
}

impl<'src> LineCursor<'src> {
    pub fn position(&self) -> Position {
        self.position
    }

    /// The line under the cursor, or `None` once the input is exhausted
    pub fn current_line(&self) -> Option<&'src str> {
        self.lines.get(self.position.line).map(String::as_str)
    }

    pub fn is_exhausted(&self) -> bool {
        self.position.line >= self.lines.len()
    }

    /// Step the cursor one character forward.
    ///
    /// Yields `(advanced cursor, Some(char))` while characters remain on the
    /// current line. At the end of a line the step crosses the boundary
    /// instead: it yields `(next line, column 0, None)` without producing the
    /// newline or the next line's first character. Callers that treat `None`
    /// as failure therefore stop at every line boundary unless they retry.
    /// An exhausted cursor is returned unchanged with `None`.
    pub fn next_char(self) -> (Self, Option<char>) {
        let Some(line) = self.current_line() else {
            return (self, None);
        };

        match line.chars().nth(self.position.column) {
            Some(c) => (
                LineCursor {
                    position: self.position.increment_column(),
                    ..self
                },
                Some(c),
            ),
            None => (
                LineCursor {
                    position: self.position.increment_line(),
                    ..self
                },
                None,
            ),
        }
    }

    /// Move `count` columns forward on the current line without inspecting
    /// characters. Used by parsers that match against the line remainder
    /// directly, such as `literal`.
    pub fn advance_columns(self, count: usize) -> Self {
        let mut position = self.position;
        for _ in 0..count {
            position = position.increment_column();
        }
        LineCursor { position, ..self }
    }
}
