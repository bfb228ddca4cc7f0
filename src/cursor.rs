use std::fmt;
use thiserror::Error;

/// Errors raised by direct cursor manipulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cannot advance {requested} characters, only {available} remain")]
    PastEnd { requested: usize, available: usize },
}

/// Immutable position within a source text
///
/// A cursor tracks the character offset into the source together with the
/// 1-based line and column of that offset. Cursors are `Copy` and are never
/// mutated: every advance produces a new cursor, so backtracking is simply
/// reusing an older value.
///
/// Two cursors are equal when they point into the same source text at the
/// same offset.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'code> {
    source: &'code str,
    /// Byte index of `offset` in `source`
    byte: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor positioned at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            byte: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The complete source text this cursor points into
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Number of characters consumed so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line number
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column number, counted in characters
    pub fn column(&self) -> usize {
        self.column
    }

    /// The unconsumed remainder of the source
    pub fn rest(&self) -> &'code str {
        &self.source[self.byte..]
    }

    /// Whether every character of the source has been consumed
    pub fn at_end(&self) -> bool {
        self.byte == self.source.len()
    }

    /// Peek the character `i` positions ahead without advancing
    pub fn at(&self, i: usize) -> Option<char> {
        self.rest().chars().nth(i)
    }

    /// Peek the character under the cursor
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Step over a single character, returning it with the advanced cursor
    ///
    /// Returns `None` at the end of the source.
    pub fn next_char(self) -> Option<(char, Self)> {
        let ch = self.current()?;
        Some((ch, self.step(ch)))
    }

    /// Advance `n` characters
    ///
    /// Line and column are recomputed from the consumed characters. Asking
    /// for more characters than remain is an error; the cursor is never
    /// silently clamped to the end.
    pub fn advance(self, n: usize) -> Result<Self, CursorError> {
        let mut cursor = self;
        for consumed in 0..n {
            match cursor.current() {
                Some(ch) => cursor = cursor.step(ch),
                None => {
                    return Err(CursorError::PastEnd {
                        requested: n,
                        available: consumed,
                    });
                }
            }
        }
        Ok(cursor)
    }

    /// Advance over `prefix`, which must be a prefix of `rest()`
    pub(crate) fn advance_over(self, prefix: &str) -> Self {
        debug_assert!(self.rest().starts_with(prefix));
        prefix.chars().fold(self, Cursor::step)
    }

    /// The source text between this cursor and `end`
    ///
    /// Returns an empty string if `end` lies before this cursor.
    pub fn slice_to(&self, end: &Cursor<'code>) -> &'code str {
        if end.byte < self.byte {
            return "";
        }
        &self.source[self.byte..end.byte]
    }

    fn step(self, ch: char) -> Self {
        let (line, column) = if ch == '\n' {
            (self.line + 1, 1)
        } else {
            (self.line, self.column + 1)
        };
        Cursor {
            source: self.source,
            byte: self.byte + ch.len_utf8(),
            offset: self.offset + 1,
            line,
            column,
        }
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source, other.source) && self.offset == other.offset
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}, Column {}", self.line, self.column)
    }
}
