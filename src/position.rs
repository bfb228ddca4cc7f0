use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Represents a span in the source text between two cursors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Start position (inclusive)
    pub start: Cursor<'code>,
    /// End position (exclusive)
    pub end: Cursor<'code>,
}

impl<'code> Span<'code> {
    /// Create a new span, ordering the two cursors
    pub fn new(a: Cursor<'code>, b: Cursor<'code>) -> Self {
        if b.offset() < a.offset() {
            Span { start: b, end: a }
        } else {
            Span { start: a, end: b }
        }
    }

    /// Get the length of the span in characters
    pub fn len(&self) -> usize {
        self.end.offset().saturating_sub(self.start.offset())
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the text that this span covers
    pub fn as_str(&self) -> &'code str {
        self.start.slice_to(&self.end)
    }
}

/// A parsed value together with the span it was parsed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positioned<'code, T> {
    pub value: T,
    pub span: Span<'code>,
}

/// A parser combinator that captures the position span of a successful parse
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
{
    type Output = Positioned<'code, P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, end) = self.parser.parse(cursor)?;
        let span = Span::new(cursor, end);
        Ok((Positioned { value, span }, end))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its position span
    fn positioned(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Position combinator
pub fn position<'code, P>(parser: P) -> Position<P>
where
    P: Parser<'code>,
{
    Position::new(parser)
}
