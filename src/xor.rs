use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Committed alternation
///
/// Like [`Or`](crate::or::Or), except that once the first parser has consumed
/// input before failing, the second parser is not attempted and the first
/// failure is returned as-is. This keeps diagnostics pointing inside a
/// construct that was recognised but malformed.
pub struct XOr<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> XOr<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        XOr { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for XOr<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let first = match self.parser1.parse(cursor) {
            Ok(result) => return Ok(result),
            Err(failure) if !failure.recoverable_at(&cursor) => return Err(failure),
            Err(failure) => failure,
        };

        self.parser2
            .parse(cursor)
            .map_err(|second| first.merge(second))
    }
}

/// Extension trait to add .xor() method support for parsers
pub trait XOrExt<'code>: Parser<'code> + Sized {
    fn xor<P>(self, other: P) -> XOr<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        XOr::new(self, other)
    }
}

impl<'code, P> XOrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an XOr parser
pub fn xor<'code, P1, P2>(parser1: P1, parser2: P2) -> XOr<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    XOr::new(parser1, parser2)
}
