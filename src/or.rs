use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser always starts from the original cursor, whatever the
/// first one consumed before failing. When both fail, the failure that got
/// further into the input is reported; on a tie their expectations are
/// merged. A non-terminating repetition failure is never retried.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let first = match self.parser1.parse(cursor) {
            Ok(result) => return Ok(result),
            Err(failure) if failure.is_fatal() => return Err(failure),
            Err(failure) => failure,
        };

        self.parser2
            .parse(cursor)
            .map_err(|second| first.merge(second))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}
