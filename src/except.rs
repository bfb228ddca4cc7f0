use crate::cursor::Cursor;
use crate::error::{Failure, found};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Except<P> {
    parser: P,
}

impl<P> Except<P> {
    pub fn new(parser: P) -> Self {
        Except { parser }
    }
}

impl<'code, P> Parser<'code> for Except<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(excluded(cursor)),
            Err(failure) if failure.is_fatal() => Err(failure),
            Err(_) => Ok(((), cursor)),
        }
    }
}

fn excluded(cursor: Cursor<'_>) -> Failure<'_> {
    Failure::message(format!("unexpected '{}'", found(&cursor)), cursor)
}

/// Convenience function to create an Except parser for negative lookahead
pub fn except<'code, P>(parser: P) -> Except<P>
where
    P: Parser<'code>,
{
    Except::new(parser)
}

/// Parser that runs `parser` unless `excluded` matches at the same position
///
/// `char_except` generalised to whole parsers: `letter().except(char('x'))`
/// is any letter but `x`.
pub struct Unless<P, Q> {
    parser: P,
    excluded: Q,
}

impl<P, Q> Unless<P, Q> {
    pub fn new(parser: P, excluded: Q) -> Self {
        Unless { parser, excluded }
    }
}

impl<'code, P, Q> Parser<'code> for Unless<P, Q>
where
    P: Parser<'code>,
    Q: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.excluded.parse(cursor) {
            Ok(_) => Err(excluded(cursor)),
            Err(failure) if failure.is_fatal() => Err(failure),
            Err(_) => self.parser.parse(cursor),
        }
    }
}

/// Extension trait to add .except() method support for parsers
pub trait ExceptExt<'code>: Parser<'code> + Sized {
    fn except<Q>(self, excluded: Q) -> Unless<Self, Q>
    where
        Q: Parser<'code>,
    {
        Unless::new(self, excluded)
    }
}

impl<'code, P> ExceptExt<'code> for P where P: Parser<'code> {}
