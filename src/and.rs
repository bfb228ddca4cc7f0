use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. This is due
/// to Rust's lack of variadic generics.
///
/// Example:
/// ```
/// use textcomb::prelude::*;
/// use textcomb::{Cursor, char, integer};
///
/// let (((left, _), right), _) = integer()
///     .and(char('.'))
///     .and(integer())
///     .parse(Cursor::new("123.456"))
///     .unwrap();
/// assert_eq!(left, 123);
/// assert_eq!(right, 456);
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Sequence two parsers, keeping the first value
pub struct ThenIgnore<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> ThenIgnore<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        ThenIgnore { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for ThenIgnore<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (result, cursor) = self.parser1.parse(cursor)?;
        let (_, cursor) = self.parser2.parse(cursor)?;
        Ok((result, cursor))
    }
}

/// Sequence two parsers, keeping the second value
pub struct IgnoreThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> IgnoreThen<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        IgnoreThen { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for IgnoreThen<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and(), .then_ignore() and .ignore_then() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }

    fn then_ignore<P>(self, other: P) -> ThenIgnore<Self, P>
    where
        P: Parser<'code>,
    {
        ThenIgnore::new(self, other)
    }

    fn ignore_then<P>(self, other: P) -> IgnoreThen<Self, P>
    where
        P: Parser<'code>,
    {
        IgnoreThen::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
