use crate::cursor::Cursor;
use crate::many::Many;
use crate::parser::{ParseResult, Parser};
use crate::utf8::char::{CharClass, whitespace};

/// Skip parser used by [`TokenExt::token`]
pub type Whitespace = Many<CharClass>;

/// Parser combinator that discards `skip` on both sides of `parser`
///
/// Only the inner parser's value is kept. Failures of the inner parser
/// propagate unchanged; the skip parser is expected to always succeed, which
/// holds for any `many(...)`.
///
/// Leading whitespace skipped before a failing inner parser counts as
/// consumed input. `char('-').token().optional()` on `" 5"` therefore fails
/// at offset 1 rather than returning `None`, and `char('x').token().many()`
/// on `"  "` fails instead of returning an empty list. Skip the whitespace
/// outside the optional or repeated part when that matters.
pub struct Token<P, S> {
    parser: P,
    skip: S,
}

impl<P, S> Token<P, S> {
    pub fn new(parser: P, skip: S) -> Self {
        Token { parser, skip }
    }
}

impl<'code, P, S> Parser<'code> for Token<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.skip.parse(cursor)?;
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.skip.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Token parser skipping whitespace
pub fn token<'code, P>(parser: P) -> Token<P, Whitespace>
where
    P: Parser<'code>,
{
    Token::new(parser, Many::new(whitespace()))
}

/// Extension trait to add .token() and .token_with() method support for parsers
pub trait TokenExt<'code>: Parser<'code> + Sized {
    fn token(self) -> Token<Self, Whitespace> {
        Token::new(self, Many::new(whitespace()))
    }

    /// Like [`token`](TokenExt::token) with a custom skip parser, e.g. one
    /// that also discards comments
    fn token_with<S>(self, skip: S) -> Token<Self, S>
    where
        S: Parser<'code>,
    {
        Token::new(self, skip)
    }
}

impl<'code, P> TokenExt<'code> for P where P: Parser<'code> {}
