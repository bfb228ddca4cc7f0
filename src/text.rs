use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that collects a parsed character sequence into a `String`
pub struct Text<P> {
    parser: P,
}

impl<P> Text<P> {
    pub fn new(parser: P) -> Self {
        Text { parser }
    }
}

impl<'code, P> Parser<'code> for Text<P>
where
    P: Parser<'code>,
    P::Output: IntoIterator<Item = char>,
{
    type Output = String;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (chars, cursor) = self.parser.parse(cursor)?;
        Ok((chars.into_iter().collect(), cursor))
    }
}

/// Convenience function to create a Text parser
pub fn text<'code, P>(parser: P) -> Text<P>
where
    P: Parser<'code>,
    P::Output: IntoIterator<Item = char>,
{
    Text::new(parser)
}

/// Extension trait to add .text() method support for parsers
pub trait TextExt<'code>: Parser<'code> + Sized {
    fn text(self) -> Text<Self>
    where
        Self::Output: IntoIterator<Item = char>,
    {
        Text::new(self)
    }
}

impl<'code, P> TextExt<'code> for P where P: Parser<'code> {}
