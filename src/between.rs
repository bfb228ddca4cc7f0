use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
/// It does not handle whitespace; wrap the parts in `token()` for that.
pub struct Between<PO, P, PC> {
    open: PO,
    content: P,
    close: PC,
}

impl<PO, P, PC> Between<PO, P, PC> {
    pub fn new(open: PO, content: P, close: PC) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, PO, P, PC> Parser<'code> for Between<PO, P, PC>
where
    PO: Parser<'code>,
    P: Parser<'code>,
    PC: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((content, cursor))
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, PO, P, PC>(open: PO, content: P, close: PC) -> Between<PO, P, PC>
where
    PO: Parser<'code>,
    P: Parser<'code>,
    PC: Parser<'code>,
{
    Between::new(open, content, close)
}
