use crate::cursor::Cursor;
use crate::many::stalled;
use crate::parser::{ParseResult, Parser};

/// Parser that collects `item`s until `end` matches, consuming `end`
///
/// `end` is tried first at each position, so an item that could also start
/// the terminator never swallows it. Running out of items before `end`
/// matches reports the deeper of the two failures.
pub struct Until<P, PE> {
    item: P,
    end: PE,
}

impl<P, PE> Until<P, PE> {
    pub fn new(item: P, end: PE) -> Self {
        Self { item, end }
    }
}

impl<'code, P, PE> Parser<'code> for Until<P, PE>
where
    P: Parser<'code>,
    PE: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut result = Vec::new();
        let mut current_cursor = cursor;

        loop {
            let end_failure = match self.end.parse(current_cursor) {
                Ok((_, after_end)) => return Ok((result, after_end)),
                Err(failure) if failure.is_fatal() => return Err(failure),
                Err(failure) => failure,
            };

            match self.item.parse(current_cursor) {
                Ok((item, new_cursor)) => {
                    if new_cursor.offset() == current_cursor.offset() {
                        return Err(stalled(current_cursor));
                    }
                    result.push(item);
                    current_cursor = new_cursor;
                }
                Err(failure) => return Err(end_failure.merge(failure)),
            }
        }
    }
}

/// Convenience function to create an Until parser
pub fn until<'code, P, PE>(item: P, end: PE) -> Until<P, PE>
where
    P: Parser<'code>,
    PE: Parser<'code>,
{
    Until::new(item, end)
}
