use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};

/// Parser that succeeds only when no input remains
#[derive(Debug, Clone, Copy, Default)]
pub struct EndOfInput;

impl<'code> Parser<'code> for EndOfInput {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.at_end() {
            Ok(((), cursor))
        } else {
            Err(Failure::expected("end of input", cursor))
        }
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
