use super::scan_signed;
use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};

/// Parser that matches ASCII integer numbers (positive or negative)
pub fn integer<'code>() -> impl Parser<'code, Output = i64> {
    IntParser
}

struct IntParser;

impl<'code> Parser<'code> for IntParser {
    type Output = i64;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let end = scan_signed(cursor, "integer")?;
        let value = to_i64(cursor.slice_to(&end), cursor)?;
        Ok((value, end))
    }
}

/// Convert a scanned literal, reporting overflow at the number start
pub(super) fn to_i64<'code>(literal: &str, start: Cursor<'code>) -> Result<i64, Failure<'code>> {
    literal
        .parse::<i64>()
        .map_err(|_| Failure::message(format!("integer out of range: {}", literal), start))
}
