use super::{scan_fraction, scan_signed};
use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};

/// Parser that matches decimal numbers such as `-12`, `3.25` or `6.02e23`
///
/// The integer part is required: `.5` does not match, and neither does `1.`,
/// which fails after the dot expecting a digit.
pub fn decimal<'code>() -> impl Parser<'code, Output = f64> {
    DecimalParser
}

struct DecimalParser;

impl<'code> Parser<'code> for DecimalParser {
    type Output = f64;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let integer_end = scan_signed(cursor, "number")?;
        let (end, _) = scan_fraction(integer_end)?;
        let value = to_f64(cursor.slice_to(&end), cursor)?;
        Ok((value, end))
    }
}

pub(super) fn to_f64<'code>(literal: &str, start: Cursor<'code>) -> Result<f64, Failure<'code>> {
    literal
        .parse::<f64>()
        .map_err(|_| Failure::message(format!("invalid number: {}", literal), start))
}
