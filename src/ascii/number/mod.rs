use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};

pub mod decimal;
pub mod integer;

pub use decimal::decimal;
pub use integer::integer;

/// Skip ASCII digits, returning the cursor after the last one
fn skip_digits(mut cursor: Cursor<'_>) -> Cursor<'_> {
    while let Some((ch, next)) = cursor.next_char() {
        if !ch.is_ascii_digit() {
            break;
        }
        cursor = next;
    }
    cursor
}

/// Scan `[+-]?[0-9]+`, failing with `label` when nothing numeric starts here
fn scan_signed<'code>(
    start: Cursor<'code>,
    label: &'static str,
) -> Result<Cursor<'code>, Failure<'code>> {
    let cursor = match start.next_char() {
        Some(('-' | '+', next)) => next,
        _ => start,
    };
    let end = skip_digits(cursor);
    if end.offset() == cursor.offset() {
        // A lone sign already committed to a number
        let label = if cursor == start { label } else { "digit" };
        return Err(Failure::expected(label, cursor));
    }
    Ok(end)
}

/// Scan `(\.[0-9]+)?([eE][+-]?[0-9]+)?` after the integer part
///
/// Returns the end cursor and whether a fraction or exponent was present.
fn scan_fraction(cursor: Cursor<'_>) -> Result<(Cursor<'_>, bool), Failure<'_>> {
    let mut cursor = cursor;
    let mut fractional = false;

    if let Some(('.', next)) = cursor.next_char() {
        let end = skip_digits(next);
        if end.offset() == next.offset() {
            return Err(Failure::expected("digit", next));
        }
        cursor = end;
        fractional = true;
    }

    if let Some(('e' | 'E', next)) = cursor.next_char() {
        cursor = scan_signed(next, "digit")?;
        fractional = true;
    }

    Ok((cursor, fractional))
}

/// A number that is either an integer or has a fractional part
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Decimal(f64),
}

struct NumberParser;

impl<'code> Parser<'code> for NumberParser {
    type Output = Number;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let integer_end = scan_signed(cursor, "number")?;
        let (end, fractional) = scan_fraction(integer_end)?;
        let literal = cursor.slice_to(&end);

        let number = if fractional {
            Number::Decimal(decimal::to_f64(literal, cursor)?)
        } else {
            Number::Integer(integer::to_i64(literal, cursor)?)
        };
        Ok((number, end))
    }
}

/// Parser that matches either an integer or a decimal and returns a Number enum
pub fn number<'code>() -> impl Parser<'code, Output = Number> {
    NumberParser
}
