//! Entry points that run a parser over a whole input text.

use crate::cursor::Cursor;
use crate::end::end_of_input;
use crate::error::{Failure, ParseError};
use crate::parser::Parser;

/// Run `parser` over `text`, requiring all of it to be consumed
///
/// Trailing input is reported at the first unconsumed character, expecting
/// `end of input`.
///
/// ```
/// use textcomb::prelude::*;
/// use textcomb::{digit, parse};
///
/// let digits = digit().at_least_once().text();
/// assert_eq!(parse(&digits, "2024").unwrap(), "2024");
///
/// let error = parse(&digits, "20x4").unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "Parsing failure: expected end of input but found 'x' (Line 1, Column 3)."
/// );
/// ```
pub fn parse<'code, P>(parser: &P, text: &'code str) -> Result<P::Output, ParseError>
where
    P: Parser<'code> + ?Sized,
{
    tracing::trace!(bytes = text.len(), "parse started");
    let start = Cursor::new(text);
    let (value, rest) = parser.parse(start).map_err(into_error)?;
    if let Err(trailing) = end_of_input().parse(rest) {
        return Err(into_error(trailing));
    }
    tracing::trace!(offset = rest.offset(), "parse finished");
    Ok(value)
}

/// Run `parser` over a prefix of `text`, returning the value and the remainder
pub fn parse_partial<'code, P>(
    parser: &P,
    text: &'code str,
) -> Result<(P::Output, Cursor<'code>), ParseError>
where
    P: Parser<'code> + ?Sized,
{
    tracing::trace!(bytes = text.len(), "partial parse started");
    let (value, rest) = parser.parse(Cursor::new(text)).map_err(into_error)?;
    tracing::trace!(offset = rest.offset(), "partial parse finished");
    Ok((value, rest))
}

fn into_error(failure: Failure<'_>) -> ParseError {
    let error = ParseError::from(failure);
    tracing::debug!(
        line = error.line(),
        column = error.column(),
        offset = error.offset(),
        "parse failed: {}",
        error.message()
    );
    error
}
