use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};

/// Apply `parser` repeatedly from `cursor`, pushing every value into `results`
///
/// Stops at the first failure that did not consume input and returns the
/// cursor after the last success. A consuming or fatal failure is returned
/// instead. A success that does not advance the cursor would repeat forever,
/// so it is reported as a non-terminating repetition.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    mut cursor: Cursor<'code>,
    results: &mut Vec<P::Output>,
) -> Result<Cursor<'code>, Failure<'code>>
where
    P: Parser<'code> + ?Sized,
{
    loop {
        match parser.parse(cursor) {
            Ok((value, next)) => {
                if next.offset() == cursor.offset() {
                    return Err(stalled(cursor));
                }
                results.push(value);
                cursor = next;
            }
            Err(failure) if failure.recoverable_at(&cursor) => return Ok(cursor),
            Err(failure) => return Err(failure),
        }
    }
}

/// Report a repetition whose inner parser succeeded without consuming input
pub(crate) fn stalled(cursor: Cursor<'_>) -> Failure<'_> {
    tracing::error!(
        offset = cursor.offset(),
        line = cursor.line(),
        column = cursor.column(),
        "repeated parser succeeded without consuming input"
    );
    Failure::non_terminating(cursor)
}

/// Parser combinator that matches zero or more occurrences of the given parser
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let cursor = repeat(&self.parser, cursor, &mut results)?;
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
