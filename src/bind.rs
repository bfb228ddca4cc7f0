use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that feeds one parser's value into the choice of the next
///
/// Runs `parser`; on success calls `next` with the value to obtain the
/// parser for the rest of the input and runs it from the remainder. Failures
/// of either step propagate unchanged.
///
/// Example:
/// ```
/// use textcomb::prelude::*;
/// use textcomb::{Cursor, digit, char};
///
/// // A digit `n` followed by exactly `n` x's
/// let parser = digit().then(|d| {
///     let n = d.to_digit(10).unwrap_or(0) as usize;
///     char('x').exactly(n)
/// });
/// let (xs, rest) = parser.parse(Cursor::new("3xxx!")).unwrap();
/// assert_eq!(xs.len(), 3);
/// assert_eq!(rest.current(), Some('!'));
/// ```
pub struct Bind<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Bind { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.next)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, next: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, next)
}

/// Extension trait to add .then() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn then<F, Q>(self, next: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, next)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::succeed::{fail, succeed};
    use crate::utf8::char::{char, letter};
    use crate::utf8::string::string;

    #[test]
    fn test_bind_sequences() {
        let parser = char('a').then(|a| char('b').map(move |b| (a, b)));
        let ((a, b), rest) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!((a, b), ('a', 'b'));
        assert_eq!(rest.current(), Some('c'));
    }

    #[test]
    fn test_bind_first_failure_propagates() {
        let cursor = Cursor::new("xbc");
        let parser = char('a').then(|_| char('b'));
        let failure = parser.parse(cursor).unwrap_err();
        assert_eq!(failure.furthest(), cursor);
        assert!(failure.expected_set().contains("'a'"));
    }

    #[test]
    fn test_bind_second_failure_propagates() {
        let parser = char('a').then(|_| char('b'));
        let failure = parser.parse(Cursor::new("axc")).unwrap_err();
        assert_eq!(failure.furthest().offset(), 1);
        assert!(failure.expected_set().contains("'b'"));
    }

    #[test]
    fn test_bind_value_selects_next_parser() {
        // The opening letter decides the closing literal
        let parser = letter().then(|open| {
            if open == 'b' {
                string("egin").map(|_| "begin").boxed()
            } else {
                succeed("other").boxed()
            }
        });
        assert_eq!(parser.parse(Cursor::new("begin")).unwrap().0, "begin");
        assert_eq!(parser.parse(Cursor::new("x")).unwrap().0, "other");
        assert!(parser.parse(Cursor::new("bad")).is_err());
    }

    #[test]
    fn test_bind_into_fail() {
        let parser = char('a').then(|_| fail::<char>("stop"));
        let failure = parser.parse(Cursor::new("ab")).unwrap_err();
        assert_eq!(failure.text(), "stop");
        assert_eq!(failure.furthest().offset(), 1);
    }
}
