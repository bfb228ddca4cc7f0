use crate::cursor::Cursor;
use crate::error::Failure;
use std::rc::Rc;
use std::sync::Arc;

/// Outcome of applying a parser: the value and the remainder, or a failure
pub type ParseResult<'code, T> = Result<(T, Cursor<'code>), Failure<'code>>;

/// Type-erased parser, used to give recursive grammars a finite type
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + Send + Sync + 'code>;

/// Core parser trait for parser combinators
///
/// A parser is an immutable value mapping a cursor to a parse result. It must
/// not keep state between calls, so the same parser can be applied to many
/// cursors, including from several threads at once.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the cursor after it on success. On
    /// failure the caller resumes from the cursor it passed in; the failure's
    /// `furthest` position reports how far the attempt got.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Erase the concrete type of this parser
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: Sized + Send + Sync + 'code,
    {
        Box::new(self)
    }
}

impl<'code, P: Parser<'code> + ?Sized> Parser<'code> for &P {
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P: Parser<'code> + ?Sized> Parser<'code> for Box<P> {
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P: Parser<'code> + ?Sized> Parser<'code> for Rc<P> {
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P: Parser<'code> + ?Sized> Parser<'code> for Arc<P> {
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Parser backed by a plain function or closure
pub struct FnParser<F> {
    f: F,
}

impl<'code, F, T> Parser<'code> for FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.f)(cursor)
    }
}

/// Turn a function from cursor to result into a parser
pub fn from_fn<'code, F, T>(f: F) -> FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    FnParser { f }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::char::char;

    #[test]
    fn test_reference_is_parser() {
        let parser = char('a');
        let by_ref = &parser;
        let (ch, rest) = by_ref.parse(Cursor::new("ab")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(rest.offset(), 1);
    }

    #[test]
    fn test_boxed_and_shared() {
        let boxed: BoxedParser<'_, char> = char('a').boxed();
        let shared = Arc::new(boxed);
        let (ch, _) = shared.parse(Cursor::new("a")).unwrap();
        assert_eq!(ch, 'a');

        let rc = Rc::new(char('b'));
        assert!(rc.parse(Cursor::new("a")).is_err());
    }

    #[test]
    fn test_from_fn() {
        let two = from_fn(|cursor| {
            let (a, cursor) = char('x').parse(cursor)?;
            let (b, cursor) = char('y').parse(cursor)?;
            Ok(((a, b), cursor))
        });
        let ((a, b), rest) = two.parse(Cursor::new("xyz")).unwrap();
        assert_eq!((a, b), ('x', 'y'));
        assert_eq!(rest.current(), Some('z'));

        let failure = two.parse(Cursor::new("xz")).unwrap_err();
        assert_eq!(failure.furthest().offset(), 1);
    }

    #[test]
    fn test_parser_is_reentrant() {
        let parser = char('a');
        let first = parser.parse(Cursor::new("a")).unwrap();
        let second = parser.parse(Cursor::new("a")).unwrap();
        assert_eq!(first.0, second.0);
        assert_eq!(first.1.offset(), second.1.offset());
    }
}
