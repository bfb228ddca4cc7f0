use crate::cursor::Cursor;
use crate::many::{repeat, stalled};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first application must succeed and its failure propagates unchanged.
/// After that it behaves like [`Many`](crate::many::Many), including the
/// guard against inner parsers that succeed without consuming input.
pub struct AtLeastOnce<P> {
    parser: P,
}

impl<P> AtLeastOnce<P> {
    pub fn new(parser: P) -> Self {
        AtLeastOnce { parser }
    }
}

impl<'code, P> Parser<'code> for AtLeastOnce<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, next) = self.parser.parse(cursor)?;
        if next.offset() == cursor.offset() {
            return Err(stalled(cursor));
        }

        let mut results = vec![first];
        let cursor = repeat(&self.parser, next, &mut results)?;
        Ok((results, cursor))
    }
}

/// Convenience function to create an AtLeastOnce parser
pub fn at_least_once<'code, P>(parser: P) -> AtLeastOnce<P>
where
    P: Parser<'code>,
{
    AtLeastOnce::new(parser)
}

/// Extension trait to add .at_least_once() method support for parsers
pub trait AtLeastOnceExt<'code>: Parser<'code> + Sized {
    fn at_least_once(self) -> AtLeastOnce<Self> {
        AtLeastOnce::new(self)
    }
}

impl<'code, P> AtLeastOnceExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::succeed::succeed;
    use crate::utf8::char::{char, digit};

    #[test]
    fn test_zero_matches_fails() {
        let cursor = Cursor::new("xyz");
        let failure = at_least_once(char('a')).parse(cursor).unwrap_err();
        assert_eq!(failure.furthest(), cursor);
        assert!(failure.expected_set().contains("'a'"));
    }

    #[test]
    fn test_one_match() {
        let (results, rest) = char('a').at_least_once().parse(Cursor::new("abc")).unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(rest.current(), Some('b'));
    }

    #[test]
    fn test_stops_before_mismatch() {
        let (results, rest) = char('A').at_least_once().parse(Cursor::new("AAAB")).unwrap();
        assert_eq!(results, vec!['A', 'A', 'A']);
        assert_eq!(rest.offset(), 3);
        assert_eq!(rest.current(), Some('B'));
    }

    #[test]
    fn test_digits_to_end() {
        let (results, rest) = digit().at_least_once().parse(Cursor::new("2024")).unwrap();
        assert_eq!(results.len(), 4);
        assert!(rest.at_end());
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(char('a').at_least_once().parse(Cursor::new("")).is_err());
    }

    #[test]
    fn test_zero_progress_is_fatal() {
        let failure = succeed(()).at_least_once().parse(Cursor::new("x")).unwrap_err();
        assert!(failure.is_fatal());
    }
}
