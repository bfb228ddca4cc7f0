use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that applies the given parser exactly `count` times
///
/// The first failing application ends the parse with that failure.
pub struct Exactly<P> {
    parser: P,
    count: usize,
}

impl<P> Exactly<P> {
    pub fn new(parser: P, count: usize) -> Self {
        Exactly { parser, count }
    }
}

impl<'code, P> Parser<'code> for Exactly<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let (value, next) = self.parser.parse(cursor)?;
            results.push(value);
            cursor = next;
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create an Exactly parser
pub fn exactly<'code, P>(parser: P, count: usize) -> Exactly<P>
where
    P: Parser<'code>,
{
    Exactly::new(parser, count)
}

/// Extension trait to add .exactly() method support for parsers
pub trait ExactlyExt<'code>: Parser<'code> + Sized {
    fn exactly(self, count: usize) -> Exactly<Self> {
        Exactly::new(self, count)
    }
}

impl<'code, P> ExactlyExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::char::{char, digit};

    #[test]
    fn test_exactly_matches_count() {
        let (digits, rest) = digit().exactly(3).parse(Cursor::new("12345")).unwrap();
        assert_eq!(digits, vec!['1', '2', '3']);
        assert_eq!(rest.offset(), 3);
    }

    #[test]
    fn test_exactly_zero() {
        let cursor = Cursor::new("abc");
        let (values, rest) = exactly(char('a'), 0).parse(cursor).unwrap();
        assert!(values.is_empty());
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_exactly_too_few() {
        let failure = char('a').exactly(3).parse(Cursor::new("aab")).unwrap_err();
        assert_eq!(failure.furthest().offset(), 2);
        assert_eq!(failure.text(), "expected 'a' but found 'b'");
    }

    #[test]
    fn test_exactly_runs_out_of_input() {
        let failure = digit().exactly(2).parse(Cursor::new("7")).unwrap_err();
        assert!(failure.furthest().at_end());
        assert!(failure.expected_set().contains("digit"));
    }

    #[test]
    fn test_exactly_does_not_consume_more() {
        let (_, rest) = char('a').exactly(2).parse(Cursor::new("aaaa")).unwrap();
        assert_eq!(rest.rest(), "aa");
    }
}
