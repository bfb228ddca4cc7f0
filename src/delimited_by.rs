use crate::cursor::Cursor;
use crate::many::stalled;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
///
/// # Note
/// - Requires at least one element, wrap in `optional` to accept an empty list
/// - A separator that is not followed by an item is an error
/// - Does not handle whitespace automatically
pub struct DelimitedBy<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> DelimitedBy<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        DelimitedBy { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for DelimitedBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, mut cursor) = self.parser.parse(cursor)?;
        let mut items = vec![first];

        loop {
            let after_separator = match self.separator.parse(cursor) {
                Ok((_, next)) => next,
                Err(failure) if failure.recoverable_at(&cursor) => break,
                Err(failure) => return Err(failure),
            };

            match self.parser.parse(after_separator) {
                Ok((item, next)) => {
                    if next.offset() == cursor.offset() {
                        return Err(stalled(cursor));
                    }
                    items.push(item);
                    cursor = next;
                }
                Err(failure) if failure.recoverable_at(&cursor) => break,
                Err(failure) => return Err(failure),
            }
        }

        Ok((items, cursor))
    }
}

/// Convenience function to create a DelimitedBy parser
pub fn delimited_by<'code, P, PS>(parser: P, separator: PS) -> DelimitedBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    DelimitedBy::new(parser, separator)
}

/// Extension trait to add .delimited_by() method support for parsers
pub trait DelimitedByExt<'code>: Parser<'code> + Sized {
    fn delimited_by<PS>(self, separator: PS) -> DelimitedBy<Self, PS>
    where
        PS: Parser<'code>,
    {
        DelimitedBy::new(self, separator)
    }
}

impl<'code, P> DelimitedByExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::integer;
    use crate::error::FailureKind;
    use crate::optional::OptionalExt;
    use crate::succeed::succeed;
    use crate::token::TokenExt;
    use crate::utf8::char::{char, letter};

    #[test]
    fn test_single_item() {
        let (items, rest) = letter().delimited_by(char(',')).parse(Cursor::new("a")).unwrap();
        assert_eq!(items, vec!['a']);
        assert!(rest.at_end());
    }

    #[test]
    fn test_multiple_items() {
        let parser = delimited_by(letter(), char(','));
        let (items, rest) = parser.parse(Cursor::new("a,b,c")).unwrap();
        assert_eq!(items, vec!['a', 'b', 'c']);
        assert!(rest.at_end());
    }

    #[test]
    fn test_numbers_with_semicolons() {
        let parser = integer().delimited_by(char(';'));
        let (items, _) = parser.parse(Cursor::new("1;2;3")).unwrap();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_stops_at_non_separator() {
        let (items, rest) = letter().delimited_by(char(',')).parse(Cursor::new("a,b c")).unwrap();
        assert_eq!(items, vec!['a', 'b']);
        assert_eq!(rest.current(), Some(' '));
    }

    #[test]
    fn test_no_items_fails() {
        let cursor = Cursor::new("1,2");
        let failure = letter().delimited_by(char(',')).parse(cursor).unwrap_err();
        assert_eq!(failure.furthest(), cursor);
    }

    #[test]
    fn test_optional_accepts_empty_list() {
        let parser = letter().delimited_by(char(',')).optional();
        let (items, _) = parser.parse(Cursor::new("]")).unwrap();
        assert_eq!(items, None);
    }

    #[test]
    fn test_trailing_separator_is_an_error() {
        let failure = letter().delimited_by(char(',')).parse(Cursor::new("a,b,")).unwrap_err();
        assert_eq!(failure.furthest().offset(), 4);
        assert!(failure.expected_set().contains("letter"));
    }

    #[test]
    fn test_token_separators() {
        let parser = integer().delimited_by(char(',').token());
        let (items, _) = parser.parse(Cursor::new("10 , 2,  3 ,5")).unwrap();
        assert_eq!(items, vec![10, 2, 3, 5]);
    }

    #[test]
    fn test_zero_progress_item_and_separator_is_fatal() {
        let cursor = Cursor::new("abc");
        let failure = delimited_by(succeed(1), succeed(())).parse(cursor).unwrap_err();
        assert_eq!(failure.kind(), FailureKind::NonTerminatingRepetition);
        assert_eq!(failure.furthest(), cursor);
    }

    #[test]
    fn test_long_list_is_iterative() {
        let input = vec!["a"; 50_000].join(",");
        let (items, rest) = letter().delimited_by(char(',')).parse(Cursor::new(&input)).unwrap();
        assert_eq!(items.len(), 50_000);
        assert!(rest.at_end());
    }
}
