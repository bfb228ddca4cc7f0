use crate::cursor::Cursor;
use crate::error::{Failure, Label};
use crate::parser::{ParseResult, Parser};

/// Parser that consumes a single character accepted by a predicate
///
/// On mismatch, or at the end of input, fails at the current cursor with
/// the parser's description as the only expectation.
#[derive(Debug, Clone)]
pub struct CharParser<F> {
    predicate: F,
    description: Label,
}

impl<F> CharParser<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(predicate: F, description: impl Into<Label>) -> Self {
        CharParser {
            predicate,
            description: description.into(),
        }
    }
}

impl<'code, F> Parser<'code> for CharParser<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.next_char() {
            Some((ch, next)) if (self.predicate)(ch) => Ok((ch, next)),
            _ => Err(Failure::expected(self.description.clone(), cursor)),
        }
    }
}

/// Parser type of the built-in character classes
pub type CharClass = CharParser<fn(char) -> bool>;

/// Match exactly the character `expected`
pub fn char(expected: char) -> CharParser<impl Fn(char) -> bool + Clone> {
    CharParser::new(move |ch| ch == expected, format!("'{}'", expected))
}

/// Match any character satisfying `predicate`
pub fn char_if<F>(predicate: F, description: impl Into<Label>) -> CharParser<F>
where
    F: Fn(char) -> bool,
{
    CharParser::new(predicate, description)
}

/// Match any character other than `excluded`
pub fn char_except(excluded: char) -> CharParser<impl Fn(char) -> bool + Clone> {
    CharParser::new(
        move |ch| ch != excluded,
        format!("any character except '{}'", excluded),
    )
}

/// Match any character that does not appear in `excluded`
pub fn char_except_any(excluded: &str) -> CharParser<impl Fn(char) -> bool + Clone + use<>> {
    let set: String = excluded.to_string();
    let description = format!(
        "any character except {}",
        set.chars()
            .map(|c| format!("'{}'", c))
            .collect::<Vec<_>>()
            .join(", ")
    );
    CharParser::new(move |ch| !set.contains(ch), description)
}

/// Match any character that does not satisfy `predicate`
pub fn char_except_if<F>(
    predicate: F,
    description: impl Into<Label>,
) -> CharParser<impl Fn(char) -> bool>
where
    F: Fn(char) -> bool,
{
    let description: Label = description.into();
    CharParser::new(
        move |ch| !predicate(ch),
        format!("any character except {}", description),
    )
}

/// Match a Unicode alphabetic character
pub fn letter() -> CharClass {
    CharParser::new(char::is_alphabetic, "letter")
}

/// Match an ASCII decimal digit
pub fn digit() -> CharClass {
    CharParser::new(|c: char| c.is_ascii_digit(), "digit")
}

/// Match a Unicode alphabetic or numeric character
pub fn letter_or_digit() -> CharClass {
    CharParser::new(char::is_alphanumeric, "letter or digit")
}

/// Match a Unicode whitespace character
pub fn whitespace() -> CharClass {
    CharParser::new(char::is_whitespace, "whitespace")
}

/// Match any single character
pub fn any_char() -> CharClass {
    CharParser::new(|_| true, "any character")
}
