use crate::cursor::Cursor;
use crate::error::{Failure, GrammarError, Label};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string character by character
///
/// The whole literal must match. On a mismatch the failure points at the
/// first character that differs and names the full literal as expected.
#[derive(Debug, Clone)]
pub struct StringParser {
    literal: Cow<'static, str>,
    label: Label,
}

impl StringParser {
    /// Build a literal parser, rejecting the empty literal
    pub fn try_new(literal: impl Into<Cow<'static, str>>) -> Result<Self, GrammarError> {
        let literal = literal.into();
        if literal.is_empty() {
            return Err(GrammarError::EmptyLiteral);
        }
        let label = format!("\"{}\"", literal).into();
        Ok(StringParser { literal, label })
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl<'code> Parser<'code> for StringParser {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut current = cursor;

        for expected in self.literal.chars() {
            match current.next_char() {
                Some((ch, next)) if ch == expected => current = next,
                _ => return Err(Failure::expected(self.label.clone(), current)),
            }
        }

        Ok((cursor.slice_to(&current), current))
    }
}

/// Match the literal `literal`
///
/// # Panics
///
/// Panics if `literal` is empty. Use [`StringParser::try_new`] to handle that
/// case as an error.
pub fn string(literal: impl Into<Cow<'static, str>>) -> StringParser {
    match StringParser::try_new(literal) {
        Ok(parser) => parser,
        Err(error) => panic!("{}", error),
    }
}
