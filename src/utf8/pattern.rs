use crate::cursor::Cursor;
use crate::error::{Failure, GrammarError, Label};
use crate::parser::{ParseResult, Parser};
use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input, MatchKind};

/// Parser that matches a regular expression anchored at the cursor
///
/// Succeeds with the longest prefix of the remaining input the expression
/// matches, so `a|ab` on `"ab"` takes both characters. A zero-length match
/// is a success that consumes nothing.
#[derive(Debug, Clone)]
pub struct PatternParser {
    regex: Regex,
    label: Label,
}

impl PatternParser {
    /// Compile `pattern`, reporting a malformed expression as an error
    pub fn try_new(pattern: &str) -> Result<Self, GrammarError> {
        let regex = Regex::builder()
            .configure(Regex::config().match_kind(MatchKind::All))
            .build(pattern)
            .map_err(|source| GrammarError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(PatternParser {
            regex,
            label: format!("/{}/", pattern).into(),
        })
    }

    /// Replace the expectation reported when the pattern does not match
    pub fn with_label(mut self, label: impl Into<Label>) -> Self {
        self.label = label.into();
        self
    }
}

impl<'code> Parser<'code> for PatternParser {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        match self.regex.find(Input::new(rest).anchored(Anchored::Yes)) {
            Some(found) => {
                let matched = &rest[..found.end()];
                Ok((matched, cursor.advance_over(matched)))
            }
            None => Err(Failure::expected(self.label.clone(), cursor)),
        }
    }
}

/// Match the regular expression `pattern` at the cursor
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression. Use
/// [`PatternParser::try_new`] to handle that case as an error.
pub fn pattern(pattern: &str) -> PatternParser {
    match PatternParser::try_new(pattern) {
        Ok(parser) => parser,
        Err(error) => panic!("{}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_match() {
        let parser = pattern(r"[0-9]+");
        let (matched, rest) = parser.parse(Cursor::new("123abc")).unwrap();
        assert_eq!(matched, "123");
        assert_eq!(rest.offset(), 3);
        assert_eq!(rest.current(), Some('a'));
    }

    #[test]
    fn test_pattern_is_anchored() {
        let parser = pattern(r"[0-9]+");
        let cursor = Cursor::new("abc123");
        let failure = parser.parse(cursor).unwrap_err();
        assert_eq!(failure.furthest(), cursor);
        assert!(failure.expected_set().contains("/[0-9]+/"));
    }

    #[test]
    fn test_pattern_alternation_is_anchored_as_a_whole() {
        let parser = pattern(r"a|b");
        assert!(parser.parse(Cursor::new("xb")).is_err());
        assert_eq!(parser.parse(Cursor::new("b")).unwrap().0, "b");
    }

    #[test]
    fn test_pattern_takes_longest_prefix() {
        let (matched, rest) = pattern(r"a|ab").parse(Cursor::new("abc")).unwrap();
        assert_eq!(matched, "ab");
        assert_eq!(rest.current(), Some('c'));

        let decimal = pattern(r"[0-9]+|[0-9]+\.[0-9]+");
        let (matched, rest) = decimal.parse(Cursor::new("3.14;")).unwrap();
        assert_eq!(matched, "3.14");
        assert_eq!(rest.current(), Some(';'));
    }

    #[test]
    fn test_pattern_tracks_lines() {
        let parser = pattern(r"[a-z\n]+");
        let (matched, rest) = parser.parse(Cursor::new("ab\ncd1")).unwrap();
        assert_eq!(matched, "ab\ncd");
        assert_eq!(rest.line(), 2);
        assert_eq!(rest.column(), 3);
        assert_eq!(rest.offset(), 5);
    }

    #[test]
    fn test_pattern_mid_input() {
        let cursor = Cursor::new("x=42").advance(2).unwrap();
        let (matched, rest) = pattern(r"\d+").parse(cursor).unwrap();
        assert_eq!(matched, "42");
        assert!(rest.at_end());
    }

    #[test]
    fn test_pattern_label() {
        let parser = pattern(r"[A-Z]").with_label("capital");
        let failure = parser.parse(Cursor::new("a")).unwrap_err();
        assert_eq!(failure.text(), "expected capital but found 'a'");
    }

    #[test]
    fn test_invalid_pattern() {
        let error = PatternParser::try_new("(unclosed").unwrap_err();
        assert!(matches!(error, GrammarError::InvalidPattern { .. }));
        assert!(error.to_string().contains("(unclosed"));
    }

    #[test]
    #[should_panic(expected = "invalid pattern")]
    fn test_invalid_pattern_panics() {
        let _ = pattern("[");
    }
}
