use crate::cursor::Cursor;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Label describing something a parser expected to see
pub type Label = Cow<'static, str>;

/// Ordered, duplicate-free set of expectation labels
///
/// Insertion order is preserved so that diagnostics list alternatives in the
/// order the grammar tried them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expected(Vec<Label>);

impl Expected {
    pub fn new() -> Self {
        Expected(Vec::new())
    }

    pub fn single(label: impl Into<Label>) -> Self {
        Expected(vec![label.into()])
    }

    /// Add a label unless it is already present
    pub fn insert(&mut self, label: impl Into<Label>) {
        let label = label.into();
        if !self.0.contains(&label) {
            self.0.push(label);
        }
    }

    /// Union of two sets, keeping `self`'s order first
    pub fn union(mut self, other: Expected) -> Self {
        for label in other.0 {
            self.insert(label);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|l| l.as_ref())
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

impl<L: Into<Label>> FromIterator<L> for Expected {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut expected = Expected::new();
        for label in iter {
            expected.insert(label);
        }
        expected
    }
}

/// Distinguishes ordinary mismatches from grammar defects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The input did not match; alternation may recover
    Syntax,
    /// A repetition's inner parser succeeded without consuming input.
    /// Nothing recovers from this.
    NonTerminatingRepetition,
}

/// Describe the character under `cursor` for diagnostics
pub(crate) fn found(cursor: &Cursor<'_>) -> String {
    match cursor.current() {
        Some(ch) => ch.to_string(),
        None => "<end of input>".to_string(),
    }
}

fn expected_message(expected: &Expected, at: &Cursor<'_>) -> Cow<'static, str> {
    format!("expected {} but found '{}'", expected, found(at)).into()
}

/// The failure half of a parse result
///
/// `furthest` is the deepest position the failing parser reached. It is never
/// before the cursor the parser was invoked with, which lets callers tell
/// whether a failed branch consumed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<'code> {
    message: Cow<'static, str>,
    expected: Expected,
    furthest: Cursor<'code>,
    kind: FailureKind,
}

impl<'code> Failure<'code> {
    /// Failure at `at` that expected `label`
    pub fn expected(label: impl Into<Label>, at: Cursor<'code>) -> Self {
        Failure::expecting(Expected::single(label), at)
    }

    /// Failure at `at` that expected any of `expected`
    pub fn expecting(expected: Expected, at: Cursor<'code>) -> Self {
        Failure {
            message: expected_message(&expected, &at),
            expected,
            furthest: at,
            kind: FailureKind::Syntax,
        }
    }

    /// Failure at `at` with a free-form message and no expectations
    pub fn message(message: impl Into<Cow<'static, str>>, at: Cursor<'code>) -> Self {
        Failure {
            message: message.into(),
            expected: Expected::new(),
            furthest: at,
            kind: FailureKind::Syntax,
        }
    }

    pub(crate) fn non_terminating(at: Cursor<'code>) -> Self {
        Failure {
            message: "repetition parser succeeded without consuming input".into(),
            expected: Expected::new(),
            furthest: at,
            kind: FailureKind::NonTerminatingRepetition,
        }
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn expected_set(&self) -> &Expected {
        &self.expected
    }

    pub fn furthest(&self) -> Cursor<'code> {
        self.furthest
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn is_fatal(&self) -> bool {
        self.kind == FailureKind::NonTerminatingRepetition
    }

    /// Whether this failure reached past `start`
    pub fn consumed_since(&self, start: &Cursor<'code>) -> bool {
        self.furthest.offset() > start.offset()
    }

    /// Whether alternation and repetition may recover from this failure
    /// when it was produced by a parser invoked at `start`
    pub(crate) fn recoverable_at(&self, start: &Cursor<'code>) -> bool {
        !self.is_fatal() && !self.consumed_since(start)
    }

    /// Replace the expectation set, regenerating the message
    pub fn relabel(self, label: impl Into<Label>) -> Self {
        Failure::expected(label, self.furthest)
    }

    /// Keep whichever failure got further into the input
    ///
    /// Fatal failures always win. On equal offsets the expectation sets are
    /// unioned and the message rebuilt from the merged set; if neither side
    /// had expectations the first message is kept.
    pub fn merge(self, other: Failure<'code>) -> Self {
        if self.is_fatal() {
            return self;
        }
        if other.is_fatal() {
            return other;
        }
        match self.furthest.offset().cmp(&other.furthest.offset()) {
            std::cmp::Ordering::Greater => self,
            std::cmp::Ordering::Less => other,
            std::cmp::Ordering::Equal => {
                let expected = self.expected.union(other.expected);
                let message = if expected.is_empty() {
                    self.message
                } else {
                    expected_message(&expected, &self.furthest)
                };
                Failure {
                    message,
                    expected,
                    furthest: self.furthest,
                    kind: FailureKind::Syntax,
                }
            }
        }
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.furthest)
    }
}

/// Error returned by the driver entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Parsing failure: {message} (Line {line}, Column {column}).")]
    Syntax {
        message: String,
        expected: Vec<String>,
        line: usize,
        column: usize,
        offset: usize,
    },
    #[error(
        "Non-terminating repetition: a repeated parser succeeded without consuming input (Line {line}, Column {column})."
    )]
    NonTerminatingRepetition {
        line: usize,
        column: usize,
        offset: usize,
    },
}

impl ParseError {
    pub fn message(&self) -> String {
        match self {
            ParseError::Syntax { message, .. } => message.clone(),
            ParseError::NonTerminatingRepetition { .. } => {
                "repetition parser succeeded without consuming input".to_string()
            }
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ParseError::Syntax { line, .. } | ParseError::NonTerminatingRepetition { line, .. } => {
                *line
            }
        }
    }

    pub fn column(&self) -> usize {
        match self {
            ParseError::Syntax { column, .. }
            | ParseError::NonTerminatingRepetition { column, .. } => *column,
        }
    }

    /// Character offset of the failure
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Syntax { offset, .. }
            | ParseError::NonTerminatingRepetition { offset, .. } => *offset,
        }
    }

    pub fn expected(&self) -> &[String] {
        match self {
            ParseError::Syntax { expected, .. } => expected,
            ParseError::NonTerminatingRepetition { .. } => &[],
        }
    }

    /// Render the error followed by the surrounding lines of `source`
    ///
    /// Shows up to two lines before and after the failing line, with a
    /// pointer under the failing column.
    pub fn render(&self, source: &str) -> String {
        let mut out = self.to_string();
        out.push('\n');
        for line in context_lines(source, self.line(), self.column()) {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}

impl From<Failure<'_>> for ParseError {
    fn from(failure: Failure<'_>) -> Self {
        let at = failure.furthest;
        match failure.kind {
            FailureKind::NonTerminatingRepetition => ParseError::NonTerminatingRepetition {
                line: at.line(),
                column: at.column(),
                offset: at.offset(),
            },
            FailureKind::Syntax => {
                let message = if failure.expected.is_empty() {
                    failure.message.into_owned()
                } else {
                    expected_message(&failure.expected, &at).into_owned()
                };
                ParseError::Syntax {
                    message,
                    expected: failure.expected.iter().map(str::to_string).collect(),
                    line: at.line(),
                    column: at.column(),
                    offset: at.offset(),
                }
            }
        }
    }
}

fn context_lines(source: &str, line: usize, column: usize) -> Vec<String> {
    let first = line.saturating_sub(2).max(1);
    let last = line + 2;
    let mut lines = Vec::new();

    // `split('\n')` yields a final empty line when the source ends in a
    // newline, which is where an end-of-input failure points.
    for (number, content) in source.split('\n').enumerate().map(|(i, l)| (i + 1, l)) {
        if number < first {
            continue;
        }
        if number > last {
            break;
        }
        let prefix = if number == line {
            format!("  > {} | ", number)
        } else {
            format!("    {} | ", number)
        };
        lines.push(format!("{}{}", prefix, content));
        if number == line {
            let pointer_offset = prefix.len() + column.saturating_sub(1);
            lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
        }
    }
    lines
}

/// Malformed parameters supplied while building a parser
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("string literal parser requires a non-empty literal")]
    EmptyLiteral,
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex_automata::meta::BuildError,
    },
}
