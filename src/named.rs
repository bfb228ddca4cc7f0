use crate::cursor::Cursor;
use crate::error::Label;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that names what the inner parser expects
///
/// A failure that consumed nothing reports `label` as its only expectation,
/// so `digit().at_least_once().named("number")` reads "expected number"
/// instead of "expected digit". Failures from deeper inside the construct
/// keep their own expectations.
pub struct Named<P> {
    parser: P,
    label: Label,
}

impl<P> Named<P> {
    pub fn new(parser: P, label: impl Into<Label>) -> Self {
        Named {
            parser,
            label: label.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Named<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor).map_err(|failure| {
            if failure.recoverable_at(&cursor) {
                failure.relabel(self.label.clone())
            } else {
                failure
            }
        })
    }
}

/// Convenience function to create a Named parser
pub fn named<'code, P>(parser: P, label: impl Into<Label>) -> Named<P>
where
    P: Parser<'code>,
{
    Named::new(parser, label)
}

/// Extension trait to add .named() method support for parsers
pub trait NamedExt<'code>: Parser<'code> + Sized {
    fn named(self, label: impl Into<Label>) -> Named<Self> {
        Named::new(self, label)
    }
}

impl<'code, P> NamedExt<'code> for P where P: Parser<'code> {}
