use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::sync::OnceLock;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// The factory runs once per `Lazy` instance, on its first parse; the built
/// parser is kept and reused from then on, including across threads.
pub struct Lazy<F, P> {
    factory: F,
    resolved: OnceLock<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            resolved: OnceLock::new(),
        }
    }

    fn resolve(&self) -> &P {
        self.resolved.get_or_init(|| {
            tracing::trace!("resolving lazily constructed parser");
            (self.factory)()
        })
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.resolve().parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
