//! # textcomb - Parser Combinator Library
//!
//! A parser combinator library for text, built for writing grammars such as
//! JSON, markup or configuration formats directly in Rust.
//!
//! textcomb provides composable, type-safe parsers that can be combined to build
//! complex parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Failures as values**: Mismatches are `Result`s that alternation can inspect and retry
//! - **Rich error reporting**: The furthest failure wins, with line, column and what was expected
//! - **Composability**: Small parsers combine into larger ones using combinators
//! - **No runaway loops**: Repetition of a parser that consumes nothing is reported, not spun on
//!
//! ```
//! use textcomb::prelude::*;
//! use textcomb::{char, digit, parse};
//!
//! let number = digit().at_least_once().text().token();
//! let list = number.delimited_by(char(','));
//! assert_eq!(parse(&list, " 1, 22 ,333").unwrap(), vec!["1", "22", "333"]);
//! ```

pub mod and;
pub mod ascii;
pub mod at_least_once;
pub mod between;
pub mod bind;
pub mod cursor;
pub mod delimited_by;
pub mod driver;
pub mod end;
pub mod error;
pub mod exactly;
pub mod except;
pub mod filter;
pub mod lazy;
pub mod many;
pub mod map;
pub mod named;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod prelude;
pub mod succeed;
pub mod text;
pub mod token;
pub mod until;
pub mod utf8;
pub mod xor;

pub use and::and;
pub use ascii::{Number, decimal, integer, number};
pub use at_least_once::at_least_once;
pub use between::between;
pub use bind::bind;
pub use cursor::{Cursor, CursorError};
pub use delimited_by::delimited_by;
pub use driver::{parse, parse_partial};
pub use end::end_of_input;
pub use error::{Expected, Failure, FailureKind, GrammarError, ParseError};
pub use exactly::exactly;
pub use except::except;
pub use filter::filter;
pub use lazy::lazy;
pub use many::many;
pub use map::map;
pub use named::named;
pub use optional::optional;
pub use or::or;
pub use parser::{BoxedParser, ParseResult, Parser, from_fn};
pub use position::{Positioned, Span, position};
pub use succeed::{fail, succeed};
pub use text::text;
pub use token::token;
pub use until::until;
pub use utf8::char::{
    any_char, char, char_except, char_except_any, char_except_if, char_if, digit, letter,
    letter_or_digit, whitespace,
};
pub use utf8::pattern::pattern;
pub use utf8::string::string;
pub use xor::xor;
