pub mod char;
pub mod pattern;
pub mod string;

pub use self::char::{
    CharClass, CharParser, any_char, char, char_except, char_except_any, char_except_if, char_if,
    digit, letter, letter_or_digit, whitespace,
};
pub use pattern::{PatternParser, pattern};
pub use string::{StringParser, string};
