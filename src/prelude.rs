//! Extension traits for method-style combinator chaining.
//!
//! ```
//! use textcomb::prelude::*;
//! ```

pub use crate::and::AndExt;
pub use crate::at_least_once::AtLeastOnceExt;
pub use crate::bind::BindExt;
pub use crate::delimited_by::DelimitedByExt;
pub use crate::exactly::ExactlyExt;
pub use crate::except::ExceptExt;
pub use crate::filter::FilterExt;
pub use crate::many::ManyExt;
pub use crate::map::MapExt;
pub use crate::named::NamedExt;
pub use crate::optional::OptionalExt;
pub use crate::or::OrExt;
pub use crate::parser::Parser;
pub use crate::position::PositionExt;
pub use crate::text::TextExt;
pub use crate::token::TokenExt;
pub use crate::xor::XOrExt;
