pub mod number;

pub use number::{Number, decimal, integer, number};
