//! A drop-in complex number type for ordinary arithmetic expressions.
//!
//! [`Complex`] is a plain value type over two `f64` components. It mixes
//! freely with `f64` constants in arithmetic and comparisons, formats in
//! electrical-engineering j-notation and parses from a pair of
//! whitespace-separated numbers.

extern crate thiserror;

pub mod complex;

pub use complex::{Complex, ParseComplexError};
