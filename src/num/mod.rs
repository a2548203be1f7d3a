//! Number decomposition: mantissa/exponent pairs, digit counts and round numbers.

pub mod decompose;

pub use decompose::*;
