//! Terminal rendering of fitted sequences.

pub mod ascii;

pub use ascii::*;
