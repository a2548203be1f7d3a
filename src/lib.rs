//! `nice-seq` library crate.
//!
//! Nice-number sequences for axis ticks and table headers:
//!
//! - [`fit::best_data_interval`]: descending round-number sequence through zero
//! - [`fit::best_arithmetic_sequence`]: ascending integer-stepped sequence from `min`
//! - [`seq::fix_interval`]: round-number envelope of a range
//! - [`seq::ArithmeticSequence::build`]: plain arithmetic sequences
//!
//! The binary (`nice`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the library itself stays free of I/O

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod num;
pub mod plot;
pub mod report;
pub mod seq;
pub mod util;

#[cfg(test)]
mod proptests;
