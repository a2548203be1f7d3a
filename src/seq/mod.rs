//! Sequence building blocks: round-number envelopes and arithmetic sequences.

pub mod interval;
pub mod sequence;

pub use interval::*;
pub use sequence::*;
