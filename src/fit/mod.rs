//! Nice-sequence fitting.
//!
//! Responsibilities:
//!
//! - generate nice candidate steps (`candidates`)
//! - choose among candidates (`selection`)
//! - fit descending data intervals (`data_interval`)
//! - fit ascending integer-stepped sequences (`arithmetic`)

pub mod arithmetic;
pub mod candidates;
pub mod data_interval;
pub mod selection;

pub use arithmetic::*;
pub use candidates::*;
pub use data_interval::*;
pub use selection::*;
