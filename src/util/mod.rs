//! Small stateless helpers that sit next to the fitting core.
//!
//! - divisibility and rounding helpers (`arith`)
//! - spreadsheet-style column labels (`column`)
//! - seeded/unseeded random helpers (`random`)
//! - points and rectangles (`geometry`)

pub mod arith;
pub mod column;
pub mod geometry;
pub mod random;

pub use arith::*;
pub use column::*;
pub use geometry::*;
pub use random::*;
