//! Domain types shared by the fitters, the CLI and the reports.
//!
//! This module defines:
//!
//! - the caller's request (`FitRequest`, `Priority`)
//! - fit outputs (`FitResult`, `FitOutcome`)

pub mod types;

pub use types::*;
