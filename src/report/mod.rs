//! Reporting utilities: terminal text, header tables and JSON for fit results.

pub mod format;

pub use format::*;
