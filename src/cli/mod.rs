//! Command-line parsing for the `nice` binary.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting code; `app` turns these structs into `FitRequest`s.

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{DEFAULT_DESIRED_LEN, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, Priority};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "nice",
    version,
    about = "Nice-number sequences for axis ticks and table headers"
)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a descending round-number sequence through zero covering [MIN, MAX].
    Interval(IntervalArgs),
    /// Fit an ascending integer-stepped sequence starting exactly at MIN.
    Sequence(SequenceArgs),
    /// Print the round-number envelope of [MIN, MAX].
    Fix(RangeArgs),
    /// Draw the fitted data interval as an ASCII axis.
    Axis(AxisArgs),
}

/// The raw range shared by every subcommand.
#[derive(Debug, Parser, Clone)]
pub struct RangeArgs {
    /// Lower end of the data range.
    #[arg(allow_negative_numbers = true)]
    pub min: f64,

    /// Upper end of the data range.
    #[arg(allow_negative_numbers = true)]
    pub max: f64,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Options for `nice interval`.
#[derive(Debug, Parser, Clone)]
pub struct IntervalArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Shortest acceptable sequence.
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    pub min_len: usize,

    /// Longest acceptable sequence.
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Also print the values under A, B, C... column headers.
    #[arg(long)]
    pub table: bool,

    /// Exit with an error when no nice sequence exists.
    #[arg(long)]
    pub strict: bool,
}

/// Options for `nice sequence`.
#[derive(Debug, Parser, Clone)]
pub struct SequenceArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Desired number of elements.
    #[arg(short = 'n', long, default_value_t = DEFAULT_DESIRED_LEN)]
    pub desired_len: usize,

    /// Optimize the step size or the length first (default: whichever fits better).
    #[arg(long, value_enum)]
    pub priority: Option<Priority>,

    /// Also print the values under A, B, C... column headers.
    #[arg(long)]
    pub table: bool,

    /// Exit with an error when no sequence exists.
    #[arg(long)]
    pub strict: bool,
}

/// Options for `nice axis`.
#[derive(Debug, Parser, Clone)]
pub struct AxisArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Shortest acceptable tick count.
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    pub min_len: usize,

    /// Longest acceptable tick count.
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Axis height (rows); raised to the tick count if smaller.
    #[arg(long, default_value_t = 15)]
    pub height: usize,
}
