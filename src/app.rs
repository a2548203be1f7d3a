//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs the stderr log subscriber
//! - turns arguments into `FitRequest`s and runs the fitters
//! - prints text, tables, JSON or an ASCII axis

use clap::Parser;
use serde::Serialize;
use tracing::Level;

use crate::cli::{AxisArgs, Cli, Command, IntervalArgs, RangeArgs, SequenceArgs};
use crate::domain::{FitRequest, FitResult};
use crate::error::{AppError, EXIT_NO_RESULT};
use crate::report::{
    format_arithmetic_sequence, format_data_interval, format_interval, format_table, to_json,
};
use crate::seq::fix_interval;

/// Entry point for the `nice` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Interval(args) => handle_interval(&args),
        Command::Sequence(args) => handle_sequence(&args),
        Command::Fix(args) => handle_fix(&args),
        Command::Axis(args) => handle_axis(&args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_interval(args: &IntervalArgs) -> Result<(), AppError> {
    let request = interval_request_from_args(args)?;
    let result = request.fit_data_interval();

    if args.range.json {
        println!("{}", to_json(&result)?);
    } else {
        print!("{}", format_data_interval(&request, &result));
        if args.table {
            print!("{}", format_table(result.values()));
        }
    }
    check_strict(args.strict, &result)
}

fn handle_sequence(args: &SequenceArgs) -> Result<(), AppError> {
    let request = sequence_request_from_args(args)?;
    let result = request.fit_arithmetic_sequence();

    if args.range.json {
        println!("{}", to_json(&result)?);
    } else {
        print!("{}", format_arithmetic_sequence(&request, &result));
        if args.table {
            print!("{}", format_table(result.values()));
        }
    }
    check_strict(args.strict, &result)
}

#[derive(Debug, Serialize)]
struct FixedInterval {
    min: f64,
    max: f64,
    round_min: f64,
    round_max: f64,
}

fn handle_fix(args: &RangeArgs) -> Result<(), AppError> {
    validate_range(args)?;
    let (round_min, round_max) = fix_interval(args.min, args.max);

    if args.json {
        let fixed = FixedInterval {
            min: args.min,
            max: args.max,
            round_min,
            round_max,
        };
        println!("{}", to_json(&fixed)?);
    } else {
        print!("{}", format_interval(args.min, args.max, round_min, round_max));
    }
    Ok(())
}

fn handle_axis(args: &AxisArgs) -> Result<(), AppError> {
    validate_range(&args.range)?;
    validate_len_range(args.min_len, args.max_len)?;
    let request = FitRequest::new(args.range.min, args.range.max)
        .with_len_range(args.min_len, args.max_len);
    let result = request.fit_data_interval();

    if args.range.json {
        println!("{}", to_json(&result)?);
    } else {
        print!(
            "{}",
            crate::plot::render_axis(&result.sequence, request.min, request.max, args.height)
        );
    }
    Ok(())
}

pub fn interval_request_from_args(args: &IntervalArgs) -> Result<FitRequest, AppError> {
    validate_range(&args.range)?;
    validate_len_range(args.min_len, args.max_len)?;
    Ok(FitRequest::new(args.range.min, args.range.max).with_len_range(args.min_len, args.max_len))
}

pub fn sequence_request_from_args(args: &SequenceArgs) -> Result<FitRequest, AppError> {
    validate_range(&args.range)?;
    let mut request =
        FitRequest::new(args.range.min, args.range.max).with_desired_len(args.desired_len);
    if let Some(priority) = args.priority {
        request = request.with_priority(priority);
    }
    Ok(request)
}

fn validate_range(args: &RangeArgs) -> Result<(), AppError> {
    if !(args.min.is_finite() && args.max.is_finite()) {
        return Err(AppError::invalid_input(format!(
            "Invalid range: min={}, max={} (both must be finite).",
            args.min, args.max
        )));
    }
    Ok(())
}

fn validate_len_range(min_len: usize, max_len: usize) -> Result<(), AppError> {
    if min_len < 2 {
        return Err(AppError::invalid_input("--min-len must be >= 2."));
    }
    if max_len < min_len {
        return Err(AppError::invalid_input(format!(
            "--max-len ({max_len}) must be >= --min-len ({min_len})."
        )));
    }
    Ok(())
}

fn check_strict(strict: bool, result: &FitResult) -> Result<(), AppError> {
    if strict && result.is_fallback() {
        return Err(AppError::new(
            EXIT_NO_RESULT,
            "No sequence satisfies the constraints (fallback returned).",
        ));
    }
    Ok(())
}
