//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the fitting code stays free of presentation concerns
//! - output changes are localized (the golden tests below pin the layout)

use serde::Serialize;

use crate::domain::{FitRequest, FitResult};
use crate::error::{AppError, EXIT_INTERNAL};
use crate::num::{SIGNIFICANT_DIGITS, round_significant};
use crate::util::column_label;

/// Shortest decimal form, without float noise or `-0`.
pub fn format_number(value: f64) -> String {
    format!("{}", round_significant(value, SIGNIFICANT_DIGITS))
}

pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| format_number(v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary of a data-interval fit.
pub fn format_data_interval(request: &FitRequest, result: &FitResult) -> String {
    let mut out = String::new();
    out.push_str("=== nice - data interval ===\n");
    out.push_str(&format!(
        "Input: [{}, {}] | length range [{}, {}]\n",
        format_number(request.min),
        format_number(request.max),
        request.min_len_or_default(),
        request.max_len_or_default(),
    ));
    push_result(&mut out, result);
    out
}

/// Summary of an arithmetic-sequence fit.
pub fn format_arithmetic_sequence(request: &FitRequest, result: &FitResult) -> String {
    let mut out = String::new();
    out.push_str("=== nice - arithmetic sequence ===\n");
    out.push_str(&format!(
        "Input: [{}, {}] | desired length {} | priority {}\n",
        format_number(request.min),
        format_number(request.max),
        request.desired_len_or_default(),
        request.priority.map_or("auto", |p| p.display_name()),
    ));
    push_result(&mut out, result);
    out
}

fn push_result(out: &mut String, result: &FitResult) {
    let seq = &result.sequence;
    if result.is_fallback() {
        out.push_str("Result: fallback (no sequence satisfies every constraint)\n");
    } else {
        out.push_str(&format!(
            "Step: {} ({:?}, n={})\n",
            format_number(seq.step()),
            seq.direction(),
            seq.len(),
        ));
    }
    out.push_str(&format!("Sequence: {}\n", format_values(seq.values())));
}

/// Round-number envelope of a raw range.
pub fn format_interval(min: f64, max: f64, round_min: f64, round_max: f64) -> String {
    format!(
        "[{}, {}] -> [{}, {}]\n",
        format_number(min),
        format_number(max),
        format_number(round_min),
        format_number(round_max),
    )
}

/// Values laid out under spreadsheet-style column headers.
pub fn format_table(values: &[f64]) -> String {
    let cells: Vec<(String, String)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (column_label(i + 1), format_number(v)))
        .collect();

    let mut header = String::new();
    let mut row = String::new();
    for (i, (label, value)) in cells.iter().enumerate() {
        let width = label.len().max(value.len());
        if i > 0 {
            header.push_str(" | ");
            row.push_str(" | ");
        }
        header.push_str(&format!("{label:>width$}"));
        row.push_str(&format!("{value:>width$}"));
    }
    format!("{header}\n{row}\n")
}

/// Pretty JSON for any serializable report payload.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::new(EXIT_INTERNAL, format!("Failed to serialize JSON: {e}")))
}
