//! ASCII axis rendering for terminal output.
//!
//! This is intentionally "dumb" (fixed-height column), optimized for:
//! - quick visual sanity checks of a fitted data interval
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - tick rows: `<label> +`
//! - other rows: `|`
//! - rows inside the raw data range: trailing `#`

use crate::report::format_number;
use crate::seq::{ArithmeticSequence, Direction};

/// Render `sequence` as a vertical axis, highest value on top.
///
/// The axis gets at least one row per tick.
pub fn render_axis(sequence: &ArithmeticSequence, data_min: f64, data_max: f64, height: usize) -> String {
    let mut out = format!(
        "Axis: step={} | data=[{}, {}]\n",
        format_number(sequence.step()),
        format_number(data_min),
        format_number(data_max),
    );
    if sequence.direction() == Direction::Constant {
        out.push_str("(degenerate range, nothing to draw)\n");
        return out;
    }

    let (y_min, y_max) = value_range(sequence);
    let rows = height.max(sequence.len()).max(2);

    let mut labels: Vec<Option<String>> = vec![None; rows];
    for &v in sequence {
        labels[map_y(v, y_min, y_max, rows)] = Some(format_number(v));
    }
    let width = labels.iter().flatten().map(String::len).max().unwrap_or(0);

    for (row, label) in labels.iter().enumerate() {
        let value = row_value(row, y_min, y_max, rows);
        let bar = if (data_min..=data_max).contains(&value) { " #" } else { "" };
        match label {
            Some(label) => out.push_str(&format!("{label:>width$} +{bar}\n")),
            None => out.push_str(&format!("{:>width$} |{bar}\n", "")),
        }
    }
    out
}

fn value_range(sequence: &ArithmeticSequence) -> (f64, f64) {
    let (a, b) = (sequence.start(), sequence.last());
    if a <= b { (a, b) } else { (b, a) }
}

/// Value at the center of `row` (row 0 is the top).
fn row_value(row: usize, y_min: f64, y_max: f64, rows: usize) -> f64 {
    let u = row as f64 / (rows as f64 - 1.0);
    y_max - u * (y_max - y_min)
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}
