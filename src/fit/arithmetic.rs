//! Best-fit ascending arithmetic sequences with an integer step.
//!
//! The output always starts exactly at `min`, never passes `max`, and
//! steps by a positive integer. Its length is driven by `desired_len` and
//! the caller's [`Priority`]:
//!
//! - `DesiredLen`: exactly `desired_len` elements with the largest step
//!   that fits; if even a step of `1` is too coarse, the longest sequence
//!   the range allows.
//! - `Tolerance`: the coarsest step whose `desired_len`-element sequence
//!   would cover the whole range, i.e. `ceil(span / (desired_len - 1))`.
//!   The sequence stops at the last element `<= max`, so it may be shorter.
//! - no priority: whichever of the two lands closer to `desired_len`.

use tracing::debug;

use crate::domain::{FitResult, Priority};
use crate::fit::selection::{ToleranceChoice, select_tolerance};
use crate::num::{round_decimals, shortest_decimal_digits};
use crate::seq::ArithmeticSequence;

/// Desired lengths above this are clamped.
pub const MAX_DESIRED_LEN: usize = 100_000;

/// Fit an ascending integer-stepped sequence anchored at `min`.
///
/// Returns the fallback `[min, max]` when `max < min`, `desired_len < 2`,
/// `max - min < 1`, either bound or the span is not finite, or `min` is so
/// large that adding the step no longer changes it.
///
/// ```
/// use nice_seq::domain::Priority;
/// use nice_seq::fit::best_arithmetic_sequence;
///
/// let fit = best_arithmetic_sequence(1.0, 100.0, 5, Some(Priority::DesiredLen));
/// assert_eq!(fit.values(), &[1.0, 25.0, 49.0, 73.0, 97.0]);
/// ```
pub fn best_arithmetic_sequence(
    min: f64,
    max: f64,
    desired_len: usize,
    priority: Option<Priority>,
) -> FitResult {
    if !(min.is_finite() && max.is_finite()) || max < min || desired_len < 2 {
        debug!(min, max, desired_len, "infeasible request, returning fallback");
        return FitResult::fallback(min, max);
    }
    let span = max - min;
    if !span.is_finite() {
        debug!(min, max, "span overflows f64, returning fallback");
        return FitResult::fallback(min, max);
    }
    let max_tolerance = span.floor();
    if max_tolerance < 1.0 {
        debug!(min, max, "range narrower than one integer step, returning fallback");
        return FitResult::fallback(min, max);
    }
    let desired_len = desired_len.min(MAX_DESIRED_LEN);

    let by_len = desired_len_tolerance(span, desired_len);
    let by_tolerance = coarse_tolerance(span, desired_len, max_tolerance);
    let len_choice = choice_for(min, max, by_len, desired_len);
    let tolerance_choice = choice_for(min, max, by_tolerance, desired_len);
    let choice = match priority {
        Some(Priority::DesiredLen) => len_choice,
        Some(Priority::Tolerance) => tolerance_choice,
        None => select_tolerance(&[len_choice, tolerance_choice], desired_len).unwrap_or(len_choice),
    };

    let Some(sequence) = ascending_sequence(min, max, choice) else {
        debug!(min, tolerance = choice.tolerance, "step below f64 resolution, returning fallback");
        return FitResult::fallback(min, max);
    };
    debug!(
        min,
        max,
        desired_len,
        priority = priority.map_or("auto", Priority::display_name),
        tolerance = choice.tolerance,
        len = choice.len,
        "fitted arithmetic sequence"
    );
    FitResult::fitted(sequence)
}

/// Largest integer step giving exactly `desired_len` elements, or `1`.
fn desired_len_tolerance(span: f64, desired_len: usize) -> f64 {
    (span / (desired_len as f64 - 1.0)).floor().max(1.0)
}

/// Smallest integer step whose `desired_len` elements reach `span`.
fn coarse_tolerance(span: f64, desired_len: usize, max_tolerance: f64) -> f64 {
    (span / (desired_len as f64 - 1.0)).ceil().clamp(1.0, max_tolerance)
}

/// Elements of `min + i × tolerance` up to `max`, at most `desired_len` of them.
fn choice_for(min: f64, max: f64, tolerance: f64, desired_len: usize) -> ToleranceChoice {
    let mut len = (((max - min) / tolerance).floor() as usize + 1).min(desired_len);
    // Division can round either way across an integer; never step past `max`.
    while len < desired_len && min + len as f64 * tolerance <= max {
        len += 1;
    }
    while len > 1 && min + (len - 1) as f64 * tolerance > max {
        len -= 1;
    }
    ToleranceChoice { tolerance, len }
}

/// `min + i × tolerance`, with addition noise stripped back to the digits of
/// `min` whenever that keeps the offset from `min` exact.
///
/// `None` when consecutive elements are not strictly ascending, i.e. the
/// step is lost to rounding at the magnitude of `min`.
fn ascending_sequence(min: f64, max: f64, choice: ToleranceChoice) -> Option<ArithmeticSequence> {
    let decimals = shortest_decimal_digits(min);
    let values: Vec<f64> = (0..choice.len)
        .map(|i| {
            if i == 0 {
                return min;
            }
            let offset = i as f64 * choice.tolerance;
            let raw = min + offset;
            let clean = round_decimals(raw, decimals);
            if clean <= max && clean - min == offset { clean } else { raw }
        })
        .collect();
    if !values.windows(2).all(|w| w[0] < w[1]) {
        return None;
    }
    Some(ArithmeticSequence::from_parts(values, choice.tolerance))
}
