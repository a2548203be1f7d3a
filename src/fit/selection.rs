//! Selection rules for the fitters.
//!
//! Data intervals (`select_interval_candidate`):
//! 1. Prefer candidates whose length lies in `[min_len, max_len]`
//! 2. Among those, choose the length closest to the midpoint of the range
//! 3. If none qualify, choose the length closest to the range
//! 4. Ties go to the finer step
//!
//! Arithmetic sequences without an explicit priority (`select_tolerance`):
//! choose the length closest to the desired one; ties go to the larger
//! tolerance.

use std::cmp::Ordering;

use crate::fit::candidates::IntervalCandidate;

/// Pick the best data-interval candidate, or `None` if there are none.
pub fn select_interval_candidate(
    candidates: &[IntervalCandidate],
    min_len: usize,
    max_len: usize,
) -> Option<IntervalCandidate> {
    candidates.iter().copied().min_by(|a, b| {
        length_score(a.len(), min_len, max_len)
            .cmp(&length_score(b.len(), min_len, max_len))
            .then_with(|| a.step.value().total_cmp(&b.step.value()))
    })
}

/// `(outside_range, distance)`; lower is better.
///
/// Inside the range the distance is measured to the midpoint, in half
/// units so odd `min_len + max_len` stays exact.
fn length_score(len: usize, min_len: usize, max_len: usize) -> (bool, usize) {
    if len < min_len {
        (true, min_len - len)
    } else if len > max_len {
        (true, len - max_len)
    } else {
        (false, len.saturating_mul(2).abs_diff(min_len + max_len))
    }
}

/// An integer step and the length of the sequence it yields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceChoice {
    pub tolerance: f64,
    pub len: usize,
}

/// Pick the choice whose length is closest to `desired_len`.
pub fn select_tolerance(choices: &[ToleranceChoice], desired_len: usize) -> Option<ToleranceChoice> {
    choices.iter().copied().min_by(|a, b| {
        a.len
            .abs_diff(desired_len)
            .cmp(&b.len.abs_diff(desired_len))
            .then_with(|| b.tolerance.partial_cmp(&a.tolerance).unwrap_or(Ordering::Equal))
    })
}
