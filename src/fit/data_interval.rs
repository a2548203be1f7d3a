//! Best-fit descending "data interval" sequences.
//!
//! Given a raw `[min, max]`, we produce a descending sequence such that:
//!
//! 1. it contains `0`
//! 2. its step is `>= 0.1` with at most one decimal digit
//! 3. it is strictly descending
//! 4. every element is a round number `n × 10^k`
//! 5. the first element is `>= max` and the last is `<= min`
//! 6. its length lies in `[min_len, max_len]` when some nice step allows it
//!
//! The envelope comes from [`fix_interval_round`], the steps from
//! [`candidate_steps`], and the choice between them from
//! [`select_interval_candidate`]. Elements are generated as exact multiples
//! of the step, so no float noise leaks into them.

use tracing::{debug, trace};

use crate::domain::FitResult;
use crate::fit::candidates::{IntervalCandidate, candidate_steps};
use crate::fit::selection::select_interval_candidate;
use crate::seq::{ArithmeticSequence, fix_interval_round};

/// Length ranges above this are clamped.
pub const MAX_INTERVAL_LEN: usize = 1_000;

/// Fit a nice descending sequence covering `[min, max]`.
///
/// Returns the fallback `[max, min]` when no step produces a valid sequence,
/// e.g. for `min == max == 0` or non-finite bounds.
///
/// ```
/// use nice_seq::fit::best_data_interval;
///
/// let fit = best_data_interval(3.0, 7.0, 5, 15);
/// assert_eq!(fit.values(), &[7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
/// ```
pub fn best_data_interval(min: f64, max: f64, min_len: usize, max_len: usize) -> FitResult {
    let (min_len, max_len) = clamp_len_range(min_len, max_len);

    let Some((lo, hi)) = fix_interval_round(min, max) else {
        debug!(min, max, "non-finite bounds, returning fallback");
        return FitResult::fallback(max, min);
    };

    let candidates: Vec<IntervalCandidate> = candidate_steps(lo.value(), hi.value(), max_len)
        .into_iter()
        .filter_map(|step| IntervalCandidate::evaluate(step, lo, hi))
        .collect();
    for c in &candidates {
        trace!(step = c.step.value(), len = c.len(), "data interval candidate");
    }

    let Some(best) = select_interval_candidate(&candidates, min_len, max_len) else {
        debug!(min, max, "no candidate step, returning fallback");
        return FitResult::fallback(max, min);
    };

    match descending_sequence(&best) {
        Some(sequence) => {
            debug!(
                min,
                max,
                step = best.step.value(),
                len = sequence.len(),
                in_range = (min_len..=max_len).contains(&sequence.len()),
                "fitted data interval"
            );
            FitResult::fitted(sequence)
        }
        None => {
            debug!(min, max, step = best.step.value(), "step overflowed, returning fallback");
            FitResult::fallback(max, min)
        }
    }
}

/// `min_len >= 2`, `min_len <= max_len <= MAX_INTERVAL_LEN`.
fn clamp_len_range(min_len: usize, max_len: usize) -> (usize, usize) {
    let min_len = min_len.clamp(2, MAX_INTERVAL_LEN);
    let max_len = max_len.clamp(min_len, MAX_INTERVAL_LEN);
    (min_len, max_len)
}

fn descending_sequence(candidate: &IntervalCandidate) -> Option<ArithmeticSequence> {
    let values = (candidate.bottom..=candidate.top)
        .rev()
        .map(|i| candidate.step.checked_mul(i).map(|r| r.value()))
        .collect::<Option<Vec<f64>>>()?;
    Some(ArithmeticSequence::from_parts(values, -candidate.step.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::{decimal_digits_count, is_round_number};
    use crate::seq::Direction;

    fn assert_hard_constraints(min: f64, max: f64, fit: &FitResult) {
        let seq = &fit.sequence;
        assert!(!fit.is_fallback(), "unexpected fallback for [{min}, {max}]");
        assert!(seq.contains(0.0), "{:?} misses 0", seq.values());
        assert!(seq.step() >= 0.1);
        assert!(decimal_digits_count(seq.step()) <= 1);
        assert_eq!(seq.direction(), Direction::Descending);
        assert!(seq.values().windows(2).all(|w| w[0] > w[1]));
        assert!(seq.values().iter().all(|&v| is_round_number(v, 10)));
        assert!(seq.start() >= max && seq.last() <= min);
    }

    #[test]
    fn mixed_sign_range() {
        let fit = best_data_interval(-7.0, 34.0, 5, 15);
        assert_hard_constraints(-7.0, 34.0, &fit);
        assert_eq!(
            fit.values(),
            &[35.0, 30.0, 25.0, 20.0, 15.0, 10.0, 5.0, 0.0, -5.0, -10.0]
        );
    }

    #[test]
    fn narrow_length_range_picks_coarser_step() {
        let fit = best_data_interval(-7.0, 34.0, 5, 7);
        assert_hard_constraints(-7.0, 34.0, &fit);
        assert_eq!(fit.values(), &[40.0, 30.0, 20.0, 10.0, 0.0, -10.0]);
    }

    #[test]
    fn positive_range_is_anchored_at_zero() {
        let fit = best_data_interval(3.0, 7.0, 5, 15);
        assert_hard_constraints(3.0, 7.0, &fit);
        assert_eq!(fit.sequence.last(), 0.0);
    }

    #[test]
    fn negative_range_is_anchored_at_zero() {
        let fit = best_data_interval(-480.0, -20.0, 5, 15);
        assert_hard_constraints(-480.0, -20.0, &fit);
        assert_eq!(fit.sequence.start(), 0.0);
        assert_eq!(fit.sequence.last(), -500.0);
    }

    #[test]
    fn small_fractional_range_uses_tenths() {
        let fit = best_data_interval(-0.3, 0.7, 5, 15);
        assert_hard_constraints(-0.3, 0.7, &fit);
        assert_eq!(fit.sequence.step(), 0.1);
        assert_eq!(fit.values()[0], 0.7);
        assert_eq!(fit.sequence.last(), -0.3);
    }

    #[test]
    fn tiny_range_falls_to_closest_length() {
        let fit = best_data_interval(0.0, 0.00001, 5, 15);
        assert_hard_constraints(0.0, 0.00001, &fit);
        assert_eq!(fit.values(), &[0.1, 0.0]);
    }

    #[test]
    fn zero_width_zero_range_falls_back() {
        let fit = best_data_interval(0.0, 0.0, 5, 15);
        assert!(fit.is_fallback());
        assert_eq!(fit.values(), &[0.0, 0.0]);
    }

    #[test]
    fn non_finite_bounds_fall_back() {
        let fit = best_data_interval(f64::NAN, 3.0, 5, 15);
        assert!(fit.is_fallback());
        assert_eq!(fit.values()[0], 3.0);
    }

    #[test]
    fn invalid_length_range_is_clamped() {
        let fit = best_data_interval(-7.0, 34.0, 0, 1);
        assert_hard_constraints(-7.0, 34.0, &fit);
        assert_eq!(fit.sequence.len(), 3);
    }

    #[test]
    fn refitting_is_deterministic() {
        let a = best_data_interval(-123.4, 5678.9, 5, 15);
        let b = best_data_interval(-123.4, 5678.9, 5, 15);
        assert_eq!(a, b);
        assert_hard_constraints(-123.4, 5678.9, &a);
    }
}
