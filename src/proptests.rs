//! Property tests for the fitting core.

use proptest::prelude::*;

use crate::domain::Priority;
use crate::fit::{IntervalCandidate, best_arithmetic_sequence, best_data_interval, candidate_steps};
use crate::num::{decimal_digits_count, is_round_number};
use crate::seq::{fix_interval, fix_interval_round};

fn priority() -> impl Strategy<Value = Option<Priority>> {
    prop_oneof![
        Just(None),
        Just(Some(Priority::Tolerance)),
        Just(Some(Priority::DesiredLen)),
    ]
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Whether any nice step yields a data interval with a length in `[min_len, max_len]`.
fn length_range_achievable(min: f64, max: f64, min_len: usize, max_len: usize) -> bool {
    fix_interval_round(min, max).is_some_and(|(lo, hi)| {
        candidate_steps(lo.value(), hi.value(), max_len)
            .into_iter()
            .filter_map(|step| IntervalCandidate::evaluate(step, lo, hi))
            .any(|c| (min_len..=max_len).contains(&c.len()))
    })
}

proptest! {
    #[test]
    fn fixed_interval_contains_range_and_zero(min in -1.0e6f64..=0.0, max in 0.0f64..=1.0e6) {
        let (lo, hi) = fix_interval(min, max);
        prop_assert!(lo <= min && hi >= max, "[{lo}, {hi}] misses [{min}, {max}]");
        prop_assert!(lo <= 0.0 && hi >= 0.0);
        prop_assert!(is_round_number(lo, 2) && is_round_number(hi, 2), "[{lo}, {hi}]");
    }

    #[test]
    fn data_interval_satisfies_hard_constraints(
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
        min_len in 2usize..10,
        extra in 0usize..20,
    ) {
        let (min, max) = ordered(a, b);
        let fit = best_data_interval(min, max, min_len, min_len + extra);
        prop_assume!(!fit.is_fallback());

        let seq = &fit.sequence;
        prop_assert!(seq.contains(0.0), "{:?}", seq.values());
        prop_assert!(seq.start() >= max && seq.last() <= min, "{:?}", seq.values());
        prop_assert!(seq.step() >= 0.1);
        prop_assert!(decimal_digits_count(seq.step()) <= 1);
        prop_assert!(seq.values().windows(2).all(|w| w[0] > w[1]));
        prop_assert!(seq.values().iter().all(|&v| is_round_number(v, 10)));
    }

    #[test]
    fn data_interval_length_in_range_when_achievable(
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
        min_len in 2usize..10,
        extra in 0usize..20,
    ) {
        let (min, max) = ordered(a, b);
        let max_len = min_len + extra;
        let fit = best_data_interval(min, max, min_len, max_len);
        if length_range_achievable(min, max, min_len, max_len) {
            prop_assert!(!fit.is_fallback());
            let len = fit.sequence.len();
            prop_assert!(
                (min_len..=max_len).contains(&len),
                "len {len} outside [{min_len}, {max_len}] for [{min}, {max}]"
            );
        }
    }

    #[test]
    fn arithmetic_sequence_satisfies_hard_constraints(
        min in -1.0e4f64..1.0e4,
        width in 2.0f64..1.0e4,
        desired_len in 2usize..50,
        priority in priority(),
    ) {
        let max = min + width;
        let fit = best_arithmetic_sequence(min, max, desired_len, priority);
        prop_assert!(!fit.is_fallback());

        let seq = &fit.sequence;
        prop_assert_eq!(seq.start(), min);
        prop_assert!(seq.last() <= max);
        prop_assert!(seq.tolerance() >= 1.0 && seq.tolerance().fract() == 0.0);
        prop_assert!(seq.values().windows(2).all(|w| w[0] < w[1]));
        prop_assert!(seq.len() <= desired_len);
        // Elements stay `min + i × tolerance` up to f64 resolution.
        let scale = min.abs().max(max.abs());
        for (i, &v) in seq.values().iter().enumerate() {
            let expected = min + i as f64 * seq.tolerance();
            prop_assert!((v - expected).abs() <= scale * 1e-12, "a_{i} = {v}, expected {expected}");
        }
    }

    #[test]
    fn desired_len_priority_hits_length_when_step_fits(
        min in -1.0e4f64..1.0e4,
        width in 2.0f64..1.0e4,
        desired_len in 2usize..50,
    ) {
        let max = min + width;
        let span = max - min;
        let fit = best_arithmetic_sequence(min, max, desired_len, Some(Priority::DesiredLen));
        prop_assert!(!fit.is_fallback());
        if (span / (desired_len as f64 - 1.0)).floor() >= 1.0 {
            prop_assert_eq!(fit.sequence.len(), desired_len);
            prop_assert_eq!(fit.sequence.tolerance(), (span / (desired_len as f64 - 1.0)).floor());
        }
    }

    #[test]
    fn fitters_are_deterministic(
        a in -1.0e5f64..1.0e5,
        b in -1.0e5f64..1.0e5,
        desired_len in 2usize..20,
        priority in priority(),
    ) {
        let (min, max) = ordered(a, b);
        prop_assert_eq!(best_data_interval(min, max, 5, 15), best_data_interval(min, max, 5, 15));
        prop_assert_eq!(
            best_arithmetic_sequence(min, max, desired_len, priority),
            best_arithmetic_sequence(min, max, desired_len, priority)
        );
    }
}
