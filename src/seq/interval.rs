//! Round-number envelopes around a raw `[min, max]` range.
//!
//! Each bound is pushed outward to the next integer or half-integer mantissa
//! at its own order of magnitude (`34 -> 35`, `-0.72 -> -0.75`,
//! `1234 -> 1500`). The envelope always contains zero.

use tracing::trace;

use crate::num::{RoundNumber, to_exponential_pair};

/// Expand `[min, max]` to a round-number envelope that also contains zero.
///
/// Bounds are swapped when `min > max`. `(0, 0)` stays `(0, 0)`.
/// Non-finite input is returned unchanged.
pub fn fix_interval(min: f64, max: f64) -> (f64, f64) {
    let (lo, hi) = fix_interval_round(min, max)
        .map(|(lo, hi)| (lo.value(), hi.value()))
        .unwrap_or((min, max));
    trace!(min, max, lo, hi, "fixed interval");
    (lo, hi)
}

/// Same as [`fix_interval`], keeping the exact round-number representation.
///
/// Returns `None` for non-finite input.
pub fn fix_interval_round(min: f64, max: f64) -> Option<(RoundNumber, RoundNumber)> {
    if !(min.is_finite() && max.is_finite()) {
        return None;
    }
    let (min, max) = if min > max { (max, min) } else { (min, max) };

    let lo = if min < 0.0 {
        round_away_from_zero(min)?
    } else {
        RoundNumber::ZERO
    };
    let hi = if max > 0.0 {
        round_away_from_zero(max)?
    } else {
        RoundNumber::ZERO
    };
    Some((lo, hi))
}

/// Round a nonzero value away from zero to a half-integer mantissa.
fn round_away_from_zero(value: f64) -> Option<RoundNumber> {
    let pair = to_exponential_pair(value)?;
    // Count halves: 3.4 -> 7 halves (3.5), 7.0 -> 14 halves (7).
    let mut halves = (pair.mantissa.abs() * 2.0).ceil() as i64;
    let sign = if value < 0.0 { -1 } else { 1 };
    let mut rounded = RoundNumber::new(sign * halves * 5, pair.exponent - 1);
    // The mantissa was rounded to 10 significant digits; digits beyond that
    // can leave the bound just outside the envelope.
    if rounded.value().abs() < value.abs() {
        halves += 1;
        rounded = RoundNumber::new(sign * halves * 5, pair.exponent - 1);
    }
    Some(rounded)
}
