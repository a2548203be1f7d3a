//! Candidate step generation.
//!
//! Data intervals are fitted by a deterministic search over "nice" steps
//! `{5, 2, 1} × 10^k`. The search space is an explicit list so the
//! selection rules can be tested against it in isolation.
//!
//! Why an explicit grid?
//! - It is deterministic given the same inputs.
//! - The number of candidates is tiny (three per decade), so evaluating all
//!   of them is cheap.

use crate::num::{RoundNumber, to_exponential_pair};

/// Step mantissas within one decade, coarse to fine.
pub const NICE_MANTISSAS: [i64; 3] = [5, 2, 1];

/// Steps never go below `10^-1`, so they carry at most one decimal digit.
pub const MIN_STEP_EXPONENT: i32 = -1;

/// Nice steps worth trying for the envelope `[lo, hi]`, coarse to fine.
///
/// Decades run from one above the exponent of `max(|lo|, |hi|)` down to
/// where a step would need more than roughly `100 × max_len` elements to
/// cover the span, but never below [`MIN_STEP_EXPONENT`].
///
/// Returns an empty list when the envelope is empty or not finite.
pub fn candidate_steps(lo: f64, hi: f64, max_len: usize) -> Vec<RoundNumber> {
    if !(lo.is_finite() && hi.is_finite()) {
        return Vec::new();
    }
    let magnitude = lo.abs().max(hi.abs());
    let Some(pair) = to_exponential_pair(magnitude) else {
        return Vec::new();
    };

    let k_hi = (pair.exponent + 1).max(MIN_STEP_EXPONENT);
    let span = hi - lo;
    let k_lo = ((span / max_len.max(1) as f64).log10().floor() as i32)
        .saturating_sub(1)
        .clamp(MIN_STEP_EXPONENT, k_hi);

    let mut out = Vec::with_capacity(NICE_MANTISSAS.len() * (k_hi - k_lo + 1) as usize);
    for k in (k_lo..=k_hi).rev() {
        for m in NICE_MANTISSAS {
            out.push(RoundNumber::new(m, k));
        }
    }
    out
}

/// A step together with the descending sequence it produces.
///
/// The sequence is `top × step, (top - 1) × step, ..., bottom × step`, with
/// `top >= 0 >= bottom`, so it always passes through zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalCandidate {
    pub step: RoundNumber,
    pub top: i64,
    pub bottom: i64,
}

impl IntervalCandidate {
    /// Smallest span of multiples of `step` that covers `[lo, hi]`.
    ///
    /// Computed exactly on the decimal representations; `None` on overflow.
    pub fn evaluate(step: RoundNumber, lo: RoundNumber, hi: RoundNumber) -> Option<Self> {
        if step.significand() <= 0 {
            return None;
        }
        let top = div_round(hi, step, Rounding::Up)?;
        let bottom = div_round(lo, step, Rounding::Down)?;
        (top > bottom).then_some(Self { step, top, bottom })
    }

    pub fn len(&self) -> usize {
        usize::try_from(self.top - self.bottom + 1).unwrap_or(usize::MAX)
    }

    /// Never true for an evaluated candidate (`top > bottom`).
    pub fn is_empty(&self) -> bool {
        self.top < self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rounding {
    Up,
    Down,
}

/// `value / step` rounded to an integer. `step` must be positive.
fn div_round(value: RoundNumber, step: RoundNumber, rounding: Rounding) -> Option<i64> {
    let shift = value.exponent() - step.exponent();
    let (num, den) = if shift >= 0 {
        let scale = 10i64.checked_pow(shift.unsigned_abs())?;
        (value.significand().checked_mul(scale)?, step.significand())
    } else {
        match 10i64
            .checked_pow(shift.unsigned_abs())
            .and_then(|scale| step.significand().checked_mul(scale))
        {
            Some(den) => (value.significand(), den),
            // |value| is negligible next to the step; only its sign matters.
            None => (value.significand().signum(), i64::MAX),
        }
    };
    Some(match rounding {
        Rounding::Down => num.div_euclid(den),
        Rounding::Up => -(-num).div_euclid(den),
    })
}
