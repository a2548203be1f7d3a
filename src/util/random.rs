//! Random helpers.
//!
//! Every function takes the generator explicitly: pass a seeded
//! `StdRng` for reproducible output, or `rand::thread_rng()` otherwise.
//! Nothing in the fitting core uses randomness.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::num::round_decimals;

/// CJK Unified Ideographs used by [`random_chinese_string`].
const CJK_FIRST: u32 = 0x4E00;
const CJK_LAST: u32 = 0x9FA5;

/// Uniform integer in `[min, max]`, or `min` when the range holds no integer.
pub fn random_int_inclusive<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let lo = min.ceil();
    let hi = max.floor();
    if !(lo.is_finite() && hi.is_finite()) || lo > hi {
        return min;
    }
    rng.gen_range(lo as i64..=hi as i64) as f64
}

/// Uniform float in `[min, max]`.
///
/// With `decimal_digits`, the value is rounded to that many digits after the
/// decimal point and clamped back into the range.
pub fn random_float_inclusive<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
    decimal_digits: Option<u32>,
) -> f64 {
    if !(min.is_finite() && max.is_finite()) {
        return min;
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if lo == hi {
        return lo;
    }
    let value = rng.gen_range(lo..=hi);
    match decimal_digits {
        Some(digits) => round_decimals(value, digits as usize).clamp(lo, hi),
        None => value,
    }
}

/// `len` ASCII letters, lower and upper case with equal probability.
pub fn random_english_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| {
            let base = if rng.gen_bool(0.5) { b'a' } else { b'A' };
            char::from(base + rng.gen_range(0..26u8))
        })
        .collect()
}

/// `len` characters from the CJK Unified Ideographs block.
pub fn random_chinese_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from_u32(rng.gen_range(CJK_FIRST..=CJK_LAST)).unwrap_or('\u{4E00}'))
        .collect()
}

/// Shuffle in place (Fisher–Yates, O(n)).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// A uniformly chosen element, or `None` for an empty slice.
pub fn random_item<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}
