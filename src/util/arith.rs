//! Integer and rounding helpers.

use std::fmt::Display;

/// Trial-division primality test.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let n = n as u64;
    let mut d: u64 = 5;
    while d.saturating_mul(d) <= n {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}

/// Whether some integer in `[min, max]` is a multiple of `divisor`.
///
/// `range_has_multiple_of(18, 34, 17)` is `true` (34 = 2 × 17).
pub fn range_has_multiple_of(min: i64, max: i64, divisor: i64) -> bool {
    if divisor == 0 {
        return false;
    }
    let (min, max) = ordered(min, max);
    let d = i128::from(divisor).abs();
    // First multiple of `d` at or above `min`.
    let first = -(-i128::from(min)).div_euclid(d) * d;
    first <= i128::from(max)
}

/// Whether some nonzero integer in `[min, max]` divides `dividend`.
///
/// `range_has_divisor_of(15, 17, 34)` is `true` (17 divides 34).
pub fn range_has_divisor_of(min: i64, max: i64, dividend: i64) -> bool {
    let (min, max) = ordered(min, max);
    let in_range = |v: i128| v != 0 && i128::from(min) <= v && v <= i128::from(max);

    if dividend == 0 {
        return min < 0 || max > 0;
    }

    let n = i128::from(dividend).abs();
    let width = i128::from(max) - i128::from(min);
    if width * width <= n {
        return (min..=max).any(|i| i != 0 && i128::from(dividend) % i128::from(i) == 0);
    }

    let mut d: i128 = 1;
    while d * d <= n {
        if n % d == 0 {
            let pair = n / d;
            if in_range(d) || in_range(-d) || in_range(pair) || in_range(-pair) {
                return true;
            }
        }
        d += 1;
    }
    false
}

/// Multiple of `to` closest to `of` (halves round away from zero).
///
/// `nearest_multiple(119.0, 20.0)` is `120`, `nearest_multiple(109.0, 20.0)` is `100`.
pub fn nearest_multiple(of: f64, to: f64) -> f64 {
    if to == 0.0 || !(of.is_finite() && to.is_finite()) {
        return of;
    }
    (of / to).round() * to
}

/// `1 + base + base² + ... + base^power`.
pub fn geometric_series(base: f64, power: u32) -> f64 {
    let mut term = 1.0;
    let mut sum = 1.0;
    for _ in 0..power {
        term *= base;
        sum += term;
    }
    sum
}

/// Concatenate the decimal forms of `items` into one integer.
///
/// `[1, 2, 3, 4, 5] -> 12345`, `["13", "02", "45"] -> 130245`.
/// `None` if the result is empty, contains a non-digit, or overflows.
pub fn concat_integer<T: Display>(items: &[T]) -> Option<u64> {
    let text: String = items.iter().map(ToString::to_string).collect();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b { (a, b) } else { (b, a) }
}
