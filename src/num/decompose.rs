//! Decimal decomposition of `f64` values.
//!
//! Every helper first rounds to [`SIGNIFICANT_DIGITS`] significant digits so
//! binary noise (`0.1 + 0.2 = 0.30000000000000004`) never reaches a digit
//! count or a mantissa. Rounding goes through Rust's decimal formatter, which
//! is correctly rounded, instead of multiplying by powers of ten.

use serde::{Deserialize, Serialize};

/// Precision used to strip floating point noise before inspecting digits.
pub const SIGNIFICANT_DIGITS: usize = 10;

/// `value = mantissa × 10^exponent` with `1 <= |mantissa| < 10`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MantissaExponent {
    pub mantissa: f64,
    pub exponent: i32,
}

impl MantissaExponent {
    pub fn value(&self) -> f64 {
        format!("{}e{}", self.mantissa, self.exponent)
            .parse()
            .unwrap_or(f64::NAN)
    }
}

/// Decompose `value` into a normalized mantissa/exponent pair.
///
/// Returns `None` for zero (its exponent is `-∞`) and for non-finite input.
///
/// ```
/// use nice_seq::num::to_exponential_pair;
///
/// let pair = to_exponential_pair(37.0).unwrap();
/// assert_eq!((pair.mantissa, pair.exponent), (3.7, 1));
/// ```
pub fn to_exponential_pair(value: f64) -> Option<MantissaExponent> {
    if value == 0.0 || !value.is_finite() {
        return None;
    }
    let text = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = text.split_once('e')?;
    Some(MantissaExponent {
        mantissa: mantissa.parse().ok()?,
        exponent: exponent.parse().ok()?,
    })
}

/// Round to `digits` significant digits (at least one).
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    if !value.is_finite() {
        return value;
    }
    let rounded: f64 = format!("{:.*e}", digits.max(1) - 1, value)
        .parse()
        .unwrap_or(value);
    normalize_zero(rounded)
}

/// Round to a fixed number of digits after the decimal point.
pub fn round_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded: f64 = format!("{:.*}", decimals, value).parse().unwrap_or(value);
    normalize_zero(rounded)
}

/// Number of digits in the integer part of `|value|` (`0.5 -> 1`).
pub fn int_digits_count(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let int_part = round_significant(value.abs(), SIGNIFICANT_DIGITS).trunc();
    format!("{int_part:.0}").len()
}

/// Number of digits after the decimal point in the shortest decimal form.
pub fn decimal_digits_count(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let text = round_significant(value.abs(), SIGNIFICANT_DIGITS).to_string();
    text.split_once('.').map_or(0, |(_, frac)| frac.len())
}

/// Digits after the decimal point in the shortest form that round-trips
/// `value` exactly (`1.0 / 3.0 -> 16`, `0.1 + 0.2 -> 17`).
///
/// Use this for user-supplied inputs; [`decimal_digits_count`] is for
/// values that may already carry arithmetic noise.
pub fn shortest_decimal_digits(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let text = value.abs().to_string();
    text.split_once('.').map_or(0, |(_, frac)| frac.len())
}

// `-0.0` prints as "-0", which would leak into labels.
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// A number of the form `significand × 10^exponent`.
///
/// The representation is normalized (no trailing zeros in the significand,
/// zero is `0 × 10^0`), so two equal round numbers compare equal field-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundNumber {
    significand: i64,
    exponent: i32,
}

impl RoundNumber {
    pub const ZERO: RoundNumber = RoundNumber {
        significand: 0,
        exponent: 0,
    };

    pub fn new(significand: i64, exponent: i32) -> Self {
        if significand == 0 {
            return Self::ZERO;
        }
        let mut significand = significand;
        let mut exponent = exponent;
        while significand % 10 == 0 {
            significand /= 10;
            exponent += 1;
        }
        Self {
            significand,
            exponent,
        }
    }

    /// Read `value` (rounded to [`SIGNIFICANT_DIGITS`]) as a round number.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value == 0.0 {
            return Some(Self::ZERO);
        }
        let text = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
        let (mantissa, exponent) = text.split_once('e')?;
        let exponent: i32 = exponent.parse().ok()?;
        let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
        let magnitude: i64 = digits.parse().ok()?;
        let significand = if value < 0.0 { -magnitude } else { magnitude };
        Some(Self::new(significand, exponent - (SIGNIFICANT_DIGITS as i32 - 1)))
    }

    pub fn significand(&self) -> i64 {
        self.significand
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Digits in the significand (`0` for zero).
    pub fn significant_digits(&self) -> usize {
        if self.significand == 0 {
            0
        } else {
            self.significand.unsigned_abs().to_string().len()
        }
    }

    /// `self × factor`, or `None` on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Self> {
        self.significand
            .checked_mul(factor)
            .map(|significand| Self::new(significand, self.exponent))
    }

    /// Closest `f64` to the exact decimal value.
    pub fn value(&self) -> f64 {
        let parsed: f64 = format!("{}e{}", self.significand, self.exponent)
            .parse()
            .unwrap_or(f64::NAN);
        normalize_zero(parsed)
    }
}

impl std::fmt::Display for RoundNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Whether `value` is `n × 10^k` with at most `max_significant_digits` digits in `n`.
pub fn is_round_number(value: f64, max_significant_digits: usize) -> bool {
    RoundNumber::from_f64(value).is_some_and(|r| r.significant_digits() <= max_significant_digits)
}
