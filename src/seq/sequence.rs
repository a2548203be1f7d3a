//! Arithmetic sequences.
//!
//! `ArithmeticSequence` is an immutable value: a non-empty list of elements
//! with a constant signed difference (`tolerance`). Elements are rounded to
//! the exact decimal precision of their inputs as they are generated, so
//! `0.1 × 3` comes out as `0.3` while `start` keeps every digit.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::num::{round_decimals, shortest_decimal_digits};

/// Tolerances are clamped to this many decimal digits.
pub const MAX_TOLERANCE_DECIMALS: usize = 1;

/// Ordering of a sequence's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
    /// Single element, or a degenerate fallback such as `[0, 0]`.
    Constant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SequenceParts")]
pub struct ArithmeticSequence {
    values: Vec<f64>,
    tolerance: f64,
}

impl ArithmeticSequence {
    /// Build `count` elements `start + i × tolerance`.
    ///
    /// `tolerance` is rounded to [`MAX_TOLERANCE_DECIMALS`] decimal digits.
    ///
    /// # Errors
    /// - `count` is zero
    /// - `start` or `tolerance` is not finite
    /// - the rounded tolerance is zero while `count > 1`
    pub fn build(start: f64, tolerance: f64, count: usize) -> Result<Self, AppError> {
        if count < 1 {
            return Err(AppError::invalid_input("Sequence count must be >= 1."));
        }
        if !(start.is_finite() && tolerance.is_finite()) {
            return Err(AppError::invalid_input(format!(
                "Sequence start/tolerance must be finite (start={start}, tolerance={tolerance})."
            )));
        }

        let tolerance = round_decimals(tolerance, MAX_TOLERANCE_DECIMALS);
        if tolerance == 0.0 && count > 1 {
            return Err(AppError::invalid_input(
                "Sequence tolerance rounds to 0; a multi-element sequence needs a step of at least 0.1.",
            ));
        }

        let decimals = shortest_decimal_digits(start).max(shortest_decimal_digits(tolerance));
        let values = (0..count)
            .map(|i| match i {
                0 => start,
                _ => round_decimals(start + i as f64 * tolerance, decimals),
            })
            .collect();
        Ok(Self { values, tolerance })
    }

    /// Build `length` evenly spaced elements from `start` towards `end`.
    ///
    /// The step is clamped like in [`ArithmeticSequence::build`], so the last
    /// element only lands exactly on `end` when `(end - start) / (length - 1)`
    /// has at most one decimal digit.
    ///
    /// # Errors
    /// Same as [`ArithmeticSequence::build`], plus non-finite `end`.
    pub fn from_bounds(start: f64, end: f64, length: usize) -> Result<Self, AppError> {
        if !end.is_finite() {
            return Err(AppError::invalid_input(format!("Sequence end must be finite (end={end}).")));
        }
        if length <= 1 {
            return Self::build(start, 0.0, length);
        }
        Self::build(start, (end - start) / (length as f64 - 1.0), length)
    }

    /// The two-element "no fit" result.
    pub fn fallback(first: f64, second: f64) -> Self {
        Self {
            values: vec![first, second],
            tolerance: second - first,
        }
    }

    /// Elements already computed exactly by a fitter.
    pub(crate) fn from_parts(values: Vec<f64>, tolerance: f64) -> Self {
        debug_assert!(!values.is_empty());
        Self { values, tolerance }
    }

    pub fn start(&self) -> f64 {
        self.values[0]
    }

    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Signed difference between consecutive elements.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Magnitude of the tolerance.
    pub fn step(&self) -> f64 {
        self.tolerance.abs()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a sequence has at least one element.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn direction(&self) -> Direction {
        if self.len() < 2 || self.tolerance == 0.0 {
            Direction::Constant
        } else if self.tolerance > 0.0 {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.values.iter().any(|&v| v == value)
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Unvalidated wire form; see `TryFrom` below.
#[derive(Deserialize)]
struct SequenceParts {
    values: Vec<f64>,
    tolerance: f64,
}

impl TryFrom<SequenceParts> for ArithmeticSequence {
    type Error = AppError;

    fn try_from(parts: SequenceParts) -> Result<Self, Self::Error> {
        if parts.values.is_empty() {
            return Err(AppError::invalid_input("Sequence must have at least one element."));
        }
        Ok(Self {
            values: parts.values,
            tolerance: parts.tolerance,
        })
    }
}

impl<'a> IntoIterator for &'a ArithmeticSequence {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_counts_elements_from_start() {
        let seq = ArithmeticSequence::build(1.0, 2.0, 6).unwrap();
        assert_eq!(seq.values(), &[1.0, 3.0, 5.0, 7.0, 9.0, 11.0]);
        assert_eq!(seq.direction(), Direction::Ascending);
        assert_eq!(seq.tolerance(), 2.0);
    }

    #[test]
    fn build_strips_float_noise() {
        let seq = ArithmeticSequence::build(0.0, 0.1, 4).unwrap();
        assert_eq!(seq.values(), &[0.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn build_keeps_every_digit_of_start() {
        let third = 1.0 / 3.0;
        let seq = ArithmeticSequence::build(third, 1.0, 3).unwrap();
        assert_eq!(seq.start(), third);
        assert_eq!(seq.values(), &[third, third + 1.0, third + 2.0]);

        let seq = ArithmeticSequence::build(123_456.789_123_4, 0.5, 3).unwrap();
        assert_eq!(
            seq.values(),
            &[123_456.789_123_4, 123_457.289_123_4, 123_457.789_123_4]
        );
    }

    #[test]
    fn build_descending() {
        let seq = ArithmeticSequence::build(40.0, -10.0, 6).unwrap();
        assert_eq!(seq.values(), &[40.0, 30.0, 20.0, 10.0, 0.0, -10.0]);
        assert_eq!(seq.direction(), Direction::Descending);
        assert_eq!(seq.step(), 10.0);
        assert!(seq.contains(0.0));
    }

    #[test]
    fn build_clamps_tolerance_to_one_decimal() {
        let seq = ArithmeticSequence::build(0.0, 0.26, 3).unwrap();
        assert_eq!(seq.tolerance(), 0.3);
        assert_eq!(seq.values(), &[0.0, 0.3, 0.6]);
    }

    #[test]
    fn build_rejects_invalid_input() {
        assert_eq!(ArithmeticSequence::build(0.0, 1.0, 0).unwrap_err().exit_code(), 2);
        assert!(ArithmeticSequence::build(0.0, 0.04, 3).is_err());
        assert!(ArithmeticSequence::build(f64::NAN, 1.0, 3).is_err());
    }

    #[test]
    fn single_element_sequence_is_constant() {
        let seq = ArithmeticSequence::build(5.0, 0.0, 1).unwrap();
        assert_eq!(seq.values(), &[5.0]);
        assert_eq!(seq.direction(), Direction::Constant);
        assert_eq!(seq.start(), seq.last());
    }

    #[test]
    fn from_bounds_spans_both_directions() {
        let up = ArithmeticSequence::from_bounds(0.0, 1.0, 11).unwrap();
        assert_eq!(up.len(), 11);
        assert_eq!(up.last(), 1.0);

        let down = ArithmeticSequence::from_bounds(10.0, 0.0, 5).unwrap();
        assert_eq!(down.values(), &[10.0, 7.5, 5.0, 2.5, 0.0]);
    }

    #[test]
    fn fallback_keeps_raw_bounds() {
        let seq = ArithmeticSequence::fallback(5.0, 3.0);
        assert_eq!(seq.values(), &[5.0, 3.0]);
        assert_eq!(seq.direction(), Direction::Descending);

        let zero = ArithmeticSequence::fallback(0.0, 0.0);
        assert_eq!(zero.direction(), Direction::Constant);
    }

    #[test]
    fn deserialize_rejects_empty_values() {
        let err = serde_json::from_str::<ArithmeticSequence>(r#"{"values":[],"tolerance":1}"#);
        assert!(err.is_err());

        let seq: ArithmeticSequence =
            serde_json::from_str(r#"{"values":[40,30,20],"tolerance":-10}"#).unwrap();
        assert_eq!(seq.last(), 20.0);
        assert_eq!(seq.direction(), Direction::Descending);
    }
}
