//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed around by value during fitting
//! - printed as JSON by the `nice` binary

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::seq::ArithmeticSequence;

/// Default lower bound on the length of a fitted data interval.
pub const DEFAULT_MIN_LEN: usize = 5;
/// Default upper bound on the length of a fitted data interval.
pub const DEFAULT_MAX_LEN: usize = 15;
/// Default desired length of a fitted arithmetic sequence.
pub const DEFAULT_DESIRED_LEN: usize = 5;

/// What an arithmetic-sequence fit optimizes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// Coarsest integer step; the length may drop below the desired length.
    Tolerance,
    /// Exactly the desired length whenever the range allows it.
    DesiredLen,
}

impl Priority {
    pub fn display_name(self) -> &'static str {
        match self {
            Priority::Tolerance => "tolerance",
            Priority::DesiredLen => "desired-len",
        }
    }
}

/// Inputs of a fit. Never mutated by the fitters.
///
/// `min_len`/`max_len` drive [`crate::fit::best_data_interval`];
/// `desired_len`/`priority` drive [`crate::fit::best_arithmetic_sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitRequest {
    pub min: f64,
    pub max: f64,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub desired_len: Option<usize>,
    pub priority: Option<Priority>,
}

impl FitRequest {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_len: None,
            max_len: None,
            desired_len: None,
            priority: None,
        }
    }

    pub fn with_len_range(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = Some(min_len);
        self.max_len = Some(max_len);
        self
    }

    pub fn with_desired_len(mut self, desired_len: usize) -> Self {
        self.desired_len = Some(desired_len);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn min_len_or_default(&self) -> usize {
        self.min_len.unwrap_or(DEFAULT_MIN_LEN)
    }

    pub fn max_len_or_default(&self) -> usize {
        self.max_len.unwrap_or(DEFAULT_MAX_LEN)
    }

    pub fn desired_len_or_default(&self) -> usize {
        self.desired_len.unwrap_or(DEFAULT_DESIRED_LEN)
    }

    /// Nice descending sequence covering `[min, max]`.
    pub fn fit_data_interval(&self) -> FitResult {
        crate::fit::best_data_interval(
            self.min,
            self.max,
            self.min_len_or_default(),
            self.max_len_or_default(),
        )
    }

    /// Integer-stepped ascending sequence anchored at `min`.
    pub fn fit_arithmetic_sequence(&self) -> FitResult {
        crate::fit::best_arithmetic_sequence(
            self.min,
            self.max,
            self.desired_len_or_default(),
            self.priority,
        )
    }
}

/// Whether a fit satisfied every hard constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitOutcome {
    Fitted,
    /// No sequence satisfied the constraints; the raw bounds were returned.
    Fallback,
}

/// Output of a fitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub sequence: ArithmeticSequence,
    pub outcome: FitOutcome,
}

impl FitResult {
    pub fn fitted(sequence: ArithmeticSequence) -> Self {
        Self {
            sequence,
            outcome: FitOutcome::Fitted,
        }
    }

    pub fn fallback(first: f64, second: f64) -> Self {
        Self {
            sequence: ArithmeticSequence::fallback(first, second),
            outcome: FitOutcome::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.outcome == FitOutcome::Fallback
    }

    pub fn values(&self) -> &[f64] {
        self.sequence.values()
    }

    pub fn into_sequence(self) -> ArithmeticSequence {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults() {
        let req = FitRequest::new(-7.0, 34.0);
        assert_eq!(req.min_len_or_default(), 5);
        assert_eq!(req.max_len_or_default(), 15);
        assert_eq!(req.desired_len_or_default(), 5);
        assert_eq!(req.priority, None);
    }

    #[test]
    fn request_dispatches_to_fitters() {
        let req = FitRequest::new(1.0, 100.0)
            .with_desired_len(5)
            .with_priority(Priority::DesiredLen);
        assert_eq!(
            req.fit_arithmetic_sequence().values(),
            &[1.0, 25.0, 49.0, 73.0, 97.0]
        );

        let zero = FitRequest::new(0.0, 0.0).with_len_range(5, 15);
        assert!(zero.fit_data_interval().is_fallback());
    }

    #[test]
    fn priority_serializes_kebab_case() {
        let json = serde_json::to_string(&Priority::DesiredLen).unwrap();
        assert_eq!(json, "\"desired-len\"");
    }
}
