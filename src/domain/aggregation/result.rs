//! Aggregation result value object.

use serde::Serialize;

use super::AggregationError;
use crate::domain::foundation::FuzzyNumber;

/// Outcome of a BeCoMe aggregation.
///
/// Built only through [`AggregationResult::from_parts`], which derives the
/// best compromise and the maximum error from the mean and median, so the
/// bundle is always internally consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    best_compromise: FuzzyNumber,
    arithmetic_mean: FuzzyNumber,
    median: FuzzyNumber,
    max_error: f64,
    num_experts: usize,
}

impl AggregationResult {
    /// Composes a result from the arithmetic mean and the median.
    ///
    /// - `best_compromise` = componentwise average of mean and median
    /// - `max_error` = |centroid(mean) - centroid(median)| / 2
    ///
    /// # Errors
    /// - `EmptyOpinions` when `num_experts` is zero
    pub fn from_parts(
        arithmetic_mean: FuzzyNumber,
        median: FuzzyNumber,
        num_experts: usize,
    ) -> Result<Self, AggregationError> {
        if num_experts == 0 {
            return Err(AggregationError::EmptyOpinions);
        }

        let best_compromise = FuzzyNumber::average(&[arithmetic_mean, median])?;
        let max_error = half_gap(arithmetic_mean.centroid(), median.centroid());

        Ok(Self {
            best_compromise,
            arithmetic_mean,
            median,
            max_error,
            num_experts,
        })
    }

    pub fn best_compromise(&self) -> &FuzzyNumber {
        &self.best_compromise
    }

    pub fn arithmetic_mean(&self) -> &FuzzyNumber {
        &self.arithmetic_mean
    }

    pub fn median(&self) -> &FuzzyNumber {
        &self.median
    }

    /// Half the distance between the mean and median centroids.
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    pub fn num_experts(&self) -> usize {
        self.num_experts
    }

    /// True when an even number of experts contributed.
    pub fn is_even(&self) -> bool {
        self.num_experts % 2 == 0
    }
}

/// `|a - b| / 2`, halving first when the difference overflows.
fn half_gap(a: f64, b: f64) -> f64 {
    let gap = a - b;
    if gap.is_finite() {
        gap.abs() / 2.0
    } else {
        (a / 2.0 - b / 2.0).abs()
    }
}
