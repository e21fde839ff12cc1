//! BeCoMe calculator - arithmetic mean, median, and best compromise.

use super::median_strategy::median_centroid;
use super::{AggregationError, AggregationResult, MedianStrategy, Opinion};
use crate::domain::foundation::FuzzyNumber;

/// Aggregation capability set over expert opinions.
///
/// `sort_by_centroid` and `compute_compromise` have default implementations
/// in terms of the other operations, so an alternative aggregation rule only
/// needs to supply a mean and a median.
pub trait AggregationCalculator: Send + Sync {
    /// Stable ascending sort by centroid. The input is left untouched and
    /// opinions with equal centroids keep their relative order.
    fn sort_by_centroid(&self, opinions: &[Opinion]) -> Vec<Opinion> {
        let mut sorted = opinions.to_vec();
        sorted.sort_by(|a, b| a.cmp_by_centroid(b));
        sorted
    }

    /// Componentwise arithmetic mean of all opinions.
    fn compute_arithmetic_mean(&self, opinions: &[Opinion]) -> Result<FuzzyNumber, AggregationError>;

    /// Median fuzzy number of all opinions.
    fn compute_median(&self, opinions: &[Opinion]) -> Result<FuzzyNumber, AggregationError>;

    /// Best compromise: componentwise average of mean and median.
    fn compute_compromise(&self, opinions: &[Opinion]) -> Result<AggregationResult, AggregationError> {
        let mean = self.compute_arithmetic_mean(opinions)?;
        let median = self.compute_median(opinions)?;
        AggregationResult::from_parts(mean, median, opinions.len())
    }
}

/// Default BeCoMe calculator.
///
/// Stateless; a single instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestCompromiseCalculator;

impl BestCompromiseCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl AggregationCalculator for BestCompromiseCalculator {
    /// # Edge Cases
    /// - Empty opinions: `EmptyOpinions`
    /// - Single opinion: that opinion's fuzzy number
    fn compute_arithmetic_mean(&self, opinions: &[Opinion]) -> Result<FuzzyNumber, AggregationError> {
        if opinions.is_empty() {
            return Err(AggregationError::EmptyOpinions);
        }

        let fuzzies: Vec<FuzzyNumber> = opinions.iter().map(|o| *o.fuzzy()).collect();
        Ok(FuzzyNumber::average(&fuzzies)?)
    }

    /// # Algorithm
    /// 1. Sort opinions by centroid (stable)
    /// 2. Take the statistical median of the centroid values
    /// 3. Let the parity strategy pick the opinion(s) nearest that centroid
    ///
    /// Equal centroids resolve to the first opinion in sorted order.
    fn compute_median(&self, opinions: &[Opinion]) -> Result<FuzzyNumber, AggregationError> {
        let sorted = self.sort_by_centroid(opinions);
        let target = median_centroid(&sorted).ok_or(AggregationError::EmptyOpinions)?;

        MedianStrategy::for_count(sorted.len()).select(&sorted, target)
    }
}
