//! Median selection strategies for odd and even opinion counts.

use serde::{Deserialize, Serialize};

use super::{AggregationError, Opinion};
use crate::domain::foundation::{finite_mean, FuzzyNumber};

/// How the median fuzzy number is chosen, selected by opinion count parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianStrategy {
    /// Take the opinion whose centroid is closest to the median centroid.
    Odd,
    /// Average the two opinions closest to the median centroid.
    Even,
}

impl MedianStrategy {
    /// Picks the strategy for `count` opinions.
    pub fn for_count(count: usize) -> Self {
        if count % 2 == 0 {
            MedianStrategy::Even
        } else {
            MedianStrategy::Odd
        }
    }

    /// Selects the median fuzzy number.
    ///
    /// `sorted` must be in ascending centroid order; ties are broken by
    /// taking the first match in that order.
    ///
    /// # Edge Cases
    /// - Empty input: `EmptyOpinions`
    /// - `Even` with a single opinion: that opinion's fuzzy number
    pub fn select(
        &self,
        sorted: &[Opinion],
        median_centroid: f64,
    ) -> Result<FuzzyNumber, AggregationError> {
        let first = closest_index(sorted, median_centroid, None)
            .ok_or(AggregationError::EmptyOpinions)?;

        match self {
            MedianStrategy::Odd => Ok(*sorted[first].fuzzy()),
            MedianStrategy::Even => {
                let second = closest_index(sorted, median_centroid, Some(first)).unwrap_or(first);
                Ok(FuzzyNumber::average(&[
                    *sorted[first].fuzzy(),
                    *sorted[second].fuzzy(),
                ])?)
            }
        }
    }
}

/// Statistical median of the centroids of `sorted`.
///
/// Middle value for odd counts, mean of the two middle values for even counts.
pub fn median_centroid(sorted: &[Opinion]) -> Option<f64> {
    let len = sorted.len();
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    if len % 2 == 0 {
        Some(finite_mean(&[sorted[mid - 1].centroid(), sorted[mid].centroid()]))
    } else {
        Some(sorted[mid].centroid())
    }
}

/// Index of the opinion nearest to `target`, skipping `skip`.
/// Strict comparison keeps the earliest index on ties.
fn closest_index(opinions: &[Opinion], target: f64, skip: Option<usize>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, opinion) in opinions.iter().enumerate() {
        if skip == Some(index) {
            continue;
        }

        let distance = (opinion.centroid() - target).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}
