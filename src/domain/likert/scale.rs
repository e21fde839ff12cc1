//! Likert scale configuration.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Canonical five-point agreement scale.
pub const CANONICAL_LIKERT_POINTS: [i32; 5] = [0, 25, 50, 75, 100];

/// An ordered, non-empty list of discrete scale points.
///
/// Points keep the order they were given in; that order decides ties when a
/// centroid is equidistant from two points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct LikertScale(Vec<i32>);

impl LikertScale {
    /// The canonical `0, 25, 50, 75, 100` scale.
    pub fn canonical() -> Self {
        Self(CANONICAL_LIKERT_POINTS.to_vec())
    }

    /// Creates a custom scale, rejecting an empty point list.
    pub fn new(points: impl Into<Vec<i32>>) -> Result<Self, ValidationError> {
        let points = points.into();
        if points.is_empty() {
            return Err(ValidationError::EmptyLikertScale);
        }
        Ok(Self(points))
    }

    pub fn points(&self) -> &[i32] {
        &self.0
    }

    /// Returns the point nearest to `value`; the first one in scale order wins ties.
    pub fn nearest(&self, value: f64) -> i32 {
        let mut best = self.0[0];
        let mut best_distance = (f64::from(best) - value).abs();

        for &point in &self.0[1..] {
            let distance = (f64::from(point) - value).abs();
            if distance < best_distance {
                best = point;
                best_distance = distance;
            }
        }

        best
    }

    /// True for the canonical five-point scale.
    pub fn is_canonical(&self) -> bool {
        self.0 == CANONICAL_LIKERT_POINTS
    }
}

impl Default for LikertScale {
    fn default() -> Self {
        Self::canonical()
    }
}

impl TryFrom<Vec<i32>> for LikertScale {
    type Error = ValidationError;

    fn try_from(points: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<LikertScale> for Vec<i32> {
    fn from(scale: LikertScale) -> Self {
        scale.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_scale_has_five_points() {
        let scale = LikertScale::canonical();
        assert_eq!(scale.points(), &[0, 25, 50, 75, 100]);
        assert!(scale.is_canonical());
        assert_eq!(LikertScale::default(), scale);
    }

    #[test]
    fn new_rejects_empty_scale() {
        assert_eq!(
            LikertScale::new(Vec::new()),
            Err(ValidationError::EmptyLikertScale)
        );
    }

    #[test]
    fn nearest_snaps_to_closest_point() {
        let scale = LikertScale::canonical();
        assert_eq!(scale.nearest(50.0), 50);
        assert_eq!(scale.nearest(61.0), 50);
        assert_eq!(scale.nearest(63.0), 75);
        assert_eq!(scale.nearest(-40.0), 0);
        assert_eq!(scale.nearest(250.0), 100);
    }

    #[test]
    fn nearest_tie_prefers_first_in_scale_order() {
        let scale = LikertScale::canonical();
        assert_eq!(scale.nearest(12.5), 0);
        assert_eq!(scale.nearest(87.5), 75);

        let descending = LikertScale::new(vec![100, 50, 0]).unwrap();
        assert_eq!(descending.nearest(75.0), 100);
    }

    #[test]
    fn custom_scale_is_not_canonical() {
        let scale = LikertScale::new(vec![1, 2, 3, 4, 5]).unwrap();
        assert!(!scale.is_canonical());
        assert_eq!(scale.nearest(3.4), 3);
    }

    #[test]
    fn scale_deserializes_through_validation() {
        let scale: LikertScale = serde_json::from_str("[0, 10, 20]").unwrap();
        assert_eq!(scale.points(), &[0, 10, 20]);
        assert!(serde_json::from_str::<LikertScale>("[]").is_err());
    }
}
