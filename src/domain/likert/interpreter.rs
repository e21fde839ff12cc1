//! Likert interpreter - snaps a fuzzy estimate onto a discrete decision scale.

use super::{LikertDecision, LikertScale};
use crate::domain::foundation::FuzzyNumber;

/// Maps fuzzy numbers to Likert decisions using centroid defuzzification.
///
/// Holds only its immutable scale, so it can be shared freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikertInterpreter {
    scale: LikertScale,
}

impl LikertInterpreter {
    /// Interpreter over the canonical `0..100` scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpreter over a custom scale.
    pub fn with_scale(scale: LikertScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> &LikertScale {
        &self.scale
    }

    /// Interprets `fuzzy` as the scale point nearest its centroid.
    ///
    /// # Edge Cases
    /// - Centroid equidistant from two points: the earlier point in scale order
    /// - Centroid outside the scale: the nearest end point
    pub fn interpret(&self, fuzzy: &FuzzyNumber) -> LikertDecision {
        LikertDecision::for_value(self.scale.nearest(fuzzy.centroid()))
    }
}
