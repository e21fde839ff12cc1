//! Expert opinion value object.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{ExpertId, FuzzyNumber, ValidationError};

/// A single expert's estimate expressed as a fuzzy number.
///
/// Equality and hashing cover both fields. Ordering by centroid is exposed
/// through [`Opinion::cmp_by_centroid`] since two unequal opinions may share
/// a centroid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opinion {
    expert_id: ExpertId,
    fuzzy: FuzzyNumber,
}

impl Opinion {
    /// Creates a new opinion. The fuzzy number is already validated.
    pub fn new(expert_id: impl Into<ExpertId>, fuzzy: FuzzyNumber) -> Self {
        Self {
            expert_id: expert_id.into(),
            fuzzy,
        }
    }

    /// Creates an opinion from raw components.
    pub fn from_components(
        expert_id: impl Into<ExpertId>,
        lower: f64,
        peak: f64,
        upper: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(expert_id, FuzzyNumber::new(lower, peak, upper)?))
    }

    pub fn expert_id(&self) -> &ExpertId {
        &self.expert_id
    }

    pub fn fuzzy(&self) -> &FuzzyNumber {
        &self.fuzzy
    }

    /// Centroid of the underlying fuzzy number.
    pub fn centroid(&self) -> f64 {
        self.fuzzy.centroid()
    }

    /// Compares two opinions by centroid only.
    pub fn cmp_by_centroid(&self, other: &Opinion) -> Ordering {
        self.centroid().total_cmp(&other.centroid())
    }
}
