//! Serializable input and output shapes for the aggregation entry points.

use serde::{Deserialize, Serialize};

use crate::domain::aggregation::{AggregationResult, Opinion};
use crate::domain::foundation::{ExpertId, FuzzyNumber, ValidationError};
use crate::domain::likert::LikertDecision;

/// One expert's raw estimate as received from the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionInput {
    pub expert_id: String,
    pub lower: f64,
    pub peak: f64,
    pub upper: f64,
}

impl OpinionInput {
    pub fn new(expert_id: impl Into<String>, lower: f64, peak: f64, upper: f64) -> Self {
        Self {
            expert_id: expert_id.into(),
            lower,
            peak,
            upper,
        }
    }

    /// Validates the identifier and the fuzzy number.
    pub fn to_opinion(&self) -> Result<Opinion, ValidationError> {
        let expert_id = ExpertId::try_new(self.expert_id.clone())?;
        let fuzzy = FuzzyNumber::new(self.lower, self.peak, self.upper)?;
        Ok(Opinion::new(expert_id, fuzzy))
    }
}

/// A fuzzy number with its centroid, as exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyNumberView {
    pub lower: f64,
    pub peak: f64,
    pub upper: f64,
    pub centroid: f64,
}

impl From<&FuzzyNumber> for FuzzyNumberView {
    fn from(fuzzy: &FuzzyNumber) -> Self {
        Self {
            lower: fuzzy.lower(),
            peak: fuzzy.peak(),
            upper: fuzzy.upper(),
            centroid: fuzzy.centroid(),
        }
    }
}

/// Likert decision as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikertDecisionView {
    pub likert_value: i32,
    pub decision_text: String,
    pub recommendation: String,
}

impl From<&LikertDecision> for LikertDecisionView {
    fn from(decision: &LikertDecision) -> Self {
        Self {
            likert_value: decision.likert_value(),
            decision_text: decision.decision_text().to_string(),
            recommendation: decision.recommendation().to_string(),
        }
    }
}

/// Output of the compromise entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompromiseView {
    pub best_compromise: FuzzyNumberView,
    pub arithmetic_mean: FuzzyNumberView,
    pub median: FuzzyNumberView,
    pub max_error: f64,
    pub num_experts: usize,
    pub is_even: bool,
    /// Present only when the value domain is the canonical 0-100 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likert: Option<LikertDecisionView>,
}

impl CompromiseView {
    pub fn new(result: &AggregationResult, likert: Option<&LikertDecision>) -> Self {
        Self {
            best_compromise: result.best_compromise().into(),
            arithmetic_mean: result.arithmetic_mean().into(),
            median: result.median().into(),
            max_error: result.max_error(),
            num_experts: result.num_experts(),
            is_even: result.is_even(),
            likert: likert.map(LikertDecisionView::from),
        }
    }
}
