//! Likert decision value object and canonical decision texts.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Decision text and recommendation for each canonical scale point.
static CANONICAL_TEXTS: Lazy<HashMap<i32, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        (
            0,
            (
                "Strongly disagree",
                "The proposal is not recommended for implementation.",
            ),
        ),
        (
            25,
            (
                "Rather disagree",
                "The proposal needs significant revision before it can be reconsidered.",
            ),
        ),
        (
            50,
            (
                "Neutral",
                "The proposal requires further analysis before a decision is made.",
            ),
        ),
        (
            75,
            (
                "Rather agree",
                "The proposal is recommended with minor adjustments.",
            ),
        ),
        (
            100,
            (
                "Strongly agree",
                "The proposal is strongly recommended for implementation.",
            ),
        ),
    ])
});

/// Recommendation attached to scale points without canonical text.
pub const UNKNOWN_RECOMMENDATION: &str = "No recommendation available for this scale value.";

/// A discrete decision derived from a fuzzy estimate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LikertDecision {
    likert_value: i32,
    decision_text: String,
    recommendation: String,
}

impl LikertDecision {
    /// Builds the decision for a scale point, falling back to generic text
    /// for points outside the canonical five.
    pub(crate) fn for_value(likert_value: i32) -> Self {
        match CANONICAL_TEXTS.get(&likert_value) {
            Some((decision_text, recommendation)) => Self {
                likert_value,
                decision_text: (*decision_text).to_string(),
                recommendation: (*recommendation).to_string(),
            },
            None => Self {
                likert_value,
                decision_text: format!("Unknown ({})", likert_value),
                recommendation: UNKNOWN_RECOMMENDATION.to_string(),
            },
        }
    }

    pub fn likert_value(&self) -> i32 {
        self.likert_value
    }

    pub fn decision_text(&self) -> &str {
        &self.decision_text
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    /// True when the value carries canonical decision text.
    pub fn is_canonical(&self) -> bool {
        CANONICAL_TEXTS.contains_key(&self.likert_value)
    }
}
