//! InterpretLikertHandler - Query handler mapping a fuzzy estimate to a Likert decision.

use tracing::debug;

use super::views::LikertDecisionView;
use crate::domain::foundation::{DomainError, FuzzyNumber};
use crate::domain::likert::LikertInterpreter;

/// Query to interpret a fuzzy estimate, typically a best compromise.
#[derive(Debug, Clone, Copy)]
pub struct InterpretLikertQuery {
    pub lower: f64,
    pub peak: f64,
    pub upper: f64,
}

impl From<&FuzzyNumber> for InterpretLikertQuery {
    fn from(fuzzy: &FuzzyNumber) -> Self {
        Self {
            lower: fuzzy.lower(),
            peak: fuzzy.peak(),
            upper: fuzzy.upper(),
        }
    }
}

/// Result of successful interpretation.
pub type InterpretLikertResult = LikertDecisionView;

/// Handler for Likert interpretation.
///
/// Only the input fuzzy number is validated; interpretation itself cannot fail.
#[derive(Debug, Clone, Default)]
pub struct InterpretLikertHandler {
    interpreter: LikertInterpreter,
}

impl InterpretLikertHandler {
    pub fn new(interpreter: LikertInterpreter) -> Self {
        Self { interpreter }
    }

    pub fn handle(&self, query: InterpretLikertQuery) -> Result<InterpretLikertResult, DomainError> {
        let fuzzy = FuzzyNumber::new(query.lower, query.peak, query.upper)?;
        let decision = self.interpreter.interpret(&fuzzy);

        debug!(
            centroid = fuzzy.centroid(),
            likert_value = decision.likert_value(),
            "Interpreted fuzzy estimate"
        );

        Ok(LikertDecisionView::from(&decision))
    }
}
