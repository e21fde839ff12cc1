//! CalculateCompromiseHandler - Command handler for the BeCoMe aggregation.
//!
//! Validates raw expert estimates, runs the aggregation calculator, and
//! optionally attaches a Likert decision for the best compromise.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::views::{CompromiseView, OpinionInput};
use crate::config::{AppConfig, ValidationError as ConfigValidationError};
use crate::domain::aggregation::{
    AggregationCalculator, AggregationError, BestCompromiseCalculator, Opinion,
};
use crate::domain::foundation::{DomainError, ValidationError, ValueRange};
use crate::domain::likert::LikertInterpreter;

/// Command to aggregate a set of expert opinions.
#[derive(Debug, Clone)]
pub struct CalculateCompromiseCommand {
    /// Raw estimates in caller order; must be non-empty.
    pub opinions: Vec<OpinionInput>,
}

/// Result of successful aggregation.
pub type CalculateCompromiseResult = CompromiseView;

/// Handler for aggregating expert opinions into a best compromise.
pub struct CalculateCompromiseHandler {
    calculator: Arc<dyn AggregationCalculator>,
    range: Option<ValueRange>,
    interpreter: Option<LikertInterpreter>,
}

impl CalculateCompromiseHandler {
    pub fn new(calculator: Arc<dyn AggregationCalculator>) -> Self {
        Self {
            calculator,
            range: None,
            interpreter: None,
        }
    }

    /// Rejects estimates with any component outside `range`.
    pub fn with_range(mut self, range: ValueRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Attaches a Likert decision for the best compromise to every result.
    pub fn with_likert(mut self, interpreter: LikertInterpreter) -> Self {
        self.interpreter = Some(interpreter);
        self
    }

    /// Wires the default calculator according to configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigValidationError> {
        let mut handler = Self::new(Arc::new(BestCompromiseCalculator::new()));

        if config.scale.enforce {
            handler = handler.with_range(config.scale.range()?);
        }
        if config.attaches_likert() {
            handler = handler.with_likert(LikertInterpreter::with_scale(config.likert.to_scale()?));
        }

        Ok(handler)
    }

    pub fn handle(
        &self,
        cmd: CalculateCompromiseCommand,
    ) -> Result<CalculateCompromiseResult, DomainError> {
        if cmd.opinions.is_empty() {
            debug!("Rejected aggregation request without opinions");
            return Err(AggregationError::EmptyOpinions.into());
        }

        let opinions = self.validate_opinions(&cmd.opinions)?;
        let result = self.calculator.compute_compromise(&opinions)?;

        let decision = self
            .interpreter
            .as_ref()
            .map(|interpreter| interpreter.interpret(result.best_compromise()));

        debug!(
            num_experts = result.num_experts(),
            max_error = result.max_error(),
            best_compromise = %result.best_compromise(),
            likert_value = ?decision.as_ref().map(|d| d.likert_value()),
            "Computed best compromise"
        );

        Ok(CompromiseView::new(&result, decision.as_ref()))
    }

    /// Converts raw inputs into opinions, enforcing the scale and one
    /// opinion per expert.
    fn validate_opinions(&self, inputs: &[OpinionInput]) -> Result<Vec<Opinion>, DomainError> {
        let mut seen = HashSet::with_capacity(inputs.len());
        let mut opinions = Vec::with_capacity(inputs.len());

        for (index, input) in inputs.iter().enumerate() {
            let opinion = input
                .to_opinion()
                .and_then(|opinion| {
                    if let Some(range) = &self.range {
                        range.check(opinion.fuzzy())?;
                    }
                    Ok(opinion)
                })
                .and_then(|opinion| {
                    if !seen.insert(opinion.expert_id().clone()) {
                        return Err(ValidationError::DuplicateExpert {
                            expert_id: opinion.expert_id().to_string(),
                        });
                    }
                    Ok(opinion)
                })
                .map_err(|err| {
                    debug!(index, expert_id = %input.expert_id, error = %err, "Rejected opinion");
                    DomainError::from(err).with_detail("index", index.to_string())
                })?;

            opinions.push(opinion);
        }

        Ok(opinions)
    }
}
