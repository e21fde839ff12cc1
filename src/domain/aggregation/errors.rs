//! Aggregation-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by the aggregation calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregationError {
    /// Mean, median, and compromise are undefined for zero opinions.
    #[error("At least one opinion is required for aggregation")]
    EmptyOpinions,

    /// An intermediate fuzzy number could not be built (e.g. overflow).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<AggregationError> for DomainError {
    fn from(err: AggregationError) -> Self {
        match err {
            AggregationError::EmptyOpinions => {
                DomainError::new(ErrorCode::EmptyOpinions, err.to_string())
            }
            AggregationError::Validation(inner) => inner.into(),
        }
    }
}
