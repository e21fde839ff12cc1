//! Likert scale configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::likert::{LikertScale, CANONICAL_LIKERT_POINTS};

/// Discrete decision scale used by the Likert interpreter
#[derive(Debug, Clone, Deserialize)]
pub struct LikertConfig {
    /// Scale points in tie-break order
    #[serde(default = "default_points")]
    pub scale: Vec<i32>,
}

impl LikertConfig {
    /// Build the validated scale
    pub fn to_scale(&self) -> Result<LikertScale, ValidationError> {
        LikertScale::new(self.scale.clone()).map_err(|_| ValidationError::EmptyLikertScale)
    }

    /// Validate Likert configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_scale().map(|_| ())
    }
}

impl Default for LikertConfig {
    fn default() -> Self {
        Self {
            scale: default_points(),
        }
    }
}

fn default_points() -> Vec<i32> {
    CANONICAL_LIKERT_POINTS.to_vec()
}
