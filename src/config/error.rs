//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Scale bounds must be finite")]
    NonFiniteScaleBound,

    #[error("Scale minimum must be below scale maximum")]
    InvalidScaleRange,

    #[error("Likert scale must contain at least one point")]
    EmptyLikertScale,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
