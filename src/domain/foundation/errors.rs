//! Error types for the domain layer.
//!
//! # HTTP Status Mapping
//!
//! | Error Code | HTTP Status |
//! |------------|-------------|
//! | ValidationFailed | 422 |
//! | InvalidFuzzyNumber | 422 |
//! | NonFiniteValue | 422 |
//! | OutOfScale | 422 |
//! | DuplicateExpert | 422 |
//! | EmptyOpinions | 400 |
//! | InvalidLikertScale | 400 |

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Fuzzy number must satisfy lower <= peak <= upper, got ({lower}, {peak}, {upper})")]
    InvalidFuzzyNumber { lower: f64, peak: f64, upper: f64 },

    #[error("Field '{field}' must be a finite number, got {value}")]
    NonFiniteComponent { field: String, value: f64 },

    #[error("Cannot average an empty list of fuzzy numbers")]
    EmptyInput,

    #[error("Field '{field}' must be between {min} and {max}, got {value}")]
    OutOfScale {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Expert '{expert_id}' submitted more than one opinion")]
    DuplicateExpert { expert_id: String },

    #[error("Range minimum {min} must be below maximum {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Likert scale must contain at least one point")]
    EmptyLikertScale,
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a non-finite component validation error.
    pub fn non_finite(field: impl Into<String>, value: f64) -> Self {
        ValidationError::NonFiniteComponent {
            field: field.into(),
            value,
        }
    }

    /// Creates an out of scale validation error.
    pub fn out_of_scale(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        ValidationError::OutOfScale {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Returns the error code matching this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::ValidationFailed,
            ValidationError::InvalidFuzzyNumber { .. } => ErrorCode::InvalidFuzzyNumber,
            ValidationError::NonFiniteComponent { .. } => ErrorCode::NonFiniteValue,
            ValidationError::EmptyInput => ErrorCode::EmptyOpinions,
            ValidationError::OutOfScale { .. } => ErrorCode::OutOfScale,
            ValidationError::DuplicateExpert { .. } => ErrorCode::DuplicateExpert,
            ValidationError::InvalidRange { .. } => ErrorCode::ValidationFailed,
            ValidationError::EmptyLikertScale => ErrorCode::InvalidLikertScale,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidFuzzyNumber,
    NonFiniteValue,
    OutOfScale,
    DuplicateExpert,

    // Input errors
    EmptyOpinions,
    InvalidLikertScale,
}

impl ErrorCode {
    /// Suggested HTTP status for the boundary layer.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidFuzzyNumber
            | ErrorCode::NonFiniteValue
            | ErrorCode::OutOfScale
            | ErrorCode::DuplicateExpert => 422,
            ErrorCode::EmptyOpinions | ErrorCode::InvalidLikertScale => 400,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidFuzzyNumber => "INVALID_FUZZY_NUMBER",
            ErrorCode::NonFiniteValue => "NON_FINITE_VALUE",
            ErrorCode::OutOfScale => "OUT_OF_SCALE",
            ErrorCode::DuplicateExpert => "DUPLICATE_EXPERT",
            ErrorCode::EmptyOpinions => "EMPTY_OPINIONS",
            ErrorCode::InvalidLikertScale => "INVALID_LIKERT_SCALE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = err.code();
        let error = DomainError::new(code, err.to_string());
        match err {
            ValidationError::EmptyField { field }
            | ValidationError::NonFiniteComponent { field, .. }
            | ValidationError::OutOfScale { field, .. } => error.with_detail("field", field),
            ValidationError::DuplicateExpert { expert_id } => {
                error.with_detail("expert_id", expert_id)
            }
            _ => error,
        }
    }
}
