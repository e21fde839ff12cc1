//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the BeCoMe domain.

mod errors;
mod fuzzy_number;
mod ids;
mod value_range;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use fuzzy_number::FuzzyNumber;
pub(crate) use fuzzy_number::finite_mean;
pub use ids::ExpertId;
pub use value_range::ValueRange;
