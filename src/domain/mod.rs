//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (fuzzy numbers, IDs, errors)
//! - `aggregation` - Pure BeCoMe aggregation of expert opinions
//! - `likert` - Mapping of fuzzy estimates onto a discrete decision scale

pub mod aggregation;
pub mod foundation;
pub mod likert;
