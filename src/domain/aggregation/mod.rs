//! Aggregation Module - Best Compromise Mean (BeCoMe) over expert opinions.
//!
//! # Components
//!
//! - `Opinion` - An expert's fuzzy estimate
//! - `MedianStrategy` - Odd/even median selection by nearest centroid
//! - `AggregationCalculator` - Mean, median, and compromise capability set
//! - `BestCompromiseCalculator` - The default calculator
//! - `AggregationResult` - Best compromise, mean, median, and max error
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. Failures are returned to the caller
//! and never logged here.

mod calculator;
mod errors;
mod median_strategy;
mod opinion;
mod result;

pub use calculator::{AggregationCalculator, BestCompromiseCalculator};
pub use errors::AggregationError;
pub use median_strategy::{median_centroid, MedianStrategy};
pub use opinion::Opinion;
pub use result::AggregationResult;
