//! Aggregation command and query handlers.
//!
//! Entry points for the boundary layer: raw estimates in, serializable
//! views out.

mod calculate_compromise;
mod interpret_likert;
mod views;

pub use calculate_compromise::{
    CalculateCompromiseCommand, CalculateCompromiseHandler, CalculateCompromiseResult,
};
pub use interpret_likert::{InterpretLikertHandler, InterpretLikertQuery, InterpretLikertResult};
pub use views::{CompromiseView, FuzzyNumberView, LikertDecisionView, OpinionInput};
