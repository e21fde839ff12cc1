//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer validates boundary input and orchestrates domain operations.
//! Following CQRS, it separates the aggregation command from the Likert query.

pub mod handlers;

pub use handlers::{
    CalculateCompromiseCommand, CalculateCompromiseHandler, CalculateCompromiseResult,
    CompromiseView, FuzzyNumberView, InterpretLikertHandler, InterpretLikertQuery,
    InterpretLikertResult, LikertDecisionView, OpinionInput,
};
