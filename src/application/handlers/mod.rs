//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod aggregation;

pub use aggregation::{
    // Commands and Queries
    CalculateCompromiseCommand,
    InterpretLikertQuery,
    // Handlers
    CalculateCompromiseHandler,
    InterpretLikertHandler,
    // Results
    CalculateCompromiseResult,
    InterpretLikertResult,
    // Views
    CompromiseView,
    FuzzyNumberView,
    LikertDecisionView,
    OpinionInput,
};
