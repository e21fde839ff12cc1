//! Likert Module - Discrete decisions from fuzzy estimates.
//!
//! - `LikertScale` - Ordered scale points (canonical `0, 25, 50, 75, 100`)
//! - `LikertInterpreter` - Snaps a centroid to the nearest scale point
//! - `LikertDecision` - Scale point plus decision and recommendation text

mod decision;
mod interpreter;
mod scale;

pub use decision::{LikertDecision, UNKNOWN_RECOMMENDATION};
pub use interpreter::LikertInterpreter;
pub use scale::{LikertScale, CANONICAL_LIKERT_POINTS};
