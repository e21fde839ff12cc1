//! BeCoMe - Best Compromise Mean
//!
//! This crate aggregates expert opinions expressed as triangular fuzzy
//! numbers into a single best-compromise estimate, and optionally maps that
//! estimate onto a discrete Likert decision scale.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
