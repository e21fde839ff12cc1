//! Triangular fuzzy number value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ValidationError;

/// A triangular fuzzy number `(lower, peak, upper)`.
///
/// Invariant: all components are finite and `lower <= peak <= upper`.
/// Instances are immutable; every constructor validates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFuzzyNumber")]
pub struct FuzzyNumber {
    lower: f64,
    peak: f64,
    upper: f64,
}

/// Unvalidated wire shape, only used to route deserialization through `new`.
#[derive(Deserialize)]
struct RawFuzzyNumber {
    lower: f64,
    peak: f64,
    upper: f64,
}

impl TryFrom<RawFuzzyNumber> for FuzzyNumber {
    type Error = ValidationError;

    fn try_from(raw: RawFuzzyNumber) -> Result<Self, Self::Error> {
        FuzzyNumber::new(raw.lower, raw.peak, raw.upper)
    }
}

impl FuzzyNumber {
    /// Creates a fuzzy number, rejecting non-finite components and
    /// any violation of `lower <= peak <= upper`.
    pub fn new(lower: f64, peak: f64, upper: f64) -> Result<Self, ValidationError> {
        for (field, value) in [("lower", lower), ("peak", peak), ("upper", upper)] {
            if !value.is_finite() {
                return Err(ValidationError::non_finite(field, value));
            }
        }

        if lower > peak || peak > upper {
            return Err(ValidationError::InvalidFuzzyNumber { lower, peak, upper });
        }

        Ok(Self { lower, peak, upper })
    }

    /// Creates a crisp number: all three components equal.
    pub fn crisp(value: f64) -> Result<Self, ValidationError> {
        Self::new(value, value, value)
    }

    /// Lower bound (pessimistic estimate).
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Peak (most likely value).
    pub fn peak(&self) -> f64 {
        self.peak
    }

    /// Upper bound (optimistic estimate).
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `[lower, peak, upper]`.
    pub fn components(&self) -> [f64; 3] {
        [self.lower, self.peak, self.upper]
    }

    /// Centroid defuzzification: mean of the three vertices.
    pub fn centroid(&self) -> f64 {
        finite_mean(&self.components())
    }

    /// Componentwise arithmetic mean of the given fuzzy numbers.
    ///
    /// Each component is averaged independently. The mean is monotone, so
    /// the ordering invariant carries over to the result.
    ///
    /// # Errors
    /// - `EmptyInput` when `items` is empty
    pub fn average(items: &[FuzzyNumber]) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let count = items.len() as f64;
        let (lower, peak, upper) = items.iter().fold((0.0, 0.0, 0.0), |acc, f| {
            (acc.0 + f.lower, acc.1 + f.peak, acc.2 + f.upper)
        });
        if lower.is_finite() && peak.is_finite() && upper.is_finite() {
            return Self::new(lower / count, peak / count, upper / count);
        }

        // All three components take the same path so ordering is kept.
        let (lower, peak, upper) = items.iter().fold((0.0, 0.0, 0.0), |acc, f| {
            (
                acc.0 + f.lower / count,
                acc.1 + f.peak / count,
                acc.2 + f.upper / count,
            )
        });

        Self::new(lower, peak, upper)
    }
}

/// Arithmetic mean of finite values.
///
/// Sums first when the sum is representable, otherwise scales each value
/// by the count before adding, so inputs near `f64::MAX` stay finite.
pub(crate) fn finite_mean(values: &[f64]) -> f64 {
    let count = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / count
    } else {
        values.iter().map(|v| v / count).sum()
    }
}

// Components are always finite, so equality is reflexive.
impl Eq for FuzzyNumber {}

impl Hash for FuzzyNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in self.components() {
            // -0.0 == 0.0, so both must hash the same
            let normalized = if value == 0.0 { 0.0_f64 } else { value };
            normalized.to_bits().hash(state);
        }
    }
}

impl fmt::Display for FuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.lower, self.peak, self.upper)
    }
}
