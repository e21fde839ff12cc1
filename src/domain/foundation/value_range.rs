//! Closed value range for expert estimates (e.g. a project's 0-100 scale).

use serde::{Deserialize, Serialize};

use super::{FuzzyNumber, ValidationError};

/// Inclusive `[min, max]` range that estimates must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValueRange")]
pub struct ValueRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawValueRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawValueRange> for ValueRange {
    type Error = ValidationError;

    fn try_from(raw: RawValueRange) -> Result<Self, Self::Error> {
        ValueRange::new(raw.min, raw.max)
    }
}

impl ValueRange {
    /// The `0..=100` range on which Likert interpretation is meaningful.
    pub const PERCENT: Self = Self {
        min: 0.0,
        max: 100.0,
    };

    /// Creates a range; bounds must be finite with `min < max`.
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        if !min.is_finite() {
            return Err(ValidationError::non_finite("min", min));
        }
        if !max.is_finite() {
            return Err(ValidationError::non_finite("max", max));
        }
        if min >= max {
            return Err(ValidationError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// True when `value` lies within the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks every component of `fuzzy` against the range.
    pub fn check(&self, fuzzy: &FuzzyNumber) -> Result<(), ValidationError> {
        let named = [
            ("lower", fuzzy.lower()),
            ("peak", fuzzy.peak()),
            ("upper", fuzzy.upper()),
        ];
        for (field, value) in named {
            if !self.contains(value) {
                return Err(ValidationError::out_of_scale(field, value, self.min, self.max));
            }
        }
        Ok(())
    }

    /// True for exactly `0..=100`.
    pub fn is_percent(&self) -> bool {
        *self == Self::PERCENT
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::PERCENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_new_rejects_inverted_bounds() {
        assert!(ValueRange::new(10.0, 10.0).is_err());
        assert!(ValueRange::new(10.0, 5.0).is_err());
        assert!(ValueRange::new(f64::NAN, 5.0).is_err());
        assert!(ValueRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn range_contains_is_inclusive() {
        let range = ValueRange::new(1.0, 5.0).unwrap();
        assert!(range.contains(1.0));
        assert!(range.contains(5.0));
        assert!(!range.contains(5.000_1));
    }

    #[test]
    fn range_check_reports_first_offending_component() {
        let range = ValueRange::PERCENT;
        let fuzzy = FuzzyNumber::new(90.0, 100.0, 110.0).unwrap();
        assert_eq!(
            range.check(&fuzzy),
            Err(ValidationError::out_of_scale("upper", 110.0, 0.0, 100.0))
        );
        assert!(range.check(&FuzzyNumber::new(0.0, 50.0, 100.0).unwrap()).is_ok());
    }

    #[test]
    fn default_range_is_percent() {
        assert!(ValueRange::default().is_percent());
        assert!(!ValueRange::new(0.0, 10.0).unwrap().is_percent());
    }
}
