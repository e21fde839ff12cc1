//! Opinion scale configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::ValueRange;

/// Value domain that expert estimates must fall within
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleConfig {
    /// Lowest admissible value
    #[serde(default = "default_min")]
    pub min: f64,

    /// Highest admissible value
    #[serde(default = "default_max")]
    pub max: f64,

    /// Reject opinions outside `[min, max]`
    #[serde(default = "default_enforce")]
    pub enforce: bool,
}

impl ScaleConfig {
    /// Build the validated range
    pub fn range(&self) -> Result<ValueRange, ValidationError> {
        ValueRange::new(self.min, self.max).map_err(|_| {
            if !self.min.is_finite() || !self.max.is_finite() {
                ValidationError::NonFiniteScaleBound
            } else {
                ValidationError::InvalidScaleRange
            }
        })
    }

    /// Whether the scale is the 0-100 domain Likert interpretation assumes
    pub fn is_canonical_likert_domain(&self) -> bool {
        self.min == 0.0 && self.max == 100.0
    }

    /// Validate scale configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.range().map(|_| ())
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            enforce: default_enforce(),
        }
    }
}

fn default_min() -> f64 {
    0.0
}

fn default_max() -> f64 {
    100.0
}

fn default_enforce() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_config_defaults() {
        let config = ScaleConfig::default();
        assert_eq!(config.min, 0.0);
        assert_eq!(config.max, 100.0);
        assert!(config.enforce);
        assert!(config.is_canonical_likert_domain());
    }

    #[test]
    fn test_scale_config_rejects_inverted_range() {
        let config = ScaleConfig {
            min: 10.0,
            max: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidScaleRange)
        ));
    }

    #[test]
    fn test_scale_config_rejects_non_finite_bound() {
        let config = ScaleConfig {
            max: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::NonFiniteScaleBound)
        ));
    }

    #[test]
    fn test_custom_scale_is_not_likert_domain() {
        let config = ScaleConfig {
            min: 0.0,
            max: 10.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.is_canonical_likert_domain());
    }

    #[test]
    fn test_scale_config_deserialization() {
        let json = r#"{ "min": 1.0, "max": 5.0, "enforce": false }"#;
        let config: ScaleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.min, 1.0);
        assert_eq!(config.max, 5.0);
        assert!(!config.enforce);
    }
}
