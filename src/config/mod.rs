//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BECOME` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use become_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Likert scale: {:?}", config.likert.scale);
//! ```

mod error;
mod likert;
mod logging;
mod scale;

pub use error::{ConfigError, ValidationError};
pub use likert::LikertConfig;
pub use logging::LoggingConfig;
pub use scale::ScaleConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration (0-100 scale, canonical Likert points).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Value domain for expert estimates
    #[serde(default)]
    pub scale: ScaleConfig,

    /// Likert decision scale
    #[serde(default)]
    pub likert: LikertConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BECOME` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Splits `BECOME__LIKERT__SCALE` on commas into a list
    ///
    /// # Environment Variable Format
    ///
    /// - `BECOME__SCALE__MAX=10` -> `scale.max = 10`
    /// - `BECOME__LIKERT__SCALE=1,2,3,4,5` -> `likert.scale = [1, 2, 3, 4, 5]`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BECOME")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("likert.scale")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scale.validate()?;
        self.likert.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Whether compromise results should carry a Likert decision
    pub fn attaches_likert(&self) -> bool {
        self.scale.is_canonical_likert_domain()
    }
}
