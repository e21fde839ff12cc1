//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "BECOME_LOG";

/// Builds the filter: `BECOME_LOG` when set and valid, otherwise the
/// configured directive, otherwise `info`.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global tracing subscriber.
///
/// Idempotent: only the first call installs anything, and an already
/// installed global subscriber is left in place.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);

        let result = if config.json {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_target(true))
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true))
                .with(filter)
                .try_init()
        };

        if let Err(err) = result {
            tracing::debug!(error = %err, "Tracing subscriber already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        let config = LoggingConfig::default();
        init_tracing(&config);
        init_tracing(&config);
        tracing::debug!("still logging after repeated init");
    }

    #[test]
    fn build_filter_uses_configured_directive() {
        std::env::remove_var(LOG_ENV_VAR);
        let config = LoggingConfig {
            filter: "warn".to_string(),
            ..Default::default()
        };
        assert_eq!(build_filter(&config).to_string(), "warn");
    }

    #[test]
    fn build_filter_falls_back_on_bad_directive() {
        std::env::remove_var(LOG_ENV_VAR);
        let config = LoggingConfig {
            filter: "become_core=notalevel".to_string(),
            ..Default::default()
        };
        assert_eq!(build_filter(&config).to_string(), "info");
    }
}
