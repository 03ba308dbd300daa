//! Configuration validation

use super::models::{LoggingConfig, TokenConfig};
use crate::auth::FeaturePolicy;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for TokenConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating token configuration");

        if self.known_features.iter().any(|name| name.trim().is_empty()) {
            return Err("Known feature names cannot be empty".to_string());
        }

        if self.unknown_features == FeaturePolicy::Ignore && self.known_features.is_empty() {
            return Err(
                "Ignoring unknown features requires at least one known feature".to_string(),
            );
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))?;

        Ok(())
    }
}
