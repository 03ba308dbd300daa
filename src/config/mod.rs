//! Configuration management
//!
//! Loading and validation of the checker's deployment settings. Loading is a
//! separate step from evaluation: checks themselves never touch the
//! filesystem or environment.

pub mod models;
pub mod validation;


pub use models::{LoggingConfig, TokenConfig};
pub use validation::Validate;

use crate::auth::FeaturePolicy;
use crate::utils::error::{CheckerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

const ENV_UNKNOWN_FEATURES: &str = "PERMISSION_CHECKER_UNKNOWN_FEATURES";
const ENV_KNOWN_FEATURES: &str = "PERMISSION_CHECKER_KNOWN_FEATURES";
const ENV_LOG_LEVEL: &str = "PERMISSION_CHECKER_LOG_LEVEL";
const ENV_LOG_JSON: &str = "PERMISSION_CHECKER_LOG_JSON";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Token adaptation
    #[serde(default)]
    pub token: TokenConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CheckerConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| CheckerError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate YAML configuration
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| CheckerError::config(format!("Failed to parse config: {}", e)))?;

        config.validate().map_err(CheckerError::Config)?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(policy) = lookup(ENV_UNKNOWN_FEATURES) {
            config.token.unknown_features = match policy.trim().to_ascii_lowercase().as_str() {
                "preserve" => FeaturePolicy::Preserve,
                "ignore" => FeaturePolicy::Ignore,
                other => {
                    return Err(CheckerError::config(format!(
                        "Invalid {}: '{}' (expected 'preserve' or 'ignore')",
                        ENV_UNKNOWN_FEATURES, other
                    )));
                }
            };
        }

        if let Some(features) = lookup(ENV_KNOWN_FEATURES) {
            config.token.known_features = features
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }

        if let Some(json) = lookup(ENV_LOG_JSON) {
            config.logging.json = match json.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    return Err(CheckerError::config(format!(
                        "Invalid {}: '{}' (expected 'true' or 'false')",
                        ENV_LOG_JSON, other
                    )));
                }
            };
        }

        config.validate().map_err(CheckerError::Config)?;
        Ok(config)
    }

    pub fn token(&self) -> &TokenConfig {
        &self.token
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

impl Validate for CheckerConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        self.token.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
