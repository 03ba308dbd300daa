//! Configuration models

use crate::auth::FeaturePolicy;
use crate::core::models::Feature;
use serde::{Deserialize, Serialize};

/// Token adaptation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Handling of features outside `known_features`
    #[serde(default)]
    pub unknown_features: FeaturePolicy,
    /// Feature catalogue the deployment knows about
    #[serde(default = "default_known_features")]
    pub known_features: Vec<String>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            unknown_features: FeaturePolicy::default(),
            known_features: default_known_features(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `permission_checker=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
    /// Include the event target
    #[serde(default = "default_true")]
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            with_target: true,
        }
    }
}

fn default_known_features() -> Vec<String> {
    vec![Feature::PROTECTED_DEFAULT_BRANCH.to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
