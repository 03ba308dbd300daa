//! Logging setup
//!
//! The library itself only emits `tracing` events. Hosts that have no
//! subscriber of their own can install one from [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::utils::error::{CheckerError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`, letting `RUST_LOG` take precedence
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| CheckerError::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Install a global fmt subscriber.
///
/// Fails if the host already installed a global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(config.with_target);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| CheckerError::config(format!("Failed to initialize logging: {}", e)))
}
