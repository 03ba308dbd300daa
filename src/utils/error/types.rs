//! Error types

use serde::Serialize;
use thiserror::Error;

/// Result type alias for fallible crate operations
pub type Result<T> = std::result::Result<T, CheckerError>;

/// Outcome of evaluating a single permission check
pub type CheckResult = std::result::Result<(), PermissionDenied>;

/// Machine-readable classification of a denial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenialCode {
    /// Project lacks a required feature
    MissingFeature,
    /// Token may not use a component
    MissingComponent,
    /// Role may not perform the action
    RoleDenied,
    /// Role is below what the operation requires
    InsufficientRole,
    /// Target belongs to another project
    ProjectMismatch,
}

impl DenialCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DenialCode::MissingFeature => "MISSING_FEATURE",
            DenialCode::MissingComponent => "MISSING_COMPONENT",
            DenialCode::RoleDenied => "ROLE_DENIED",
            DenialCode::InsufficientRole => "INSUFFICIENT_ROLE",
            DenialCode::ProjectMismatch => "PROJECT_MISMATCH",
        }
    }
}

impl std::fmt::Display for DenialCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The actor may not perform the requested action.
///
/// The message is safe to show to end users. A denial is final for the
/// token and check it was produced from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PermissionDenied {
    pub(super) message: String,
    pub(super) code: Option<DenialCode>,
}

impl PermissionDenied {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<DenialCode> {
        self.code
    }
}

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum CheckerError {
    /// Permission denied by a check
    #[error(transparent)]
    PermissionDenied(#[from] PermissionDenied),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token payload errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
