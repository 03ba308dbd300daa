//! Helper functions for creating specific errors

use super::types::{CheckerError, DenialCode, PermissionDenied};
use crate::core::models::Role;
use std::fmt::Display;

/// Canonical denial messages shared by all checks
impl PermissionDenied {
    /// Denial with a bespoke message and no code
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: DenialCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn missing_feature(feature: impl Display) -> Self {
        Self::new(format!(
            "Project does not have feature \"{}\" enabled",
            feature
        ))
        .with_code(DenialCode::MissingFeature)
    }

    pub fn missing_component(component_id: impl Display) -> Self {
        Self::new(format!(
            "Token is not allowed to run component \"{}\"",
            component_id
        ))
        .with_code(DenialCode::MissingComponent)
    }

    pub fn role_denied(role: Role, action: &str) -> Self {
        Self::new(format!("Role \"{}\" is not allowed to {}", role, action))
            .with_code(DenialCode::RoleDenied)
    }

    pub fn insufficient_role(role: Role) -> Self {
        Self::new(format!(
            "Role \"{}\" is insufficient for this operation.",
            role
        ))
        .with_code(DenialCode::InsufficientRole)
    }
}

impl CheckerError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Returns the denial if this error is one
    pub fn as_denial(&self) -> Option<&PermissionDenied> {
        match self {
            Self::PermissionDenied(denied) => Some(denied),
            _ => None,
        }
    }
}
