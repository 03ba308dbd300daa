//! Test fixtures and data factories
//!
//! All factories build real [`RawToken`] payloads, the same shape a token
//! verification service would hand over.

use permission_checker::{Feature, RawToken, Role};

/// Factory for creating test tokens
pub struct TokenFactory;

impl TokenFactory {
    pub const PROJECT_ID: &'static str = "123";

    /// Token for `role` in the default project, no features, unrestricted
    pub fn with_role(role: Role) -> RawToken {
        RawToken {
            role: Some(role.as_str().to_string()),
            features: vec![],
            allowed_components: None,
            project_id: Self::PROJECT_ID.to_string(),
        }
    }

    /// Token for `role` on a protected default branch project
    pub fn protected(role: Role) -> RawToken {
        let mut token = Self::with_role(role);
        token.features.push(Feature::PROTECTED_DEFAULT_BRANCH.to_string());
        token
    }

    /// Token without role or features
    pub fn anonymous() -> RawToken {
        RawToken {
            role: None,
            features: vec![],
            allowed_components: None,
            project_id: Self::PROJECT_ID.to_string(),
        }
    }

    pub fn with_components(role: Role, components: &[&str]) -> RawToken {
        let mut token = Self::with_role(role);
        token.allowed_components = Some(components.iter().map(|c| c.to_string()).collect());
        token
    }

    pub fn in_project(role: Role, project_id: &str) -> RawToken {
        let mut token = Self::with_role(role);
        token.project_id = project_id.to_string();
        token
    }
}
