//! Canonical token type

use crate::core::models::{ComponentId, Feature, Role};
use std::collections::HashSet;

/// Authorization attributes of a single actor.
///
/// A token is built once and then only read. The `with_*` methods consume
/// the value, so there is no way to change a token another check holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    role: Role,
    features: HashSet<Feature>,
    /// `None` means every component is allowed
    allowed_components: Option<HashSet<ComponentId>>,
    project_id: String,
}

impl Token {
    /// Token with no role, no features and unrestricted components
    pub fn new<S: Into<String>>(project_id: S) -> Self {
        Self {
            role: Role::None,
            features: HashSet::new(),
            allowed_components: None,
            project_id: project_id.into(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_feature<F: Into<Feature>>(mut self, feature: F) -> Self {
        self.features.insert(feature.into());
        self
    }

    pub fn with_features<I, F>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Feature>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    /// Restrict the token to the given components
    pub fn with_allowed_components<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ComponentId>,
    {
        self.allowed_components = Some(components.into_iter().map(Into::into).collect());
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn features(&self) -> &HashSet<Feature> {
        &self.features
    }

    pub fn allowed_components(&self) -> Option<&HashSet<ComponentId>> {
        self.allowed_components.as_ref()
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    pub fn is_role(&self, role: Role) -> bool {
        self.role == role
    }

    pub fn is_role_one_of(&self, roles: &[Role]) -> bool {
        self.role.is_one_of(roles)
    }

    /// Whether the allow-list permits `component_id`
    pub fn is_component_allowed(&self, component_id: &str) -> bool {
        match &self.allowed_components {
            None => true,
            Some(allowed) => allowed.contains(component_id),
        }
    }
}
