//! Adaptation of external tokens

use super::external::ExternalToken;
use super::types::Token;
use crate::config::TokenConfig;
use crate::core::models::{ComponentId, Feature, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// What to do with feature names outside the known catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeaturePolicy {
    /// Keep them on the token as opaque features
    #[default]
    Preserve,
    /// Drop them
    Ignore,
}

/// Converts [`ExternalToken`] values into [`Token`]s.
///
/// Adaptation is total: unknown roles become [`Role::None`] and unknown
/// features are kept or dropped per [`FeaturePolicy`], never rejected.
/// Features the checks branch on are always known, so no policy can strip
/// them.
#[derive(Debug, Clone)]
pub struct TokenAdapter {
    policy: FeaturePolicy,
    known_features: HashSet<Feature>,
}

impl Default for TokenAdapter {
    fn default() -> Self {
        Self::new(&TokenConfig::default())
    }
}

impl TokenAdapter {
    /// Features the built-in checks depend on
    const REQUIRED_FEATURES: [&'static str; 1] = [Feature::PROTECTED_DEFAULT_BRANCH];

    pub fn new(config: &TokenConfig) -> Self {
        let known_features = Self::REQUIRED_FEATURES
            .into_iter()
            .chain(config.known_features.iter().map(String::as_str))
            .map(Feature::new)
            .collect();

        Self {
            policy: config.unknown_features,
            known_features,
        }
    }

    pub fn is_known(&self, feature: &str) -> bool {
        self.known_features.contains(feature)
    }

    pub fn policy(&self) -> FeaturePolicy {
        self.policy
    }

    pub fn adapt<T: ExternalToken + ?Sized>(&self, external: &T) -> Token {
        let role = Role::from_external(external.role().as_deref());
        let features = external
            .features()
            .into_iter()
            .filter(|name| self.keeps_feature(name));

        let token = Token::new(external.project_id())
            .with_role(role)
            .with_features(features);

        let token = match external.allowed_components() {
            Some(components) => {
                token.with_allowed_components(components.into_iter().map(ComponentId::from))
            }
            None => token,
        };

        trace!(
            role = %token.role(),
            features = token.features().len(),
            restricted = token.allowed_components().is_some(),
            "Adapted external token"
        );
        token
    }

    fn keeps_feature(&self, name: &str) -> bool {
        match self.policy {
            FeaturePolicy::Preserve => true,
            FeaturePolicy::Ignore => self.is_known(name),
        }
    }
}

impl Token {
    /// Adapt an external token, keeping every feature it reports
    pub fn from_external<T: ExternalToken + ?Sized>(external: &T) -> Self {
        TokenAdapter::default().adapt(external)
    }
}
