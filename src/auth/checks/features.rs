use super::PermissionCheck;
use crate::auth::token::Token;
use crate::core::models::Feature;
use crate::utils::error::{CheckResult, PermissionDenied};

/// Requires the token's project to have a feature enabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiresFeature {
    feature: Feature,
}

impl RequiresFeature {
    pub fn new<F: Into<Feature>>(feature: F) -> Self {
        Self {
            feature: feature.into(),
        }
    }

    pub fn feature(&self) -> &Feature {
        &self.feature
    }
}

impl PermissionCheck for RequiresFeature {
    fn name(&self) -> &'static str {
        "requires_feature"
    }

    fn evaluate(&self, token: &Token) -> CheckResult {
        if token.has_feature(self.feature.as_str()) {
            Ok(())
        } else {
            Err(PermissionDenied::missing_feature(&self.feature))
        }
    }
}
