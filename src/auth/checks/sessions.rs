use super::PermissionCheck;
use crate::auth::token::Token;
use crate::core::models::{Feature, Role};
use crate::utils::error::{CheckResult, PermissionDenied};

/// May the token create or delete sessions.
///
/// Nobody may on projects with a protected default branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanModifySessions;

impl PermissionCheck for CanModifySessions {
    fn name(&self) -> &'static str {
        "modify_sessions"
    }

    fn evaluate(&self, token: &Token) -> CheckResult {
        if token.has_feature(Feature::PROTECTED_DEFAULT_BRANCH) {
            return Err(PermissionDenied::role_denied(
                token.role(),
                "modify sessions on protected branch projects",
            ));
        }

        if token.is_role(Role::ReadOnly) {
            return Err(PermissionDenied::role_denied(token.role(), "modify sessions"));
        }

        Ok(())
    }
}
