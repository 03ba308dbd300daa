use super::PermissionCheck;
use crate::auth::token::Token;
use crate::core::models::{BranchType, Feature, Role};
use crate::utils::error::{CheckResult, PermissionDenied};

/// May the token manage notification subscriptions on a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanModifySubscriptions {
    branch_type: BranchType,
}

impl CanModifySubscriptions {
    pub fn new(branch_type: BranchType) -> Self {
        Self { branch_type }
    }

    pub fn branch_type(&self) -> BranchType {
        self.branch_type
    }

    fn is_allowed(&self, token: &Token) -> bool {
        if token.has_feature(Feature::PROTECTED_DEFAULT_BRANCH) {
            return token.is_role(Role::ProductionManager)
                && self.branch_type == BranchType::Default;
        }

        !token.is_role_one_of(&[Role::Guest, Role::ReadOnly])
    }
}

impl PermissionCheck for CanModifySubscriptions {
    fn name(&self) -> &'static str {
        "modify_subscriptions"
    }

    fn evaluate(&self, token: &Token) -> CheckResult {
        if self.is_allowed(token) {
            Ok(())
        } else {
            Err(PermissionDenied::role_denied(token.role(), "modify subscriptions"))
        }
    }
}
