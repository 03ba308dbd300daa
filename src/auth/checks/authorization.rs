use super::PermissionCheck;
use crate::auth::token::Token;
use crate::core::models::{BranchType, Feature, Role};
use crate::utils::error::{CheckResult, PermissionDenied};

/// May the token change OAuth authorizations.
///
/// On protected default branch projects production managers own the
/// default branch and developers/reviewers own development branches. A
/// missing branch type means the default branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanModifyAuthorization {
    branch_type: Option<BranchType>,
}

impl CanModifyAuthorization {
    pub fn new(branch_type: Option<BranchType>) -> Self {
        Self { branch_type }
    }

    pub fn on_branch(branch_type: BranchType) -> Self {
        Self::new(Some(branch_type))
    }

    pub fn branch_type(&self) -> Option<BranchType> {
        self.branch_type
    }

    fn is_allowed(&self, token: &Token) -> bool {
        if !token.has_feature(Feature::PROTECTED_DEFAULT_BRANCH) {
            return !token.is_role_one_of(&[Role::None, Role::ReadOnly]);
        }

        match self.branch_type {
            None | Some(BranchType::Default) => token.is_role(Role::ProductionManager),
            Some(BranchType::Dev) => token.is_role_one_of(&[Role::Developer, Role::Reviewer]),
        }
    }
}

impl PermissionCheck for CanModifyAuthorization {
    fn name(&self) -> &'static str {
        "modify_authorization"
    }

    fn evaluate(&self, token: &Token) -> CheckResult {
        if self.is_allowed(token) {
            Ok(())
        } else {
            Err(PermissionDenied::role_denied(token.role(), "modify authorization"))
        }
    }
}
