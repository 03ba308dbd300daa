use super::PermissionCheck;
use crate::auth::token::Token;
use crate::core::models::Role;
use crate::utils::error::{CheckResult, PermissionDenied};

/// May the token create, update or delete schedules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanModifySchedules;

impl PermissionCheck for CanModifySchedules {
    fn name(&self) -> &'static str {
        "modify_schedules"
    }

    fn evaluate(&self, token: &Token) -> CheckResult {
        if token.is_role_one_of(&[Role::Admin, Role::Share]) {
            Ok(())
        } else {
            Err(PermissionDenied::insufficient_role(token.role()))
        }
    }
}

/// Listing schedules is open to every token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanViewSchedules;

impl PermissionCheck for CanViewSchedules {
    fn name(&self) -> &'static str {
        "view_schedules"
    }

    fn evaluate(&self, _token: &Token) -> CheckResult {
        Ok(())
    }
}
