use super::PermissionCheck;
use crate::auth::token::Token;
use crate::utils::error::{CheckResult, DenialCode, PermissionDenied};

/// May the token manage a data app.
///
/// Apps can only be managed from the project that owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanManageApp {
    app_id: String,
    app_project_id: String,
}

impl CanManageApp {
    pub fn new<A: Into<String>, P: Into<String>>(app_id: A, app_project_id: P) -> Self {
        Self {
            app_id: app_id.into(),
            app_project_id: app_project_id.into(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_project_id(&self) -> &str {
        &self.app_project_id
    }
}

impl PermissionCheck for CanManageApp {
    fn name(&self) -> &'static str {
        "manage_app"
    }

    fn evaluate(&self, token: &Token) -> CheckResult {
        if token.project_id() == self.app_project_id {
            return Ok(());
        }

        Err(PermissionDenied::new(format!(
            "Token is not authorized to manage app '{}', app is from different project",
            self.app_id
        ))
        .with_code(DenialCode::ProjectMismatch))
    }
}
