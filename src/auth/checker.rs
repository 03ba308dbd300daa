//! Permission checker
//!
//! Adapts an external token and runs a check against it.

use super::checks::PermissionCheck;
use super::token::{ExternalToken, Token, TokenAdapter};
use crate::config::CheckerConfig;
use crate::utils::error::CheckResult;
use tracing::{debug, trace};

/// Entry point for callers enforcing per-action policy.
///
/// The checker adds no rules of its own: whatever the check decides is
/// returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct PermissionChecker {
    adapter: TokenAdapter,
}

impl PermissionChecker {
    pub fn new(config: &CheckerConfig) -> Self {
        Self {
            adapter: TokenAdapter::new(&config.token),
        }
    }

    pub fn adapter(&self) -> &TokenAdapter {
        &self.adapter
    }

    /// Adapt an external token without running any check
    pub fn adapt<T: ExternalToken + ?Sized>(&self, external: &T) -> Token {
        self.adapter.adapt(external)
    }

    /// Adapt `external` and evaluate `check` against it
    pub fn check_permissions<T, C>(&self, external: &T, check: &C) -> CheckResult
    where
        T: ExternalToken + ?Sized,
        C: PermissionCheck + ?Sized,
    {
        let token = self.adapt(external);
        self.check_token(&token, check)
    }

    /// Evaluate `check` against an already adapted token
    pub fn check_token<C: PermissionCheck + ?Sized>(&self, token: &Token, check: &C) -> CheckResult {
        let result = check.evaluate(token);

        match &result {
            Ok(()) => trace!(check = check.name(), role = %token.role(), "Permission granted"),
            Err(denied) => debug!(
                check = check.name(),
                role = %token.role(),
                project_id = token.project_id(),
                reason = %denied,
                "Permission denied"
            ),
        }

        result
    }
}
