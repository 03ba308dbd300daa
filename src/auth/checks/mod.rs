//! Permission check catalogue
//!
//! One check per action or action family. A check binds its parameters
//! (branch type, target app, ...) when it is constructed, so evaluation
//! depends on the token alone.

mod authorization;
mod components;
mod features;
mod sandboxes;
mod scheduler;
mod sessions;
mod subscriptions;

pub use authorization::CanModifyAuthorization;
pub use components::{CanResolveSharedCodeAndVariables, CanRunComponent};
pub use features::RequiresFeature;
pub use sandboxes::CanManageApp;
pub use scheduler::{CanModifySchedules, CanViewSchedules};
pub use sessions::CanModifySessions;
pub use subscriptions::CanModifySubscriptions;

use crate::auth::token::Token;
use crate::utils::error::CheckResult;

/// A single policy question asked of a token.
///
/// Implementations must be pure: no I/O, no shared mutable state, same
/// answer for the same token every time.
pub trait PermissionCheck: Send + Sync {
    /// Stable action name, used in diagnostics
    fn name(&self) -> &'static str;

    /// Decide whether `token` may perform the action
    fn evaluate(&self, token: &Token) -> CheckResult;
}

impl<C: PermissionCheck + ?Sized> PermissionCheck for &C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn evaluate(&self, token: &Token) -> CheckResult {
        (**self).evaluate(token)
    }
}

impl<C: PermissionCheck + ?Sized> PermissionCheck for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn evaluate(&self, token: &Token) -> CheckResult {
        (**self).evaluate(token)
    }
}
