//! Authorization
//!
//! Token adaptation, the check catalogue and the checker that ties them
//! together.

pub mod checker;
pub mod checks;
pub mod token;


pub use checker::PermissionChecker;
pub use checks::{
    CanManageApp, CanModifyAuthorization, CanModifySchedules, CanModifySessions,
    CanModifySubscriptions, CanResolveSharedCodeAndVariables, CanRunComponent, CanViewSchedules,
    PermissionCheck, RequiresFeature,
};
pub use token::{ExternalToken, FeaturePolicy, RawToken, Token, TokenAdapter};
