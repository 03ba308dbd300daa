//! # permission-checker
//!
//! Authorization decisions for Storage API tokens.
//!
//! A request handler adapts the token it holds into a [`Token`], picks the
//! [`PermissionCheck`] matching the action it is about to perform and asks the
//! [`PermissionChecker`] for a verdict. The verdict is either `Ok(())` or a
//! [`PermissionDenied`] carrying a user-safe message; turning that into a
//! transport response is left to the caller.
//!
//! ## Features
//!
//! - **Pure checks**: every check is a synchronous function of the token
//! - **Branch aware**: rules follow protected default branch projects
//! - **Fail closed**: unknown roles degrade to [`Role::None`]
//! - **Extensible**: implement [`PermissionCheck`] for your own actions
//!
//! ## Quick Start
//!
//! ```rust
//! use permission_checker::{
//!     BranchType, CanModifyAuthorization, CanManageApp, PermissionChecker, RawToken,
//! };
//!
//! let token = RawToken::from_json(
//!     r#"{"role": "developer", "features": ["protected-default-branch"], "projectId": 123}"#,
//! )?;
//! let checker = PermissionChecker::default();
//!
//! // Developers own development branches on protected projects
//! assert!(checker
//!     .check_permissions(&token, &CanModifyAuthorization::on_branch(BranchType::Dev))
//!     .is_ok());
//!
//! let denied = checker
//!     .check_permissions(&token, &CanManageApp::new("1", "456"))
//!     .unwrap_err();
//! assert_eq!(
//!     denied.to_string(),
//!     "Token is not authorized to manage app '1', app is from different project"
//! );
//! # Ok::<(), permission_checker::CheckerError>(())
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use auth::{
    CanManageApp, CanModifyAuthorization, CanModifySchedules, CanModifySessions,
    CanModifySubscriptions, CanResolveSharedCodeAndVariables, CanRunComponent, CanViewSchedules,
    ExternalToken, FeaturePolicy, PermissionCheck, PermissionChecker, RawToken, RequiresFeature,
    Token, TokenAdapter,
};
pub use config::{CheckerConfig, LoggingConfig, TokenConfig};
pub use crate::core::models::{BranchType, ComponentId, Feature, Role};
pub use utils::error::{CheckResult, CheckerError, DenialCode, PermissionDenied, Result};
pub use utils::logging::init_logging;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
