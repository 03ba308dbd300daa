//! Error handling for permission checks
//!
//! This module defines the denial value returned by every check and the
//! crate-level error used by configuration and payload parsing.

mod helpers;
mod types;

pub use types::{CheckResult, CheckerError, DenialCode, PermissionDenied, Result};
