//! Core data models
//!
//! Roles, features, branch types and component identifiers as they appear on
//! Storage API tokens.

pub mod branch;
pub mod component;
pub mod feature;
pub mod role;

// Re-export commonly used types
pub use branch::BranchType;
pub use component::ComponentId;
pub use feature::Feature;
pub use role::Role;
