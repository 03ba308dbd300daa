//! Token representation
//!
//! External tokens are adapted once per request into an immutable [`Token`];
//! checks never see the external shape.

mod adapter;
mod external;
mod types;

pub use adapter::{FeaturePolicy, TokenAdapter};
pub use external::{ExternalToken, RawToken};
#[cfg(test)]
pub use external::MockExternalToken;
pub use types::Token;
