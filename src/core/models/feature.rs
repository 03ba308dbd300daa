//! Project features

use serde::{Deserialize, Serialize};

/// Project-level feature flag.
///
/// The feature catalogue lives outside this library, so features are kept as
/// opaque strings. Only the flags that change check behaviour get a name here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feature(String);

impl Feature {
    /// Projects whose default branch only production managers may change
    pub const PROTECTED_DEFAULT_BRANCH: &'static str = "protected-default-branch";

    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn protected_default_branch() -> Self {
        Self::new(Self::PROTECTED_DEFAULT_BRANCH)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Feature {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Feature {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::borrow::Borrow<str> for Feature {
    fn borrow(&self) -> &str {
        &self.0
    }
}
