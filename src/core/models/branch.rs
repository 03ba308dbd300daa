//! Branch context

use serde::{Deserialize, Serialize};

/// Kind of branch a request executes against.
///
/// This is supplied by the caller per request, not read from the token: a
/// request may target a branch other than the one the token was minted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchType {
    /// The project's default (production) branch
    Default,
    /// A development branch
    Dev,
}

impl BranchType {
    pub fn as_str(self) -> &'static str {
        match self {
            BranchType::Default => "default",
            BranchType::Dev => "dev",
        }
    }
}

impl std::fmt::Display for BranchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BranchType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "default" => Ok(BranchType::Default),
            "dev" => Ok(BranchType::Dev),
            _ => Err(()),
        }
    }
}
