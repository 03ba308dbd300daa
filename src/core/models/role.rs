//! Token roles

use serde::{Deserialize, Serialize};

/// Role of the actor a token was issued for.
///
/// Roles carry no ordering. Each check decides on its own which roles it
/// admits, so `Admin` is not assumed to imply anything `Developer` may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// No role (or a role this library does not know)
    #[default]
    None,
    /// Read-only project member
    ReadOnly,
    /// Guest with limited write access
    Guest,
    /// Sharing role
    Share,
    /// Developer working in development branches
    Developer,
    /// Reviewer of development branch merges
    Reviewer,
    /// Production manager on protected default branch projects
    ProductionManager,
    /// Project administrator
    Admin,
}

impl Role {
    /// Every role, in declaration order
    pub const ALL: [Role; 8] = [
        Role::None,
        Role::ReadOnly,
        Role::Guest,
        Role::Share,
        Role::Developer,
        Role::Reviewer,
        Role::ProductionManager,
        Role::Admin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::None => "none",
            Role::ReadOnly => "readOnly",
            Role::Guest => "guest",
            Role::Share => "share",
            Role::Developer => "developer",
            Role::Reviewer => "reviewer",
            Role::ProductionManager => "productionManager",
            Role::Admin => "admin",
        }
    }

    /// Parse the role reported by an external token.
    ///
    /// Absent and unrecognised values map to [`Role::None`].
    pub fn from_external(value: Option<&str>) -> Self {
        value
            .and_then(|role| role.parse().ok())
            .unwrap_or_default()
    }

    pub fn is_one_of(self, roles: &[Role]) -> bool {
        roles.contains(&self)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Role::None),
            "readOnly" => Ok(Role::ReadOnly),
            "guest" => Ok(Role::Guest),
            "share" => Ok(Role::Share),
            "developer" => Ok(Role::Developer),
            "reviewer" => Ok(Role::Reviewer),
            "productionManager" => Ok(Role::ProductionManager),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}
