//! External token interface

use crate::utils::error::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// Accessors a token source must provide for adaptation.
///
/// Implement this for whatever the embedding service holds: a verified
/// Storage API token, a session, a cached lookup.
#[cfg_attr(test, mockall::automock)]
pub trait ExternalToken {
    /// Role name, if the token carries one
    fn role(&self) -> Option<String>;

    /// Active project feature names
    fn features(&self) -> Vec<String>;

    /// Allowed component ids; `None` means unrestricted
    fn allowed_components(&self) -> Option<Vec<String>>;

    fn project_id(&self) -> String;
}

/// Token payload as delivered by the token verification service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawToken {
    /// Role name
    #[serde(default)]
    pub role: Option<String>,
    /// Feature names
    #[serde(default)]
    pub features: Vec<String>,
    /// Allowed component ids
    #[serde(default)]
    pub allowed_components: Option<Vec<String>>,
    /// Project id, numeric ids are normalized to strings
    #[serde(deserialize_with = "deserialize_project_id")]
    pub project_id: String,
}

impl RawToken {
    /// Parse a JSON token payload
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

impl ExternalToken for RawToken {
    fn role(&self) -> Option<String> {
        self.role.clone()
    }

    fn features(&self) -> Vec<String> {
        self.features.clone()
    }

    fn allowed_components(&self) -> Option<Vec<String>> {
        self.allowed_components.clone()
    }

    fn project_id(&self) -> String {
        self.project_id.clone()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectIdRepr {
    Text(String),
    Number(u64),
}

fn deserialize_project_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ProjectIdRepr::deserialize(deserializer)? {
        ProjectIdRepr::Text(id) => id,
        ProjectIdRepr::Number(id) => id.to_string(),
    })
}
