use crate::constants::deploy;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selectable technology as described by the accelerator catalog.
///
/// Only `id`, `options` and `selected` are interpreted here. Any other
/// fields the server sends are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub id: String,

    /// Whether the technology has an options template
    #[serde(default, deserialize_with = "null_as_false")]
    pub options: bool,

    #[serde(default, deserialize_with = "null_as_false")]
    pub selected: bool,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Flags sent as `null` read as unset
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl Technology {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: false,
            selected: false,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_options(mut self, options: bool) -> Self {
        self.options = options;
        self
    }

    /// Display name from the catalog, falling back to the id
    pub fn name(&self) -> &str {
        self.extra
            .get("name")
            .and_then(|n| n.as_str())
            .unwrap_or(&self.id)
    }
}

/// Where the generated project is meant to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentTarget {
    #[default]
    Local,
    Bluemix,
}

impl DeploymentTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentTarget::Local => deploy::LOCAL,
            DeploymentTarget::Bluemix => deploy::BLUEMIX,
        }
    }
}

impl From<bool> for DeploymentTarget {
    fn from(bluemix: bool) -> Self {
        if bluemix {
            DeploymentTarget::Bluemix
        } else {
            DeploymentTarget::Local
        }
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentTarget {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            deploy::LOCAL => Ok(DeploymentTarget::Local),
            deploy::BLUEMIX => Ok(DeploymentTarget::Bluemix),
            other => anyhow::bail!("Unknown deployment target: {}", other),
        }
    }
}
