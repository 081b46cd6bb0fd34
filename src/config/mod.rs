use crate::constants::endpoint;
use crate::technology::DeploymentTarget;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server the API paths are resolved against
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Base path of the accelerator REST API
    #[serde(default = "default_service_path")]
    pub service_path: String,

    /// Base path of the options templates
    #[serde(default = "default_options_path")]
    pub options_path: String,

    /// Deployment target a new session starts with
    #[serde(default)]
    pub deploy: DeploymentTarget,

    /// Project name a new session starts with
    pub project_name: Option<String>,
}

fn default_server_url() -> String {
    endpoint::DEFAULT_SERVER.to_string()
}

fn default_service_path() -> String {
    endpoint::SERVICE_PATH.to_string()
}

fn default_options_path() -> String {
    endpoint::OPTIONS_PATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            service_path: default_service_path(),
            options_path: default_options_path(),
            deploy: DeploymentTarget::default(),
            project_name: None,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("appacc").join("config.toml");
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Catalog path, e.g. `/start/api/v1/tech`
    pub fn tech_path(&self) -> String {
        format!("{}{}", self.service_path.trim_end_matches('/'), endpoint::TECH)
    }

    /// Download path without the query, e.g. `/start/api/v1/data`
    pub fn data_path(&self) -> String {
        format!("{}{}", self.service_path.trim_end_matches('/'), endpoint::DATA)
    }

    /// Options template path for a technology id
    pub fn options_template_path(&self, id: &str) -> String {
        format!("{}/{}/{}.html", self.options_path.trim_end_matches('/'), id, id)
    }
}
