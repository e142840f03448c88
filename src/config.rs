//! Client configuration and the CLI's persisted settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings needed to build a [`crate::ServiceFabricClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_version: Option<String>,
}

/// Settings remembered between CLI runs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clusters: Vec<String>,
    pub current_cluster: Option<String>,
    pub api_version: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().context("Could not find config directory")?;
        path.push("sfrest");
        path.push("config.toml");
        Ok(path)
    }

    pub fn add_cluster(&mut self, endpoint: String) {
        if !self.clusters.contains(&endpoint) {
            self.clusters.push(endpoint.clone());
        }
        self.current_cluster = Some(endpoint);
    }

    /// Combine explicit overrides with the stored settings.
    ///
    /// Returns `None` when no endpoint is known at all.
    pub fn resolve(&self, endpoint: Option<&str>, api_version: Option<&str>) -> Option<ClientConfig> {
        let endpoint = endpoint
            .map(str::to_string)
            .or_else(|| self.current_cluster.clone())?;

        Some(ClientConfig {
            endpoint,
            api_version: api_version
                .map(str::to_string)
                .or_else(|| self.api_version.clone()),
        })
    }
}
