use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Base URL used when neither the config file nor --server provides one
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Application configuration loaded from ~/.config/bookshelfctl/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Connection settings for the bookshelf service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    /// Base URL of the service, e.g. "http://localhost:3000"
    pub base_url: Option<String>,
}

impl Config {
    /// Load configuration from the default path (~/.config/bookshelfctl/config.toml)
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("bookshelfctl").join("config.toml"))
    }

    /// Get the server base URL, with CLI override taking precedence
    pub fn base_url(&self, cli_override: Option<&str>) -> String {
        cli_override
            .map(String::from)
            .or_else(|| self.server.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}
