use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::types::Result;

/// Global configuration for the pepy-stats CLI
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_proxy_url")]
    pub proxy_url: String,
}

impl Config {
    pub fn default_proxy_url() -> String {
        "http://localhost:8080".to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy_url: Self::default_proxy_url(),
        }
    }
}

impl Config {
    /// Load configuration from ~/.pepy-stats/config.toml
    pub fn load() -> Result<Self> {
        let config_file = Self::config_dir()?.join("config.toml");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to ~/.pepy-stats/config.toml
    pub fn save(&self) -> Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;

        let config_file = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(config_file)
    }

    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or("Could not find home directory")?;
        Ok(home.join(".pepy-stats"))
    }
}
