//! Application configuration
//!
//! Configuration loaded from `.pr-report.toml`. Every field is optional in
//! the file; command-line flags take precedence over anything set here.

use anyhow::{Context, Result};
use gh_client::MAX_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from `.pr-report.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Number of PRs to load per listing page (GitHub accepts at most 100)
    #[serde(default = "default_per_page")]
    pub per_page: u8,

    /// CSV file the report is written to
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// GitHub Enterprise host; github.com when unset
    #[serde(default)]
    pub host: Option<String>,
}

fn default_per_page() -> u8 {
    MAX_PER_PAGE
}

fn default_output_file() -> String {
    "results.csv".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            output_file: default_output_file(),
            host: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid config file")?;
        if config.per_page == 0 || config.per_page > MAX_PER_PAGE {
            anyhow::bail!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE,
                config.per_page
            );
        }
        Ok(config)
    }
}
