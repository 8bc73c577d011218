//! Configuration file loading and saving

use super::ConfigValidator;
use crate::constants;
use anyhow::{Context, Result};
use harvest_github::{CredentialPool, GitHubClient, HttpTransport};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the GitHub REST API
    pub api_base: String,
    /// File holding one bearer token per line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_file: Option<String>,
    /// Maximum number of pages fetched for one collection
    pub max_pages: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: constants::github::API_BASE.to_string(),
            tokens_file: None,
            max_pages: constants::github::DEFAULT_MAX_PAGES,
            timeout_secs: constants::github::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        // An empty file means "all defaults"
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path))?
        };

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the default
    /// config file does not exist
    ///
    /// A missing file is only an error when the path was given explicitly.
    pub fn load_config(path: &str) -> Result<Self> {
        if path == constants::config::DEFAULT_CONFIG_FILE && !Path::new(path).exists() {
            tracing::debug!("no {} found, using defaults", path);
            return Ok(Config::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("---\n{}", yaml))?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a client from this configuration and a credential pool
    pub fn client(&self, credentials: CredentialPool) -> Result<GitHubClient> {
        let transport =
            HttpTransport::with_timeout(self.timeout()).context("Failed to build HTTP client")?;
        Ok(GitHubClient::with_transport(credentials, Arc::new(transport))
            .with_api_base(self.api_base.clone())
            .with_max_pages(self.max_pages))
    }
}
