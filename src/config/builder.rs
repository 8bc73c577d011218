//! Builder applying command-line overrides on top of a loaded configuration

use super::{Config, ConfigValidator};
use anyhow::Result;

/// Builder for the effective configuration of one invocation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from a loaded (or default) configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Override the tokens file, if one was given
    pub fn with_tokens_file(mut self, tokens_file: Option<String>) -> Self {
        if tokens_file.is_some() {
            self.config.tokens_file = tokens_file;
        }
        self
    }

    /// Override the page cap, if one was given
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        if let Some(max_pages) = max_pages {
            self.config.max_pages = max_pages;
        }
        self
    }

    /// Override the API base URL, if one was given
    pub fn with_api_base(mut self, api_base: Option<String>) -> Self {
        if let Some(api_base) = api_base {
            self.config.api_base = api_base;
        }
        self
    }

    /// Validate and return the effective configuration
    pub fn build(self) -> Result<Config> {
        ConfigValidator::validate(&self.config)?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides() {
        let config = ConfigBuilder::new(Config::default())
            .with_tokens_file(None)
            .with_max_pages(None)
            .with_api_base(None)
            .build()
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config = ConfigBuilder::new(Config::default())
            .with_tokens_file(Some("tokens.txt".to_string()))
            .with_max_pages(Some(2))
            .with_api_base(Some("http://localhost:1234".to_string()))
            .build()
            .unwrap();
        assert_eq!(config.tokens_file.as_deref(), Some("tokens.txt"));
        assert_eq!(config.max_pages, 2);
        assert_eq!(config.api_base, "http://localhost:1234");
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = ConfigBuilder::new(Config::default())
            .with_max_pages(Some(0))
            .build();
        assert!(result.is_err());
    }
}
