//! Configuration validation utilities

use super::Config;
use anyhow::{Result, anyhow};

/// Configuration validator
///
/// Checks every field and reports all problems at once.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a loaded configuration
    pub fn validate(config: &Config) -> Result<()> {
        let errors: Vec<String> = [
            Self::validate_api_base(&config.api_base),
            Self::validate_max_pages(config.max_pages),
            Self::validate_timeout(config.timeout_secs),
            Self::validate_tokens_file(config.tokens_file.as_deref()),
        ]
        .into_iter()
        .filter_map(|result| result.err().map(|e| e.to_string()))
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Invalid configuration:\n  - {}", errors.join("\n  - ")))
        }
    }

    pub fn validate_api_base(api_base: &str) -> Result<()> {
        if api_base.starts_with("https://") || api_base.starts_with("http://") {
            Ok(())
        } else {
            Err(anyhow!(
                "api_base must start with http:// or https://, got '{}'",
                api_base
            ))
        }
    }

    pub fn validate_max_pages(max_pages: usize) -> Result<()> {
        if max_pages == 0 {
            return Err(anyhow!("max_pages must be at least 1"));
        }
        Ok(())
    }

    pub fn validate_timeout(timeout_secs: u64) -> Result<()> {
        if timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be at least 1"));
        }
        Ok(())
    }

    pub fn validate_tokens_file(tokens_file: Option<&str>) -> Result<()> {
        match tokens_file {
            Some(path) if path.trim().is_empty() => Err(anyhow!("tokens_file cannot be empty")),
            _ => Ok(()),
        }
    }
}
