//! Resolution of the credential pool from CLI flags, config and environment

use super::Config;
use crate::constants;
use anyhow::{Context, Result, anyhow};
use harvest_github::CredentialPool;

/// Where the tokens of a run came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// `--token` flag
    Flag(String),
    /// `--tokens-file` flag or the config's `tokens_file`
    File(String),
    /// `GITHUB_TOKEN` environment variable
    Env(String),
}

impl TokenSource {
    /// Pick the first available source: flag, tokens file, environment
    pub fn detect(token: Option<String>, config: &Config) -> Option<Self> {
        if let Some(token) = token {
            return Some(TokenSource::Flag(token));
        }
        if let Some(path) = &config.tokens_file {
            return Some(TokenSource::File(path.clone()));
        }
        std::env::var(constants::github::TOKEN_ENV_VAR)
            .ok()
            .map(TokenSource::Env)
    }

    pub fn describe(&self) -> String {
        match self {
            TokenSource::Flag(_) => "--token flag".to_string(),
            TokenSource::File(path) => format!("tokens file {}", path),
            TokenSource::Env(_) => format!("{} environment variable", constants::github::TOKEN_ENV_VAR),
        }
    }

    pub fn into_pool(self) -> Result<CredentialPool> {
        let description = self.describe();
        let pool = match self {
            TokenSource::Flag(token) | TokenSource::Env(token) => CredentialPool::from_token(&token),
            TokenSource::File(path) => CredentialPool::from_file(&path),
        };
        pool.with_context(|| format!("No usable GitHub token from {}", description))
    }
}

/// Build the credential pool for this invocation
pub fn resolve_credentials(token: Option<String>, config: &Config) -> Result<CredentialPool> {
    let source = TokenSource::detect(token, config).ok_or_else(|| {
        anyhow!(
            "GitHub token not provided. Use --token, --tokens-file, tokens_file in the config, or set {}.",
            constants::github::TOKEN_ENV_VAR
        )
    })?;

    tracing::debug!(source = %source.describe(), "resolving GitHub credentials");
    let pool = source.into_pool()?;
    tracing::debug!(tokens = pool.len(), "credential pool ready");
    Ok(pool)
}
