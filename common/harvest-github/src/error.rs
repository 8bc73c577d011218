//! Error types for GitHub API operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the GitHub client
#[derive(Debug, Error)]
pub enum GitHubError {
    /// No usable token was supplied when building a credential pool
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The token file could not be opened or read
    #[error("failed to read token file {}: {source}", path.display())]
    TokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network, connection or timeout failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Any response status other than 200
    #[error("received {status} response status for: {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body did not match the expected schema
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A caller-supplied argument was rejected before any request was made
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GitHubError {
    /// HTTP status carried by an `UnexpectedStatus` error
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GitHubError>;
