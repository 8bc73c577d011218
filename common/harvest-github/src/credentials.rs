//! Bearer token pool with random per-request selection

use crate::error::{GitHubError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::path::Path;
use std::sync::Mutex;

/// A fixed set of bearer tokens shared by every request a client makes.
///
/// Each call to [`CredentialPool::select_token`] picks one token uniformly at
/// random. There is no round-robin and no guarantee against picking the same
/// token twice in a row. The token list never changes after construction, so
/// the pool can be shared between concurrent callers.
pub struct CredentialPool {
    tokens: Vec<String>,
    rng: Mutex<StdRng>,
}

impl CredentialPool {
    /// Build a pool from a non-empty list of tokens
    ///
    /// # Errors
    /// Returns `InvalidCredentials` if `tokens` is empty
    pub fn new(tokens: Vec<String>) -> Result<Self> {
        Self::build(tokens, StdRng::from_entropy())
    }

    /// Build a pool whose selection sequence is fully determined by `seed`
    pub fn with_seed(tokens: Vec<String>, seed: u64) -> Result<Self> {
        Self::build(tokens, StdRng::seed_from_u64(seed))
    }

    /// Build a single-token pool
    ///
    /// # Errors
    /// Returns `InvalidCredentials` if the token is empty or whitespace
    pub fn from_token(token: &str) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(GitHubError::InvalidCredentials(
                "github token is empty".to_string(),
            ));
        }
        Self::new(vec![token.to_string()])
    }

    /// Build a pool from a text file holding one token per line
    ///
    /// # Errors
    /// Returns `TokenFile` if the path is empty or the file cannot be read,
    /// and `InvalidCredentials` if the file contains no lines
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(GitHubError::TokenFile {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "path to file with tokens is empty",
                ),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| GitHubError::TokenFile {
            path: path.to_path_buf(),
            source,
        })?;

        let tokens = parse_token_lines(&content);
        tracing::debug!(path = %path.display(), count = tokens.len(), "loaded tokens from file");
        Self::new(tokens)
    }

    fn build(tokens: Vec<String>, rng: StdRng) -> Result<Self> {
        if tokens.is_empty() {
            return Err(GitHubError::InvalidCredentials(
                "at least one github token is required".to_string(),
            ));
        }
        Ok(Self {
            tokens,
            rng: Mutex::new(rng),
        })
    }

    /// Pick a token for the next request
    pub fn select_token(&self) -> &str {
        let index = match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..self.tokens.len()),
            // A panic elsewhere while holding the lock leaves the generator usable
            Err(poisoned) => poisoned.into_inner().gen_range(0..self.tokens.len()),
        };
        &self.tokens[index]
    }

    /// Number of tokens in the pool
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a successfully constructed pool
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether `token` is one of the pooled tokens
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}

impl fmt::Debug for CredentialPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPool")
            .field("tokens", &format_args!("[{} redacted]", self.tokens.len()))
            .finish()
    }
}

/// Split token file content into lines.
///
/// Interior blank lines are kept as empty tokens; only the line terminators
/// are stripped.
pub fn parse_token_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
