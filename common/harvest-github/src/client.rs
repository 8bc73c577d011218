//! GitHub client implementation
//!
//! `GitHubClient` owns the credential pool and the transport. Resource
//! operations live in their own modules and extend the client with `impl`
//! blocks:
//! - `repositories.rs` - paginated repository listing
//! - `commits.rs` - single commits and their diffs
//! - `compare.rs` - ref comparisons

use crate::credentials::CredentialPool;
use crate::error::{GitHubError, Result};
use crate::pagination::{DEFAULT_MAX_PAGES, PageCollector};
use crate::transport::{GITHUB_JSON, HttpTransport, RawResponse, Transport};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Public GitHub REST API base URL
pub const API_BASE: &str = "https://api.github.com";

/// GitHub API client for making authenticated requests
#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) credentials: Arc<CredentialPool>,
    pub(crate) api_base: String,
    pub(crate) max_pages: usize,
}

impl GitHubClient {
    /// Create a client backed by the default reqwest transport
    pub fn new(credentials: CredentialPool) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(credentials, Arc::new(transport)))
    }

    /// Create a client that sends requests through `transport`
    pub fn with_transport(credentials: CredentialPool, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            credentials: Arc::new(credentials),
            api_base: API_BASE.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Override the API base URL (GitHub Enterprise, test servers)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the page cap used for paginated collections
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    pub fn credentials(&self) -> &CredentialPool {
        &self.credentials
    }

    /// Collector over this client's transport and credentials
    pub(crate) fn pages(&self) -> PageCollector<'_> {
        PageCollector::new(self.transport.as_ref(), &self.credentials).with_max_pages(self.max_pages)
    }

    /// GET a single resource, requiring a 200 response
    pub(crate) async fn fetch(&self, url: &str) -> Result<RawResponse> {
        let token = self.credentials.select_token();
        let response = self.transport.get(url, token, GITHUB_JSON).await?;

        if response.status != 200 {
            return Err(GitHubError::UnexpectedStatus {
                status: response.status,
                url: url.to_string(),
            });
        }

        tracing::debug!(url = %url, bytes = response.body.len(), "fetched resource");
        Ok(response)
    }

    /// GET a single resource and decode it as `T`
    pub(crate) async fn fetch_json<T, D>(&self, url: &str, decode: D) -> Result<T>
    where
        T: DeserializeOwned,
        D: Fn(&[u8]) -> Result<T>,
    {
        let response = self.fetch(url).await?;
        decode(response.body.as_slice())
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("credentials", &self.credentials)
            .field("api_base", &self.api_base)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}
