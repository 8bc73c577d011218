//! Authenticated HTTP GET transport

use crate::error::{GitHubError, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, LINK};
use std::time::Duration;

/// Default timeout covering connection and the full response body
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Media type requested for every GitHub REST resource
pub const GITHUB_JSON: &str = "application/vnd.github+json";

/// Default User-Agent for the underlying HTTP client
pub const USER_AGENT: &str = concat!("gh-harvest/", env!("CARGO_PKG_VERSION"));

/// Status, headers and body of a completed request
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// All `Link` header values joined into one comma-separated list
    pub fn link_header(&self) -> Option<String> {
        let values: Vec<&str> = self
            .headers
            .get_all(LINK)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }
}

/// Issues a single authenticated GET request.
///
/// Implementations must not retry, and must return non-2xx responses as a
/// `RawResponse` rather than an error so callers can classify them.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, token: &str, accept: &str) -> Result<RawResponse>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport with the default 5 second timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Build a transport with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = build_client(USER_AGENT, timeout)?;
        Ok(Self { client })
    }
}

fn build_client(user_agent: &str, timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .map_err(GitHubError::ClientBuild)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, token: &str, accept: &str) -> Result<RawResponse> {
        let to_transport_error = |source| GitHubError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(to_transport_error)?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(to_transport_error)?;

        Ok(RawResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
