//! GitHub API client library
//!
//! A small read-only client for three GitHub REST resources: a user's
//! repository listing (paginated), a single commit with its patches, and a
//! comparison between two refs. Every request is authenticated with a bearer
//! token picked at random from a [`CredentialPool`].
//!
//! ## Modules
//!
//! - [`client`]: `GitHubClient` construction and single-resource fetches
//! - [`credentials`]: token pool and token file loading
//! - [`transport`]: the `Transport` trait and its reqwest implementation
//! - [`pagination`]: `Link`-following collection walker with a page cap
//! - [`link`]: `Link` header parsing
//! - [`decode`]: JSON body decoders
//! - [`diff`]: patch concatenation for commits and comparisons
//! - [`types`]: typed resource records
//! - [`util`]: repository reference parsing and URL builders

pub mod client;
mod commits;
mod compare;
pub mod credentials;
pub mod decode;
pub mod diff;
pub mod error;
pub mod link;
pub mod pagination;
mod repositories;
pub mod transport;
pub mod types;
pub mod util;

// Re-export public API
pub use client::{API_BASE, GitHubClient};
pub use credentials::CredentialPool;
pub use diff::assemble_diff;
pub use error::{GitHubError, Result};
pub use pagination::{DEFAULT_MAX_PAGES, PageCollector, PageStats};
pub use transport::{DEFAULT_TIMEOUT, HttpTransport, RawResponse, Transport};
pub use types::{ChangedFile, Commit, Compare, Repository};
pub use util::parse_github_url;
