//! Ref comparison operations

use crate::client::GitHubClient;
use crate::decode::decode_compare;
use crate::error::Result;
use crate::types::Compare;

impl GitHubClient {
    /// Fetch a comparison from its API URL
    ///
    /// # Arguments
    /// * `url` - Absolute compare URL, e.g.
    ///   `https://api.github.com/repos/{owner}/{repo}/compare/{base}...{head}`
    pub async fn get_compare(&self, url: &str) -> Result<Compare> {
        self.fetch_json(url, decode_compare).await
    }

    /// Fetch a comparison and assemble the patches of its changed files
    pub async fn get_compare_diff(&self, url: &str) -> Result<String> {
        Ok(self.get_compare(url).await?.diff())
    }
}
