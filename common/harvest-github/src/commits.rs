//! Commit operations

use crate::client::GitHubClient;
use crate::decode::decode_commit;
use crate::error::Result;
use crate::types::Commit;

impl GitHubClient {
    /// Fetch a commit from its API URL
    ///
    /// # Arguments
    /// * `url` - Absolute commit URL, e.g.
    ///   `https://api.github.com/repos/{owner}/{repo}/commits/{sha}`
    pub async fn get_commit(&self, url: &str) -> Result<Commit> {
        self.fetch_json(url, decode_commit).await
    }

    /// Fetch a commit and assemble the patches of its changed files
    pub async fn get_commit_diff(&self, url: &str) -> Result<String> {
        Ok(self.get_commit(url).await?.diff())
    }
}
