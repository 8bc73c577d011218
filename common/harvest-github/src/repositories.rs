//! Repository listing operations

use crate::client::GitHubClient;
use crate::decode::decode_repositories;
use crate::error::{GitHubError, Result};
use crate::pagination::PageStats;
use crate::types::Repository;

impl GitHubClient {
    /// URL of the first page of a user's repository listing
    pub fn user_repositories_url(&self, username: &str) -> Result<String> {
        let username = username.trim();
        if username.is_empty() || username.contains('/') {
            return Err(GitHubError::InvalidArgument(format!(
                "invalid GitHub username: '{}'",
                username
            )));
        }
        Ok(format!("{}/users/{}/repos", self.api_base, username))
    }

    /// List every repository owned by `username`, following pagination
    ///
    /// Pages are fetched one after another, each with a freshly selected
    /// token, up to the client's page cap.
    ///
    /// # Errors
    /// Returns an error if the username is blank, or if any page fails to
    /// fetch or decode. Items from earlier pages are not returned on failure.
    pub async fn list_user_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let (repos, _) = self.list_user_repositories_with_stats(username).await?;
        Ok(repos)
    }

    /// Same as [`GitHubClient::list_user_repositories`], also reporting
    /// whether the page cap cut the listing short
    pub async fn list_user_repositories_with_stats(
        &self,
        username: &str,
    ) -> Result<(Vec<Repository>, PageStats)> {
        let url = self.user_repositories_url(username)?;
        self.pages().collect_with_stats(&url, decode_repositories).await
    }
}
