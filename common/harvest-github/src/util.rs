//! URL helpers for GitHub resources

use crate::client::GitHubClient;
use crate::error::{GitHubError, Result};

/// Parse a repository reference into `(owner, repo)`
///
/// Accepts:
/// - shorthand: `owner/repo`
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo.git`
/// - Legacy: `github.com/owner/repo`
///
/// # Errors
/// Returns `InvalidArgument` if the reference format is not recognized
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let url = url.trim().trim_end_matches('/').trim_end_matches(".git");

    let pair = |owner: &str, repo: &str| -> Option<(String, String)> {
        if owner.is_empty() || repo.is_empty() {
            None
        } else {
            Some((owner.to_string(), repo.to_string()))
        }
    };

    // SSH: git@host:owner/repo
    if url.starts_with("git@")
        && let Some(colon_pos) = url.find(':')
    {
        let parts: Vec<&str> = url[colon_pos + 1..].split('/').collect();
        if parts.len() == 2
            && let Some(found) = pair(parts[0], parts[1])
        {
            return Ok(found);
        }
    }

    // HTTPS: https://host/owner/repo[/...]
    if url.starts_with("https://") || url.starts_with("http://") {
        let without_protocol = url
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        let parts: Vec<&str> = without_protocol.split('/').collect();
        if parts.len() >= 3
            && let Some(found) = pair(parts[1], parts[2])
        {
            return Ok(found);
        }
    }

    // Legacy: github.com/owner/repo
    if url.contains("github.com") {
        let parts: Vec<&str> = url.split('/').collect();
        if parts.len() >= 3 {
            let idx = parts.len() - 2;
            if let Some(found) = pair(parts[idx], parts[idx + 1]) {
                return Ok(found);
            }
        }
    }

    // Shorthand: owner/repo
    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() == 2
        && !url.contains(':')
        && let Some(found) = pair(parts[0], parts[1])
    {
        return Ok(found);
    }

    Err(GitHubError::InvalidArgument(format!(
        "invalid GitHub repository reference: {}",
        url
    )))
}

impl GitHubClient {
    /// API URL of a single commit
    pub fn commit_url(&self, owner: &str, repo: &str, sha: &str) -> String {
        format!("{}/repos/{}/{}/commits/{}", self.api_base, owner, repo, sha)
    }

    /// API URL comparing `base` with `head`
    pub fn compare_url(&self, owner: &str, repo: &str, base: &str, head: &str) -> String {
        format!(
            "{}/repos/{}/{}/compare/{}...{}",
            self.api_base, owner, repo, base, head
        )
    }
}
