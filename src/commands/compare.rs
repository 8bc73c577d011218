//! Ref comparison command

use super::commit::render_files;
use super::{Command, CommandContext};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use colored::*;
use harvest_github::{Compare, GitHubClient, parse_github_url};

/// Show a comparison between two refs, or only its assembled diff
pub struct CompareCommand {
    /// Absolute compare API URL, or `base...head` when `repo` is set
    pub target: String,
    /// Repository reference (`owner/repo` or a GitHub URL)
    pub repo: Option<String>,
    /// Print only the diff
    pub diff: bool,
}

impl CompareCommand {
    /// API URL this command will fetch
    pub fn resolve_url(&self, client: &GitHubClient) -> Result<String> {
        match &self.repo {
            Some(repo) => {
                let (owner, name) = parse_github_url(repo)?;
                let (base, head) = self
                    .target
                    .split_once("...")
                    .filter(|(base, head)| !base.is_empty() && !head.is_empty())
                    .ok_or_else(|| {
                        anyhow!("Expected a range in the form base...head, got '{}'", self.target)
                    })?;
                Ok(client.compare_url(&owner, &name, base, head))
            }
            None => Ok(self.target.clone()),
        }
    }

    pub fn render(&self, compare: &Compare, json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string_pretty(compare)?);
        }
        if self.diff {
            return Ok(compare.diff());
        }

        let mut out = String::new();
        out.push_str(&format!("{} {}\n", "Comparison".yellow(), compare.html_url));
        if let Some(status) = &compare.status {
            out.push_str(&format!(
                "Status: {} (ahead by {}, behind by {}, {} commits)\n",
                status.bold(),
                compare.ahead_by,
                compare.behind_by,
                compare.total_commits
            ));
        }
        out.push_str(&format!("Permalink: {}\n", compare.permalink_url));
        out.push_str(&format!("Diff:      {}\n", compare.diff_url));
        out.push_str(&format!("Patch:     {}\n", compare.patch_url));
        out.push('\n');
        out.push_str(&format!(" {} files changed\n", compare.files.len()));
        out.push_str(&render_files(&compare.files));
        Ok(out.trim_end().to_string())
    }
}

#[async_trait]
impl Command for CompareCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let url = self.resolve_url(&context.client)?;
        let compare = context
            .client
            .get_compare(&url)
            .await
            .with_context(|| format!("Failed to fetch comparison {}", url))?;

        let output = self.render(&compare, context.json)?;
        if self.diff && !context.json {
            print!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvest_github::CredentialPool;
    use harvest_github::decode::decode_compare;

    const COMPARE: &str = r#"{
        "url": "https://api.github.com/repos/o/r/compare/main...topic",
        "html_url": "https://github.com/o/r/compare/main...topic",
        "permalink_url": "https://github.com/o/r/compare/o:111...o:222",
        "diff_url": "https://github.com/o/r/compare/main...topic.diff",
        "patch_url": "https://github.com/o/r/compare/main...topic.patch",
        "status": "ahead",
        "ahead_by": 2,
        "behind_by": 0,
        "total_commits": 2,
        "files": [
            { "filename": "src/lib.rs", "status": "modified", "additions": 3, "deletions": 1, "changes": 4, "patch": "@@ -1 +1 @@\n-a\n+b" }
        ]
    }"#;

    fn command(target: &str, repo: Option<&str>, diff: bool) -> CompareCommand {
        CompareCommand {
            target: target.to_string(),
            repo: repo.map(str::to_string),
            diff,
        }
    }

    fn client() -> GitHubClient {
        GitHubClient::new(CredentialPool::from_token("t").unwrap()).unwrap()
    }

    #[test]
    fn test_resolve_url_from_range() {
        let url = command("main...topic", Some("git@github.com:o/r.git"), false)
            .resolve_url(&client())
            .unwrap();
        assert_eq!(url, "https://api.github.com/repos/o/r/compare/main...topic");
    }

    #[test]
    fn test_resolve_url_rejects_bad_range() {
        assert!(command("main..topic", Some("o/r"), false).resolve_url(&client()).is_err());
        assert!(command("...topic", Some("o/r"), false).resolve_url(&client()).is_err());
    }

    #[test]
    fn test_render_diff() {
        let compare = decode_compare(COMPARE.as_bytes()).unwrap();
        let output = command("x", None, true).render(&compare, false).unwrap();
        assert_eq!(output, "@@ -1 +1 @@\n-a\n+b\n");
    }

    #[test]
    fn test_render_human() {
        colored::control::set_override(false);
        let compare = decode_compare(COMPARE.as_bytes()).unwrap();
        let output = command("x", None, false).render(&compare, false).unwrap();

        assert!(output.starts_with("Comparison https://github.com/o/r/compare/main...topic"));
        assert!(output.contains("Status: ahead (ahead by 2, behind by 0, 2 commits)"));
        assert!(output.contains("1 files changed"));
        assert!(output.contains("src/lib.rs (+3, -1)"));
    }
}
