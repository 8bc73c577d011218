//! Single commit command

use super::{Command, CommandContext};
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use harvest_github::{ChangedFile, Commit, GitHubClient, parse_github_url};

/// Show a commit, or only its assembled diff
pub struct CommitCommand {
    /// Absolute commit API URL, or a commit SHA when `repo` is set
    pub target: String,
    /// Repository reference (`owner/repo` or a GitHub URL)
    pub repo: Option<String>,
    /// Print only the diff
    pub diff: bool,
}

impl CommitCommand {
    /// API URL this command will fetch
    pub fn resolve_url(&self, client: &GitHubClient) -> Result<String> {
        match &self.repo {
            Some(repo) => {
                let (owner, name) = parse_github_url(repo)?;
                Ok(client.commit_url(&owner, &name, &self.target))
            }
            None => Ok(self.target.clone()),
        }
    }

    pub fn render(&self, commit: &Commit, json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string_pretty(commit)?);
        }
        if self.diff {
            return Ok(commit.diff());
        }

        let details = &commit.commit;
        let mut out = String::new();
        out.push_str(&format!("{} {}\n", "commit".yellow(), commit.sha.yellow()));
        out.push_str(&format!(
            "Author: {} <{}>\n",
            details.author.name, details.author.email
        ));
        out.push_str(&format!(
            "Date:   {}\n",
            details.author.date.format("%Y-%m-%d %H:%M:%S %Z")
        ));
        if let Some(verification) = &commit.verification {
            let verified = if verification.verified {
                "yes".green()
            } else {
                "no".red()
            };
            out.push_str(&format!(
                "Verified: {} ({})\n",
                verified, verification.reason
            ));
        }
        out.push('\n');
        for line in details.message.lines() {
            out.push_str(&format!("    {}\n", line));
        }
        out.push('\n');
        out.push_str(&format!(
            " {} files changed, {} insertions(+), {} deletions(-)\n",
            commit.files.len(),
            commit.stats.additions,
            commit.stats.deletions
        ));
        out.push_str(&render_files(&commit.files));
        Ok(out.trim_end().to_string())
    }
}

/// One line per changed file: status, name and line counts
pub(crate) fn render_files(files: &[ChangedFile]) -> String {
    files
        .iter()
        .map(|file| {
            format!(
                "  {:<9} {} ({}, {})\n",
                file.status,
                file.filename.bold(),
                format!("+{}", file.additions).green(),
                format!("-{}", file.deletions).red()
            )
        })
        .collect()
}

#[async_trait]
impl Command for CommitCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let url = self.resolve_url(&context.client)?;
        let commit = context
            .client
            .get_commit(&url)
            .await
            .with_context(|| format!("Failed to fetch commit {}", url))?;

        let output = self.render(&commit, context.json)?;
        if self.diff && !context.json {
            // The diff already ends with its own newline
            print!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }
}
