//! Repository listing command

use super::{Command, CommandContext};
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use harvest_github::Repository;
use serde::Serialize;

/// Output format for a repository in JSON mode
#[derive(Serialize)]
struct RepositoryOutput<'a> {
    name: &'a str,
    full_name: &'a str,
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    fork: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<&'a str>,
    #[serde(skip_serializing_if = "no_topics")]
    topics: &'a [String],
}

fn no_topics(topics: &&[String]) -> bool {
    topics.is_empty()
}

impl<'a> From<&'a Repository> for RepositoryOutput<'a> {
    fn from(repo: &'a Repository) -> Self {
        Self {
            name: &repo.name,
            full_name: &repo.full_name,
            url: &repo.html_url,
            description: repo.description.as_deref(),
            fork: repo.fork,
            license: repo
                .license
                .as_ref()
                .map(|l| l.spdx_id.as_deref().unwrap_or(&l.name)),
            topics: &repo.topics,
        }
    }
}

/// List every repository of a GitHub user
pub struct ReposCommand {
    pub username: String,
}

impl ReposCommand {
    /// Render repositories the way `execute` prints them
    pub fn render(&self, repositories: &[Repository], json: bool) -> Result<String> {
        if json {
            let output: Vec<RepositoryOutput> = repositories.iter().map(Into::into).collect();
            return Ok(serde_json::to_string_pretty(&output)?);
        }

        if repositories.is_empty() {
            return Ok(format!("No repositories found for {}", self.username)
                .yellow()
                .to_string());
        }

        let mut out = String::new();
        out.push_str(
            &format!(
                "Found {} repositories for {}",
                repositories.len(),
                self.username
            )
            .green()
            .to_string(),
        );
        out.push_str("\n\n");

        for repo in repositories {
            let fork_marker = if repo.fork { " (fork)" } else { "" };
            out.push_str(&format!(
                "{} {}{}\n",
                "•".blue(),
                repo.full_name.bold(),
                fork_marker.dimmed()
            ));
            out.push_str(&format!("  URL: {}\n", repo.html_url));

            if let Some(description) = &repo.description {
                out.push_str(&format!("  Description: {}\n", description));
            }
            if let Some(license) = &repo.license {
                out.push_str(&format!("  License: {}\n", license.name));
            }
            if !repo.topics.is_empty() {
                out.push_str(&format!("  Topics: {}\n", repo.topics.join(", ").cyan()));
            }
            out.push('\n');
        }

        out.push_str(
            &format!("Total: {} repositories", repositories.len())
                .green()
                .to_string(),
        );
        Ok(out)
    }
}

#[async_trait]
impl Command for ReposCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let (repositories, stats) = context
            .client
            .list_user_repositories_with_stats(&self.username)
            .await
            .with_context(|| format!("Failed to list repositories for {}", self.username))?;

        if stats.truncated {
            eprintln!(
                "{}",
                format!(
                    "Warning: stopped after {} pages, the listing may be incomplete",
                    stats.pages_fetched
                )
                .yellow()
            );
        }

        println!("{}", self.render(&repositories, context.json)?);
        Ok(())
    }
}
