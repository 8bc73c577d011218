//! Base types and traits for the command pattern

use anyhow::Result;
use harvest_github::GitHubClient;

/// Context passed to all commands containing the configured client and
/// output options
#[derive(Clone, Debug)]
pub struct CommandContext {
    /// Client built from the effective configuration and credentials
    pub client: GitHubClient,
    /// Output in JSON format for machine consumption
    pub json: bool,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
