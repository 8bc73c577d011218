//! gh-harvest - read GitHub repositories, commits and comparisons from the
//! command line

pub mod commands;
pub mod config;
pub mod constants;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use harvest_github::GitHubClient;

/// Helper to load the default config file (or defaults when it is absent)
pub fn load_default_config() -> anyhow::Result<Config> {
    Config::load_config(constants::config::DEFAULT_CONFIG_FILE)
}
