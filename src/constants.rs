//! Central constants for the gh-harvest application

/// Default values for GitHub operations
pub mod github {
    pub use harvest_github::API_BASE;
    pub use harvest_github::DEFAULT_MAX_PAGES;

    /// Default per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

    /// Environment variable consulted when no other token source is given
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "gh-harvest.yaml";
}

/// Default values for logging
pub mod logging {
    /// Filter used when `RUST_LOG` is not set
    pub const DEFAULT_FILTER: &str = "gh_harvest=info,harvest_github=info";
}
