//! Command argument validation utilities
//!
//! This module provides centralized validation logic for command arguments
//! after clap parsing. It handles domain-specific validation rules that
//! go beyond basic argument parsing.

use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Mutually exclusive arguments were both provided
    MutualExclusivity { first: String, second: String },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MutualExclusivity { first, second } => {
                write!(f, "Cannot specify both {} and {}", first, second)
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

fn invalid(argument: &str, value: &str, reason: &str) -> anyhow::Error {
    validation_error_to_anyhow(CommandValidationError::InvalidValue {
        argument: argument.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

/// Validate a GitHub username
///
/// Usernames are alphanumeric with single inner hyphens, at most 39 characters
pub fn validate_username(username: &str) -> Result<()> {
    let name = username.trim();
    if name.is_empty() {
        return Err(invalid(
            "username",
            username,
            "username cannot be empty or whitespace only",
        ));
    }

    let valid_chars = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid_chars || name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        return Err(invalid(
            "username",
            username,
            "usernames may only contain alphanumeric characters or single hyphens",
        ));
    }

    if name.len() > 39 {
        return Err(invalid(
            "username",
            username,
            "usernames are at most 39 characters long",
        ));
    }
    Ok(())
}

/// Validate the target of a commit or compare command
///
/// Without `--repo` the target must be an absolute http(s) URL. With `--repo`
/// it is a SHA or range and cannot be blank.
pub fn validate_resource_target(target: &str, repo: &Option<String>) -> Result<()> {
    if target.trim().is_empty() {
        return Err(invalid(
            "target",
            target,
            "target cannot be empty or whitespace only",
        ));
    }

    match repo {
        Some(repo) if repo.trim().is_empty() => Err(invalid(
            "--repo",
            repo,
            "repository cannot be empty or whitespace only",
        )),
        Some(_) => Ok(()),
        None if target.starts_with("https://") || target.starts_with("http://") => Ok(()),
        None => Err(invalid(
            "target",
            target,
            "expected an absolute API URL (or pass --repo owner/repo)",
        )),
    }
}

/// Validate output flags
///
/// `--diff` prints raw patch text, which cannot be combined with `--json`
pub fn validate_output_flags(diff: bool, json: bool) -> Result<()> {
    if diff && json {
        return Err(validation_error_to_anyhow(
            CommandValidationError::MutualExclusivity {
                first: "--diff".to_string(),
                second: "--json".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate token options
///
/// A single token and a tokens file are alternative credential sources
pub fn validate_token_args(token: &Option<String>, tokens_file: &Option<String>) -> Result<()> {
    if token.is_some() && tokens_file.is_some() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::MutualExclusivity {
                first: "--token".to_string(),
                second: "--tokens-file".to_string(),
            },
        ));
    }
    if let Some(path) = tokens_file
        && path.trim().is_empty()
    {
        return Err(invalid(
            "--tokens-file",
            path,
            "path cannot be empty or whitespace only",
        ));
    }
    Ok(())
}
