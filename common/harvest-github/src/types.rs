//! Typed records for the GitHub resources this crate reads
//!
//! Field sets follow the REST API v3 JSON shapes. Fields GitHub may send as
//! `null` are `Option`s; collections GitHub may omit default to empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository owner reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// License summary attached to a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub spdx_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One entry of a user's repository listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: Owner,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    pub fork: bool,
    #[serde(default)]
    pub languages_url: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Git-level identity of an author or committer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitIdentity {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

/// Tree object a commit points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRef {
    pub sha: String,
    pub url: String,
}

/// Git data of a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDetails {
    pub author: GitIdentity,
    pub committer: GitIdentity,
    pub message: String,
    pub tree: TreeRef,
    pub url: String,
}

/// GitHub account linked to a commit author or committer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
    pub id: u64,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
}

/// Parent commit reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub sha: String,
    pub url: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Line counts for a commit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStats {
    pub total: u64,
    pub additions: u64,
    pub deletions: u64,
}

/// One file touched by a commit or comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    pub sha: Option<String>,
    pub filename: String,
    pub status: String,
    pub additions: u64,
    pub deletions: u64,
    pub changes: u64,
    #[serde(default)]
    pub blob_url: Option<String>,
    #[serde(default)]
    pub raw_url: Option<String>,
    #[serde(default)]
    pub contents_url: Option<String>,
    /// Unified diff fragment; GitHub omits it for binary and oversized files
    #[serde(default)]
    pub patch: String,
}

/// Signature verification metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub verified: bool,
    pub reason: String,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub verified_at: Option<String>,
}

/// A single commit with its changed files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    #[serde(default)]
    pub node_id: Option<String>,
    pub commit: CommitDetails,
    pub url: String,
    pub html_url: String,
    #[serde(default)]
    pub comments_url: Option<String>,
    #[serde(default)]
    pub author: Option<Account>,
    #[serde(default)]
    pub committer: Option<Account>,
    #[serde(default)]
    pub parents: Vec<ParentRef>,
    #[serde(default)]
    pub stats: CommitStats,
    #[serde(default)]
    pub files: Vec<ChangedFile>,
    #[serde(default)]
    pub verification: Option<Verification>,
}

/// Result of comparing two refs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compare {
    pub url: String,
    pub html_url: String,
    pub permalink_url: String,
    pub diff_url: String,
    pub patch_url: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ahead_by: u64,
    #[serde(default)]
    pub behind_by: u64,
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}
