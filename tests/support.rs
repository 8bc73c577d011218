//! Common test support utilities and fixtures
//!
//! Builders for GitHub-shaped JSON bodies and a helper to run the CLI binary.

#![allow(dead_code)]

use harvest_github::{CredentialPool, GitHubClient};
use serde_json::{Value, json};
use std::process::Command;

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the gh-harvest binary with given arguments and extra environment
pub fn run_cli(args: &[&str], env: &[(&str, &str)]) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gh-harvest"));
    cmd.args(args);
    cmd.env_remove("GITHUB_TOKEN");
    cmd.env("NO_COLOR", "1");
    for (key, value) in env {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("Failed to execute gh-harvest");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// A minimal repository object as returned by `/users/{user}/repos`
pub fn repo_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("octocat/{}", name),
        "owner": { "login": "octocat" },
        "html_url": format!("https://github.com/octocat/{}", name),
        "description": null,
        "fork": false,
        "license": null,
        "topics": []
    })
}

/// A page body holding repositories with the given ids
pub fn repo_page(ids: &[u64]) -> String {
    Value::Array(
        ids.iter()
            .map(|id| repo_json(*id, &format!("repo-{}", id)))
            .collect(),
    )
    .to_string()
}

/// A changed-file object for commit and compare bodies
pub fn file_json(filename: &str, patch: Option<&str>) -> Value {
    let mut file = json!({
        "sha": "bbcd538c8e72b8c175046e27cc8f907076331401",
        "filename": filename,
        "status": "modified",
        "additions": 1,
        "deletions": 0,
        "changes": 1,
        "blob_url": format!("https://github.com/octocat/Hello-World/blob/abc/{}", filename),
        "raw_url": format!("https://github.com/octocat/Hello-World/raw/abc/{}", filename),
        "contents_url": format!("https://api.github.com/repos/octocat/Hello-World/contents/{}", filename)
    });
    if let Some(patch) = patch {
        file["patch"] = Value::String(patch.to_string());
    }
    file
}

/// A commit body with the given files
pub fn commit_body(files: Vec<Value>) -> String {
    json!({
        "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "node_id": "C_1",
        "commit": {
            "author": { "name": "Monalisa Octocat", "email": "mona@github.com", "date": "2011-04-14T16:00:49Z" },
            "committer": { "name": "Monalisa Octocat", "email": "mona@github.com", "date": "2011-04-14T16:00:49Z" },
            "message": "Fix all the bugs",
            "tree": { "sha": "6dcb09b", "url": "https://api.github.com/repos/octocat/Hello-World/tree/6dcb09b" },
            "url": "https://api.github.com/repos/octocat/Hello-World/git/commits/6dcb09b"
        },
        "url": "https://api.github.com/repos/octocat/Hello-World/commits/6dcb09b",
        "html_url": "https://github.com/octocat/Hello-World/commit/6dcb09b",
        "comments_url": "https://api.github.com/repos/octocat/Hello-World/commits/6dcb09b/comments",
        "author": { "login": "octocat", "id": 1 },
        "committer": { "login": "octocat", "id": 1 },
        "parents": [],
        "stats": { "total": 1, "additions": 1, "deletions": 0 },
        "files": files,
        "verification": { "verified": false, "reason": "unsigned", "signature": null, "payload": null, "verified_at": null }
    })
    .to_string()
}

/// A compare body with the given files
pub fn compare_body(files: Vec<Value>) -> String {
    json!({
        "url": "https://api.github.com/repos/octocat/Hello-World/compare/main...topic",
        "html_url": "https://github.com/octocat/Hello-World/compare/main...topic",
        "permalink_url": "https://github.com/octocat/Hello-World/compare/octocat:bbcd538...octocat:0328041",
        "diff_url": "https://github.com/octocat/Hello-World/compare/main...topic.diff",
        "patch_url": "https://github.com/octocat/Hello-World/compare/main...topic.patch",
        "status": "ahead",
        "ahead_by": 1,
        "behind_by": 0,
        "total_commits": 1,
        "files": files
    })
    .to_string()
}

/// `Link` header value pointing at `next`
pub fn next_link(next: &str) -> String {
    format!(r#"<{}>; rel="next""#, next)
}

/// Client talking to a mock server with a deterministic token pool
pub fn client_for(server_url: &str, tokens: &[&str]) -> GitHubClient {
    let tokens = tokens.iter().map(|t| t.to_string()).collect();
    let pool = CredentialPool::with_seed(tokens, 11).expect("valid token pool");
    GitHubClient::new(pool)
        .expect("client builds")
        .with_api_base(server_url)
}
