//! Diff assembly from changed-file patches

use crate::types::{ChangedFile, Commit, Compare};

/// Concatenate each file's patch followed by a newline, in the order given.
///
/// Files without a patch (binary or oversized files) still contribute their
/// separator, so they show up as blank lines.
pub fn assemble_diff(files: &[ChangedFile]) -> String {
    let mut diff = String::with_capacity(files.iter().map(|f| f.patch.len() + 1).sum());
    for file in files {
        diff.push_str(&file.patch);
        diff.push('\n');
    }
    diff
}

impl Commit {
    /// Combined patch text of every changed file
    pub fn diff(&self) -> String {
        assemble_diff(&self.files)
    }
}

impl Compare {
    /// Combined patch text of every changed file
    pub fn diff(&self) -> String {
        assemble_diff(&self.files)
    }
}
