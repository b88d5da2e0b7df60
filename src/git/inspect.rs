//! Local repository inspection

use super::common::{failure_reason, run_git};
use crate::constants::git::METADATA_DIR;
use anyhow::Result;
use std::path::Path;

/// Whether `path` is a working copy, i.e. has a `.git` directory
///
/// Absence is a normal `false`; nothing here can fail.
pub fn is_repository(path: &Path) -> bool {
    path.join(METADATA_DIR).is_dir()
}

/// Name of the currently checked-out branch
///
/// Fails in detached-HEAD state, where there is no branch to push.
pub fn get_current_branch(repo_path: &Path) -> Result<String> {
    let output = run_git(repo_path, &["symbolic-ref", "--quiet", "--short", "HEAD"])?;

    if !output.status.success() {
        let reason = if output.stderr.is_empty() {
            "HEAD is detached; no branch is checked out".to_string()
        } else {
            failure_reason(&output)
        };
        anyhow::bail!("Failed to determine current branch: {}", reason);
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if branch.is_empty() {
        anyhow::bail!("Failed to determine current branch: git returned no name");
    }
    Ok(branch)
}
