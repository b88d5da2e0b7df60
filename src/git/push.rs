//! Publishing a branch to a remote

use super::common::{failure_reason, run_git};
use super::inspect::get_current_branch;
use anyhow::Result;
use std::path::Path;

/// Push `branch` to `remote_name` and set it as the upstream
pub fn push_with_upstream(repo_path: &Path, remote_name: &str, branch: &str) -> Result<()> {
    let output = run_git(repo_path, &["push", "--set-upstream", remote_name, branch])?;

    if !output.status.success() {
        anyhow::bail!("Failed to push branch '{}': {}", branch, failure_reason(&output));
    }

    Ok(())
}

/// Push the given branch, or the checked-out one when `branch` is `None`
///
/// # Returns
/// The name of the branch that was pushed
pub fn publish_branch(repo_path: &Path, remote_name: &str, branch: Option<&str>) -> Result<String> {
    let branch = match branch {
        Some(branch) => branch.to_string(),
        None => get_current_branch(repo_path)?,
    };

    push_with_upstream(repo_path, remote_name, &branch)?;
    Ok(branch)
}
