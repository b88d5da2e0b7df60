//! Remote reference management
//!
//! Only the named reference is ever touched; other remotes in the working
//! copy are left as they are.

use super::common::{failure_reason, run_git};
use anyhow::Result;
use std::path::Path;

/// What [`configure_remote`] did to the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAction {
    Added,
    Updated,
}

/// URL currently bound to `remote_name`, or `None` if the remote is absent
pub fn get_remote_url(repo_path: &Path, remote_name: &str) -> Result<Option<String>> {
    let output = run_git(repo_path, &["remote", "get-url", remote_name])?;

    if !output.status.success() {
        return Ok(None);
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(if url.is_empty() { None } else { Some(url) })
}

/// Bind `remote_name` to `url`, adding the remote or updating it in place
pub fn configure_remote(repo_path: &Path, remote_name: &str, url: &str) -> Result<RemoteAction> {
    let (action, args) = match get_remote_url(repo_path, remote_name)? {
        Some(_) => (RemoteAction::Updated, ["remote", "set-url", remote_name, url]),
        None => (RemoteAction::Added, ["remote", "add", remote_name, url]),
    };

    let output = run_git(repo_path, &args)?;
    if !output.status.success() {
        anyhow::bail!(
            "Failed to {} remote '{}': {}",
            if action == RemoteAction::Added { "add" } else { "update" },
            remote_name,
            failure_reason(&output)
        );
    }

    Ok(action)
}
