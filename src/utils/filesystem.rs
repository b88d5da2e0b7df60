//! File system utility functions

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the working path to an absolute, symlink-free path
pub fn resolve_repo_path(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .with_context(|| format!("Failed to resolve path '{}'", path.display()))
}

/// Final path segment as a string, used as the default repository name
pub fn directory_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}
