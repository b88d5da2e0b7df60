//! Common git utilities and shared helpers
//!
//! This module contains utilities that are shared across the git
//! workflows: console logging and subprocess invocation.

use crate::constants::git::GIT_BINARY;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use std::process::{Command, Output};

/// Logger for user-facing progress with consistent formatting
///
/// Each message is prefixed with the repository name in cyan/bold so the
/// steps of one run read as a single block.
///
/// ## Example
///
/// ```rust,no_run
/// use ghcreate::git::Logger;
///
/// let logger = Logger::new("my-repo");
/// logger.info("Creating GitHub repository");
/// logger.success("Push successful!");
/// ```
#[derive(Default, Clone)]
pub struct Logger {
    label: String,
}

impl Logger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Switch the prefix once the repository name is known
    pub fn relabel(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn info(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg);
    }

    pub fn success(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg.green());
    }

    pub fn warn(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg.yellow());
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{} | {}", self.label.cyan().bold(), msg.red());
    }
}

/// Run `git <args>` inside `repo_path`, capturing its output
///
/// Only a failure to spawn is an error here; callers inspect the exit status.
pub(crate) fn run_git(repo_path: &Path, args: &[&str]) -> Result<Output> {
    tracing::debug!(path = %repo_path.display(), ?args, "running git");
    let output = Command::new(GIT_BINARY)
        .args(args)
        .current_dir(repo_path)
        .output()
        .with_context(|| format!("Failed to execute git {}", args.first().unwrap_or(&"")))?;
    tracing::debug!(status = ?output.status.code(), "git finished");
    Ok(output)
}

/// Trimmed stderr of a finished git process, or its exit status if silent
pub(crate) fn failure_reason(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        stderr
    }
}
