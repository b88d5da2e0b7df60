//! Configuration management module
//!
//! Settings are resolved in order: command-line flag, environment
//! variable, built-in default.

pub mod options;
pub mod validation;

pub use options::PublishOptions;
pub use validation::{ValidationError, validate_options};

use crate::constants::github::{API_BASE, API_URL_ENV_VAR};

/// Resolve the GitHub API base URL from a flag, then `GITHUB_API_URL`
pub fn resolve_api_url(flag: Option<String>) -> String {
    flag.filter(|url| !url.trim().is_empty())
        .or_else(|| {
            std::env::var(API_URL_ENV_VAR)
                .ok()
                .filter(|url| !url.trim().is_empty())
        })
        .unwrap_or_else(|| API_BASE.to_string())
}
