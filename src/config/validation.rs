//! Argument validation applied before the repository is created
//!
//! Only names GitHub can never accept are rejected here. Anything else is
//! sent as given; GitHub normalises characters such as spaces and reports
//! the rest as an API error.

use super::PublishOptions;
use crate::constants::github::MAX_REPO_NAME_LEN;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyRepositoryName,
    RepositoryNameTooLong(String),
    ReservedRepositoryName(String),
    InvalidRemoteName(String),
    EmptyBranchName,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyRepositoryName => {
                write!(f, "Repository name cannot be empty")
            }
            ValidationError::RepositoryNameTooLong(name) => write!(
                f,
                "Repository name '{}' is longer than {} characters",
                name, MAX_REPO_NAME_LEN
            ),
            ValidationError::ReservedRepositoryName(name) => {
                write!(f, "Repository name '{}' is reserved", name)
            }
            ValidationError::InvalidRemoteName(name) => {
                write!(f, "Invalid remote name: '{}'", name)
            }
            ValidationError::EmptyBranchName => write!(f, "Branch name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject repository names GitHub can never accept
pub fn validate_repository_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyRepositoryName);
    }
    if name.chars().count() > MAX_REPO_NAME_LEN {
        return Err(ValidationError::RepositoryNameTooLong(name.to_string()));
    }
    if name == "." || name == ".." {
        return Err(ValidationError::ReservedRepositoryName(name.to_string()));
    }
    Ok(())
}

/// Validate a remote reference name
pub fn validate_remote_name(remote: &str) -> Result<(), ValidationError> {
    if remote.is_empty() || remote.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidRemoteName(remote.to_string()));
    }
    Ok(())
}

/// Validate the explicitly supplied parts of the options
///
/// A derived repository name is checked separately once it is known.
pub fn validate_options(options: &PublishOptions) -> Result<(), ValidationError> {
    if let Some(name) = &options.name {
        validate_repository_name(name)?;
    }
    validate_remote_name(&options.remote)?;
    if let Some(branch) = &options.branch
        && branch.trim().is_empty()
    {
        return Err(ValidationError::EmptyBranchName);
    }
    Ok(())
}
