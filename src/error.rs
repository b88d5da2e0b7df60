//! Errors surfaced by the publish workflow

use crate::utils::exit_codes;
use ghcreate_github::GitHubError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Invalid GitHub token. Please provide a valid token.")]
    InvalidCredentials,

    #[error("Could not read GitHub token: {0}")]
    CredentialInput(String),

    #[error("{} is not a Git repository.", .0.display())]
    NotARepository(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("GitHub API Error: {0}")]
    RemoteApi(#[from] GitHubError),

    #[error("Failed to configure remote '{remote}': {reason}")]
    RemoteConfiguration {
        remote: String,
        reason: String,
        /// Repository already created on GitHub
        repository_url: String,
    },

    #[error("Failed to push to remote '{remote}': {reason}")]
    Publish {
        remote: String,
        reason: String,
        repository_url: String,
    },
}

impl PublishError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            PublishError::InvalidCredentials | PublishError::CredentialInput(_) => {
                exit_codes::CREDENTIALS
            }
            PublishError::NotARepository(_) => exit_codes::NOT_A_REPOSITORY,
            PublishError::InvalidArgument(_) => exit_codes::INVALID_ARGUMENT,
            PublishError::RemoteApi(_) => exit_codes::REMOTE_API,
            PublishError::RemoteConfiguration { .. } => exit_codes::REMOTE_CONFIGURATION,
            PublishError::Publish { .. } => exit_codes::PUBLISH,
        }
    }
}
