//! Error types for GitHub API calls

use thiserror::Error;

/// Failure modes of a GitHub API call
///
/// The variants are kept apart because the CLI reports each differently:
/// a rejected token asks for a new one, an API error surfaces the server's
/// message and a transport error points at connectivity.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Bad credentials: the token is invalid or expired")]
    Auth,

    #[error("{message} ({status})")]
    Api { status: u16, message: String },

    #[error("request to GitHub failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from GitHub: {0}")]
    Decode(String),
}

impl GitHubError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Auth => Some(401),
            GitHubError::Api { status, .. } => Some(*status),
            GitHubError::Transport(err) => err.status().map(|s| s.as_u16()),
            GitHubError::Decode(_) => None,
        }
    }

    /// The server-supplied message for API errors
    pub fn api_message(&self) -> Option<&str> {
        match self {
            GitHubError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
