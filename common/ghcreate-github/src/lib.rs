//! GitHub API client library
//!
//! This library provides the remote half of `ghcreate`: checking a token,
//! looking up the authenticated account and creating a repository.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client implementation
//! - [`user`]: Token validation and identity lookup
//! - [`repositories`]: Repository creation
//! - [`error`]: Error taxonomy for API calls
//! - [`util`]: Error message extraction from API responses

mod client;
mod error;
mod repositories;
mod user;
mod util;

// Re-export public API
pub use client::{API_VERSION, DEFAULT_API_BASE, GitHubClient};
pub use error::GitHubError;
pub use repositories::{RepositoryRequest, RepositoryResource};
pub use util::extract_error_message;

pub type Result<T> = std::result::Result<T, GitHubError>;
