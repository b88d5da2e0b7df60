//! ghcreate - create a GitHub repository from a local Git repository

pub mod commands;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod git;
pub mod utils;

pub type Result<T> = std::result::Result<T, PublishError>;

// Re-export commonly used types
pub use commands::{Command, CommandContext, PublishCommand, PublishOutcome};
pub use config::PublishOptions;
pub use error::PublishError;
