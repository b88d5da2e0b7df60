//! Utility modules for common functionality

pub mod exit_codes;
pub mod filesystem;

// Re-export commonly used functions
pub use exit_codes::describe_exit_code;
pub use filesystem::{directory_name, resolve_repo_path};
