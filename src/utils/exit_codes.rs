//! Exit code utilities and mappings

pub const SUCCESS: u8 = 0;
/// Same value clap uses for usage errors
pub const INVALID_ARGUMENT: u8 = 2;
pub const CREDENTIALS: u8 = 3;
pub const NOT_A_REPOSITORY: u8 = 4;
pub const REMOTE_API: u8 = 5;
pub const REMOTE_CONFIGURATION: u8 = 6;
pub const PUBLISH: u8 = 7;

/// Get a human-readable description for an exit code
pub fn describe_exit_code(exit_code: u8) -> &'static str {
    match exit_code {
        SUCCESS => "success",
        INVALID_ARGUMENT => "invalid argument",
        CREDENTIALS => "invalid or missing GitHub token",
        NOT_A_REPOSITORY => "path is not a Git repository",
        REMOTE_API => "GitHub API request failed",
        REMOTE_CONFIGURATION => "failed to configure git remote",
        PUBLISH => "failed to push to remote",
        _ => "error",
    }
}
