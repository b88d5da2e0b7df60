//! Central constants for the ghcreate application

/// Default values for Git operations
pub mod git {
    /// Remote reference linked when `--remote` is not given
    pub const DEFAULT_REMOTE: &str = "origin";

    /// Metadata directory marking a working copy
    pub const METADATA_DIR: &str = ".git";

    /// Executable used for every local repository operation
    pub const GIT_BINARY: &str = "git";
}

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = ghcreate_github::DEFAULT_API_BASE;

    /// Environment variable holding the default token
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV_VAR: &str = "GITHUB_API_URL";

    /// Text shown by the interactive token prompt
    pub const TOKEN_PROMPT: &str = "GitHub Personal Access Token";

    /// Longest repository name GitHub accepts
    pub const MAX_REPO_NAME_LEN: usize = 100;
}
