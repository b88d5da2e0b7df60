//! Options for a single publish run

use crate::constants::{git::DEFAULT_REMOTE, github::API_BASE, github::TOKEN_ENV_VAR};
use std::fmt;
use std::path::PathBuf;

/// Everything the publish workflow needs, resolved from CLI and environment
#[derive(Clone)]
pub struct PublishOptions {
    /// Local working copy
    pub path: PathBuf,
    /// Remote repository name; defaults to the directory name
    pub name: Option<String>,
    pub description: String,
    pub private: bool,
    /// Explicit token from `--token`
    pub token: Option<String>,
    /// Environment variable consulted when no explicit token is given
    pub token_env_var: String,
    pub remote: String,
    /// Branch to push; defaults to the checked-out branch
    pub branch: Option<String>,
    pub push: bool,
    /// Link the remote over SSH instead of HTTPS
    pub use_ssh: bool,
    pub api_url: String,
}

impl PublishOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            name: None,
            description: String::new(),
            private: false,
            token: None,
            token_env_var: TOKEN_ENV_VAR.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            branch: None,
            push: true,
            use_ssh: false,
            api_url: API_BASE.to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_token_env_var(mut self, var: impl Into<String>) -> Self {
        self.token_env_var = var.into();
        self
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn no_push(mut self) -> Self {
        self.push = false;
        self
    }

    pub fn use_ssh(mut self) -> Self {
        self.use_ssh = true;
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

// Keeps the token out of debug logs
impl fmt::Debug for PublishOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishOptions")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("private", &self.private)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("token_env_var", &self.token_env_var)
            .field("remote", &self.remote)
            .field("branch", &self.branch)
            .field("push", &self.push)
            .field("use_ssh", &self.use_ssh)
            .field("api_url", &self.api_url)
            .finish()
    }
}
