//! GitHub token resolution
//!
//! A token comes from, in order: the `--token` flag, an environment
//! variable, or an interactive masked prompt. Nothing is cached between runs.

use crate::constants::github::{TOKEN_ENV_VAR, TOKEN_PROMPT};
use crate::error::PublishError;

/// Source of a token typed by the user
pub trait TokenPrompt: Send + Sync {
    fn prompt_token(&self) -> anyhow::Result<String>;
}

/// Masked terminal prompt
#[derive(Default)]
pub struct TerminalPrompt;

impl TokenPrompt for TerminalPrompt {
    fn prompt_token(&self) -> anyhow::Result<String> {
        let token = dialoguer::Password::new()
            .with_prompt(TOKEN_PROMPT)
            .allow_empty_password(true)
            .interact()?;
        Ok(token)
    }
}

/// Where a resolved token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Flag,
    Environment,
    Prompt,
}

pub struct CredentialResolver {
    explicit: Option<String>,
    env_var: String,
}

impl CredentialResolver {
    pub fn new(explicit: Option<String>) -> Self {
        Self {
            explicit,
            env_var: TOKEN_ENV_VAR.to_string(),
        }
    }

    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    /// Token available without asking the user
    ///
    /// Empty values are treated as absent so that an empty `GITHUB_TOKEN`
    /// falls through to the prompt.
    pub fn initial_token(&self) -> Option<(String, TokenSource)> {
        if let Some(token) = self.explicit.as_deref().map(str::trim)
            && !token.is_empty()
        {
            return Some((token.to_string(), TokenSource::Flag));
        }

        std::env::var(&self.env_var)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .map(|token| (token, TokenSource::Environment))
    }

    /// Ask the user for a token
    ///
    /// # Errors
    /// [`PublishError::CredentialInput`] if the prompt fails or the user
    /// enters nothing
    pub fn prompt(&self, prompt: &dyn TokenPrompt) -> Result<String, PublishError> {
        let token = prompt
            .prompt_token()
            .map_err(|e| PublishError::CredentialInput(e.to_string()))?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(PublishError::CredentialInput("no token entered".to_string()));
        }
        Ok(token)
    }
}
