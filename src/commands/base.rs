//! Base types and traits for the command pattern

use crate::Result;
use crate::credentials::{TerminalPrompt, TokenPrompt};

/// Context passed to commands: the interactive collaborators of a run
pub struct CommandContext {
    /// Asked for a token when none is configured or the configured one is rejected
    pub prompt: Box<dyn TokenPrompt>,
}

impl CommandContext {
    pub fn new(prompt: Box<dyn TokenPrompt>) -> Self {
        Self { prompt }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new(Box::new(TerminalPrompt))
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    type Output;

    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<Self::Output>;
}
