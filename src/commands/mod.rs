//! Command implementations

pub mod base;
pub mod publish;

pub use base::{Command, CommandContext};
pub use publish::{PublishCommand, PublishOutcome};
