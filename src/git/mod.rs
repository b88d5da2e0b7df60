//! Git operations using system git commands for maximum compatibility
//!
//! ## Sub-modules
//!
//! - [`inspect`]: Working copy detection and current branch lookup
//! - [`remote`]: Adding or updating a named remote reference
//! - [`push`]: Pushing a branch with upstream tracking
//! - [`common`]: Console logger and subprocess helpers

pub mod common;
pub mod inspect;
pub mod push;
pub mod remote;

pub use common::Logger;
pub use inspect::{get_current_branch, is_repository};
pub use push::{publish_branch, push_with_upstream};
pub use remote::{RemoteAction, configure_remote, get_remote_url};
