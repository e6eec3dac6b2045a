//! git-commit-message - generate commit messages from staged changes
//!
//! This library reads the staged diff of a git repository, asks a hosted
//! completion provider (OpenAI or Google Gemini) for a commit message, and
//! formats the reply into a policy-compliant message that can be printed or
//! committed directly.

pub mod ai;
pub mod cli;
pub mod core;
pub mod error;
pub mod message;

pub use error::{CommitMessageError, Result};
