//! CLI module for git-commit-message
//!
//! Command definition and the generate handler.

pub mod commands;
pub mod generate;

pub use commands::Cli;
