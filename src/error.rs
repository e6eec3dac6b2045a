//! Custom error types for git-commit-message
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the git-commit-message application
#[derive(Error, Debug)]
pub enum CommitMessageError {
    /// Not running in a git repository
    #[error("This directory is not a git repository.\n\n  → Run 'git init' to create one, or navigate to an existing git project.")]
    NotGitRepository,

    /// Nothing staged to describe
    #[error("There are no staged changes.\n\n  → Stage files with 'git add' and try again.")]
    NoStagedChanges,

    /// Malformed formatter input or options
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Required API key environment variable is missing
    #[error("The {0} environment variable is not set.\n\n  → Export {0} with your API key and try again.")]
    MissingApiKey(&'static str),

    /// Completion provider failure (network, auth, rate limit)
    #[error("AI generation failed: {0}")]
    Provider(String),

    /// The underlying git commit invocation failed
    #[error("git commit failed: {0}\n\n  → Check that your staged changes and commit hooks are in order.")]
    CommitFailed(String),

    /// Git operation error
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
}

/// Result type alias using CommitMessageError
pub type Result<T> = std::result::Result<T, CommitMessageError>;
