//! CLI definition using clap

use clap::Parser;

use crate::core::config::{ProviderKind, DEFAULT_SUBJECT_MAX};

/// Generate a commit message from the staged changes
///
/// Reads the staged diff, asks the configured completion provider for a
/// commit message, and prints it — or commits with it directly.
#[derive(Parser, Debug)]
#[command(name = "git-commit-message", version, about, long_about = None)]
pub struct Cli {
    /// Auxiliary free-text context about the change (optional)
    pub context: Option<String>,

    /// Produce a single-line subject with no body
    #[arg(long)]
    pub one_line: bool,

    /// Maximum subject line length in characters
    #[arg(long, default_value_t = DEFAULT_SUBJECT_MAX)]
    pub max_length: usize,

    /// Commit immediately with the generated message
    #[arg(long)]
    pub commit: bool,

    /// Open the editor on the message before committing
    #[arg(long, requires = "commit")]
    pub edit: bool,

    /// Output language/locale tag, e.g. en-GB or ko-KR
    #[arg(long)]
    pub language: Option<String>,

    /// Completion provider to use
    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    /// Model name to request
    #[arg(long)]
    pub model: Option<String>,

    /// Print the prompt, raw response and token usage
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["git-commit-message"]).unwrap();
        assert!(!cli.one_line);
        assert!(!cli.commit);
        assert_eq!(cli.max_length, 72);
        assert!(cli.context.is_none());
        assert!(cli.provider.is_none());
    }

    #[test]
    fn test_positional_context() {
        let cli = Cli::try_parse_from(["git-commit-message", "touch up the docs"]).unwrap();
        assert_eq!(cli.context.as_deref(), Some("touch up the docs"));
    }

    #[test]
    fn test_edit_requires_commit() {
        assert!(Cli::try_parse_from(["git-commit-message", "--edit"]).is_err());
        let cli = Cli::try_parse_from(["git-commit-message", "--commit", "--edit"]).unwrap();
        assert!(cli.commit);
        assert!(cli.edit);
    }

    #[test]
    fn test_provider_values() {
        let cli =
            Cli::try_parse_from(["git-commit-message", "--provider", "google"]).unwrap();
        assert_eq!(cli.provider, Some(ProviderKind::Google));
        assert!(Cli::try_parse_from(["git-commit-message", "--provider", "other"]).is_err());
    }
}
