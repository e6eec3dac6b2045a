//! git-commit-message - AI-assisted commit messages
//!
//! Generates a commit message from the staged changes, optionally creating
//! the commit directly. Install on PATH to use as `git commit-message`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_commit_message::cli::{generate, Cli};
use git_commit_message::error::Result;

#[tokio::main]
async fn main() {
    // Initialize logging; stdout is reserved for the generated message
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    generate::handle_generate(cli).await
}
