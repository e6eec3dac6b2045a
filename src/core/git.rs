//! Local git repository operations
//!
//! This module provides a wrapper around git2 for the operations the tool
//! needs:
//! - Repository discovery and validation
//! - Staged-change detection
//! - Staged diff generation
//! - Creating the commit through the system git binary (so commit hooks run
//!   and `--edit` opens the configured editor)

use std::path::Path;
use std::process::Command;

use git2::{DiffOptions, Repository, Tree};

use crate::error::{CommitMessageError, Result};

/// Wrapper for local git repository operations
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the git repository in the current directory
    pub fn open_current_dir() -> Result<Self> {
        Self::discover(".")
    }

    /// Discover a git repository from the given path
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo =
            Repository::discover(path).map_err(|_| CommitMessageError::NotGitRepository)?;
        Ok(Self { repo })
    }

    /// Check if the current directory is inside a git repository
    pub fn is_git_repository() -> bool {
        Repository::discover(".").is_ok()
    }

    /// Tree of the current HEAD commit, or None when HEAD is unborn
    fn head_tree(&self) -> Result<Option<Tree<'_>>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_tree()?)),
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether anything is staged for commit
    pub fn has_staged_changes(&self) -> Result<bool> {
        let head = self.head_tree()?;
        let index = self.repo.index()?;

        let diff = self.repo.diff_tree_to_index(
            head.as_ref(),
            Some(&index),
            Some(&mut DiffOptions::new()),
        )?;

        Ok(diff.deltas().len() > 0)
    }

    /// Get the diff of staged changes as unified patch text
    pub fn staged_diff(&self) -> Result<String> {
        let head = self.head_tree()?;
        let index = self.repo.index()?;

        let diff = self.repo.diff_tree_to_index(
            head.as_ref(),
            Some(&index),
            Some(&mut DiffOptions::new()),
        )?;

        let mut diff_text = String::new();
        diff.print(git2::DiffFormat::Patch, |_delta, _hunk, line| {
            match line.origin() {
                '+' | '-' | ' ' => diff_text.push(line.origin()),
                _ => {}
            }
            diff_text.push_str(std::str::from_utf8(line.content()).unwrap_or(""));
            true
        })?;

        Ok(diff_text)
    }

    /// Commit the staged changes with the given message using the system git
    /// binary. `edit` opens the configured editor on the message first.
    pub fn commit_with_message(&self, message: &str, edit: bool) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.arg("commit").arg("-m").arg(message);
        if edit {
            cmd.arg("--edit");
        }
        if let Some(workdir) = self.repo.workdir() {
            cmd.current_dir(workdir);
        }

        if edit {
            // The editor needs the terminal, so inherit stdio; hook and git
            // errors land on the user's own stderr.
            let status = cmd.status().map_err(|e| {
                CommitMessageError::CommitFailed(format!("cannot execute git: {}", e))
            })?;
            if !status.success() {
                return Err(CommitMessageError::CommitFailed(format!(
                    "git exited with status {}",
                    status.code().unwrap_or(-1)
                )));
            }
        } else {
            let output = cmd.output().map_err(|e| {
                CommitMessageError::CommitFailed(format!("cannot execute git: {}", e))
            })?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(CommitMessageError::CommitFailed(
                    stderr.trim().to_string(),
                ));
            }
        }

        Ok(())
    }
}
