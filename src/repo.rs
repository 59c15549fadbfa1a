//! Read-only repository queries
//!
//! Everything here shells out to git through the executor seam and parses
//! nothing beyond trimming whole-output strings. The snapshot is read once
//! per run and never mutated.

use std::path::Path;

use crate::command::{CommandExecutor, WorkflowStep};
use crate::error::WorkflowError;

/// Repository metadata exists at `dir`.
pub fn is_repository(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Transient snapshot of the repository, taken before a destructive
/// workflow so the operator can see what they are about to discard.
#[derive(Debug, Clone)]
pub struct RepositoryState {
    /// Current branch name.
    pub branch: String,
    /// URL of the `origin` remote.
    pub remote_url: String,
    /// `git status --porcelain` listing; `None` when the tree is clean.
    pub changes: Option<String>,
    /// One-line summary of the current commit.
    pub head: String,
}

impl RepositoryState {
    /// Query branch, remote, dirty status, and head summary.
    ///
    /// Branch and remote are required: a reset target cannot be built
    /// without them. A failing or empty status query means "clean".
    pub fn inspect(executor: &mut dyn CommandExecutor) -> Result<Self, WorkflowError> {
        let branch = query(executor, &["branch", "--show-current"], "Getting current branch")?
            .ok_or(WorkflowError::MissingBranch)?;

        let remote_url = query(
            executor,
            &["remote", "get-url", "origin"],
            "Getting remote URL",
        )?
        .ok_or(WorkflowError::MissingRemote)?;

        let changes = query(
            executor,
            &["status", "--porcelain"],
            "Checking working tree status",
        )?;

        let head = head_summary(executor)?;

        Ok(Self { branch, remote_url, changes, head })
    }

    pub fn has_uncommitted_changes(&self) -> bool {
        self.changes.is_some()
    }
}

/// One-line summary of the current commit.
pub fn head_summary(executor: &mut dyn CommandExecutor) -> Result<String, WorkflowError> {
    let summary = query(executor, &["log", "--oneline", "-1"], "Getting commit info")?;
    Ok(summary.unwrap_or_default())
}

/// Full `git status` output for operator display.
pub fn full_status(executor: &mut dyn CommandExecutor) -> Result<String, WorkflowError> {
    let status = query(executor, &["status"], "Checking final status")?;
    Ok(status.unwrap_or_default())
}

/// Run a quiet git query; trimmed stdout, with failure or empty output
/// collapsed to `None`. The caller decides whether that is fatal.
fn query(
    executor: &mut dyn CommandExecutor,
    args: &[&str],
    description: &str,
) -> Result<Option<String>, WorkflowError> {
    let step = WorkflowStep::new("git", args, description);
    let result = executor.execute(&step)?;

    if !result.success {
        return Ok(None);
    }

    let out = result.stdout.trim();
    if out.is_empty() {
        Ok(None)
    } else {
        Ok(Some(out.to_string()))
    }
}
