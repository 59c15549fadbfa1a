//! Workflow error taxonomy
//!
//! Every variant terminates the workflow immediately; none are retried.
//! A declined confirmation is not an error — see `workflow::Outcome`.

use std::path::PathBuf;
use thiserror::Error;

use crate::command::CommandError;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("not a git repository: {} (run this from your project root)", .0.display())]
    NotARepository(PathBuf),

    #[error("commit message cannot be empty")]
    EmptyCommitMessage,

    #[error("no remote 'origin' found (configure your remote repository first)")]
    MissingRemote,

    #[error("could not determine the current branch")]
    MissingBranch,

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
