//! git-workflows - Interactive git helpers
//!
//! A small library behind two binaries:
//! - `git-commit-push`: stage all changes, commit with a prompted message, push
//! - `git-pull-replace`: hard-reset the local tree to `origin/<branch>`
//!
//! Git itself is an opaque subprocess; every invocation goes through the
//! [`command::CommandExecutor`] seam so workflows can be tested without a
//! repository.

pub mod command;
pub mod error;
pub mod prompt;
pub mod repo;
pub mod workflow;

pub use command::{CommandExecutor, CommandResult, ProcessExecutor, WorkflowStep};
pub use error::WorkflowError;
pub use repo::RepositoryState;
pub use workflow::Outcome;
