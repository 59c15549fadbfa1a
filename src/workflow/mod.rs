//! Interactive workflows
//!
//! Each workflow is a straight line: precondition check, prompt, explicit
//! confirmation, then a fixed ordered list of steps that stops at the
//! first failure. Declining the confirmation is an ordinary outcome, not
//! an error.

pub mod commit_push;
pub mod pull_replace;

use colored::Colorize;

/// How a workflow ended when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All steps ran successfully.
    Completed,
    /// The user declined the confirmation; nothing was executed.
    Declined,
}

pub(crate) fn banner(title: &str) {
    rule();
    println!("  {}", title.bold().cyan());
    rule();
}

pub(crate) fn rule() {
    println!("{}", "─".repeat(50).dimmed());
}

pub(crate) fn declined() -> Outcome {
    println!("{} Operation cancelled.", "✗".red());
    Outcome::Declined
}
