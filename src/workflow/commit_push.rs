//! Commit-and-push workflow
//!
//! Stages everything, commits with a user-supplied message, and pushes to
//! the configured upstream.

use colored::Colorize;
use std::io::BufRead;
use std::path::Path;

use crate::command::{run_steps, CommandExecutor, WorkflowStep};
use crate::error::WorkflowError;
use crate::prompt;
use crate::repo;
use crate::workflow::{banner, declined, rule, Outcome};

pub fn run(
    dir: &Path,
    executor: &mut dyn CommandExecutor,
    input: &mut dyn BufRead,
) -> Result<Outcome, WorkflowError> {
    banner("Git Commit and Push");

    // Must know we are in a repository before reading anything.
    if !repo::is_repository(dir) {
        return Err(WorkflowError::NotARepository(dir.to_path_buf()));
    }

    println!("\n{} Enter your commit message:", "→".blue());
    let message = prompt::read_line(input, ">")?;
    if message.is_empty() {
        return Err(WorkflowError::EmptyCommitMessage);
    }

    println!("\nCommit message: {}", format!("'{}'", message).cyan());

    if !prompt::confirm(input, "\nProceed with commit and push?")? {
        return Ok(declined());
    }

    println!();
    rule();

    run_steps(executor, &steps(&message))?;

    rule();
    println!(
        "{} All changes have been committed and pushed.",
        "✓".green().bold()
    );
    println!("Commit message: {}", format!("'{}'", message).cyan());

    Ok(Outcome::Completed)
}

/// The fixed step list; the message travels as a discrete argument so it
/// needs no shell quoting.
fn steps(message: &str) -> Vec<WorkflowStep> {
    vec![
        WorkflowStep::new("git", &["add", "."], "Adding all files to staging"),
        WorkflowStep::new("git", &["commit", "-m", message], "Creating commit"),
        WorkflowStep::new("git", &["push"], "Pushing to remote repository"),
    ]
}
