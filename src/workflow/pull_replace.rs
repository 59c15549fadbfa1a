//! Pull-and-replace workflow
//!
//! Makes the local tree exactly match the remote branch: fetch, hard reset
//! to `origin/<branch>`, then remove untracked files. Everything local is
//! discarded, so the confirmation requires the full word `yes`.

use colored::Colorize;
use std::io::BufRead;
use std::path::Path;

use crate::command::{run_steps, CommandExecutor, WorkflowStep};
use crate::error::WorkflowError;
use crate::prompt;
use crate::repo::{self, RepositoryState};
use crate::workflow::{banner, declined, rule, Outcome};

pub fn run(
    dir: &Path,
    executor: &mut dyn CommandExecutor,
    input: &mut dyn BufRead,
) -> Result<Outcome, WorkflowError> {
    banner("Git Pull and Replace");
    println!(
        "{} WARNING: This will discard ALL local changes!",
        "!".yellow().bold()
    );
    rule();

    if !repo::is_repository(dir) {
        return Err(WorkflowError::NotARepository(dir.to_path_buf()));
    }

    // Branch and remote are fatal if absent; inspect before any prompt.
    let state = RepositoryState::inspect(executor)?;

    println!("\nCurrent branch: {}", state.branch.cyan());
    println!("Remote URL:     {}", state.remote_url.cyan());

    match state.changes {
        Some(ref listing) => {
            println!("\n{} Uncommitted changes detected:", "!".yellow());
            println!("{}", listing.dimmed());
            println!("{} These changes will be permanently lost!", "!".yellow());
        }
        None => println!("\n{} No uncommitted changes detected.", "✓".green()),
    }

    println!("\nCurrent commit: {}", state.head.dimmed());

    println!();
    rule();
    let question =
        "Are you sure you want to pull latest and reset? This will discard ALL local changes!";
    if !prompt::confirm_destructive(input, question)? {
        return Ok(declined());
    }

    println!();
    rule();

    run_steps(executor, &steps(&state.branch))?;

    rule();
    println!(
        "{} Local repository now matches the latest remote version.",
        "✓".green().bold()
    );

    // Re-read so the operator sees where the tree actually landed.
    println!("Updated commit: {}", repo::head_summary(executor)?.dimmed());

    println!("\n{}", "Final repository status:".bold());
    println!("{}", repo::full_status(executor)?.dimmed());

    Ok(Outcome::Completed)
}

fn steps(branch: &str) -> Vec<WorkflowStep> {
    let target = format!("origin/{}", branch);
    vec![
        WorkflowStep::new(
            "git",
            &["fetch", "origin"],
            "Fetching latest changes from remote",
        ),
        WorkflowStep::new(
            "git",
            &["reset", "--hard", target.as_str()],
            &format!("Hard resetting to {}", target),
        ),
        WorkflowStep::new(
            "git",
            &["clean", "-fd"],
            "Removing untracked files and directories",
        ),
    ]
}
