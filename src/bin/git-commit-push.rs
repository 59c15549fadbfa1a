use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::BufReader;

use git_workflows::workflow::{commit_push, Outcome};
use git_workflows::ProcessExecutor;

/// Stage all changes, commit with a prompted message, and push.
///
/// All interaction happens through stdin prompts; there are no flags.
#[derive(Parser)]
#[command(name = "git-commit-push")]
#[command(about = "Stage, commit, and push with interactive confirmation")]
#[command(version)]
struct Cli {}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let Cli {} = Cli::parse();

    let dir = std::env::current_dir().context("Could not determine current directory")?;
    let mut executor = ProcessExecutor::new(&dir);
    let mut input = BufReader::new(std::io::stdin());

    // Declined is a clean exit, same as success.
    match commit_push::run(&dir, &mut executor, &mut input)? {
        Outcome::Completed | Outcome::Declined => Ok(()),
    }
}
