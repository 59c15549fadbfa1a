use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::BufReader;

use git_workflows::workflow::{pull_replace, Outcome};
use git_workflows::ProcessExecutor;

/// Hard-reset the local tree to `origin/<current-branch>`.
///
/// Destructive: discards all local commits, modifications, and untracked
/// files after an explicit `yes` confirmation. No flags; stdin only.
#[derive(Parser)]
#[command(name = "git-pull-replace")]
#[command(about = "Replace the local tree with the latest remote version")]
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

    match pull_replace::run(&dir, &mut executor, &mut input)? {
        Outcome::Completed | Outcome::Declined => Ok(()),
    }
}
