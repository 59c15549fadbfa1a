//! Subprocess execution
//!
//! Every git invocation goes through a [`WorkflowStep`] handed to a
//! [`CommandExecutor`]. The executor trait is the seam that lets the
//! workflow tests record invocations instead of touching a real repository.

use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

/// One command in a workflow: a program, its arguments, and a
/// human-readable description shown while it runs.
///
/// Arguments are a discrete list passed straight to the subprocess; no
/// shell is involved, so values like commit messages need no quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStep {
    pub program: String,
    pub args: Vec<String>,
    pub description: String,
}

impl WorkflowStep {
    pub fn new(program: &str, args: &[&str], description: &str) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
        }
    }

    /// The command as it would read on a shell line, for display only.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Captured outcome of a single command invocation.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{description} failed: {stderr}")]
    Failed { description: String, stderr: String },
}

/// Executes workflow steps. Implemented by [`ProcessExecutor`] for real
/// subprocesses and by recording mocks in tests.
pub trait CommandExecutor {
    fn execute(&mut self, step: &WorkflowStep) -> Result<CommandResult, CommandError>;
}

/// Runs each step as a blocking subprocess with captured output.
pub struct ProcessExecutor {
    dir: PathBuf,
}

impl ProcessExecutor {
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf() }
    }
}

impl CommandExecutor for ProcessExecutor {
    fn execute(&mut self, step: &WorkflowStep) -> Result<CommandResult, CommandError> {
        let output = Command::new(&step.program)
            .args(&step.args)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| CommandError::Spawn {
                program: step.program.clone(),
                source: e,
            })?;

        Ok(CommandResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Run one step with progress output: a starting line before, a
/// completed/failed line after. Non-zero exit becomes [`CommandError::Failed`]
/// carrying the step description and captured stderr. Empty output is fine.
pub fn run_step(
    executor: &mut dyn CommandExecutor,
    step: &WorkflowStep,
) -> Result<CommandResult, CommandError> {
    println!("{} {}...", "→".blue(), step.description);

    let result = executor.execute(step)?;

    if result.success {
        println!("{} {} completed", "✓".green().bold(), step.description);
        let out = result.stdout.trim();
        if !out.is_empty() {
            println!("{}", out.dimmed());
        }
        Ok(result)
    } else {
        println!("{} Error during {}", "✗".red().bold(), step.description);
        let err = result.stderr.trim();
        if !err.is_empty() {
            println!("{}", err.dimmed());
        }
        Err(CommandError::Failed {
            description: step.description.clone(),
            stderr: result.stderr,
        })
    }
}

/// Run steps in order, stopping at the first failure. On failure prints
/// which step failed plus a remediation hint, then propagates the error.
/// No rollback is attempted for steps that already ran.
pub fn run_steps(
    executor: &mut dyn CommandExecutor,
    steps: &[WorkflowStep],
) -> Result<(), CommandError> {
    for step in steps {
        if let Err(e) = run_step(executor, step) {
            println!("\n{} Failed at: {}", "✗".red().bold(), step.description);
            println!(
                "{} You may need to check your git status or remote configuration.",
                "!".yellow()
            );
            return Err(e);
        }
    }
    Ok(())
}
