//! Shared test support: a recording executor that replays canned results
//! instead of spawning subprocesses.

use std::collections::HashMap;

use git_workflows::{CommandExecutor, CommandResult, WorkflowStep};
use git_workflows::command::CommandError;

/// Records every step it is asked to execute. Unconfigured commands
/// succeed with empty output; canned responses are keyed by the full
/// command line.
pub struct RecordingExecutor {
    pub steps: Vec<WorkflowStep>,
    responses: HashMap<String, CommandResult>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            responses: HashMap::new(),
        }
    }

    pub fn respond(mut self, command: &str, stdout: &str) -> Self {
        self.responses.insert(
            command.to_string(),
            CommandResult {
                success: true,
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    pub fn fail(mut self, command: &str, stderr: &str) -> Self {
        self.responses.insert(
            command.to_string(),
            CommandResult {
                success: false,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Command lines executed so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.display()).collect()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&mut self, step: &WorkflowStep) -> Result<CommandResult, CommandError> {
        self.steps.push(step.clone());

        Ok(self.responses.get(&step.display()).cloned().unwrap_or(
            CommandResult {
                success: true,
                stdout: String::new(),
                stderr: String::new(),
            },
        ))
    }
}

/// A scratch directory that passes the repository precondition.
pub fn fake_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}
