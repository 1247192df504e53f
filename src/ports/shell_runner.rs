use std::path::Path;

use crate::domain::AppError;

/// Captured result of a finished shell command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ShellOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Best human-readable explanation of a failure.
    pub fn failure_details(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        match self.code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Port for executing shell commands inside a directory.
pub trait ShellRunner {
    /// Run `command` with `cwd` as working directory.
    ///
    /// Spawn failures are errors; a non-zero exit is reported through [`ShellOutput`].
    fn run(&self, command: &str, cwd: &Path) -> Result<ShellOutput, AppError>;
}
