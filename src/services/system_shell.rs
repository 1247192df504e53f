use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{ShellOutput, ShellRunner};

/// Runs commands through `sh -c`.
#[derive(Debug, Clone)]
pub struct SystemShell {
    program: String,
}

impl SystemShell {
    pub fn new() -> Self {
        Self { program: "sh".to_string() }
    }

    /// Use a different POSIX-compatible shell.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellRunner for SystemShell {
    fn run(&self, command: &str, cwd: &Path) -> Result<ShellOutput, AppError> {
        debug!(program = %self.program, command, cwd = %cwd.display(), "spawning shell");

        let output = Command::new(&self.program)
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .output()
            .map_err(|e| AppError::ShellCommand {
                command: command.to_string(),
                role: cwd.display().to_string(),
                details: e.to_string(),
            })?;

        Ok(ShellOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
