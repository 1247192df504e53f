//! `run`: execute a shell command inside every role directory.

use std::path::Path;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{Action, AppError, MessageKey, RoleFailure, Severity, Substitutions};
use crate::ports::{Reporter, ShellRunner, TemplateFetcher};

/// Roles the command succeeded and failed in.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub succeeded: Vec<String>,
    pub failures: Vec<RoleFailure>,
}

impl RunOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

pub fn execute<R: Reporter, S: ShellRunner, F: TemplateFetcher>(
    ctx: &AppContext<R, S, F>,
    path: Option<&Path>,
    command: Option<&str>,
) -> Result<RunOutcome, AppError> {
    let command = command.filter(|command| !command.trim().is_empty()).ok_or_else(|| {
        AppError::MissingArgument {
            action: Action::Run.as_str().to_string(),
            argument: "a shell command (-m)".to_string(),
        }
    })?;
    let root = ctx.resolver().resolve(path)?;
    let discovery = ctx.scanner().discover(&root)?;

    let mut outcome = RunOutcome { failures: discovery.failures, ..RunOutcome::default() };
    if discovery.roles.is_empty() && outcome.failures.is_empty() {
        ctx.say(Severity::Skipped, MessageKey::EmptyRolesPath, &Substitutions::new(), root.display())?;
        return Ok(outcome);
    }

    for role in &discovery.roles {
        let name = role.name().to_string();
        info!(role = %name, command, "running shell command");
        match run_in(ctx.shell(), command, role.root(), &name) {
            Ok(stdout) => {
                ctx.reporter().role(Severity::Changed, &name, stdout.trim_end());
                outcome.succeeded.push(name);
            }
            Err(error) => {
                warn!(role = %name, %error, "shell command failed");
                outcome.failures.push(RoleFailure { role: name, error });
            }
        }
    }
    for failure in &outcome.failures {
        ctx.report_failure(&failure.role, &failure.error);
    }

    if !outcome.succeeded.is_empty() {
        let subs = Substitutions::new().with("role_count", outcome.succeeded.len());
        ctx.say(Severity::Ok, MessageKey::RunSuccess, &subs, command)?;
    }
    Ok(outcome)
}

fn run_in<S: ShellRunner>(
    shell: &S,
    command: &str,
    cwd: &Path,
    role: &str,
) -> Result<String, AppError> {
    let output = shell.run(command, cwd)?;
    if output.success() {
        Ok(output.stdout)
    } else {
        Err(AppError::ShellCommand {
            command: command.to_string(),
            role: role.to_string(),
            details: output.failure_details(),
        })
    }
}
