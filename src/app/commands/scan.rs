//! `scan`: report stats for every role under a path.

use std::path::Path;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, MessageKey, RoleStats, ScanReport, Severity, Substitutions};
use crate::ports::{Reporter, ShellRunner, TemplateFetcher};

pub fn execute<R: Reporter, S: ShellRunner, F: TemplateFetcher>(
    ctx: &AppContext<R, S, F>,
    path: Option<&Path>,
) -> Result<ScanReport, AppError> {
    let root = ctx.resolver().resolve(path)?;
    info!(root = %root.display(), "scanning roles");

    let report = ctx.scanner().scan(&root)?;
    if report.is_empty() {
        ctx.say(Severity::Skipped, MessageKey::EmptyRolesPath, &Substitutions::new(), root.display())?;
        return Ok(report);
    }

    for role in &report.roles {
        ctx.reporter().role(Severity::Ok, &role.name, &describe_role(role));
    }
    for name in &report.skipped {
        ctx.reporter().role(Severity::Skipped, name, "no ansible folders");
    }
    report_failures(ctx, &report);

    let totals = report.totals();
    let subs = Substitutions::new()
        .with("role_count", totals.roles)
        .with("defaults", totals.defaults)
        .with("facts", totals.facts)
        .with("tasks", totals.tasks)
        .with("files", totals.files)
        .with("lines", totals.lines);
    let severity = if report.has_failures() { Severity::Failed } else { Severity::Ok };
    ctx.say(severity, MessageKey::ScanSummary, &subs, "")?;

    Ok(report)
}

/// Print every per-role failure of a report.
pub fn report_failures<R: Reporter, S: ShellRunner, F: TemplateFetcher>(
    ctx: &AppContext<R, S, F>,
    report: &ScanReport,
) {
    for failure in &report.failures {
        ctx.report_failure(&failure.role, &failure.error);
    }
}

fn describe_role(role: &RoleStats) -> String {
    let mut detail = format!(
        "defaults {:<3} facts {:<3} tasks {:<3} files {:<4} lines {:<5}",
        role.defaults, role.facts, role.tasks, role.files, role.lines
    );
    if !role.is_documented() {
        let missing: Vec<&str> = [(role.meta, "meta/main.yml"), (role.readme, "README.md")]
            .into_iter()
            .filter(|(present, _)| !present)
            .map(|(_, file)| file)
            .collect();
        detail.push_str(&format!(" missing {}", missing.join(", ")));
    }
    detail.trim_end().to_string()
}
