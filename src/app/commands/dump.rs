//! `dump`: write every gathered stat as JSON.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, MessageKey, ScanReport, Severity, Substitutions};
use crate::ports::{Reporter, ShellRunner, TemplateFetcher};

use super::{scan::report_failures, write_file};

#[derive(Debug)]
pub struct DumpOutcome {
    pub file: PathBuf,
    pub report: ScanReport,
}

pub fn execute<R: Reporter, S: ShellRunner, F: TemplateFetcher>(
    ctx: &AppContext<R, S, F>,
    path: Option<&Path>,
    out: Option<&Path>,
) -> Result<DumpOutcome, AppError> {
    let root = ctx.resolver().resolve(path)?;
    let file = match out {
        Some(out) => ctx.resolver().output(out),
        None => ctx.cwd().join(&ctx.conventions().default_dump_file),
    };

    let report = ctx.scanner().scan(&root)?;
    if report.is_empty() {
        ctx.say(Severity::Skipped, MessageKey::EmptyRolesPath, &Substitutions::new(), root.display())?;
    }
    report_failures(ctx, &report);

    let json = serde_json::to_string_pretty(&report.by_name())?;
    write_file(&file, &format!("{}\n", json))?;
    info!(file = %file.display(), roles = report.roles.len(), "dumped role stats");

    ctx.say(Severity::Ok, MessageKey::DumpSuccess, &Substitutions::new(), file.display())?;
    Ok(DumpOutcome { file, report })
}
