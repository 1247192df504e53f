//! API Facade for the application.
//!
//! Glues together context creation and command execution.

use std::path::{Path, PathBuf};

use crate::app::commands::dump::DumpOutcome;
use crate::app::commands::export::{ExportKind, ExportTarget, ReqsFormat};
use crate::app::commands::rebuild::RebuildOutcome;
use crate::app::commands::run::RunOutcome;
use crate::app::commands::{dump, export, init, rebuild, run, scan};
use crate::app::{AppContext, AppContextBuilder};
use crate::domain::{Action, MessageCatalog, ScanReport, UserConfig};
use crate::ports::{Reporter, ShellRunner, TemplateFetcher};
use crate::services::{HttpTemplateFetcher, SystemShell, TerminalReporter, load_user_config};

pub use crate::domain::AppError;

/// Everything an action invocation may need.
#[derive(Debug, Clone, Default)]
pub struct ActionRequest {
    pub path: Option<PathBuf>,
    pub command: Option<String>,
    pub out: Option<PathBuf>,
    pub export_kind: ExportKind,
    pub reqs_format: ReqsFormat,
    pub readme_template: Option<String>,
}

/// Result of a finished action.
#[derive(Debug)]
pub enum ActionOutcome {
    Scan(ScanReport),
    Rebuild(RebuildOutcome),
    Run(RunOutcome),
    Init(PathBuf),
    Export(ExportTarget, ScanReport),
    Dump(DumpOutcome),
}

impl ActionOutcome {
    /// At least one role failed while the batch continued.
    pub fn has_failures(&self) -> bool {
        match self {
            ActionOutcome::Scan(report) | ActionOutcome::Export(_, report) => report.has_failures(),
            ActionOutcome::Dump(outcome) => outcome.report.has_failures(),
            ActionOutcome::Rebuild(outcome) => outcome.has_failures(),
            ActionOutcome::Run(outcome) => outcome.has_failures(),
            ActionOutcome::Init(_) => false,
        }
    }
}

/// Create the production context rooted at `cwd`.
pub fn create_context(
    cwd: PathBuf,
    config: UserConfig,
    catalog: MessageCatalog,
) -> Result<AppContext<TerminalReporter, SystemShell, HttpTemplateFetcher>, AppError> {
    let reporter = TerminalReporter::new(catalog.clone());
    let fetcher = HttpTemplateFetcher::new()?;
    Ok(AppContextBuilder::new(cwd).catalog(catalog).config(config).build(
        reporter,
        SystemShell::new(),
        fetcher,
    ))
}

/// Run `action` in the current directory with the user configuration.
pub fn execute(
    action: Action,
    request: &ActionRequest,
    config_file: Option<&Path>,
    catalog: MessageCatalog,
) -> Result<ActionOutcome, AppError> {
    let config = load_user_config(config_file)?;
    let ctx = create_context(std::env::current_dir()?, config, catalog)?;
    execute_with(&ctx, action, request)
}

/// Run `action` against an existing context.
pub fn execute_with<R: Reporter, S: ShellRunner, F: TemplateFetcher>(
    ctx: &AppContext<R, S, F>,
    action: Action,
    request: &ActionRequest,
) -> Result<ActionOutcome, AppError> {
    let path = request.path.as_deref();
    let readme_template = request.readme_template.as_deref();
    match action {
        Action::Scan => scan::execute(ctx, path).map(ActionOutcome::Scan),
        Action::Rebuild => rebuild::execute(ctx, path, readme_template).map(ActionOutcome::Rebuild),
        Action::Run => run::execute(ctx, path, request.command.as_deref()).map(ActionOutcome::Run),
        Action::Init => init::execute(ctx, path, readme_template).map(ActionOutcome::Init),
        Action::Export => export::execute(
            ctx,
            path,
            request.export_kind,
            request.reqs_format,
            request.out.as_deref(),
        )
        .map(|(target, report)| ActionOutcome::Export(target, report)),
        Action::Dump => dump::execute(ctx, path, request.out.as_deref()).map(ActionOutcome::Dump),
    }
}
