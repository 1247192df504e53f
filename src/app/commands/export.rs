//! `export`: requirements files and dependency graphs.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::domain::config::ScmConfig;
use crate::domain::{AppError, MessageKey, ScanReport, Severity, Substitutions};
use crate::ports::{Reporter, ShellRunner, TemplateFetcher};

use super::{scan::report_failures, write_file};

/// What to export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    /// Requirements for `ansible-galaxy install -r`.
    #[default]
    Reqs,
    /// Graphviz DOT digraph of role dependencies.
    Graph,
}

/// Requirements file layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReqsFormat {
    #[default]
    Yml,
    Txt,
}

/// Where the export went.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportTarget {
    File(PathBuf),
    Stdout,
}

#[derive(Debug, Serialize)]
struct Requirement {
    src: String,
    name: String,
}

pub fn execute<R: Reporter, S: ShellRunner, F: TemplateFetcher>(
    ctx: &AppContext<R, S, F>,
    path: Option<&Path>,
    kind: ExportKind,
    format: ReqsFormat,
    out: Option<&Path>,
) -> Result<(ExportTarget, ScanReport), AppError> {
    let root = ctx.resolver().resolve(path)?;
    let report = ctx.scanner().scan(&root)?;
    if report.is_empty() {
        ctx.say(Severity::Skipped, MessageKey::EmptyRolesPath, &Substitutions::new(), root.display())?;
    }
    report_failures(ctx, &report);

    let document = match kind {
        ExportKind::Reqs => {
            let requirements = requirements(&report, &ctx.config().scm);
            match format {
                ReqsFormat::Yml => reqs_yml(&requirements)?,
                ReqsFormat::Txt => reqs_txt(&requirements),
            }
        }
        ExportKind::Graph => dependency_graph(&report),
    };
    info!(?kind, ?format, roles = report.roles.len(), "exported roles");

    let target = match out {
        Some(out) => {
            let file = ctx.resolver().output(out);
            write_file(&file, &document)?;
            ctx.say(Severity::Ok, MessageKey::ExportSuccess, &Substitutions::new(), file.display())?;
            ExportTarget::File(file)
        }
        None => {
            ctx.reporter().output(&document);
            ExportTarget::Stdout
        }
    };
    Ok((target, report))
}

fn requirements(report: &ScanReport, scm: &ScmConfig) -> Vec<Requirement> {
    report
        .roles
        .iter()
        .map(|role| Requirement {
            src: scm.source_for(&role.name).unwrap_or_else(|| scm.galaxy_name(&role.name)),
            name: role.name.clone(),
        })
        .collect()
}

fn reqs_yml(requirements: &[Requirement]) -> Result<String, AppError> {
    if requirements.is_empty() {
        return Ok("---\n[]\n".to_string());
    }
    let body = serde_yaml::to_string(requirements)
        .map_err(|err| AppError::yaml("requirements.yml", err))?;
    Ok(format!("---\n{}", body))
}

fn reqs_txt(requirements: &[Requirement]) -> String {
    requirements
        .iter()
        .map(|req| {
            if req.src == req.name {
                format!("{}\n", req.name)
            } else {
                format!("{},,{}\n", req.src, req.name)
            }
        })
        .collect()
}

fn dependency_graph(report: &ScanReport) -> String {
    let mut dot = String::from("digraph role_dependencies {\n");
    for role in &report.roles {
        let dependencies = role.galaxy.as_ref().map(|galaxy| galaxy.dependencies.as_slice()).unwrap_or_default();
        if dependencies.is_empty() {
            let _ = writeln!(dot, "    {};", dot_id(&role.name));
        }
        for dependency in dependencies {
            let _ = writeln!(dot, "    {} -> {};", dot_id(&role.name), dot_id(dependency));
        }
    }
    dot.push_str("}\n");
    dot
}

/// Quoted DOT identifier.
fn dot_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len() + 2);
    id.push('"');
    for ch in name.chars() {
        if matches!(ch, '"' | '\\') {
            id.push('\\');
        }
        id.push(ch);
    }
    id.push('"');
    id
}
