//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, ActionRequest};
use crate::app::commands::export::{ExportKind, ReqsFormat};
use crate::domain::{Action, AppError, MessageCatalog, Severity, dispatch};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ANSIGENOME_LOG";

#[derive(Parser, Debug)]
#[command(name = "ansigenome")]
#[command(version)]
#[command(about = "Scan, document and scaffold Ansible roles", long_about = None)]
struct Cli {
    /// One of: scan, rebuild, run, init, export, dump
    action: String,
    /// Roles path (defaults to playbooks/roles); the new role's path for init
    path: Option<PathBuf>,
    /// Shell command for the run action
    #[arg(short = 'm', long = "command")]
    command: Option<String>,
    /// Output file for export and dump
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Export type
    #[arg(short = 't', long = "type", value_enum, default_value_t = ExportKind::Reqs)]
    export_type: ExportKind,
    /// Requirements file format
    #[arg(short, long, value_enum, default_value_t = ReqsFormat::Yml)]
    format: ReqsFormat,
    /// README template: a file path or an http(s) URL
    #[arg(long)]
    readme_template: Option<String>,
    /// Configuration file (defaults to $ANSIGENOME_CONFIG, then ~/.ansigenome.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the CLI. Returns the process exit code.
pub fn run() -> i32 {
    let catalog = MessageCatalog::standard();
    let command = Cli::command().after_help(actions_help(&catalog));
    let cli = match Cli::from_arg_matches(&command.get_matches()) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };
    init_logging(cli.verbose);

    match run_action(&cli, &catalog) {
        Ok(code) => code,
        Err(err) => {
            if err.is_internal() {
                error!(error = ?err, "internal error");
            } else {
                debug!(error = ?err, "action failed");
            }
            let color: colored::Color = catalog.color_for(Severity::Failed).into();
            eprintln!("{}", catalog.describe(&err).color(color));
            1
        }
    }
}

fn run_action(cli: &Cli, catalog: &MessageCatalog) -> Result<i32, AppError> {
    let action = dispatch(&cli.action)?;
    let request = ActionRequest {
        path: cli.path.clone(),
        command: cli.command.clone(),
        out: cli.out.clone(),
        export_kind: cli.export_type,
        reqs_format: cli.format,
        readme_template: cli.readme_template.clone(),
    };
    let outcome = api::execute(action, &request, cli.config.as_deref(), catalog.clone())?;
    Ok(if outcome.has_failures() { 1 } else { 0 })
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// Per-action help lines composed from the message catalog.
fn actions_help(catalog: &MessageCatalog) -> String {
    let mut help = String::from("Actions:\n");
    for action in Action::ALL {
        let text = catalog.action_help(action).unwrap_or_default();
        help.push_str(&format!("  {:<8} {}\n", action.as_str(), text));
    }
    help
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_options() {
        let cli = Cli::try_parse_from(["ansigenome", "run", "roles", "-m", "ls -la", "-vv"]).unwrap();
        assert_eq!(cli.action, "run");
        assert_eq!(cli.path, Some(PathBuf::from("roles")));
        assert_eq!(cli.command.as_deref(), Some("ls -la"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn parses_export_options() {
        let cli =
            Cli::try_parse_from(["ansigenome", "export", "-t", "graph", "-f", "txt", "-o", "x"]).unwrap();
        assert_eq!(cli.export_type, ExportKind::Graph);
        assert_eq!(cli.format, ReqsFormat::Txt);
        assert_eq!(cli.out, Some(PathBuf::from("x")));
    }

    #[test]
    fn unknown_action_is_rejected_by_dispatch() {
        let cli = Cli::try_parse_from(["ansigenome", "build"]).unwrap();
        let err = run_action(&cli, &MessageCatalog::standard()).unwrap_err();
        assert!(matches!(err, AppError::UnknownAction(name) if name == "build"));
    }

    #[test]
    fn help_lists_every_action() {
        let help = actions_help(&MessageCatalog::standard());
        for action in Action::ALL {
            assert!(help.contains(action.as_str()));
        }
        assert!(help.contains("augment existing meta files to be compatible with Ansigenome, then"));
    }
}
