use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for ansigenome operations.
///
/// User-facing variants are rendered through the message catalog
/// (see [`crate::domain::MessageCatalog::describe`]); the `Display` output
/// here is the plain fallback used in logs.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// JSON serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A user supplied path does not exist.
    #[error("Path not found: {}", path.display())]
    PathMissing { path: PathBuf },

    /// No path was supplied and the conventional roles path does not exist.
    #[error("Default roles path not found: {}", path.display())]
    PathMissingDefault { path: PathBuf },

    /// Destination already exists where creation was requested.
    #[error("Path already exists: {}", path.display())]
    PathExists { path: PathBuf },

    /// Directory or file creation failed.
    #[error("Cannot create {}: {source}", path.display())]
    PathUnmakable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A remote resource could not be fetched.
    #[error("URL unreachable '{url}': {reason}")]
    UrlUnreachable { url: String, reason: String },

    /// Malformed YAML input.
    #[error("YAML syntax error in {}: {reason}", file.display())]
    YamlSyntax { file: PathBuf, reason: String },

    /// Malformed or failing template.
    #[error("Template error in {file}: {reason}")]
    TemplateSyntax { file: String, reason: String },

    /// A per-role shell command failed.
    #[error("Shell command '{command}' failed in {role}: {details}")]
    ShellCommand { command: String, role: String, details: String },

    /// A value the selected action needs was not supplied.
    #[error("Missing {argument} for the {action} action")]
    MissingArgument { action: String, argument: String },

    /// Action name outside the fixed action set.
    #[error("Unknown action '{0}': must be one of scan, rebuild, run, init, export, dump")]
    UnknownAction(String),

    /// Message key missing from the catalog.
    #[error("Unknown message key '{0}'")]
    UnknownMessageKey(String),

    /// Severity name outside the fixed severity set.
    #[error("Unknown severity '{0}': must be one of ok, skipped, changed, failed")]
    UnknownSeverity(String),

    /// A declared placeholder had no substitution value.
    #[error("Message '{key}' has no value for placeholder '%{placeholder}'")]
    UnresolvedPlaceholder { key: String, placeholder: String },

    /// Configuration file could not be read.
    #[error("Invalid configuration in {}: {reason}", file.display())]
    Configuration { file: PathBuf, reason: String },
}

impl AppError {
    pub fn yaml(file: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        AppError::YamlSyntax { file: file.into(), reason: err.to_string() }
    }

    pub fn template(file: impl Into<String>, err: impl std::fmt::Display) -> Self {
        AppError::TemplateSyntax { file: file.into(), reason: err.to_string() }
    }

    /// Internal errors are programming mistakes, never caused by user input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AppError::UnknownMessageKey(_)
                | AppError::UnknownSeverity(_)
                | AppError::UnresolvedPlaceholder { .. }
        )
    }

    /// Errors that are isolated to a single role and must not abort a batch.
    pub fn is_per_role(&self) -> bool {
        matches!(
            self,
            AppError::YamlSyntax { .. }
                | AppError::TemplateSyntax { .. }
                | AppError::ShellCommand { .. }
                | AppError::UrlUnreachable { .. }
        )
    }

    /// Provide an `io::ErrorKind`-like view for callers.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::PathUnmakable { source, .. } => source.kind(),
            AppError::PathMissing { .. } | AppError::PathMissingDefault { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::PathExists { .. } => io::ErrorKind::AlreadyExists,
            AppError::UrlUnreachable { .. } | AppError::ShellCommand { .. } => {
                io::ErrorKind::Other
            }
            AppError::Json(_)
            | AppError::YamlSyntax { .. }
            | AppError::TemplateSyntax { .. }
            | AppError::MissingArgument { .. }
            | AppError::UnknownAction(_)
            | AppError::UnknownMessageKey(_)
            | AppError::UnknownSeverity(_)
            | AppError::UnresolvedPlaceholder { .. }
            | AppError::Configuration { .. } => io::ErrorKind::InvalidInput,
        }
    }
}
