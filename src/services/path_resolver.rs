use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, Conventions};

/// Resolves the roles path an action operates on.
#[derive(Debug, Clone)]
pub struct PathResolver {
    cwd: PathBuf,
    default_roles_path: PathBuf,
}

impl PathResolver {
    pub fn new(cwd: impl Into<PathBuf>, conventions: &Conventions) -> Self {
        Self { cwd: cwd.into(), default_roles_path: conventions.default_roles_path.clone() }
    }

    /// Existing roles path: the supplied one, or the conventional default.
    pub fn resolve(&self, supplied: Option<&Path>) -> Result<PathBuf, AppError> {
        match supplied {
            Some(path) => {
                let path = self.absolutize(path);
                if !path.is_dir() {
                    return Err(AppError::PathMissing { path });
                }
                debug!(path = %path.display(), "using supplied roles path");
                Ok(path)
            }
            None => {
                let path = self.cwd.join(&self.default_roles_path);
                if !path.is_dir() {
                    return Err(AppError::PathMissingDefault { path });
                }
                debug!(path = %path.display(), "using default roles path");
                Ok(path)
            }
        }
    }

    /// Destination for a new role: must not exist yet.
    pub fn resolve_new(&self, supplied: &Path) -> Result<PathBuf, AppError> {
        let path = self.absolutize(supplied);
        if path.exists() {
            return Err(AppError::PathExists { path });
        }
        Ok(path)
    }

    /// Output file location relative to the working directory.
    pub fn output(&self, supplied: &Path) -> PathBuf {
        self.absolutize(supplied)
    }

    fn absolutize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.cwd.join(path) }
    }
}
