//! Locating and reading the user configuration file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, UserConfig};

pub const CONFIG_ENV: &str = "ANSIGENOME_CONFIG";
pub const CONFIG_FILE_NAME: &str = ".ansigenome.toml";

/// Load configuration from an explicit path, `$ANSIGENOME_CONFIG`, or `~/.ansigenome.toml`.
///
/// An explicit path must exist; the implicit locations fall back to defaults.
pub fn load_user_config(explicit: Option<&Path>) -> Result<UserConfig, AppError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AppError::PathMissing { path: path.to_path_buf() });
        }
        return read_config(path);
    }

    match implicit_config_path() {
        Some(path) if path.is_file() => read_config(&path),
        Some(path) => {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(UserConfig::default())
        }
        None => Ok(UserConfig::default()),
    }
}

fn implicit_config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
}

fn read_config(path: &Path) -> Result<UserConfig, AppError> {
    debug!(path = %path.display(), "loading configuration");
    let content = fs::read_to_string(path)?;
    parse_config_content(path, &content)
}
