pub mod dump;
pub mod export;
pub mod init;
pub mod rebuild;
pub mod run;
pub mod scan;

use std::fs;
use std::path::Path;

use crate::domain::AppError;

/// Write `content` to `path`, creating missing parent directories.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| AppError::PathUnmakable { path: parent.to_path_buf(), source })?;
    }
    fs::write(path, content).map_err(|source| AppError::PathUnmakable { path: path.to_path_buf(), source })
}
