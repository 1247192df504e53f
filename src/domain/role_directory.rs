use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::conventions::AnsibleFolder;
use super::error::AppError;

/// A candidate role directory and the vocabulary folders it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDirectory {
    root: PathBuf,
    name: String,
    present: BTreeSet<AnsibleFolder>,
}

impl RoleDirectory {
    /// Inspect `root`, keeping only sub-directories named in `vocabulary`.
    pub fn inspect(root: &Path, vocabulary: &[AnsibleFolder]) -> Result<Self, AppError> {
        let mut present = BTreeSet::new();

        for entry in fs::read_dir(root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Ok(folder) = name.parse::<AnsibleFolder>() {
                if vocabulary.contains(&folder) {
                    present.insert(folder);
                }
            }
        }

        let name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());

        Ok(Self { root: root.to_path_buf(), name, present })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn present(&self) -> &BTreeSet<AnsibleFolder> {
        &self.present
    }

    pub fn has(&self, folder: AnsibleFolder) -> bool {
        self.present.contains(&folder)
    }

    /// Vocabulary folders not found in this directory.
    pub fn missing(&self, vocabulary: &[AnsibleFolder]) -> Vec<AnsibleFolder> {
        vocabulary.iter().copied().filter(|folder| !self.present.contains(folder)).collect()
    }

    /// A role needs at least one recognized folder.
    pub fn is_valid(&self) -> bool {
        !self.present.is_empty()
    }

    pub fn folder_path(&self, folder: AnsibleFolder) -> PathBuf {
        self.root.join(folder.as_str())
    }

    pub fn meta_file(&self) -> PathBuf {
        self.folder_path(AnsibleFolder::Meta).join("main.yml")
    }

    pub fn readme_file(&self) -> PathBuf {
        self.root.join("README.md")
    }
}
