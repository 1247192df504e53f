//! Role discovery and statistics gathering.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::domain::meta::galaxy_summary;
use crate::domain::yaml::{count_tasks, fact_names, parse_document, parse_mapping};
use crate::domain::{
    AnsibleFolder, AppError, Conventions, RoleDirectory, RoleFailure, RoleStats, ScanReport,
};

/// Roles found directly under a scan root.
#[derive(Debug, Default)]
pub struct Discovery {
    pub roles: Vec<RoleDirectory>,
    /// Directories without any recognized Ansible folder.
    pub skipped: Vec<String>,
    /// Directories that could not be inspected.
    pub failures: Vec<RoleFailure>,
}

/// Walks a scan root and gathers per-role stats.
#[derive(Debug, Clone)]
pub struct RoleScanner {
    folders: Vec<AnsibleFolder>,
}

impl RoleScanner {
    pub fn new(conventions: &Conventions) -> Self {
        Self { folders: conventions.folders.clone() }
    }

    /// Inspect each immediate sub-directory of `root`, sorted by name.
    pub fn discover(&self, root: &Path) -> Result<Discovery, AppError> {
        let mut candidates: Vec<PathBuf> = fs::read_dir(root)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .filter(|path| !is_hidden(path))
            .collect();
        candidates.sort();

        let mut discovery = Discovery::default();
        for candidate in candidates {
            match RoleDirectory::inspect(&candidate, &self.folders) {
                Ok(role) if role.is_valid() => discovery.roles.push(role),
                Ok(role) => {
                    debug!(role = role.name(), "no ansible folders, skipping");
                    discovery.skipped.push(role.name().to_string());
                }
                Err(error) => {
                    let role = file_name(&candidate);
                    warn!(role = %role, %error, "cannot inspect directory");
                    discovery.failures.push(RoleFailure { role, error });
                }
            }
        }
        Ok(discovery)
    }

    /// Full scan: discovery plus stats for every valid role.
    ///
    /// Per-role errors are collected in the report; only an unreadable root fails.
    pub fn scan(&self, root: &Path) -> Result<ScanReport, AppError> {
        let discovery = self.discover(root)?;
        let mut report = ScanReport::new(root);
        report.skipped = discovery.skipped;
        report.failures = discovery.failures;

        for role in &discovery.roles {
            match self.collect(role) {
                Ok(stats) => report.roles.push(stats),
                Err(error) => {
                    warn!(role = role.name(), %error, "role scan failed");
                    report.failures.push(RoleFailure { role: role.name().to_string(), error });
                }
            }
        }

        report.sort();
        Ok(report)
    }

    /// Gather stats for one role.
    pub fn collect(&self, role: &RoleDirectory) -> Result<RoleStats, AppError> {
        let mut stats = RoleStats {
            name: role.name().to_string(),
            folders: role.present().iter().copied().collect(),
            ..RoleStats::default()
        };

        let (files, lines) = count_files_and_lines(role.root())?;
        stats.files = files;
        stats.lines = lines;

        if role.has(AnsibleFolder::Defaults) {
            if let Some(path) = main_file(&role.folder_path(AnsibleFolder::Defaults)) {
                let content = fs::read_to_string(&path)?;
                stats.defaults = parse_mapping(&path, &content)?.len();
            }
        }

        if role.has(AnsibleFolder::Tasks) {
            let mut facts = BTreeSet::new();
            for path in yaml_files(&role.folder_path(AnsibleFolder::Tasks)) {
                let content = fs::read_to_string(&path)?;
                let document = parse_document(&path, &content)?;
                stats.tasks += count_tasks(&document);
                fact_names(&document, &mut facts);
            }
            stats.facts = facts.len();
        }

        let meta_file = role.meta_file();
        if meta_file.is_file() {
            let content = fs::read_to_string(&meta_file)?;
            let meta = parse_mapping(&meta_file, &content)?;
            stats.meta = true;
            stats.galaxy = Some(galaxy_summary(&meta));
        }

        stats.readme = role.readme_file().is_file();

        debug!(
            role = %stats.name,
            defaults = stats.defaults,
            tasks = stats.tasks,
            files = stats.files,
            "collected role stats"
        );
        Ok(stats)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name().and_then(|name| name.to_str()).is_some_and(|name| name.starts_with('.'))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|ext| ext.to_str()), Some("yml" | "yaml"))
}

fn visible(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !is_hidden(entry.path())
}

/// `main.yml` or `main.yaml` inside a role folder.
pub fn main_file(folder: &Path) -> Option<PathBuf> {
    ["main.yml", "main.yaml"].into_iter().map(|name| folder.join(name)).find(|path| path.is_file())
}

/// YAML files below `folder`, sorted.
fn yaml_files(folder: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .follow_links(true)
        .into_iter()
        .filter_entry(visible)
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_yaml(entry.path()))
        .map(DirEntry::into_path)
        .collect();
    files.sort();
    files
}

/// Count regular files, and non-blank lines of YAML files.
fn count_files_and_lines(root: &Path) -> Result<(usize, usize), AppError> {
    let mut files = 0;
    let mut lines = 0;

    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(visible) {
        let entry = entry.map_err(|err| AppError::Io(err.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        files += 1;
        if is_yaml(entry.path()) {
            let content = fs::read_to_string(entry.path())?;
            lines += content.lines().filter(|line| !line.trim().is_empty()).count();
        }
    }

    Ok((files, lines))
}
