use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use super::conventions::AnsibleFolder;
use super::error::AppError;

/// Galaxy metadata pulled from `meta/main.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GalaxySummary {
    pub author: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub min_ansible_version: Option<String>,
    pub platforms: Vec<String>,
    pub dependencies: Vec<String>,
}

/// Everything gathered about a single role during a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleStats {
    pub name: String,
    pub folders: Vec<AnsibleFolder>,
    pub defaults: usize,
    pub facts: usize,
    pub tasks: usize,
    pub files: usize,
    pub lines: usize,
    pub meta: bool,
    pub readme: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub galaxy: Option<GalaxySummary>,
}

impl RoleStats {
    /// Roles with both meta and README are considered complete.
    pub fn is_documented(&self) -> bool {
        self.meta && self.readme
    }
}

/// A role that could not be processed.
#[derive(Debug)]
pub struct RoleFailure {
    pub role: String,
    pub error: AppError,
}

/// Summed counters across a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTotals {
    pub roles: usize,
    pub defaults: usize,
    pub facts: usize,
    pub tasks: usize,
    pub files: usize,
    pub lines: usize,
}

/// Result of one pass over a scan root.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub root: PathBuf,
    pub roles: Vec<RoleStats>,
    pub skipped: Vec<String>,
    pub failures: Vec<RoleFailure>,
}

impl ScanReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    /// No valid role was found under the root.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty() && self.failures.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn totals(&self) -> ScanTotals {
        self.roles.iter().fold(ScanTotals::default(), |mut totals, role| {
            totals.roles += 1;
            totals.defaults += role.defaults;
            totals.facts += role.facts;
            totals.tasks += role.tasks;
            totals.files += role.files;
            totals.lines += role.lines;
            totals
        })
    }

    /// Flat mapping of role name to stats, as written by `dump`.
    pub fn by_name(&self) -> BTreeMap<&str, &RoleStats> {
        self.roles.iter().map(|role| (role.name.as_str(), role)).collect()
    }

    /// Sort roles and failures by name for deterministic output.
    pub fn sort(&mut self) {
        self.roles.sort_by(|a, b| a.name.cmp(&b.name));
        self.failures.sort_by(|a, b| a.role.cmp(&b.role));
        self.skipped.sort();
    }
}
