//! Filesystem conventions shared by every command.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

/// Sub-folder names an Ansible role may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnsibleFolder {
    Defaults,
    Handlers,
    Meta,
    Tasks,
    Templates,
    Tests,
    Vars,
}

impl AnsibleFolder {
    pub const ALL: [AnsibleFolder; 7] = [
        AnsibleFolder::Defaults,
        AnsibleFolder::Handlers,
        AnsibleFolder::Meta,
        AnsibleFolder::Tasks,
        AnsibleFolder::Templates,
        AnsibleFolder::Tests,
        AnsibleFolder::Vars,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnsibleFolder::Defaults => "defaults",
            AnsibleFolder::Handlers => "handlers",
            AnsibleFolder::Meta => "meta",
            AnsibleFolder::Tasks => "tasks",
            AnsibleFolder::Templates => "templates",
            AnsibleFolder::Tests => "tests",
            AnsibleFolder::Vars => "vars",
        }
    }
}

impl fmt::Display for AnsibleFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnsibleFolder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnsibleFolder::ALL.into_iter().find(|folder| folder.as_str() == s).ok_or(())
    }
}

/// Immutable layout conventions, constructed once and handed to each component.
#[derive(Debug, Clone)]
pub struct Conventions {
    /// Roles path probed when the user supplies none, relative to the working directory.
    pub default_roles_path: PathBuf,
    /// Folder vocabulary recognized inside a role.
    pub folders: Vec<AnsibleFolder>,
    /// File name used by `dump` when no output path is given.
    pub default_dump_file: String,
}

impl Conventions {
    pub fn standard() -> Self {
        Self {
            default_roles_path: PathBuf::from("playbooks").join("roles"),
            folders: AnsibleFolder::ALL.to_vec(),
            default_dump_file: "ansigenome.json".to_string(),
        }
    }
}

impl Default for Conventions {
    fn default() -> Self {
        Self::standard()
    }
}
