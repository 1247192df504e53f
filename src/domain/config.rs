//! User configuration loaded from `~/.ansigenome.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Optional user preferences used when generating files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    #[serde(default)]
    pub author: AuthorConfig,
    /// License written into new meta files.
    #[serde(default = "default_license")]
    pub license: String,
    /// Minimum Ansible version written into new meta files.
    #[serde(default = "default_min_ansible_version")]
    pub min_ansible_version: String,
    #[serde(default)]
    pub scm: ScmConfig,
    #[serde(default)]
    pub options: OptionsConfig,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            author: AuthorConfig::default(),
            license: default_license(),
            min_ansible_version: default_min_ansible_version(),
            scm: ScmConfig::default(),
            options: OptionsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorConfig {
    #[serde(default = "default_author_name")]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub url: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: default_author_name(),
            company: String::new(),
            email: String::new(),
            url: String::new(),
        }
    }
}

/// Source control hosting used by `export`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScmConfig {
    #[serde(default = "default_scm_host")]
    pub host: String,
    /// Account owning the role repositories; empty means roles are exported by name.
    #[serde(default)]
    pub user: String,
    /// Prefix prepended to role names to form repository names.
    #[serde(default)]
    pub repo_prefix: String,
}

impl Default for ScmConfig {
    fn default() -> Self {
        Self { host: default_scm_host(), user: String::new(), repo_prefix: String::new() }
    }
}

impl ScmConfig {
    /// Galaxy `src` for a role, or `None` when no SCM user is configured.
    pub fn source_for(&self, role: &str) -> Option<String> {
        if self.user.is_empty() {
            return None;
        }
        let host = self.host.trim_end_matches('/');
        Some(format!("{}/{}/{}{}", host, self.user, self.repo_prefix, role))
    }

    /// Galaxy-style `user.role` name.
    pub fn galaxy_name(&self, role: &str) -> String {
        if self.user.is_empty() { role.to_string() } else { format!("{}.{}", self.user, role) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsConfig {
    /// Custom README template: a file path or an http(s) URL.
    #[serde(default)]
    pub readme_template: Option<String>,
}

fn default_license() -> String {
    "MIT".to_string()
}

fn default_min_ansible_version() -> String {
    "2.9".to_string()
}

fn default_author_name() -> String {
    "Your name".to_string()
}

fn default_scm_host() -> String {
    "https://github.com".to_string()
}

/// Parse configuration content; `file` is only used for error reporting.
pub fn parse_config_content(file: &Path, content: &str) -> Result<UserConfig, AppError> {
    toml::from_str(content).map_err(|err| AppError::Configuration {
        file: file.to_path_buf(),
        reason: err.to_string(),
    })
}
