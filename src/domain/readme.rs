//! Template contexts for generated role files.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::config::{AuthorConfig, UserConfig};
use super::meta::{dependency_names, galaxy_summary};
use super::stats::RoleStats;
use super::yaml::{get_mapping, get_scalar, get_sequence, scalar_text};

/// A variable from `defaults/main.yml` as shown in the README.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultVariable {
    pub name: String,
    pub value: String,
}

/// Role facts exposed to the README template as `role`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleView {
    pub name: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub min_ansible_version: String,
    pub platforms: Vec<String>,
    pub galaxy_tags: Vec<String>,
    pub dependencies: Vec<String>,
    pub galaxy_id: String,
    pub synopsis: String,
    pub usage: String,
    pub custom: String,
    pub defaults: Vec<DefaultVariable>,
}

/// Full context for `README.md.j2`.
#[derive(Debug, Clone, Serialize)]
pub struct ReadmeContext<'a> {
    pub role: RoleView,
    pub stats: &'a RoleStats,
    pub author: &'a AuthorConfig,
    pub galaxy_name: String,
    pub source: Option<String>,
}

impl<'a> ReadmeContext<'a> {
    pub fn build(
        meta: &Mapping,
        defaults: &Mapping,
        stats: &'a RoleStats,
        config: &'a UserConfig,
    ) -> Self {
        let empty = Mapping::new();
        let info = get_mapping(meta, "galaxy_info").unwrap_or(&empty);
        let extra = get_mapping(meta, "ansigenome_info").unwrap_or(&empty);
        let summary = galaxy_summary(meta);
        let text = |map: &Mapping, field: &str| get_scalar(map, field).unwrap_or_default();

        let role = RoleView {
            name: stats.name.clone(),
            description: summary.description.unwrap_or_default(),
            author: summary.author.unwrap_or_else(|| config.author.name.clone()),
            license: summary.license.unwrap_or_else(|| config.license.clone()),
            min_ansible_version: summary
                .min_ansible_version
                .unwrap_or_else(|| config.min_ansible_version.clone()),
            platforms: summary.platforms,
            galaxy_tags: get_sequence(info, "galaxy_tags")
                .map(|tags| tags.iter().filter_map(scalar_text).collect())
                .unwrap_or_default(),
            dependencies: dependency_names(meta),
            galaxy_id: text(extra, "galaxy_id"),
            synopsis: text(extra, "synopsis"),
            usage: text(extra, "usage"),
            custom: text(extra, "custom"),
            defaults: default_variables(defaults),
        };

        Self {
            role,
            stats,
            author: &config.author,
            galaxy_name: config.scm.galaxy_name(&stats.name),
            source: config.scm.source_for(&stats.name),
        }
    }
}

fn default_variables(defaults: &Mapping) -> Vec<DefaultVariable> {
    defaults
        .iter()
        .filter_map(|(name, value)| {
            let name = name.as_str()?.to_string();
            let value = match value {
                Value::Null => "null".to_string(),
                Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
                    serde_json::to_string(value).unwrap_or_default()
                }
                scalar => scalar_text(scalar).unwrap_or_default(),
            };
            Some(DefaultVariable { name, value })
        })
        .collect()
}

/// Context for `meta/main.yml.j2` when creating a role.
#[derive(Debug, Clone, Serialize)]
pub struct MetaContext<'a> {
    pub role_name: &'a str,
    pub description: String,
    pub author: &'a AuthorConfig,
    pub license: &'a str,
    pub min_ansible_version: &'a str,
}

impl<'a> MetaContext<'a> {
    pub fn new(role_name: &'a str, config: &'a UserConfig) -> Self {
        Self {
            role_name,
            description: format!("Ansible role for {}", role_name),
            author: &config.author,
            license: &config.license,
            min_ansible_version: &config.min_ansible_version,
        }
    }
}
