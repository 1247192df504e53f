//! Reading and augmenting a role's `meta/main.yml`.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::config::UserConfig;
use super::error::AppError;
use super::stats::GalaxySummary;
use super::yaml::{get_mapping, get_scalar, get_sequence, insert_missing, key, scalar_text};

const GALAXY_INFO: &str = "galaxy_info";
const DEPENDENCIES: &str = "dependencies";
const ANSIGENOME_INFO: &str = "ansigenome_info";

/// Extract the fields reported by `scan` and `dump`.
pub fn galaxy_summary(meta: &Mapping) -> GalaxySummary {
    let empty = Mapping::new();
    let info = get_mapping(meta, GALAXY_INFO).unwrap_or(&empty);

    let platforms = get_sequence(info, "platforms")
        .map(|platforms| {
            platforms
                .iter()
                .filter_map(|platform| match platform {
                    Value::Mapping(entry) => get_scalar(entry, "name"),
                    other => scalar_text(other),
                })
                .collect()
        })
        .unwrap_or_default();

    GalaxySummary {
        author: get_scalar(info, "author"),
        description: get_scalar(info, "description"),
        license: get_scalar(info, "license"),
        min_ansible_version: get_scalar(info, "min_ansible_version"),
        platforms,
        dependencies: dependency_names(meta),
    }
}

/// Role names listed under `dependencies`, in either string or mapping form.
pub fn dependency_names(meta: &Mapping) -> Vec<String> {
    get_sequence(meta, DEPENDENCIES)
        .map(|deps| {
            deps.iter()
                .filter_map(|dep| match dep {
                    Value::Mapping(entry) => ["role", "name", "src"]
                        .into_iter()
                        .find_map(|field| get_scalar(entry, field)),
                    other => scalar_text(other),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Fill in every field ansigenome relies on without touching existing values.
///
/// Returns `true` when at least one field was added.
pub fn augment(
    file: &Path,
    meta: &mut Mapping,
    role: &str,
    config: &UserConfig,
) -> Result<bool, AppError> {
    let mut changed = false;

    changed |= insert_missing(meta, GALAXY_INFO, Value::Mapping(Mapping::new()));
    let info = mapping_entry(file, meta, GALAXY_INFO)?;
    let defaults: [(&str, Value); 8] = [
        ("role_name", Value::from(role)),
        ("author", Value::from(config.author.name.as_str())),
        ("description", Value::from(format!("Ansible role for {}", role))),
        ("company", Value::from(config.author.company.as_str())),
        ("license", Value::from(config.license.as_str())),
        ("min_ansible_version", Value::from(config.min_ansible_version.as_str())),
        ("platforms", Value::Sequence(Vec::new())),
        ("galaxy_tags", Value::Sequence(Vec::new())),
    ];
    for (field, value) in defaults {
        changed |= insert_missing(info, field, value);
    }

    changed |= insert_missing(meta, DEPENDENCIES, Value::Sequence(Vec::new()));

    changed |= insert_missing(meta, ANSIGENOME_INFO, Value::Mapping(Mapping::new()));
    let ansigenome = mapping_entry(file, meta, ANSIGENOME_INFO)?;
    for field in ["galaxy_id", "synopsis", "usage", "custom"] {
        changed |= insert_missing(ansigenome, field, Value::from(""));
    }

    Ok(changed)
}

fn mapping_entry<'a>(
    file: &Path,
    meta: &'a mut Mapping,
    name: &str,
) -> Result<&'a mut Mapping, AppError> {
    meta.get_mut(key(name))
        .and_then(Value::as_mapping_mut)
        .ok_or_else(|| AppError::yaml(file, format!("'{}' must be a mapping", name)))
}

/// Serialize a meta mapping with a leading document marker.
pub fn to_document(file: &Path, meta: &Mapping) -> Result<String, AppError> {
    let body = serde_yaml::to_string(meta).map_err(|err| AppError::yaml(file, err))?;
    Ok(format!("---\n{}", body))
}
