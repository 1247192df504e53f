use std::collections::BTreeSet;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::error::AppError;

/// Parse a YAML document, reporting failures against `path`.
pub fn parse_document(path: &Path, content: &str) -> Result<Value, AppError> {
    serde_yaml::from_str::<Value>(content).map_err(|err| AppError::yaml(path, err))
}

/// Parse a YAML document whose root must be a mapping. Empty documents are empty mappings.
pub fn parse_mapping(path: &Path, content: &str) -> Result<Mapping, AppError> {
    match parse_document(path, content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::yaml(path, "YAML root is not a mapping")),
    }
}

pub fn key(name: &str) -> Value {
    Value::String(name.to_string())
}

pub fn get_mapping<'a>(map: &'a Mapping, name: &str) -> Option<&'a Mapping> {
    map.get(key(name)).and_then(Value::as_mapping)
}

/// Scalar value rendered as text; numbers such as `2.9` become strings.
pub fn get_scalar(map: &Mapping, name: &str) -> Option<String> {
    map.get(key(name)).and_then(scalar_text)
}

pub fn get_sequence<'a>(map: &'a Mapping, name: &str) -> Option<&'a Vec<Value>> {
    map.get(key(name)).and_then(Value::as_sequence)
}

pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Insert `value` under `name` unless the key is already present.
pub fn insert_missing(map: &mut Mapping, name: &str, value: Value) -> bool {
    let name = key(name);
    if map.contains_key(&name) {
        return false;
    }
    map.insert(name, value);
    true
}

/// Number of task entries in a tasks file (a sequence of mappings).
pub fn count_tasks(document: &Value) -> usize {
    document
        .as_sequence()
        .map(|tasks| tasks.iter().filter(|task| task.is_mapping()).count())
        .unwrap_or(0)
}

/// Names of facts assigned by `set_fact` tasks, including nested `block` tasks.
pub fn fact_names(document: &Value, names: &mut BTreeSet<String>) {
    let Some(tasks) = document.as_sequence() else {
        return;
    };

    for task in tasks.iter().filter_map(Value::as_mapping) {
        for module in ["set_fact", "ansible.builtin.set_fact"] {
            if let Some(facts) = get_mapping(task, module) {
                names.extend(
                    facts
                        .keys()
                        .filter_map(Value::as_str)
                        .filter(|name| *name != "cacheable")
                        .map(str::to_string),
                );
            }
        }
        for nested in ["block", "rescue", "always"] {
            if let Some(inner) = task.get(key(nested)) {
                fact_names(inner, names);
            }
        }
    }
}
