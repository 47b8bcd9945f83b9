//! Configuration file check: report keys missing from an existing file and,
//! on request, fill them in with defaults while keeping the user's values.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys present in the default configuration but absent from the file at `path`.
/// A missing file reports nothing (defaults apply as a whole).
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let on_disk = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !on_disk.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add missing keys with their default value. Returns the keys that were added.
pub fn fill_missing(path: &Path) -> AppResult<Vec<String>> {
    let mut on_disk = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (k, v) in defaults {
        if !on_disk.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            on_disk.insert(k, v);
        }
    }

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&Value::Mapping(on_disk))?;
        // Parse back to make sure the merged file is still a valid Config
        let cfg: Config = serde_yaml::from_str(&yaml)?;
        cfg.validate()?;
        fs::write(path, yaml)?;
    }

    Ok(added)
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}
