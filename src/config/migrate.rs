//! Configuration file upgrades.
//!
//! Older configuration files may lack keys added in later versions. Loading
//! still works thanks to serde defaults, but the keys stay invisible to the
//! user until they are written back. These helpers find and add them in
//! place, leaving every existing value and unknown key untouched.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys of the default configuration that `content` does not define.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add the missing keys, with their default values, to the file at `path`.
///
/// Returns the keys that were added; an up-to-date file is not rewritten.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;

    let mut current = parse_mapping(&content)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        info("Configuration file already up to date.");
        return Ok(added);
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration updated, added: {}",
        added.join(", ")
    ));
    Ok(added)
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(content) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(
            "configuration file is not a YAML mapping".to_string(),
        )),
        Err(e) => Err(AppError::Config(e.to_string())),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(map)) => Ok(map),
        _ => Err(AppError::Config(
            "cannot serialize default configuration".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn reports_keys_absent_from_file() {
        let missing = missing_keys("company_name: Pilot\ncurrency_symbol: Rp\n").unwrap();
        assert!(missing.contains(&"data_dir".to_string()));
        assert!(missing.contains(&"default_work_hours".to_string()));
        assert!(!missing.contains(&"company_name".to_string()));
    }

    #[test]
    fn migration_keeps_existing_values() {
        let path = env::temp_dir().join("rpayroll_migrate_keeps_values.conf");
        fs::write(&path, "company_name: Pilot Laundry\ncustom_note: hello\n").unwrap();

        let added = migrate_config_file(&path).unwrap();
        assert!(added.contains(&"report_title".to_string()));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("company_name: Pilot Laundry"));
        assert!(content.contains("custom_note: hello"));
        assert!(missing_keys(&content).unwrap().is_empty());

        // second run is a no-op
        assert!(migrate_config_file(&path).unwrap().is_empty());
        fs::remove_file(&path).ok();
    }
}
