//! Configuration file support for license-audit.
//!
//! Provides YAML-based configuration through `license-audit.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::shared::error::AuditError;
use crate::shared::security::{read_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-audit.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Denied license identifier substrings
    pub licenses: Option<Vec<String>>,
    pub check_name: Option<String>,
    /// Pass `--all-features` to cargo-license (default: true)
    pub all_features: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Warning lines for fields that will be ignored, in key order.
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        self.unknown_fields
            .keys()
            .map(|key| format!("Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(
        || {
            format!(
                "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
                path.display()
            )
        },
    )?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(ref licenses) = config.licenses {
        for (i, entry) in licenses.iter().enumerate() {
            // A blank entry is a substring of every license
            if entry.trim().is_empty() {
                return Err(AuditError::InvalidConfig {
                    path: path.to_path_buf(),
                    reason: format!(
                        "licenses[{}] must not be empty.\n\n💡 Hint: List license identifiers such as \"GPL-3.0\" or \"AGPL\".",
                        i
                    ),
                }
                .into());
            }
        }
    }

    if let Some(ref check_name) = config.check_name {
        if check_name.trim().is_empty() {
            return Err(AuditError::InvalidConfig {
                path: path.to_path_buf(),
                reason: "check_name must not be empty.".to_string(),
            }
            .into());
        }
    }
    Ok(())
}
