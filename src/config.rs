//! Configuration file support for gradle-inventory.
//!
//! Provides YAML-based configuration through `gradle-inventory.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::ReaderType;
use crate::inventory_mapping::domain::UsagePattern;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "gradle-inventory.config.yml";

/// Top-level configuration file schema.
///
/// Every value can be overridden on the command line.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub reader_type: Option<String>,
    pub application: Option<String>,
    pub usage_pattern: Option<String>,
    pub repo_type: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn reader_type(&self) -> Result<Option<ReaderType>> {
        self.reader_type
            .as_deref()
            .map(|t| t.parse::<ReaderType>().map_err(anyhow::Error::from))
            .transpose()
    }

    pub fn usage_pattern(&self) -> Result<Option<UsagePattern>> {
        self.usage_pattern
            .as_deref()
            .map(|p| p.parse::<UsagePattern>().map_err(|e| anyhow::anyhow!(e)))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

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

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref application) = config.application {
        if application.trim().is_empty() {
            bail!(
                "Invalid config: application must not be empty.\n\n\
                 💡 Hint: Set 'application' to the name of the application the inventory belongs to."
            );
        }
    }
    if let Some(ref repo_type) = config.repo_type {
        if repo_type.trim().is_empty() {
            bail!("Invalid config: repo_type must not be empty.");
        }
    }
    config
        .reader_type()
        .context("Invalid config: reader_type")?;
    config
        .usage_pattern()
        .context("Invalid config: usage_pattern")?;
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
