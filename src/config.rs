//! Configuration file support for vcpkg-spdx.
//!
//! Provides YAML-based configuration through `vcpkg-spdx.config.yml` files,
//! including data structures, file loading, and validation. Values given on
//! the command line take precedence over the file.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "vcpkg-spdx.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub project_manifest: Option<PathBuf>,
    pub ports_dir: Option<PathBuf>,
    pub additional_registry: Option<PathBuf>,
    pub vcpkg_executable: Option<PathBuf>,
    pub features: Option<Vec<String>>,
    pub dependencies_dgml: Option<PathBuf>,
    pub mermaid: Option<bool>,
    pub dependencies_md: Option<PathBuf>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub creators: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any
    ///
    /// Only call on a validated config; an unparseable value yields `None`.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
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

    // An empty file deserializes as YAML null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

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
pub fn discover_config(dir: &Path) -> Result<Option<(PathBuf, ConfigFile)>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some((config_path, config)))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: format: {}", e);
        }
    }

    validate_entries("features", config.features.as_deref(), "tools")?;
    validate_entries(
        "creators",
        config.creators.as_deref(),
        "Organization: ACME",
    )?;

    Ok(())
}

fn validate_entries(field: &str, entries: Option<&[String]>, example: &str) -> Result<()> {
    for (i, entry) in entries.unwrap_or_default().iter().enumerate() {
        if entry.trim().is_empty() {
            bail!(
                "Invalid config: {}[{}] must not be empty.\n\n\
                 💡 Hint: Each {} entry must be a non-empty string (e.g., \"{}\").",
                field,
                i,
                field,
                example
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
