//! Configuration file support for cdx-normalize.
//!
//! Provides YAML-based configuration through `cdx-normalize.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::{NormalizerOptions, SerializerOptions, SpecVersion};
use crate::shared::error::SbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

const CONFIG_FILENAME: &str = "cdx-normalize.config.yml";

/// Largest accepted indentation width
pub const MAX_INDENT: usize = 16;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct NormalizeConfig {
    /// Target CycloneDX version, e.g. `"1.4"`. Defaults to the latest.
    pub spec_version: Option<String>,
    pub sort_lists: Option<bool>,
    /// Spaces per indentation level; 0 or absent writes compact JSON.
    pub indent: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl NormalizeConfig {
    /// The configured spec version, or the latest supported one
    pub fn spec_version(&self) -> Result<SpecVersion> {
        match self.spec_version.as_deref() {
            Some(value) => Ok(SpecVersion::from_str(value)?),
            None => Ok(SpecVersion::latest()),
        }
    }

    pub fn normalizer_options(&self) -> NormalizerOptions {
        NormalizerOptions::new(self.sort_lists.unwrap_or(false))
    }

    pub fn serializer_options(&self) -> SerializerOptions {
        SerializerOptions::new(self.indent)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<NormalizeConfig> {
    let file_size = validate_regular_file(path, "Config file")?;
    validate_file_size(file_size, path, MAX_CONFIG_FILE_SIZE)?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    parse_config(&content, &path.display().to_string())
}

/// Load config from YAML text
pub fn load_config_from_str(content: &str) -> Result<NormalizeConfig> {
    parse_config(content, "<string>")
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<NormalizeConfig>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn parse_config(content: &str, source: &str) -> Result<NormalizeConfig> {
    let config: NormalizeConfig = serde_yaml_ng::from_str(content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file is valid YAML.",
            source
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config, source);

    Ok(config)
}

/// Validate the loaded configuration.
fn validate_config(config: &NormalizeConfig) -> Result<()> {
    if let Some(ref value) = config.spec_version {
        if SpecVersion::from_str(value).is_err() {
            bail!(
                "Invalid config: spec_version '{}' is not a known CycloneDX version.\n\n\
                 💡 Hint: Use one of 1.1, 1.2, 1.3, 1.4 or 1.5.",
                value
            );
        }
    }
    if let Some(indent) = config.indent {
        if indent > MAX_INDENT {
            return Err(SbomError::Validation {
                message: format!("indent must be at most {} (got {})", MAX_INDENT, indent),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &NormalizeConfig, source: &str) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, source, "Unknown config field will be ignored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
spec_version: "1.4"
sort_lists: true
indent: 4
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.spec_version.as_deref(), Some("1.4"));
        assert_eq!(config.spec_version().unwrap(), SpecVersion::V1_4);
        assert!(config.normalizer_options().sort_lists);
        assert_eq!(config.serializer_options().indent, Some(4));
    }

    #[test]
    fn test_load_config_from_str() {
        let config = load_config_from_str("sort_lists: false\n").unwrap();
        assert_eq!(config.sort_lists, Some(false));
        assert!(config.indent.is_none());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "spec_version: \"1.3\"\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.spec_version().unwrap(), SpecVersion::V1_3);
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_oversized_config_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("huge.yml");
        let content = format!("# {}\n", "x".repeat(MAX_CONFIG_FILE_SIZE as usize));
        fs::write(&config_path, content).unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("too large"));
    }

    #[test]
    fn test_unknown_spec_version_validation_error() {
        let result = load_config_from_str("spec_version: \"2.0\"\n");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("not a known CycloneDX version"));
    }

    #[test]
    fn test_indent_too_large_validation_error() {
        let result = load_config_from_str("indent: 64\n");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("indent must be at most"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let config = load_config_from_str(
            r#"
sort_lists: true
unknown_field: true
another_unknown: value
"#,
        )
        .unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = NormalizeConfig::default();
        assert!(config.spec_version.is_none());
        assert!(config.sort_lists.is_none());
        assert!(config.indent.is_none());
        assert!(config.unknown_fields.is_empty());
        assert_eq!(config.spec_version().unwrap(), SpecVersion::latest());
        assert_eq!(config.normalizer_options(), NormalizerOptions::default());
    }
}
