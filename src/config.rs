//! Configuration Management
//!
//! Handles persistent configuration storage for rpe.

use crate::resource::AttributeBag;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Provider used when neither the CLI nor the config names one
pub const DEFAULT_PROVIDER: &str = "gcp";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Default provider namespace
    #[serde(default)]
    pub provider: Option<String>,
    /// Attributes applied when the caller leaves them unset (e.g. project_id)
    #[serde(default)]
    pub attributes: AttributeBag,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rpe").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific file (defaults if absent or unreadable)
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Get effective provider (CLI > config > default)
    pub fn effective_provider(&self, cli: Option<&str>) -> String {
        cli.or(self.provider.as_deref())
            .unwrap_or(DEFAULT_PROVIDER)
            .to_string()
    }

    /// Collect attributes: explicit `key=value` pairs > attribute file > config defaults
    pub fn collect_attributes(&self, file: Option<&Path>, pairs: &[String]) -> Result<AttributeBag> {
        let mut attributes = match file {
            Some(path) => read_attribute_file(path)?,
            None => AttributeBag::new(),
        };

        for pair in pairs {
            let (key, value) = AttributeBag::parse_pair(pair)?;
            attributes.insert(key, value);
        }

        attributes.merge_defaults(&self.attributes);
        Ok(attributes)
    }
}

/// Read an attribute object from a JSON or YAML file (by extension)
pub fn read_attribute_file(path: &Path) -> Result<AttributeBag> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read attribute file {:?}", path))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse YAML in {:?}", path))
    } else {
        serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON in {:?}", path))
    }
}
