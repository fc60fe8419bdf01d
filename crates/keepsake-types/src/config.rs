//! Host configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Configuration for a keepsake host.
///
/// Loaded from a TOML file when one is provided; every field has a
/// default so an absent file or a partial file both work.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeepsakeConfig {
    /// Title shown in the page shell.
    pub site_title: String,
    /// Directory holding the durable key-value store.
    pub data_dir: PathBuf,
    /// Directory the rendered pages are written to.
    pub output_dir: PathBuf,
}

impl Default for KeepsakeConfig {
    fn default() -> Self {
        Self {
            site_title: "Platform Security Lessons".to_string(),
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("site"),
        }
    }
}

impl KeepsakeConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}
