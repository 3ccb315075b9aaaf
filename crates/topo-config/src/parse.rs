//! Configuration file parsing.
//!
//! Each `.topo.toml` parses into a [`RawConfig`] whose fields are all optional, so
//! partial files can be layered before merging.

use std::{fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Configuration exactly as written in one file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, discovery stops here and ignores parent and global configs.
    pub root: Option<bool>,
    /// Where topics come from.
    pub source: Option<RawSource>,
    /// Matching and session settings.
    pub search: Option<RawSearchSettings>,
}

/// Raw `[source]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSource {
    /// JSON topic file, relative to the config file's directory.
    pub file: Option<String>,
    /// Topic API base URL.
    pub url: Option<String>,
}

impl RawSource {
    /// Returns true if the section names any source.
    pub fn is_set(&self) -> bool {
        self.file.is_some() || self.url.is_some()
    }
}

/// Raw `[search]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Profile name.
    pub profile: Option<String>,
    /// Fuzzy threshold override.
    pub threshold: Option<f64>,
    /// Reveal window override.
    pub window: Option<usize>,
    /// Offset penalty divisor override.
    pub location_distance: Option<usize>,
    /// Query truncation override.
    pub max_pattern_length: Option<usize>,
    /// Debounce quiet period in milliseconds.
    pub debounce_ms: Option<u64>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&contents, path)
}

/// Parses configuration text. `path` is only used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration text without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Returns true if the file at `path` sets `root = true`.
///
/// Unreadable or malformed files are not roots; loading reports them later.
pub fn is_root_config(path: &Path) -> bool {
    fs::read_to_string(path)
        .ok()
        .and_then(|contents| toml::from_str::<RawConfig>(&contents).ok())
        .is_some_and(|config| config.root == Some(true))
}
