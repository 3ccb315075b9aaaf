//! Configuration merging.
//!
//! Layers parsed files into one [`Config`]. Search scalars merge field by field with
//! the closest file winning. The `[source]` section is taken whole from the closest
//! file that names a source, so a file and a URL from different layers never mix.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, SearchSettings, SourceSettings,
    parse::{RawConfig, RawSearchSettings},
    resolve::resolve_source_file,
};

/// A parsed config file with its source path.
#[derive(Debug, Clone)]
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Merges configs given highest precedence first.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    let Some(first) = configs.first() else {
        return Ok(Config::default());
    };

    Ok(Config {
        source: merge_source(configs)?,
        search: merge_search(configs),
        config_root: Some(first.dir().to_path_buf()),
        files: configs.iter().map(|c| c.path.clone()).collect(),
    })
}

/// Takes the `[source]` of the closest config that names one.
fn merge_source(configs: &[ParsedConfig]) -> Result<SourceSettings, ConfigError> {
    let Some((parsed, raw)) = configs.iter().find_map(|parsed| {
        parsed
            .config
            .source
            .as_ref()
            .filter(|source| source.is_set())
            .map(|source| (parsed, source))
    }) else {
        return Ok(SourceSettings::default());
    };

    let file = raw
        .file
        .as_deref()
        .map(|file| resolve_source_file(file, parsed.dir()))
        .transpose()?;

    Ok(SourceSettings {
        file,
        url: raw.url.clone(),
        defined_in: Some(parsed.path.clone()),
    })
}

/// Applies `[search]` sections from lowest to highest precedence.
fn merge_search(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();
    for parsed in configs.iter().rev() {
        if let Some(search) = &parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }
    result
}

/// Overwrites every field `raw` sets.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(profile) = &raw.profile {
        result.profile.clone_from(profile);
    }
    if raw.threshold.is_some() {
        result.threshold = raw.threshold;
    }
    if raw.window.is_some() {
        result.window = raw.window;
    }
    if raw.location_distance.is_some() {
        result.location_distance = raw.location_distance;
    }
    if raw.max_pattern_length.is_some() {
        result.max_pattern_length = raw.max_pattern_length;
    }
    if let Some(ms) = raw.debounce_ms {
        result.debounce_ms = ms;
    }
}
