//! Configuration system for topo.
//!
//! topo reads TOML files named `.topo.toml`. Every such file between the working
//! directory and the filesystem root applies, closest first, and `~/.topo.toml` applies
//! last. A file containing `root = true` stops the search.
//!
//! ```toml
//! [source]
//! file = "topics.json"        # or: url = "http://localhost:8080"
//!
//! [search]
//! profile = "breadcrumb"      # or "simple"
//! threshold = 0.3
//! window = 20
//! debounce_ms = 250
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawSearchSettings, RawSource, parse_config_file, parse_config_str};
pub use resolve::resolve_source_file;
use serde::Serialize;
pub use templates::{global_template, local_template};
use topo_match::{MatcherConfig, Profile};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default debounce quiet period in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Fully merged configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where topics come from.
    pub source: SourceSettings,
    /// Matching and session settings.
    pub search: SearchSettings,
    /// Directory of the highest-precedence config file.
    pub config_root: Option<PathBuf>,
    /// Config files that were merged, highest precedence first.
    pub files: Vec<PathBuf>,
}

impl Config {
    /// Discovers and merges every config file that applies to `cwd`.
    ///
    /// Returns the defaults when no file is found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_from_files(&discover_config_files(cwd))
    }

    /// Loads and merges the given files, highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        merge_configs(&parsed)
    }

    /// Returns non-fatal problems with this configuration.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Renders the effective settings in `.topo.toml` syntax.
    ///
    /// Unset overrides are omitted; the topic file is shown resolved.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let view = SerializableSettings {
            source: &self.source,
            search: &self.search,
        };
        Ok(toml::to_string_pretty(&view)?)
    }
}

/// The `[source]` section after resolution.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceSettings {
    /// Absolute or config-relative-resolved path of the JSON topic file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Topic API base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Config file the section came from.
    #[serde(skip)]
    pub defined_in: Option<PathBuf>,
}

/// The `[search]` section after merging.
///
/// Unset overrides fall back to the profile's values.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSettings {
    /// Profile name.
    pub profile: String,
    /// Fuzzy threshold override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Reveal window override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<usize>,
    /// Offset penalty divisor override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_distance: Option<usize>,
    /// Query truncation override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pattern_length: Option<usize>,
    /// Debounce quiet period in milliseconds.
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            profile: Profile::default().name().to_string(),
            threshold: None,
            window: None,
            location_distance: None,
            max_pattern_length: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SearchSettings {
    /// Parses the configured profile.
    pub fn profile(&self) -> Result<Profile, ConfigError> {
        Ok(self.profile.parse()?)
    }

    /// Builds the matcher configuration: the profile's values plus overrides.
    pub fn matcher_config(&self) -> Result<MatcherConfig, ConfigError> {
        let mut config = self.profile()?.matcher_config();
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(distance) = self.location_distance {
            config.location_distance = distance;
        }
        if let Some(length) = self.max_pattern_length {
            config.max_pattern_length = length;
        }
        Ok(config)
    }

    /// Returns the reveal window: the override or the profile's window.
    pub fn window(&self) -> Result<usize, ConfigError> {
        match self.window {
            Some(window) => Ok(window),
            None => Ok(self.profile()?.window()),
        }
    }

    /// Returns the debounce quiet period.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Borrowed view used to render settings as TOML.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// `[source]` section.
    source: &'a SourceSettings,
    /// `[search]` section.
    search: &'a SearchSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_defaults_follow_breadcrumb_profile() {
        let search = SearchSettings::default();
        assert_eq!(search.profile().unwrap(), Profile::Breadcrumb);
        assert_eq!(search.matcher_config().unwrap(), MatcherConfig::default());
        assert_eq!(search.window().unwrap(), 20);
        assert_eq!(search.debounce(), Duration::from_millis(250));
    }

    #[test]
    fn overrides_apply_on_top_of_profile() {
        let search = SearchSettings {
            profile: "simple".into(),
            threshold: Some(0.4),
            max_pattern_length: Some(8),
            ..SearchSettings::default()
        };
        let matcher = search.matcher_config().unwrap();
        assert!(!matcher.breadcrumbs);
        assert!((matcher.threshold - 0.4).abs() < f64::EPSILON);
        assert_eq!(matcher.max_pattern_length, 8);
        assert_eq!(search.window().unwrap(), 10);
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let search = SearchSettings {
            profile: "fancy".into(),
            ..SearchSettings::default()
        };
        let err = search.matcher_config().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile(_)));
        assert!(err.to_string().contains("fancy"));
    }

    #[test]
    fn settings_to_toml_round_trips() {
        let mut config = Config::default();
        config.source.url = Some("http://localhost:8080".into());
        config.search.window = Some(5);

        let text = config.settings_to_toml().unwrap();
        assert!(text.contains("[source]"));
        assert!(text.contains("url = \"http://localhost:8080\""));
        assert!(text.contains("[search]"));
        assert!(text.contains("profile = \"breadcrumb\""));
        assert!(text.contains("window = 5"));
        assert!(!text.contains("threshold"));

        let parsed = parse_config_str(&text, Path::new("effective.toml")).unwrap();
        assert_eq!(parsed.search.unwrap().window, Some(5));
    }
}
