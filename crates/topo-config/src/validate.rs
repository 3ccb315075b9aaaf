//! Configuration validation.
//!
//! Reports non-fatal problems with a loaded configuration.

use std::fmt;

use topo_match::Profile;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// Neither `source.file` nor `source.url` is set.
    NoSourceConfigured,
    /// Both `source.file` and `source.url` are set; the file is used.
    BothSourcesSet,
    /// The configured topic file does not exist.
    SourceFileMissing {
        /// Resolved path.
        path: String,
    },
    /// The configured topic file exists but is not a regular file.
    SourceNotAFile {
        /// Resolved path.
        path: String,
    },
    /// `search.profile` names no known profile.
    UnknownProfile {
        /// Configured name.
        name: String,
    },
    /// `search.threshold` lies outside `[0, 1]`.
    ThresholdOutOfRange {
        /// Configured value.
        value: f64,
    },
    /// `search.window` is zero.
    ZeroWindow,
    /// `search.location_distance` is zero.
    ZeroLocationDistance,
    /// `search.max_pattern_length` is zero.
    ZeroMaxPatternLength,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSourceConfigured => write!(f, "no topic source configured"),
            Self::BothSourcesSet => {
                write!(f, "both source.file and source.url are set; using the file")
            }
            Self::SourceFileMissing { path } => write!(f, "topic file does not exist: {path}"),
            Self::SourceNotAFile { path } => write!(f, "topic file is not a file: {path}"),
            Self::UnknownProfile { name } => write!(f, "unknown search profile '{name}'"),
            Self::ThresholdOutOfRange { value } => {
                write!(f, "search.threshold {value} is outside 0.0..=1.0")
            }
            Self::ZeroWindow => write!(f, "search.window is 0; one result is revealed per step"),
            Self::ZeroLocationDistance => {
                write!(f, "search.location_distance is 0; treated as 1")
            }
            Self::ZeroMaxPatternLength => {
                write!(f, "search.max_pattern_length is 0; treated as 1")
            }
        }
    }
}

/// Checks `config` and returns every warning found.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let source = &config.source;

    match (&source.file, &source.url) {
        (None, None) => warnings.push(ConfigWarning::NoSourceConfigured),
        (Some(_), Some(_)) => warnings.push(ConfigWarning::BothSourcesSet),
        _ => {}
    }

    if let Some(path) = &source.file {
        if !path.exists() {
            warnings.push(ConfigWarning::SourceFileMissing {
                path: path.display().to_string(),
            });
        } else if !path.is_file() {
            warnings.push(ConfigWarning::SourceNotAFile {
                path: path.display().to_string(),
            });
        }
    }

    let search = &config.search;
    if search.profile.parse::<Profile>().is_err() {
        warnings.push(ConfigWarning::UnknownProfile {
            name: search.profile.clone(),
        });
    }
    if let Some(value) = search.threshold
        && !(0.0..=1.0).contains(&value)
    {
        warnings.push(ConfigWarning::ThresholdOutOfRange { value });
    }
    if search.window == Some(0) {
        warnings.push(ConfigWarning::ZeroWindow);
    }
    if search.location_distance == Some(0) {
        warnings.push(ConfigWarning::ZeroLocationDistance);
    }
    if search.max_pattern_length == Some(0) {
        warnings.push(ConfigWarning::ZeroMaxPatternLength);
    }

    warnings
}
