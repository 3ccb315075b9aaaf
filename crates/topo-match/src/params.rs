//! Matcher configuration and built-in profiles.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default fuzzy threshold for the breadcrumb profile.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Fuzzy threshold for the simple profile.
pub const SIMPLE_THRESHOLD: f64 = 0.2;

/// Characters of in-segment offset that cost a full point of score.
pub const DEFAULT_LOCATION_DISTANCE: usize = 100;

/// Queries longer than this many characters are truncated before fuzzy matching.
pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 32;

/// Upper bound on the edit distance used by the fuzzy automaton.
pub const MAX_EDITS: u8 = 2;

/// Reveal window of the breadcrumb profile.
pub const DEFAULT_WINDOW: usize = 20;

/// Reveal window of the simple profile.
pub const SIMPLE_WINDOW: usize = 10;

/// Parameters controlling how queries are matched against topic records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Maximum accepted fuzzy score (0.0 = exact, 1.0 = anything).
    pub threshold: f64,
    /// Offset within a path segment that adds 1.0 to the fuzzy score.
    pub location_distance: usize,
    /// Maximum number of query characters considered by the fuzzy matcher.
    pub max_pattern_length: usize,
    /// Whether queries containing `/` switch to breadcrumb-prefix matching.
    pub breadcrumbs: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Profile::default().matcher_config()
    }
}

impl MatcherConfig {
    /// Overrides the fuzzy threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enables or disables breadcrumb mode.
    pub fn with_breadcrumbs(mut self, breadcrumbs: bool) -> Self {
        self.breadcrumbs = breadcrumbs;
        self
    }

    /// Maximum edit distance allowed for a query of `chars` characters.
    pub(crate) fn max_edits(&self, chars: usize) -> u8 {
        let allowed = (self.threshold.clamp(0.0, 1.0) * chars as f64).floor() as usize;
        allowed.min(usize::from(MAX_EDITS)) as u8
    }
}

/// The two shipped search box configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Plain fuzzy search with a tight threshold and a short reveal window.
    Simple,
    /// Fuzzy search plus breadcrumb-prefix mode with a longer reveal window.
    #[default]
    Breadcrumb,
}

impl Profile {
    /// All profiles, in display order.
    pub const ALL: [Self; 2] = [Self::Simple, Self::Breadcrumb];

    /// Returns the matcher configuration for this profile.
    pub fn matcher_config(self) -> MatcherConfig {
        match self {
            Self::Simple => MatcherConfig {
                threshold: SIMPLE_THRESHOLD,
                location_distance: DEFAULT_LOCATION_DISTANCE,
                max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
                breadcrumbs: false,
            },
            Self::Breadcrumb => MatcherConfig {
                threshold: DEFAULT_THRESHOLD,
                location_distance: DEFAULT_LOCATION_DISTANCE,
                max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
                breadcrumbs: true,
            },
        }
    }

    /// Returns the reveal window size for this profile.
    pub fn window(self) -> usize {
        match self {
            Self::Simple => SIMPLE_WINDOW,
            Self::Breadcrumb => DEFAULT_WINDOW,
        }
    }

    /// Returns the profile name as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Breadcrumb => "breadcrumb",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown profile name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile '{0}' (expected 'simple' or 'breadcrumb')")]
pub struct UnknownProfile(pub String);

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownProfile(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_differ_in_threshold_and_window() {
        let simple = Profile::Simple.matcher_config();
        let crumbs = Profile::Breadcrumb.matcher_config();
        assert!((simple.threshold - 0.2).abs() < f64::EPSILON);
        assert!((crumbs.threshold - 0.3).abs() < f64::EPSILON);
        assert!(!simple.breadcrumbs);
        assert!(crumbs.breadcrumbs);
        assert_eq!(Profile::Simple.window(), 10);
        assert_eq!(Profile::Breadcrumb.window(), 20);
    }

    #[test]
    fn default_is_breadcrumb() {
        assert_eq!(Profile::default(), Profile::Breadcrumb);
        assert_eq!(MatcherConfig::default(), Profile::Breadcrumb.matcher_config());
    }

    #[test]
    fn parses_profile_names() {
        assert_eq!("simple".parse::<Profile>().unwrap(), Profile::Simple);
        assert_eq!(" Breadcrumb ".parse::<Profile>().unwrap(), Profile::Breadcrumb);
        assert!("fancy".parse::<Profile>().is_err());
    }

    #[test]
    fn max_edits_scales_with_length() {
        let config = MatcherConfig::default();
        assert_eq!(config.max_edits(2), 0);
        assert_eq!(config.max_edits(4), 1);
        assert_eq!(config.max_edits(7), 2);
        assert_eq!(config.max_edits(30), MAX_EDITS);

        let strict = config.with_threshold(0.0);
        assert_eq!(strict.max_edits(30), 0);
    }
}
