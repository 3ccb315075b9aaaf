//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
    time::Duration,
};

use topo_config::Config;
use topo_match::{MatcherConfig, Profile};
use topo_session::{FileTopicSource, HttpTopicSource, TopicSource};
use topo_tree::TopicNode;
use tracing::debug;

use crate::cli::args::{MatchArgs, SourceArgs};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

/// Matching settings after applying command-line overrides to configuration.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Selected profile.
    pub profile: Profile,
    /// Matcher configuration.
    pub matcher: MatcherConfig,
    /// Reveal window.
    pub window: usize,
    /// Debounce quiet period.
    pub debounce: Duration,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which must work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Picks the topic source: `--topics`, then `--url`, then `[source]` in configuration.
    pub fn topic_source(&self, args: &SourceArgs) -> Result<Arc<dyn TopicSource>, ExitCode> {
        let source: Arc<dyn TopicSource> = if let Some(path) = &args.topics {
            Arc::new(FileTopicSource::new(self.cwd.join(path)))
        } else if let Some(url) = &args.url {
            Arc::new(HttpTopicSource::new(url.as_str()))
        } else if let Some(path) = &self.config.source.file {
            Arc::new(FileTopicSource::new(path))
        } else if let Some(url) = &self.config.source.url {
            Arc::new(HttpTopicSource::new(url.as_str()))
        } else {
            eprintln!("error: no topic source configured");
            eprintln!("Pass --topics FILE or --url URL, or run 'topo init' and set [source].");
            return Err(ExitCode::FAILURE);
        };
        debug!(source = %source.describe(), "selected topic source");
        Ok(source)
    }

    /// Fetches the full topic tree from `source`.
    pub async fn load_topics(&self, source: &dyn TopicSource) -> Result<Vec<TopicNode>, ExitCode> {
        source.get_topics().await.map_err(|e| {
            eprintln!(
                "error: failed to load topics from {}: {e}",
                source.describe()
            );
            ExitCode::FAILURE
        })
    }

    /// Resolves matching settings.
    ///
    /// `--profile` starts from that profile's defaults, ignoring the configured
    /// overrides; `--threshold` and `--window` then apply on top.
    pub fn search_params(&self, args: &MatchArgs) -> Result<SearchParams, ExitCode> {
        let settings = &self.config.search;
        let (profile, mut matcher, mut window) = match args.profile {
            Some(profile) => (profile, profile.matcher_config(), profile.window()),
            None => {
                let resolved = settings.profile().and_then(|profile| {
                    Ok((profile, settings.matcher_config()?, settings.window()?))
                });
                resolved.map_err(|e| {
                    eprintln!("error: invalid [search] configuration: {e}");
                    ExitCode::FAILURE
                })?
            }
        };

        if let Some(threshold) = args.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                eprintln!("error: --threshold must be between 0.0 and 1.0, got {threshold}");
                return Err(ExitCode::FAILURE);
            }
            matcher.threshold = threshold;
        }
        if let Some(n) = args.window {
            window = n;
        }

        Ok(SearchParams {
            profile,
            matcher,
            window,
            debounce: settings.debounce(),
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use topo_config::SearchSettings;

    use super::*;

    /// Builds a context rooted at `/work`.
    fn context(config: Config) -> CommandContext {
        CommandContext {
            cwd: PathBuf::from("/work"),
            config,
        }
    }

    #[test]
    fn configured_overrides_apply_without_flags() {
        let mut config = Config::default();
        config.search = SearchSettings {
            threshold: Some(0.1),
            window: Some(7),
            debounce_ms: 40,
            ..SearchSettings::default()
        };
        let params = context(config)
            .search_params(&MatchArgs::default())
            .unwrap();
        assert_eq!(params.profile, Profile::Breadcrumb);
        assert!((params.matcher.threshold - 0.1).abs() < f64::EPSILON);
        assert_eq!(params.window, 7);
        assert_eq!(params.debounce, Duration::from_millis(40));
    }

    #[test]
    fn profile_flag_resets_to_profile_defaults() {
        let mut config = Config::default();
        config.search.window = Some(7);
        let args = MatchArgs {
            profile: Some(Profile::Simple),
            window: None,
            threshold: None,
        };
        let params = context(config).search_params(&args).unwrap();
        assert!(!params.matcher.breadcrumbs);
        assert_eq!(params.window, Profile::Simple.window());
    }

    #[test]
    fn flags_override_everything() {
        let args = MatchArgs {
            profile: None,
            threshold: Some(0.5),
            window: Some(3),
        };
        let params = context(Config::default()).search_params(&args).unwrap();
        assert!((params.matcher.threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(params.window, 3);
    }

    #[test]
    fn threshold_out_of_range_fails() {
        let args = MatchArgs {
            threshold: Some(1.5),
            ..MatchArgs::default()
        };
        assert!(context(Config::default()).search_params(&args).is_err());
    }

    #[test]
    fn source_precedence() {
        let mut config = Config::default();
        config.source.url = Some("http://config.example".into());
        let ctx = context(config);

        let from_flag = ctx
            .topic_source(&SourceArgs {
                topics: Some(PathBuf::from("t.json")),
                url: None,
            })
            .unwrap();
        assert!(from_flag.describe().contains("t.json"));

        let from_config = ctx.topic_source(&SourceArgs::default()).unwrap();
        assert!(from_config.describe().contains("config.example"));

        assert!(
            context(Config::default())
                .topic_source(&SourceArgs::default())
                .is_err()
        );
    }
}
