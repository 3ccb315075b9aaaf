//! Integration tests for topo-config.
//!
//! Exercises the full pipeline: discovery, parsing, path resolution and merging.

#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use topo_config::{CONFIG_FILENAME, Config, ConfigError, ConfigWarning, is_global_config};
use topo_match::Profile;

/// A temporary directory tree for one test.
struct TestEnv {
    /// Backing directory.
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Loads config as seen from `rel_path`, ignoring any global file on this machine.
    fn load_local(&self, rel_path: &str) -> Result<Config, ConfigError> {
        let files: Vec<PathBuf> = topo_config::discover_config_files(&self.path().join(rel_path))
            .into_iter()
            .filter(|p| !is_global_config(p))
            .collect();
        Config::load_from_files(&files)
    }
}

#[test]
fn no_config_gives_defaults() {
    let env = TestEnv::new();
    let config = env.load_local("").unwrap();
    assert!(config.config_root.is_none());
    assert!(config.source.file.is_none());
    assert_eq!(config.search.profile().unwrap(), Profile::Breadcrumb);
    assert_eq!(config.validate(), vec![ConfigWarning::NoSourceConfigured]);
}

#[test]
fn relative_source_file_resolves_against_defining_config() {
    let env = TestEnv::new();
    let topics = env.create_file("project/data/topics.json", "[]");
    env.create_file(
        &format!("project/{CONFIG_FILENAME}"),
        "[source]\nfile = \"data/topics.json\"\n",
    );
    env.create_dir("project/src/deep");

    let config = env.load_local("project/src/deep").unwrap();
    assert_eq!(config.source.file.as_deref(), Some(topics.as_path()));
    assert_eq!(config.config_root, Some(env.path().join("project")));
    assert!(config.validate().is_empty());
}

#[test]
fn nested_configs_merge_field_by_field() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "[source]\nurl = \"http://topics.example\"\n\n[search]\nprofile = \"simple\"\nwindow = 12\n",
    );
    env.create_file(
        &format!("app/{CONFIG_FILENAME}"),
        "[search]\nthreshold = 0.15\ndebounce_ms = 100\n",
    );

    let config = env.load_local("app").unwrap();
    assert_eq!(config.files.len(), 2);
    assert_eq!(config.source.url.as_deref(), Some("http://topics.example"));

    let matcher = config.search.matcher_config().unwrap();
    assert!(!matcher.breadcrumbs);
    assert!((matcher.threshold - 0.15).abs() < f64::EPSILON);
    assert_eq!(config.search.window().unwrap(), 12);
    assert_eq!(config.search.debounce().as_millis(), 100);
}

#[test]
fn root_config_hides_parents() {
    let env = TestEnv::new();
    env.create_file(CONFIG_FILENAME, "[search]\nprofile = \"simple\"\n");
    env.create_file(
        &format!("project/{CONFIG_FILENAME}"),
        "root = true\n\n[search]\nwindow = 3\n",
    );

    let files = topo_config::discover_config_files(&env.create_dir("project/x"));
    assert_eq!(files.len(), 1);

    let config = Config::load_from_files(&files).unwrap();
    assert_eq!(config.search.profile, "breadcrumb");
    assert_eq!(config.search.window().unwrap(), 3);
}

#[test]
fn malformed_config_is_an_error() {
    let env = TestEnv::new();
    env.create_file(CONFIG_FILENAME, "[search\nprofile = 1\n");
    let err = env.load_local("").unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
}

#[test]
fn missing_topic_file_warns() {
    let env = TestEnv::new();
    env.create_file(CONFIG_FILENAME, "[source]\nfile = \"nope.json\"\n");
    let config = env.load_local("").unwrap();
    let warnings = config.validate();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], ConfigWarning::SourceFileMissing { .. }));
    assert!(warnings[0].to_string().contains("nope.json"));
}

#[test]
fn effective_settings_render_as_toml() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "[source]\nurl = \"http://localhost:9000\"\n\n[search]\nthreshold = 0.2\n",
    );
    let text = env.load_local("").unwrap().settings_to_toml().unwrap();
    assert!(text.contains("url = \"http://localhost:9000\""));
    assert!(text.contains("threshold = 0.2"));
    assert!(text.contains("debounce_ms = 250"));
}
