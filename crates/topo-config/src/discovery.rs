//! Configuration file discovery.
//!
//! Looks for `.topo.toml` in the working directory and each of its ancestors, then
//! falls back to `~/.topo.toml`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".topo.toml";

/// Finds every configuration file that applies to `cwd`.
///
/// Paths come back highest precedence first: the file closest to `cwd` leads and the
/// global `~/.topo.toml`, if any, comes last. A file with `root = true` ends the walk
/// and suppresses the global file.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        configs.push(candidate);
        if stop {
            return configs;
        }
    }

    if let Some(global) = global_config_path()
        && global.is_file()
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    configs
}

/// Returns the path of the global configuration file.
///
/// `None` when the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Returns true if `path` is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Drops the global config, which depends on the machine running the tests.
    fn local(configs: &[PathBuf]) -> Vec<PathBuf> {
        configs
            .iter()
            .filter(|p| !is_global_config(p))
            .cloned()
            .collect()
    }

    #[test]
    fn nothing_found() {
        let dir = TestDir::new();
        let cwd = dir.create_dir("a/b/c");
        assert!(local(&discover_config_files(&cwd)).is_empty());
    }

    #[test]
    fn closest_file_first() {
        let dir = TestDir::new();
        let top = dir.create_config("");
        let mid = dir.create_config("a/b");
        let near = dir.create_config("a/b/c/d");
        let cwd = dir.create_dir("a/b/c/d/e");

        assert_eq!(local(&discover_config_files(&cwd)), vec![near, mid, top]);
    }

    #[test]
    fn config_in_cwd_is_found() {
        let dir = TestDir::new();
        let config = dir.create_config("");
        assert_eq!(local(&discover_config_files(dir.path())), vec![config]);
    }

    #[test]
    fn directory_named_like_config_is_skipped() {
        let dir = TestDir::new();
        fs::create_dir_all(dir.path().join(CONFIG_FILENAME)).unwrap();
        let cwd = dir.create_dir("sub");
        assert!(local(&discover_config_files(&cwd)).is_empty());
    }

    #[test]
    fn root_config_stops_walk_and_global() {
        let dir = TestDir::new();
        dir.create_config("");
        let root = dir.create_root_config("project");
        let child = dir.create_config("project/sub");
        let cwd = dir.create_dir("project/sub/deep");

        assert_eq!(discover_config_files(&cwd), vec![child, root]);
    }

    #[test]
    fn root_false_keeps_walking() {
        let dir = TestDir::new();
        let top = dir.create_config("");
        let mid = dir.create_config_with_content("project", "root = false\n");
        let cwd = dir.create_dir("project/src");

        assert_eq!(local(&discover_config_files(&cwd)), vec![mid, top]);
    }

    #[test]
    fn global_path_uses_filename() {
        let global = global_config_path().unwrap();
        assert!(global.ends_with(CONFIG_FILENAME));
        assert!(is_global_config(&global));
        assert!(!is_global_config(Path::new("/elsewhere/.topo.toml")));
    }
}
