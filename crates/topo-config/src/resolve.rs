//! Path resolution for configured topic files.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a `source.file` value against the directory of the config that set it.
///
/// `~` and `~/...` expand to the home directory, relative paths join `config_dir`,
/// and absolute paths are kept. The file does not have to exist yet; validation
/// reports missing files.
pub fn resolve_source_file(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a leading `~` to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }
    match path.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(path)),
    }
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_joins_config_dir() {
        let resolved = resolve_source_file("data/topics.json", Path::new("/proj")).unwrap();
        assert_eq!(resolved, PathBuf::from("/proj/data/topics.json"));

        let parent = resolve_source_file("../shared.json", Path::new("/proj/sub")).unwrap();
        assert_eq!(parent, PathBuf::from("/proj/sub/../shared.json"));
    }

    #[test]
    fn absolute_is_kept() {
        let resolved = resolve_source_file("/srv/topics.json", Path::new("/proj")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/topics.json"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(
            resolve_source_file("~/topics.json", Path::new("/proj")).unwrap(),
            home.join("topics.json")
        );
        assert_eq!(expand_tilde("~").unwrap(), home);
    }

    #[test]
    fn tilde_elsewhere_is_literal() {
        assert_eq!(expand_tilde("a/~/b").unwrap(), PathBuf::from("a/~/b"));
    }
}
