//! JSON loading for topic trees.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{TreeError, node::TopicNode};

/// Accepted top-level JSON shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum TopicDocument {
    /// A list of root topics (the topic API response).
    Forest(Vec<TopicNode>),
    /// A single root topic.
    Single(TopicNode),
}

/// Parses topics from a JSON string.
///
/// Accepts either an array of root topics or a single root object.
pub fn load_topics_str(json: &str) -> Result<Vec<TopicNode>, TreeError> {
    parse(json, None)
}

/// Converts an already decoded JSON value into topics.
///
/// Accepts the same shapes as [`load_topics_str`].
pub fn load_topics_value(value: serde_json::Value) -> Result<Vec<TopicNode>, TreeError> {
    let document: TopicDocument =
        serde_json::from_value(value).map_err(|source| TreeError::Json { path: None, source })?;
    Ok(document.into_roots())
}

/// Reads and parses topics from a JSON file.
pub fn load_topics_file(path: &Path) -> Result<Vec<TopicNode>, TreeError> {
    let contents = fs::read_to_string(path).map_err(|source| TreeError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents, Some(path))
}

/// Parses JSON, attaching the source path to errors.
fn parse(json: &str, path: Option<&Path>) -> Result<Vec<TopicNode>, TreeError> {
    let document: TopicDocument =
        serde_json::from_str(json).map_err(|source| TreeError::Json {
            path: path.map(Path::to_path_buf),
            source,
        })?;
    Ok(document.into_roots())
}

impl TopicDocument {
    /// Returns the root topics of the document.
    fn into_roots(self) -> Vec<TopicNode> {
        match self {
            Self::Forest(roots) => roots,
            Self::Single(root) => vec![root],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn parses_forest() {
        let roots = load_topics_str(
            r#"[{"topic_id": 1, "path": "a", "topics": []}, {"topic_id": 2, "path": "b"}]"#,
        )
        .unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[1].path, "b");
    }

    #[test]
    fn parses_single_root() {
        let roots = load_topics_str(r#"{"topic_id": 1, "path": "a"}"#).unwrap();
        assert_eq!(roots.len(), 1);
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(load_topics_str("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = load_topics_str("{not json").unwrap_err();
        assert!(matches!(err, TreeError::Json { path: None, .. }));
    }

    #[test]
    fn value_accepts_both_shapes() {
        let single = serde_json::json!({
            "topic_id": 1,
            "path": "a",
            "topics": [{"topic_id": 2, "path": "a/b"}]
        });
        let roots = load_topics_value(single).unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].children[0].id, 2);

        let forest =
            serde_json::json!([{"topic_id": 1, "path": "a"}, {"topic_id": 3, "path": "c"}]);
        assert_eq!(load_topics_value(forest).unwrap().len(), 2);

        let err = load_topics_value(serde_json::json!("nope")).unwrap_err();
        assert!(matches!(err, TreeError::Json { path: None, .. }));
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topics.json");
        fs::write(&path, r#"[{"topic_id": 5, "path": "x/y"}]"#).unwrap();

        let roots = load_topics_file(&path).unwrap();
        assert_eq!(roots[0].id, 5);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_topics_file(&path).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn json_error_in_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[1, 2]").unwrap();
        let err = load_topics_file(&path).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }
}
