//! Flattened, searchable topic records.

use serde::{Deserialize, Serialize};

use crate::node::TopicNode;

/// A flattened projection of a topic with its precomputed breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Unique record key (the source topic id).
    pub key: i64,
    /// Full topic path.
    pub text: String,
    /// Path split on `/`.
    pub breadcrumb: Vec<String>,
    /// Value reported on selection (the source topic id).
    pub value: i64,
}

impl SearchRecord {
    /// Builds the record for a single topic.
    pub fn from_topic(topic: &TopicNode) -> Self {
        Self {
            key: topic.id,
            text: topic.path.clone(),
            breadcrumb: split_path(&topic.path),
            value: topic.id,
        }
    }

    /// Returns the number of breadcrumb segments.
    pub fn depth(&self) -> usize {
        self.breadcrumb.len()
    }

    /// Returns true if the first segments of the breadcrumb equal `prefix`.
    pub fn has_prefix(&self, prefix: &[String]) -> bool {
        self.breadcrumb.len() >= prefix.len() && self.breadcrumb[..prefix.len()] == *prefix
    }
}

/// Splits a topic path into breadcrumb segments.
///
/// An empty path yields a single empty segment, so every topic has at least one.
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/').map(str::to_string).collect()
}

/// Flattens a topic forest into search records in depth-first pre-order.
///
/// Every node produces exactly one record and a parent always precedes its
/// descendants.
pub fn flatten(roots: &[TopicNode]) -> Vec<SearchRecord> {
    roots
        .iter()
        .flat_map(TopicNode::iter_preorder)
        .map(SearchRecord::from_topic)
        .collect()
}
