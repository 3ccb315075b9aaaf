//! Topic tree nodes as served by the topic API.

use serde::{Deserialize, Serialize};

/// A node in the topic hierarchy.
///
/// Paths are `/`-delimited and a child's path is prefixed by its parent's path. The
/// serialized shape follows the topic API (`topic_id`, `topics`), while `id` and
/// `children` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TopicNode {
    /// Unique topic identifier.
    #[serde(rename = "topic_id", alias = "id")]
    pub id: i64,
    /// Full `/`-delimited path of the topic.
    #[serde(default)]
    pub path: String,
    /// Human readable title.
    #[serde(default)]
    pub title: String,
    /// Whether the topic is listed publicly.
    #[serde(default)]
    pub is_visible: bool,
    /// Whether the topic is hidden by moderators.
    #[serde(default)]
    pub is_hidden: bool,
    /// Whether the topic is restricted to adults.
    #[serde(default)]
    pub is_adultonly: bool,
    /// Listing priority.
    #[serde(default)]
    pub priority: i64,
    /// Child topics in display order.
    #[serde(rename = "topics", alias = "children", default)]
    pub children: Vec<TopicNode>,
}

impl TopicNode {
    /// Creates a leaf topic with the given id and path.
    ///
    /// The title defaults to the last path segment.
    pub fn new(id: i64, path: impl Into<String>) -> Self {
        let path = path.into();
        let title = path.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            id,
            path,
            title,
            ..Self::default()
        }
    }

    /// Appends a child topic, returning `self` for chaining.
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Returns an iterator over this node and all descendants in pre-order.
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter { stack: vec![self] }
    }

    /// Returns the total number of nodes in this subtree (including self).
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Returns the depth of the topic, counted in path segments.
    pub fn depth(&self) -> usize {
        self.path.split('/').count()
    }

    /// Returns the title, or the last path segment when the title is empty.
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            self.path.rsplit('/').next().unwrap_or_default()
        } else {
            &self.title
        }
    }
}

/// Iterator for pre-order traversal of a topic subtree.
pub struct PreorderIter<'a> {
    /// Stack of nodes to visit (rightmost children pushed first).
    stack: Vec<&'a TopicNode>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a TopicNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so leftmost child is processed first
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Returns the total number of nodes across a forest of topics.
pub fn node_count(roots: &[TopicNode]) -> usize {
    roots.iter().map(TopicNode::node_count).sum()
}
