//! Topic tree model for topo.
//!
//! This crate holds the topic hierarchy as served by the topic API and its flattened,
//! searchable projection:
//! - [`TopicNode`]: the recursive topic record
//! - [`SearchRecord`]: one record per topic with a precomputed breadcrumb
//! - [`flatten`]: depth-first pre-order flattening of a topic forest
//!
//! # Example
//!
//! ```
//! use topo_tree::{TopicNode, flatten};
//!
//! let roots = vec![
//!     TopicNode::new(1, "science").with_child(TopicNode::new(2, "science/physics")),
//! ];
//! let records = flatten(&roots);
//! assert_eq!(records[1].breadcrumb, vec!["science", "physics"]);
//! ```

#![warn(missing_docs)]

mod error;
mod load;
mod node;
mod record;

pub use error::TreeError;
pub use load::{load_topics_file, load_topics_str, load_topics_value};
pub use node::{PreorderIter, TopicNode, node_count};
pub use record::{SearchRecord, flatten, split_path};
