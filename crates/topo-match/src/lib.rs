//! Topic matching for topo.
//!
//! Given a query string, the [`Matcher`] returns ranked topic records using one of two
//! strategies:
//! - **Breadcrumb mode**, when the query contains `/`: every segment before the last
//!   `/` must equal the leading breadcrumb segments of a record exactly. Matches are
//!   ordered deepest first.
//! - **Fuzzy mode** otherwise: typo-tolerant matching against the record path using
//!   Levenshtein prefix automata, best score first.
//!
//! An empty query matches nothing.
//!
//! # Example
//!
//! ```
//! use topo_match::{MatcherConfig, search};
//! use topo_tree::{TopicNode, flatten};
//!
//! let records = flatten(&[TopicNode::new(1, "science")
//!     .with_child(TopicNode::new(2, "science/physics"))]);
//! let results = search(&records, "physcs", &MatcherConfig::default());
//! assert_eq!(results[0].key, 2);
//! ```

#![warn(missing_docs)]

mod breadcrumb;
mod fuzzy;
mod index;
mod matcher;
mod params;
mod query;

pub use index::TopicIndex;
pub use matcher::{Matcher, search};
pub use params::{
    DEFAULT_LOCATION_DISTANCE, DEFAULT_MAX_PATTERN_LENGTH, DEFAULT_THRESHOLD, DEFAULT_WINDOW,
    MAX_EDITS, MatcherConfig, Profile, SIMPLE_THRESHOLD, SIMPLE_WINDOW, UnknownProfile,
};
pub use query::Query;
