//! Interactive topic search sessions for topo.
//!
//! This crate wraps a [`topo_match::Matcher`] in the behaviour of a search-as-you-type box:
//! - [`Debouncer`]: collapses bursts of keystrokes into one search
//! - [`RevealController`]: shows the match list one window at a time
//! - [`TopicStore`]: holds the loaded topics and tells subscribers when they change
//! - [`TopicSource`]: fetches topic trees from a file, an HTTP service, or memory
//! - [`SearchBox`]: the synchronous state machine behind the input
//! - [`SearchSession`]: the async loop connecting a box, a source and a [`UiSink`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use topo_match::Profile;
//! use topo_session::{SearchBox, SearchSession, StaticTopicSource};
//! use topo_tree::TopicNode;
//!
//! let source = StaticTopicSource::new(vec![TopicNode::new(1, "science")]);
//! let session = SearchSession::new(SearchBox::from_profile(Profile::Breadcrumb), Arc::new(source));
//! assert!(session.store().records().is_empty());
//! ```

#![warn(missing_docs)]

mod debounce;
mod error;
mod reveal;
mod search_box;
mod session;
mod source;
mod store;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use error::SourceError;
pub use reveal::{RevealController, RevealState};
pub use search_box::{BoxState, ResultsView, SearchBox};
pub use session::{SearchSession, UiEvent, UiSink};
pub use source::{FileTopicSource, HttpTopicSource, StaticTopicSource, TopicSource};
pub use store::{StoreSnapshot, SubscriptionId, TopicStatus, TopicStore};
