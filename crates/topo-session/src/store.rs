//! Shared topic state.
//!
//! The [`TopicStore`] holds the loaded topic tree, its flattened search records and the
//! load status. Every change to the record set bumps the generation so matchers can
//! tell when their index is stale. Subscribers are called synchronously after each
//! change and can be removed with the id returned by [`TopicStore::subscribe`].

use std::fmt;

use topo_tree::{SearchRecord, TopicNode, flatten};
use tracing::{debug, info};

/// Load status of the topic tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TopicStatus {
    /// No fetch has been started.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Topics are loaded.
    Ready,
    /// The fetch failed; searches run against whatever records are present.
    Unavailable(String),
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Unavailable(reason) => write!(f, "unavailable: {reason}"),
        }
    }
}

/// Handle for removing a subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What subscribers see after a change.
#[derive(Debug, Clone, Copy)]
pub struct StoreSnapshot<'a> {
    /// Current status.
    pub status: &'a TopicStatus,
    /// Current record-set generation.
    pub generation: u64,
    /// Current records.
    pub records: &'a [SearchRecord],
}

/// A change callback.
type Subscriber = Box<dyn FnMut(&StoreSnapshot<'_>) + Send>;

/// Owns the loaded topics and notifies subscribers of changes.
#[derive(Default)]
pub struct TopicStore {
    /// Loaded topic forest.
    topics: Vec<TopicNode>,
    /// Flattened records for `topics`.
    records: Vec<SearchRecord>,
    /// Load status.
    status: TopicStatus,
    /// Bumped whenever `records` is replaced.
    generation: u64,
    /// Registered callbacks.
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    /// Next subscription id.
    next_id: u64,
}

impl fmt::Debug for TopicStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopicStore")
            .field("topics", &self.topics.len())
            .field("records", &self.records.len())
            .field("status", &self.status)
            .field("generation", &self.generation)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl TopicStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that is already loaded with `topics`.
    pub fn with_topics(topics: Vec<TopicNode>) -> Self {
        let mut store = Self::new();
        store.set_topics(topics);
        store
    }

    /// Returns the loaded topic forest.
    pub fn topics(&self) -> &[TopicNode] {
        &self.topics
    }

    /// Returns the flattened search records.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Returns the load status.
    pub fn status(&self) -> &TopicStatus {
        &self.status
    }

    /// Returns the record-set generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Marks a fetch as started.
    pub fn set_loading(&mut self) {
        self.status = TopicStatus::Loading;
        self.notify();
    }

    /// Replaces the topic tree and bumps the generation.
    pub fn set_topics(&mut self, topics: Vec<TopicNode>) {
        self.records = flatten(&topics);
        self.topics = topics;
        self.generation += 1;
        self.status = TopicStatus::Ready;
        info!(
            records = self.records.len(),
            generation = self.generation,
            "topics loaded"
        );
        self.notify();
    }

    /// Marks the topics as unavailable. Existing records are kept.
    pub fn set_unavailable(&mut self, reason: impl Into<String>) {
        self.status = TopicStatus::Unavailable(reason.into());
        self.notify();
    }

    /// Registers a change callback.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreSnapshot<'_>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        before != self.subscribers.len()
    }

    /// Calls every subscriber with the current state.
    fn notify(&mut self) {
        let snapshot = StoreSnapshot {
            status: &self.status,
            generation: self.generation,
            records: &self.records,
        };
        debug!(status = %self.status, subscribers = self.subscribers.len(), "store changed");
        for (_, callback) in &mut self.subscribers {
            callback(&snapshot);
        }
    }
}
