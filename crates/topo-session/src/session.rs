//! The async driver tying a [`SearchBox`] to a UI and a topic source.
//!
//! [`SearchSession::run`] owns a single loop that waits on three things at once: UI
//! events, the debounce deadline and the topic fetch. The loop ends when the event
//! channel closes, which disposes the search box and detaches any fetch still in flight.

use std::{future, sync::Arc};

use tokio::{
    sync::mpsc,
    task::{JoinError, JoinHandle},
    time::{self, Instant},
};
use topo_tree::{SearchRecord, TopicNode};
use tracing::{debug, warn};

use crate::{ResultsView, SearchBox, SourceError, TopicSource, TopicStatus, TopicStore};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The input text changed.
    InputChanged(String),
    /// Enter or the search icon.
    Commit,
    /// A result in the list was clicked.
    SelectResult(SearchRecord),
    /// The "more results" control was activated.
    RequestMore,
    /// A click landed outside the search box.
    BlurOutside,
    /// The input gained focus.
    Focus,
}

/// Receives everything the session wants to show.
pub trait UiSink {
    /// Draws the current search box state.
    fn render(&mut self, view: &ResultsView<'_>);

    /// Reports a committed or selected topic.
    fn committed(&mut self, record: &SearchRecord);

    /// Reports a change in topic availability.
    fn topics_changed(&mut self, _status: &TopicStatus) {}
}

/// Result of the background topic fetch.
type Fetch = JoinHandle<Result<Vec<TopicNode>, SourceError>>;

/// A running search box bound to a topic source.
pub struct SearchSession {
    /// Input state machine.
    search_box: SearchBox,
    /// Loaded topics.
    store: TopicStore,
    /// Where topics come from.
    source: Arc<dyn TopicSource>,
}

impl SearchSession {
    /// Creates a session. Nothing is fetched until [`SearchSession::run`].
    pub fn new(search_box: SearchBox, source: Arc<dyn TopicSource>) -> Self {
        Self {
            search_box,
            store: TopicStore::new(),
            source,
        }
    }

    /// Returns the search box.
    pub fn search_box(&self) -> &SearchBox {
        &self.search_box
    }

    /// Returns the topic store.
    pub fn store(&self) -> &TopicStore {
        &self.store
    }

    /// Returns the topic store for registering subscribers.
    pub fn store_mut(&mut self) -> &mut TopicStore {
        &mut self.store
    }

    /// Runs until `events` closes.
    ///
    /// Topics are fetched in the background; searches issued before they arrive see an
    /// empty record set and are re-run once the topics land.
    pub async fn run<U: UiSink>(&mut self, mut events: mpsc::Receiver<UiEvent>, ui: &mut U) {
        let mut fetch = Some(self.start_fetch());
        ui.topics_changed(self.store.status());
        ui.render(&self.search_box.view());

        loop {
            let deadline = self.search_box.debounce_deadline();
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else { break };
                    self.handle_event(event, ui);
                }
                joined = join_fetch(&mut fetch) => {
                    fetch = None;
                    self.finish_fetch(joined);
                    ui.topics_changed(self.store.status());
                    if self.search_box.refresh(&self.store) {
                        ui.render(&self.search_box.view());
                    }
                }
                () = sleep_until(deadline) => {
                    if self.search_box.poll_debounce(Instant::now(), &self.store) {
                        ui.render(&self.search_box.view());
                    }
                }
            }
        }

        self.search_box.dispose();
        if fetch.is_some() {
            debug!("session closed with topic fetch in flight; result will be discarded");
        }
    }

    /// Applies one UI event and renders the outcome.
    pub fn handle_event<U: UiSink>(&mut self, event: UiEvent, ui: &mut U) {
        debug!(?event, "ui event");
        match event {
            UiEvent::InputChanged(text) => self.search_box.on_input(text, Instant::now()),
            UiEvent::Commit => {
                if let Some(record) = self.search_box.on_commit(&self.store) {
                    ui.committed(&record);
                }
            }
            UiEvent::SelectResult(record) => {
                let record = self.search_box.on_select(record);
                ui.committed(&record);
            }
            UiEvent::RequestMore => {
                self.search_box.on_request_more();
            }
            UiEvent::BlurOutside => self.search_box.on_blur_outside(),
            UiEvent::Focus => self.search_box.on_focus(),
        }
        ui.render(&self.search_box.view());
    }

    /// Marks the store as loading and spawns the fetch.
    fn start_fetch(&mut self) -> Fetch {
        self.store.set_loading();
        let source = Arc::clone(&self.source);
        debug!(source = %source.describe(), "fetching topics");
        tokio::spawn(async move { source.get_topics().await })
    }

    /// Stores the fetch outcome.
    fn finish_fetch(&mut self, joined: Result<Result<Vec<TopicNode>, SourceError>, JoinError>) {
        match joined.map_err(SourceError::from).and_then(|result| result) {
            Ok(topics) => self.store.set_topics(topics),
            Err(err) => {
                warn!(source = %self.source.describe(), error = %err, "topic fetch failed");
                self.store.set_unavailable(err.to_string());
            }
        }
    }
}

/// Waits for the fetch if there is one, otherwise forever.
async fn join_fetch(
    fetch: &mut Option<Fetch>,
) -> Result<Result<Vec<TopicNode>, SourceError>, JoinError> {
    match fetch {
        Some(handle) => handle.await,
        None => future::pending().await,
    }
}

/// Sleeps until `deadline` if there is one, otherwise forever.
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => future::pending().await,
    }
}
