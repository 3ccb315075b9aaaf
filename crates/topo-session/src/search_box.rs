//! The search box state machine.
//!
//! ```text
//! Idle --input--> Typing --debounce elapsed--> ResultsOpen
//! ResultsOpen --input--> Typing
//! ResultsOpen --commit | select | blur--> Idle
//! Idle --focus (search pending)--> Typing
//! Idle --focus (matches present)--> ResultsOpen
//! ```
//!
//! A blur only hides the list. A search still pending at that point runs when due
//! and keeps the list hidden, so the matches always follow the latest text.
//!
//! All methods are synchronous. Time enters only through the `now` argument of
//! [`SearchBox::on_input`] and [`SearchBox::poll_debounce`], and topic data only through
//! the [`TopicStore`] argument of the methods that search.

use std::time::Duration;

use tokio::time::Instant;
use topo_match::{Matcher, MatcherConfig, Profile};
use topo_tree::SearchRecord;
use tracing::debug;

use crate::{Debouncer, RevealController, RevealState, TopicStore, debounce::DEFAULT_DEBOUNCE};

/// Where the search box is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxState {
    /// Nothing pending and the result list is hidden.
    #[default]
    Idle,
    /// A search is scheduled and waiting for the quiet period.
    Typing,
    /// The result list is visible.
    ResultsOpen,
}

/// Everything a UI needs to draw the search box.
#[derive(Debug, Clone, Copy)]
pub struct ResultsView<'a> {
    /// Current input text.
    pub query: &'a str,
    /// Lifecycle state.
    pub state: BoxState,
    /// Revealed prefix of the match list.
    pub visible: &'a [SearchRecord],
    /// Total number of matches.
    pub total: usize,
    /// Whether a "more results" control should be shown.
    pub has_more: bool,
    /// Last committed or selected record.
    pub selection: Option<&'a SearchRecord>,
}

impl ResultsView<'_> {
    /// Returns true if the result list is visible.
    pub fn results_open(&self) -> bool {
        self.state == BoxState::ResultsOpen
    }
}

/// A debounced, incrementally revealed topic search box.
pub struct SearchBox {
    /// Query engine.
    matcher: Matcher,
    /// Visible window over `matches`.
    reveal: RevealController,
    /// Pending search text.
    debounce: Debouncer<String>,
    /// Current input text.
    query: String,
    /// Matches for the last search that ran.
    matches: Vec<SearchRecord>,
    /// Lifecycle state.
    state: BoxState,
    /// Last committed or selected record.
    selection: Option<SearchRecord>,
}

impl SearchBox {
    /// Creates a search box.
    pub fn new(config: MatcherConfig, window: usize, debounce: Duration) -> Self {
        Self {
            matcher: Matcher::new(config),
            reveal: RevealController::new(window),
            debounce: Debouncer::new(debounce),
            query: String::new(),
            matches: Vec::new(),
            state: BoxState::Idle,
            selection: None,
        }
    }

    /// Creates a search box with a profile's matcher settings and window.
    pub fn from_profile(profile: Profile) -> Self {
        Self::new(profile.matcher_config(), profile.window(), DEFAULT_DEBOUNCE)
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> BoxState {
        self.state
    }

    /// Returns the current input text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns all matches of the last search.
    pub fn matches(&self) -> &[SearchRecord] {
        &self.matches
    }

    /// Returns the reveal state.
    pub fn reveal_state(&self) -> RevealState {
        self.reveal.state()
    }

    /// Returns the last committed or selected record.
    pub fn selection(&self) -> Option<&SearchRecord> {
        self.selection.as_ref()
    }

    /// Returns when the pending search becomes due.
    pub fn debounce_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Returns the matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Returns a drawable view of the current state.
    pub fn view(&self) -> ResultsView<'_> {
        let reveal = self.reveal.state();
        ResultsView {
            query: &self.query,
            state: self.state,
            visible: self.reveal.visible(&self.matches),
            total: self.matches.len(),
            has_more: reveal.has_more,
            selection: self.selection.as_ref(),
        }
    }

    /// Rebuilds the index if the store holds a newer record set.
    ///
    /// Returns true if the index was rebuilt.
    pub fn sync_records(&mut self, store: &TopicStore) -> bool {
        if !self.matcher.is_stale(store.generation()) {
            return false;
        }
        self.matcher
            .reindex(store.records().to_vec(), store.generation());
        true
    }

    /// Handles an edit of the input text.
    ///
    /// Clears the selection and (re)starts the debounce timer. The result list stays
    /// hidden until the search runs.
    pub fn on_input(&mut self, text: impl Into<String>, now: Instant) {
        self.query = text.into();
        self.selection = None;
        self.debounce.schedule(self.query.clone(), now);
        self.state = BoxState::Typing;
    }

    /// Runs the pending search if its quiet period has elapsed.
    ///
    /// The result list opens only while typing; after a blur the search runs hidden.
    /// Returns true if a search ran.
    pub fn poll_debounce(&mut self, now: Instant, store: &TopicStore) -> bool {
        let Some(text) = self.debounce.take_due(now) else {
            return false;
        };
        self.run_search(&text, store);
        if self.state == BoxState::Typing {
            self.state = BoxState::ResultsOpen;
        }
        true
    }

    /// Commits the best match, as on Enter or the search icon.
    ///
    /// A pending search runs first so the commit reflects the latest text. Returns the
    /// committed record, or `None` when nothing matches.
    pub fn on_commit(&mut self, store: &TopicStore) -> Option<SearchRecord> {
        if let Some(text) = self.debounce.flush() {
            self.run_search(&text, store);
        }
        self.state = BoxState::Idle;

        let record = self.matches.first().cloned()?;
        Some(self.choose(record))
    }

    /// Selects a specific result, as on a click in the list.
    pub fn on_select(&mut self, record: SearchRecord) -> SearchRecord {
        self.debounce.cancel();
        self.state = BoxState::Idle;
        self.choose(record)
    }

    /// Reveals another window of matches.
    ///
    /// Ignored unless the result list is visible. Returns true if more became visible.
    pub fn on_request_more(&mut self) -> bool {
        if self.state != BoxState::ResultsOpen {
            return false;
        }
        self.reveal.reveal_more(self.matches.len())
    }

    /// Handles a click outside the box: hides results, keeping text and any pending search.
    pub fn on_blur_outside(&mut self) {
        self.state = BoxState::Idle;
    }

    /// Handles focus.
    ///
    /// With a search still pending the box goes back to typing and opens once it runs;
    /// otherwise the previous results reopen if there are any.
    pub fn on_focus(&mut self) {
        if self.state != BoxState::Idle {
            return;
        }
        if self.debounce.is_pending() {
            self.state = BoxState::Typing;
        } else if !self.matches.is_empty() {
            self.state = BoxState::ResultsOpen;
        }
    }

    /// Re-runs the current search against a changed record set.
    ///
    /// Only acts when the result list is visible. Returns true if a search ran.
    pub fn refresh(&mut self, store: &TopicStore) -> bool {
        if !self.sync_records(store) || self.state != BoxState::ResultsOpen {
            return false;
        }
        let text = self.query.clone();
        self.run_search(&text, store);
        true
    }

    /// Releases the pending search. Called when the owning session ends.
    pub fn dispose(&mut self) {
        self.debounce.cancel();
        self.state = BoxState::Idle;
    }

    /// Records `record` as the choice and puts its text in the box.
    fn choose(&mut self, record: SearchRecord) -> SearchRecord {
        debug!(key = record.key, text = %record.text, "topic chosen");
        self.query.clone_from(&record.text);
        self.selection = Some(record.clone());
        record
    }

    /// Searches for `text` and resets the reveal window.
    fn run_search(&mut self, text: &str, store: &TopicStore) {
        self.sync_records(store);
        self.matches = self.matcher.search(text);
        self.reveal.reset(self.matches.len());
    }
}
