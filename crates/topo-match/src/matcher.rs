//! The [`Matcher`]: an index plus the rules for querying it.

use std::time::Instant;

use topo_tree::SearchRecord;
use tracing::debug;

use crate::{
    MatcherConfig, Query, breadcrumb::match_prefix, fuzzy::FuzzyScorer, index::TopicIndex,
};

/// Matches queries against an indexed set of topic records.
///
/// The index is tagged with the generation of the record set it was built from. Owners
/// compare that generation against their source of truth and call [`Matcher::reindex`]
/// before searching whenever it differs.
pub struct Matcher {
    /// Matching parameters.
    config: MatcherConfig,
    /// Automaton builders for fuzzy mode.
    scorer: FuzzyScorer,
    /// Current index.
    index: TopicIndex,
}

impl Matcher {
    /// Creates a matcher with an empty index at generation 0.
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            scorer: FuzzyScorer::new(),
            index: TopicIndex::default(),
        }
    }

    /// Creates a matcher indexing `records` at generation 0.
    pub fn with_records(config: MatcherConfig, records: Vec<SearchRecord>) -> Self {
        let mut matcher = Self::new(config);
        matcher.reindex(records, 0);
        matcher
    }

    /// Returns the matching parameters.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Returns the current index.
    pub fn index(&self) -> &TopicIndex {
        &self.index
    }

    /// Returns the generation of the indexed record set.
    pub fn generation(&self) -> u64 {
        self.index.generation()
    }

    /// Returns true if the index was built from a different generation.
    pub fn is_stale(&self, generation: u64) -> bool {
        self.index.generation() != generation
    }

    /// Replaces the indexed records.
    pub fn reindex(&mut self, records: Vec<SearchRecord>, generation: u64) {
        let started = Instant::now();
        self.index = TopicIndex::build(records, generation);
        debug!(
            records = self.index.len(),
            generation,
            elapsed_us = started.elapsed().as_micros() as u64,
            "rebuilt topic index"
        );
    }

    /// Parses `input` according to this matcher's configuration.
    pub fn parse(&self, input: &str) -> Query {
        Query::parse(input, self.config.breadcrumbs)
    }

    /// Searches the index, returning matching records in rank order.
    ///
    /// Never fails: empty or unmatched queries produce an empty list.
    pub fn search(&self, input: &str) -> Vec<SearchRecord> {
        self.search_query(&self.parse(input))
    }

    /// Searches the index with an already classified query.
    pub fn search_query(&self, query: &Query) -> Vec<SearchRecord> {
        let started = Instant::now();
        let records = self.index.records();

        let ranked: Vec<usize> = match query {
            Query::Empty => Vec::new(),
            Query::Breadcrumb { prefix, .. } => match_prefix(records, prefix),
            Query::Fuzzy(text) => self.fuzzy(text),
        };

        debug!(
            mode = query.mode(),
            matches = ranked.len(),
            records = records.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "search"
        );

        ranked.into_iter().map(|idx| records[idx].clone()).collect()
    }

    /// Ranks records by fuzzy score, best first, ties in input order.
    fn fuzzy(&self, text: &str) -> Vec<usize> {
        let Some(pattern) = self.scorer.compile(text, &self.config) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, f64)> = (0..self.index.len())
            .filter_map(|idx| pattern.score(self.index.entry(idx)).map(|s| (idx, s)))
            .collect();
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

/// Searches `records` for `query` without keeping an index around.
pub fn search(records: &[SearchRecord], query: &str, config: &MatcherConfig) -> Vec<SearchRecord> {
    Matcher::with_records(config.clone(), records.to_vec()).search(query)
}
