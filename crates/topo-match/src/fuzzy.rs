//! Fuzzy scoring with Levenshtein prefix automata.
//!
//! A query is compiled into a prefix DFA that reports the smallest edit distance between
//! the query and any prefix of the text it is fed. Feeding the DFA the record text from
//! every non-separator position approximates a substring search, with matches further
//! into a path segment paying for their offset:
//!
//! ```text
//! score = edits / query_chars + offset_in_segment / location_distance
//! ```
//!
//! Lower is better; a record matches when its best score is within the threshold.

use levenshtein_automata::{DFA, Distance, LevenshteinAutomatonBuilder, SINK_STATE};

use crate::{MatcherConfig, index::IndexEntry, params::MAX_EDITS};

/// Holds one automaton builder per supported edit distance.
///
/// Builders are expensive to construct, so they are created once per matcher.
pub struct FuzzyScorer {
    /// Builders indexed by maximum edit distance.
    builders: Vec<LevenshteinAutomatonBuilder>,
}

impl FuzzyScorer {
    /// Creates builders for edit distances `0..=MAX_EDITS`.
    pub fn new() -> Self {
        let builders = (0..=MAX_EDITS)
            .map(|distance| LevenshteinAutomatonBuilder::new(distance, true))
            .collect();
        Self { builders }
    }

    /// Compiles a normalized query into a pattern.
    ///
    /// The query is lower-cased and truncated to `max_pattern_length` characters, at
    /// least one. Returns `None` when nothing is left to match.
    pub fn compile(&self, query: &str, config: &MatcherConfig) -> Option<Pattern> {
        let normalized: String = query
            .trim()
            .to_lowercase()
            .chars()
            .take(config.max_pattern_length.max(1))
            .collect();
        let chars = normalized.chars().count();
        if chars == 0 {
            return None;
        }

        let max_edits = config.max_edits(chars);
        let builder = &self.builders[usize::from(max_edits)];
        Some(Pattern {
            dfa: builder.build_prefix_dfa(&normalized),
            chars,
            max_edits,
            threshold: config.threshold,
            location_distance: config.location_distance.max(1),
        })
    }
}

/// A compiled fuzzy query.
pub struct Pattern {
    /// Prefix automaton for the normalized query.
    dfa: DFA,
    /// Query length in characters.
    chars: usize,
    /// Largest edit distance the automaton accepts.
    max_edits: u8,
    /// Maximum accepted score.
    threshold: f64,
    /// Offset penalty divisor.
    location_distance: usize,
}

impl Pattern {
    /// Returns the best score of this pattern against an index entry, if it matches.
    pub fn score(&self, entry: &IndexEntry) -> Option<f64> {
        let mut best: Option<f64> = None;

        for start in &entry.starts {
            let penalty = start.offset_in_segment as f64 / self.location_distance as f64;
            if best.is_some_and(|b| penalty >= b) {
                continue;
            }

            let Some(edits) = self.edits(&entry.folded[start.byte..]) else {
                continue;
            };
            let score = f64::from(edits) / self.chars as f64 + penalty;
            if best.is_none_or(|b| score < b) {
                best = Some(score);
            }
        }

        best.filter(|score| *score <= self.threshold + f64::EPSILON)
    }

    /// Runs the automaton over `text`, returning the edit distance to its closest prefix.
    fn edits(&self, text: &str) -> Option<u8> {
        let mut state = self.dfa.initial_state();
        for &byte in text.as_bytes() {
            state = self.dfa.transition(state, byte);
            if state == SINK_STATE {
                return None;
            }
        }
        match self.dfa.distance(state) {
            Distance::Exact(d) if d <= self.max_edits => Some(d),
            _ => None,
        }
    }
}
