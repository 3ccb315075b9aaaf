//! Precomputed per-record search data.

use topo_tree::SearchRecord;

/// A position where a fuzzy match may begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MatchStart {
    /// Byte offset into the folded text.
    pub byte: usize,
    /// Characters between the start of the enclosing path segment and this position.
    pub offset_in_segment: usize,
}

/// Search data for a single record.
#[derive(Debug, Clone)]
pub(crate) struct IndexEntry {
    /// Lower-cased record text.
    pub folded: String,
    /// Match starts in ascending byte order.
    pub starts: Vec<MatchStart>,
}

impl IndexEntry {
    /// Builds the entry for a record.
    pub fn new(record: &SearchRecord) -> Self {
        let folded = record.text.to_lowercase();
        let starts = match_starts(&folded);
        Self { folded, starts }
    }
}

/// Returns true for characters a match never starts on.
fn is_separator(c: char) -> bool {
    c == '/' || c.is_whitespace() || matches!(c, '-' | '_' | '.' | ',' | '(' | ')')
}

/// Finds every position a match may start at, tracking the offset within its path
/// segment.
///
/// Matches may start inside a word; the offset penalty ranks those below word starts.
fn match_starts(text: &str) -> Vec<MatchStart> {
    let mut starts = Vec::new();
    let mut segment_chars = 0;

    for (byte, c) in text.char_indices() {
        if !is_separator(c) {
            starts.push(MatchStart {
                byte,
                offset_in_segment: segment_chars,
            });
        }

        if c == '/' {
            segment_chars = 0;
        } else {
            segment_chars += 1;
        }
    }

    starts
}

/// Records plus their search data, tagged with the generation they were built from.
#[derive(Debug, Clone, Default)]
pub struct TopicIndex {
    /// Indexed records in source order.
    records: Vec<SearchRecord>,
    /// Search data parallel to `records`.
    entries: Vec<IndexEntry>,
    /// Generation of the record set this index was built from.
    generation: u64,
}

impl TopicIndex {
    /// Builds an index over `records`.
    pub fn build(records: Vec<SearchRecord>, generation: u64) -> Self {
        let entries = records.iter().map(IndexEntry::new).collect();
        Self {
            records,
            entries,
            generation,
        }
    }

    /// Returns the indexed records in source order.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Returns the generation this index was built from.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the search data for the record at `idx`.
    pub(crate) fn entry(&self, idx: usize) -> &IndexEntry {
        &self.entries[idx]
    }
}
