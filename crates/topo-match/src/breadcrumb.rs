//! Breadcrumb-prefix matching.

use topo_tree::SearchRecord;

/// Returns indices of records below `prefix`, deepest first.
///
/// A record matches when its breadcrumb is longer than `prefix` and starts with it.
/// Segments are compared exactly and case-sensitively. Records of equal depth keep
/// their input order.
pub fn match_prefix(records: &[SearchRecord], prefix: &[String]) -> Vec<usize> {
    let mut matches: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.depth() > prefix.len() && record.has_prefix(prefix))
        .map(|(idx, _)| idx)
        .collect();

    // sort_by is stable, so ties stay in pre-order
    matches.sort_by(|a, b| records[*b].depth().cmp(&records[*a].depth()));
    matches
}
