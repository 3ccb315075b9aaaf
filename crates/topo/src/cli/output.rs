//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use serde::Serialize;
pub use topo_highlight::{breadcrumb, dim, header, subheader, success, warning};
use topo_tree::SearchRecord;

/// JSON output for `topo search --json`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The query as typed.
    query: &'a str,
    /// Matching mode the query was parsed into.
    mode: &'a str,
    /// Number of matches.
    total: usize,
    /// Number of matches included in `results`.
    shown: usize,
    /// Whether matches were left out.
    has_more: bool,
    /// Shown matches, best first.
    results: &'a [SearchRecord],
}

/// Formats one numbered result line. `index` is zero-based; the printed number is not.
pub fn result_line(index: usize, record: &SearchRecord) -> String {
    format!(
        "{:>3}. {} {}",
        index + 1,
        breadcrumb(&record.breadcrumb),
        dim(&format!("#{}", record.key))
    )
}

/// Prints the shown results followed by a hint when more are available.
pub fn print_results(shown: &[SearchRecord], total: usize) {
    if shown.is_empty() {
        println!("{}", dim("No results."));
        return;
    }
    for (i, record) in shown.iter().enumerate() {
        println!("{}", result_line(i, record));
    }
    if total > shown.len() {
        println!("{}", more_hint(total - shown.len()));
    }
}

/// Describes how many results are hidden.
pub fn more_hint(remaining: usize) -> String {
    dim(&format!("  … {remaining} more"))
}

/// Prints search results as pretty JSON.
pub fn print_results_json(
    query: &str,
    mode: &str,
    shown: &[SearchRecord],
    total: usize,
) -> ExitCode {
    let output = JsonSearchOutput {
        query,
        mode,
        total,
        shown: shown.len(),
        has_more: total > shown.len(),
        results: shown,
    };
    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
