//! Error types for topic loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a topic tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Failed to read a topics file.
    #[error("failed to read topics file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Topic JSON did not match the expected shape.
    #[error("invalid topic JSON{}: {source}", location(path.as_ref()))]
    Json {
        /// File the JSON came from, if any.
        path: Option<PathBuf>,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Formats an optional source path for error messages.
fn location(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}
