//! Error types for topic sources.

use thiserror::Error;
use tokio::task::JoinError;
use topo_tree::TreeError;

/// Errors from fetching topics.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The topic document could not be read or parsed.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// An HTTP request failed or returned an error status.
    #[error("failed to fetch topics from {url}: {source}")]
    Http {
        /// Requested URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// An HTTP response body was not a topic document.
    #[error("invalid topics from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying error.
        #[source]
        source: TreeError,
    },

    /// A background task running the fetch failed.
    #[error("topic fetch task failed: {0}")]
    Task(#[from] JoinError),

    /// The source reported itself unavailable.
    #[error("topics unavailable: {0}")]
    Unavailable(String),
}
