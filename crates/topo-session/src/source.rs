//! Where topic trees come from.
//!
//! A [`TopicSource`] produces the whole topic forest in one call. The session runs it on
//! a background task, so implementations may block on the network or the filesystem.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use reqwest::Client;
use tokio::{task, time};
use topo_tree::{TopicNode, load_topics_file, load_topics_value};
use tracing::debug;

use crate::SourceError;

/// A provider of topic trees.
#[async_trait]
pub trait TopicSource: Send + Sync {
    /// Human-readable description of where topics come from.
    fn describe(&self) -> String;

    /// Fetches the complete topic forest.
    async fn get_topics(&self) -> Result<Vec<TopicNode>, SourceError>;
}

/// Reads topics from a JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileTopicSource {
    /// Path to the JSON document.
    path: PathBuf,
}

impl FileTopicSource {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TopicSource for FileTopicSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn get_topics(&self) -> Result<Vec<TopicNode>, SourceError> {
        let path = self.path.clone();
        debug!(path = %path.display(), "reading topics");
        let topics = task::spawn_blocking(move || load_topics_file(&path)).await??;
        Ok(topics)
    }
}

/// Fetches topics from an HTTP service exposing `GET {base}/topics`.
#[derive(Debug, Clone)]
pub struct HttpTopicSource {
    /// Shared HTTP client.
    client: Client,
    /// Service base URL without a trailing slash.
    base_url: String,
}

impl HttpTopicSource {
    /// Creates a source for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a source using an existing client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Returns the URL topics are fetched from.
    pub fn topics_url(&self) -> String {
        format!("{}/topics", self.base_url)
    }
}

#[async_trait]
impl TopicSource for HttpTopicSource {
    fn describe(&self) -> String {
        self.topics_url()
    }

    async fn get_topics(&self) -> Result<Vec<TopicNode>, SourceError> {
        let url = self.topics_url();
        debug!(%url, "fetching topics");
        let http = |source| SourceError::Http {
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(http)?;
        let body = response.json::<serde_json::Value>().await.map_err(http)?;
        load_topics_value(body).map_err(|source| SourceError::Decode { url, source })
    }
}

/// Serves a fixed result, optionally after a delay.
#[derive(Debug, Clone)]
pub struct StaticTopicSource {
    /// Result handed out on every fetch.
    result: Result<Vec<TopicNode>, String>,
    /// Simulated latency.
    delay: Duration,
}

impl StaticTopicSource {
    /// Serves `topics` immediately.
    pub fn new(topics: Vec<TopicNode>) -> Self {
        Self {
            result: Ok(topics),
            delay: Duration::ZERO,
        }
    }

    /// Fails every fetch with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
            delay: Duration::ZERO,
        }
    }

    /// Delays every fetch by `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl TopicSource for StaticTopicSource {
    fn describe(&self) -> String {
        "static topics".to_string()
    }

    async fn get_topics(&self) -> Result<Vec<TopicNode>, SourceError> {
        if !self.delay.is_zero() {
            time::sleep(self.delay).await;
        }
        self.result.clone().map_err(SourceError::Unavailable)
    }
}
