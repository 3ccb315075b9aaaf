//! End-to-end session over a topics file on disk.

#![allow(clippy::tests_outside_test_module)]

use std::{fs, sync::Arc, time::Duration};

use tempfile::TempDir;
use tokio::sync::mpsc;
use topo_match::Profile;
use topo_session::{
    FileTopicSource, ResultsView, SearchBox, SearchSession, TopicStatus, UiEvent, UiSink,
};
use topo_tree::SearchRecord;

/// Collects commits and the final status.
#[derive(Default)]
struct Collect {
    /// Committed topic texts.
    committed: Vec<String>,
    /// Last status reported.
    status: Option<TopicStatus>,
}

impl UiSink for Collect {
    fn render(&mut self, _view: &ResultsView<'_>) {}

    fn committed(&mut self, record: &SearchRecord) {
        self.committed.push(record.text.clone());
    }

    fn topics_changed(&mut self, status: &TopicStatus) {
        self.status = Some(status.clone());
    }
}

const TOPICS: &str = r#"[
  {"topic_id": 1, "path": "arts", "is_visible": true, "priority": 1, "topics": [
    {"topic_id": 2, "path": "arts/film", "topics": [
      {"topic_id": 3, "path": "arts/film/film noir"}
    ]},
    {"topic_id": 4, "path": "arts/music"}
  ]}
]"#;

#[tokio::test]
async fn commit_after_topics_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("topics.json");
    fs::write(&path, TOPICS).unwrap();

    let search_box = SearchBox::from_profile(Profile::Breadcrumb);
    let mut session = SearchSession::new(search_box, Arc::new(FileTopicSource::new(&path)));
    let mut ui = Collect::default();
    let (tx, rx) = mpsc::channel(8);

    let driver = async move {
        // Give the fetch a moment to land.
        tokio::time::sleep(Duration::from_millis(200)).await;
        tx.send(UiEvent::InputChanged("noir".into())).await.unwrap();
        tx.send(UiEvent::Commit).await.unwrap();
    };
    tokio::join!(session.run(rx, &mut ui), driver);

    assert_eq!(ui.status, Some(TopicStatus::Ready));
    assert_eq!(ui.committed, vec!["arts/film/film noir".to_string()]);
    assert_eq!(session.store().records().len(), 4);
}

#[tokio::test]
async fn missing_file_reports_unavailable() {
    let dir = TempDir::new().unwrap();
    let source = FileTopicSource::new(dir.path().join("nope.json"));
    let mut session = SearchSession::new(SearchBox::from_profile(Profile::Simple), Arc::new(source));
    let mut ui = Collect::default();
    let (tx, rx) = mpsc::channel(8);

    let driver = async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        tx.send(UiEvent::InputChanged("film".into())).await.unwrap();
        tx.send(UiEvent::Commit).await.unwrap();
    };
    tokio::join!(session.run(rx, &mut ui), driver);

    assert!(matches!(ui.status, Some(TopicStatus::Unavailable(_))));
    assert!(ui.committed.is_empty());
}
