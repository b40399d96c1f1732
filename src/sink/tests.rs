//! Tests for the sink module

use super::*;
use crate::error::Error;
use crate::types::Record;
use serde_json::json;
use tempfile::TempDir;

/// In-memory record source for exercising sinks without HTTP
struct VecSource {
    items: std::vec::IntoIter<crate::error::Result<Record>>,
    failed: bool,
}

impl VecSource {
    fn new(items: Vec<crate::error::Result<Record>>) -> Self {
        Self {
            items: items.into_iter(),
            failed: false,
        }
    }

    fn ok(records: Vec<Record>) -> Self {
        Self::new(records.into_iter().map(Ok).collect())
    }
}

#[async_trait::async_trait]
impl RecordSource for VecSource {
    async fn next_record(&mut self) -> Option<crate::error::Result<Record>> {
        if self.failed {
            return None;
        }
        let next = self.items.next();
        if matches!(next, Some(Err(_))) {
            self.failed = true;
        }
        next
    }
}

async fn read_staged(sink: &FilesystemSink, table: &str) -> String {
    tokio::fs::read_to_string(sink.table_path(table)).await.unwrap()
}

#[tokio::test]
async fn test_filesystem_sink_writes_ndjson() {
    let dir = TempDir::new().unwrap();
    let sink = FilesystemSink::new(dir.path(), "analytics");

    let mut source = VecSource::ok(vec![json!({"id": 1}), json!({"id": 2})]);
    let summary = sink
        .load("orders", WriteDisposition::Replace, &mut source)
        .await
        .unwrap();

    assert_eq!(summary, LoadSummary { table: "orders".to_string(), rows: 2 });

    let staged = read_staged(&sink, "orders").await;
    assert_eq!(staged, "{\"id\":1}\n{\"id\":2}\n");
}

#[tokio::test]
async fn test_replace_truncates_previous_contents() {
    let dir = TempDir::new().unwrap();
    let sink = FilesystemSink::new(dir.path(), "analytics");

    let mut first = VecSource::ok(vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]);
    sink.load("orders", WriteDisposition::Replace, &mut first)
        .await
        .unwrap();

    let mut second = VecSource::ok(vec![json!({"id": 9})]);
    sink.load("orders", WriteDisposition::Replace, &mut second)
        .await
        .unwrap();

    let staged = read_staged(&sink, "orders").await;
    assert_eq!(staged, "{\"id\":9}\n");
}

#[tokio::test]
async fn test_identical_loads_are_idempotent() {
    let dir = TempDir::new().unwrap();
    let sink = FilesystemSink::new(dir.path(), "analytics");

    let records = vec![json!({"id": 1, "v": "a"}), json!({"id": 2, "v": "b"})];

    let mut first = VecSource::ok(records.clone());
    sink.load("orders", WriteDisposition::Replace, &mut first)
        .await
        .unwrap();
    let after_first = read_staged(&sink, "orders").await;

    let mut second = VecSource::ok(records);
    sink.load("orders", WriteDisposition::Replace, &mut second)
        .await
        .unwrap();
    let after_second = read_staged(&sink, "orders").await;

    assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn test_source_error_propagates_unwrapped() {
    let dir = TempDir::new().unwrap();
    let sink = FilesystemSink::new(dir.path(), "analytics");

    let cause = serde_json::from_str::<Record>("{oops").unwrap_err();
    let mut source = VecSource::new(vec![
        Ok(json!({"id": 1})),
        Err(Error::Decode { line: 2, source: cause }),
    ]);

    let err = sink
        .load("orders", WriteDisposition::Replace, &mut source)
        .await
        .unwrap_err();

    // The decode error surfaces as-is, not wrapped as a sink error.
    assert!(matches!(err, Error::Decode { line: 2, .. }));

    // Records yielded before the failure are left in the staging file;
    // the next replace run overwrites them.
    let staged = read_staged(&sink, "orders").await;
    assert_eq!(staged, "{\"id\":1}\n");
}

#[tokio::test]
async fn test_empty_source_stages_empty_file() {
    let dir = TempDir::new().unwrap();
    let sink = FilesystemSink::new(dir.path(), "analytics");

    let mut source = VecSource::ok(vec![]);
    let summary = sink
        .load("orders", WriteDisposition::Replace, &mut source)
        .await
        .unwrap();

    assert_eq!(summary.rows, 0);
    assert_eq!(read_staged(&sink, "orders").await, "");
}

#[tokio::test]
async fn test_tables_are_scoped_by_dataset() {
    let dir = TempDir::new().unwrap();
    let sink = FilesystemSink::new(dir.path(), "sales");

    assert_eq!(
        sink.table_path("orders"),
        dir.path().join("sales").join("orders.jsonl")
    );
}
