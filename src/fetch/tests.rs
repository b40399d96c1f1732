//! Tests for the streaming fetch module

use super::*;
use crate::request;
use crate::types::{LoadMode, Record};
use crate::window::LoadWindow;
use bytes::Bytes;
use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn in_memory(chunks: Vec<&'static str>) -> RecordStream {
    let items: Vec<reqwest::Result<Bytes>> =
        chunks.into_iter().map(|c| Ok(Bytes::from(c))).collect();
    RecordStream::new(futures::stream::iter(items))
}

async fn drain(stream: &mut RecordStream) -> (Vec<Record>, Option<crate::error::Error>) {
    let mut records = Vec::new();
    while let Some(next) = stream.next_record().await {
        match next {
            Ok(record) => records.push(record),
            Err(e) => return (records, Some(e)),
        }
    }
    (records, None)
}

// ============================================================================
// Line framing
// ============================================================================

#[tokio::test]
async fn test_stream_yields_one_record_per_line() {
    let mut stream = in_memory(vec!["{\"id\":1}\n{\"id\":2}\n{\"id\":3}\n"]);
    let (records, err) = drain(&mut stream).await;

    assert!(err.is_none());
    assert_eq!(records, vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]);
}

#[tokio::test]
async fn test_stream_reassembles_lines_split_across_chunks() {
    let mut stream = in_memory(vec!["{\"id\":1,\"na", "me\":\"a\"}\n{\"i", "d\":2}\n"]);
    let (records, err) = drain(&mut stream).await;

    assert!(err.is_none());
    assert_eq!(records, vec![json!({"id": 1, "name": "a"}), json!({"id": 2})]);
}

#[tokio::test]
async fn test_stream_skips_blank_lines() {
    let mut stream = in_memory(vec!["{\"id\":1}\n\n\r\n{\"id\":2}\n"]);
    let (records, err) = drain(&mut stream).await;

    assert!(err.is_none());
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_stream_handles_missing_final_newline() {
    let mut stream = in_memory(vec!["{\"id\":1}\n{\"id\":2}"]);
    let (records, err) = drain(&mut stream).await;

    assert!(err.is_none());
    assert_eq!(records, vec![json!({"id": 1}), json!({"id": 2})]);
}

#[tokio::test]
async fn test_stream_handles_crlf_line_endings() {
    let mut stream = in_memory(vec!["{\"id\":1}\r\n{\"id\":2}\r\n"]);
    let (records, err) = drain(&mut stream).await;

    assert!(err.is_none());
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_empty_body_yields_nothing() {
    let mut stream = in_memory(vec![]);
    assert!(stream.next_record().await.is_none());
    // Terminated streams stay terminated.
    assert!(stream.next_record().await.is_none());
}

// ============================================================================
// Decode failures
// ============================================================================

#[tokio::test]
async fn test_malformed_line_yields_preceding_then_fails() {
    let mut stream = in_memory(vec!["{\"id\":1}\n{\"id\":2}\nnot json at all\n{\"id\":4}\n"]);
    let (records, err) = drain(&mut stream).await;

    assert_eq!(records, vec![json!({"id": 1}), json!({"id": 2})]);
    match err {
        Some(crate::error::Error::Decode { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_stream_is_terminated_after_decode_error() {
    let mut stream = in_memory(vec!["garbage\n{\"id\":1}\n"]);

    assert!(matches!(
        stream.next_record().await,
        Some(Err(crate::error::Error::Decode { line: 1, .. }))
    ));
    // The valid line after the bad one is never yielded.
    assert!(stream.next_record().await.is_none());
}

#[tokio::test]
async fn test_decode_error_line_counts_blanks() {
    let mut stream = in_memory(vec!["{\"id\":1}\n\nboom\n"]);
    let (records, err) = drain(&mut stream).await;

    assert_eq!(records.len(), 1);
    match err {
        Some(crate::error::Error::Decode { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected decode error, got {other:?}"),
    }
}

// ============================================================================
// HTTP behavior
// ============================================================================

fn descriptor(url: &str) -> crate::request::RequestDescriptor {
    let window = LoadWindow {
        mode: LoadMode::Incremental,
        from: Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap(),
        to: Utc.with_ymd_and_hms(2024, 3, 14, 23, 59, 59).unwrap(),
        filter_clause: "1=1".to_string(),
    };
    request::build(url, "user:pass", "orders", &window)
}

#[tokio::test]
async fn test_fetch_streams_ndjson_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("where", "1=1"))
        .and(query_param("from_date", "2024-03-14T00:00:00"))
        .and(query_param("to_date", "2024-03-14T23:59:59"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("{\"id\":1}\n{\"id\":2}\n"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new().unwrap();
    let mut stream = fetcher.fetch(&descriptor(&mock_server.uri())).await.unwrap();
    let (records, err) = drain(&mut stream).await;

    assert!(err.is_none());
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_fetch_fails_on_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new().unwrap();
    let err = fetcher.fetch(&descriptor(&mock_server.uri())).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503 }));
}

#[tokio::test]
async fn test_fetch_fails_on_client_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new().unwrap();
    let err = fetcher.fetch(&descriptor(&mock_server.uri())).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 401 }));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_http_config_default() {
    let config = HttpConfig::default();
    assert_eq!(config.connect_timeout, std::time::Duration::from_secs(10));
    assert_eq!(config.read_timeout, std::time::Duration::from_secs(30));
    assert!(config.user_agent.starts_with("restload/"));
}

#[test]
fn test_http_config_builder() {
    let config = HttpConfig::builder()
        .connect_timeout(std::time::Duration::from_secs(5))
        .read_timeout(std::time::Duration::from_secs(120))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.connect_timeout, std::time::Duration::from_secs(5));
    assert_eq!(config.read_timeout, std::time::Duration::from_secs(120));
    assert_eq!(config.user_agent, "test-agent/1.0");
}
