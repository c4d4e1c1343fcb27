//! Integration tests for arxiv-feed
//!
//! These tests run the client against a local mock HTTP server, so the whole
//! path from query parameters to parsed entries goes over real HTTP.

use arxiv_feed::config::{get_config, ClientConfig};
use arxiv_feed::transport::{HttpTransport, Transport};
use arxiv_feed::{parse_feed, ArxivClient, ClientError, SearchRequest, SortBy, SortOrder, TransportError};
use mockito::Matcher;
use std::sync::Arc;
use std::time::Duration;

const SAMPLE_RESPONSE: &str = include_str!("fixtures/sample_response.atom");

const EMPTY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: search_query=id:2101.00001</title>
</feed>"#;

fn client_for(server: &mockito::Server) -> ArxivClient {
    let config = ClientConfig {
        base_url: format!("{}/api/query", server.url()),
        timeout_secs: 5,
        ..ClientConfig::default()
    };
    ArxivClient::from_config(&config).expect("client should build")
}

#[test]
fn test_parse_fixture() {
    let entries = parse_feed(SAMPLE_RESPONSE).unwrap();
    assert_eq!(entries.len(), 2);

    let first = &entries[0];
    assert_eq!(first.id.as_deref(), Some("2101.00001v1"));
    assert_eq!(
        first.raw_id.as_deref(),
        Some("http://arxiv.org/abs/2101.00001v1")
    );
    assert_eq!(first.title, "Quantum Foo: Entanglement in\n  Small Systems");
    assert!(first.summary.starts_with("We study quantum foo"));
    assert!(first.summary.ends_with("entanglement survives."));
    assert_eq!(first.published.as_deref(), Some("2021-01-01T12:00:00Z"));
    assert_eq!(first.authors, vec!["Jane Doe", "John Roe"]);
    assert_eq!(
        first.pdf_url.as_deref(),
        Some("http://arxiv.org/pdf/2101.00001v1")
    );
    assert_eq!(first.categories, vec!["quant-ph", "cond-mat.str-el"]);
    assert_eq!(first.primary_category.as_deref(), Some("quant-ph"));

    let second = &entries[1];
    assert_eq!(second.id.as_deref(), Some("hep-th/9901001v2"));
    assert_eq!(second.base_id(), Some("hep-th/9901001"));
    assert_eq!(second.version(), Some(2));
    // Matched by title alone, no media type on the link
    assert_eq!(
        second.pdf_url.as_deref(),
        Some("http://arxiv.org/pdf/hep-th/9901001v2")
    );
}

#[test]
fn test_entries_serialize_to_json() {
    let entries = parse_feed(SAMPLE_RESPONSE).unwrap();
    let json = serde_json::to_value(&entries[1]).unwrap();
    assert_eq!(json["id"], "hep-th/9901001v2");
    assert_eq!(json["authors"][0], "A. Physicist");
    assert_eq!(json["categories"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_search_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search_query".into(), "all:quantum foo".into()),
            Matcher::UrlEncoded("start".into(), "0".into()),
            Matcher::UrlEncoded("max_results".into(), "2".into()),
            Matcher::UrlEncoded("sortBy".into(), "submittedDate".into()),
            Matcher::UrlEncoded("sortOrder".into(), "descending".into()),
        ]))
        .match_header("accept", "application/atom+xml")
        .with_status(200)
        .with_header("content-type", "application/atom+xml; charset=utf-8")
        .with_body(SAMPLE_RESPONSE)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = SearchRequest::new("all:quantum foo")
        .max_results(2)
        .sort_by(SortBy::SubmittedDate)
        .sort_order(SortOrder::Descending);
    let entries = client.search(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id.as_deref(), Some("2101.00001v1"));
    assert_eq!(entries[1].id.as_deref(), Some("hep-th/9901001v2"));
}

#[tokio::test]
async fn test_get_over_http_empty_feed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search_query".into(), "id:2101.00001".into()),
            Matcher::UrlEncoded("max_results".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(EMPTY_FEED)
        .create_async()
        .await;

    let client = client_for(&server);
    let entry = client.get("2101.00001").await.unwrap();

    mock.assert_async().await;
    assert!(entry.is_none());
}

#[tokio::test]
async fn test_error_status_is_transport_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .search(&SearchRequest::new("all:electron"))
        .await
        .unwrap_err();

    match err {
        ClientError::Transport(TransportError::Status { status, url }) => {
            assert_eq!(status, 503);
            assert!(url.contains("search_query=all%3Aelectron"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_html_body_is_malformed_document() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html><body><p>Rate limited<br></body></html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .search(&SearchRequest::new("all:electron"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MalformedDocument(_)));
}

#[tokio::test]
async fn test_injected_transport() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::Any)
        .match_header("user-agent", "integration-tests/1.0")
        .with_status(200)
        .with_body(SAMPLE_RESPONSE)
        .create_async()
        .await;

    let transport: Arc<dyn Transport> =
        Arc::new(HttpTransport::with_user_agent("integration-tests/1.0").unwrap());
    let client = ArxivClient::with_transport(transport)
        .base_url(format!("{}/api/query", server.url()))
        .timeout(Duration::from_secs(5));

    let entry = client.get("2101.00001").await.unwrap().unwrap();
    mock.assert_async().await;
    assert_eq!(entry.title, "Quantum Foo: Entanglement in\n  Small Systems");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind and drop a listener so the port is very likely closed
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ArxivClient::new()
        .unwrap()
        .base_url(format!("http://127.0.0.1:{}/api/query", port))
        .timeout(Duration::from_secs(2));

    let err = client.get("2101.00001").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[test]
fn test_environment_overrides() {
    std::env::set_var("ARXIV_FEED_BASE_URL", "http://localhost:9999/api/query");
    std::env::set_var("ARXIV_FEED_TIMEOUT_SECS", "3");

    let config = get_config();

    std::env::remove_var("ARXIV_FEED_BASE_URL");
    std::env::remove_var("ARXIV_FEED_TIMEOUT_SECS");

    let config = config.unwrap();
    assert_eq!(config.base_url, "http://localhost:9999/api/query");
    assert_eq!(config.timeout_secs, 3);
    assert_eq!(config.user_agent, ClientConfig::default().user_agent);
}
