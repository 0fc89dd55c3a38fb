// tests/fetch.rs
use std::time::Duration;

use namnsdag::config::FetchOptions;
use namnsdag::core::{DocumentSource, WikiClient};
use namnsdag::Error;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TITLE: &str = "Lista_över_namnsdagar_i_Sverige_i_datumordning";

fn client(server: &MockServer) -> WikiClient {
    WikiClient::new(&FetchOptions {
        api_url: format!("{}/w/api.php", server.uri()),
        timeout: Duration::from_secs(5),
        ..FetchOptions::default()
    })
}

/// ureq blocks, so run it off the async runtime.
async fn fetch(server: &MockServer) -> Result<String, Error> {
    let client = client(server);
    tokio::task::spawn_blocking(move || client.fetch_document(TITLE))
        .await
        .expect("fetch task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn returns_rendered_html_from_parse_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "parse"))
        .and(query_param("page", TITLE))
        .and(query_param("prop", "text"))
        .and(query_param("format", "json"))
        .and(header("user-agent", "swedish-nameday-api/1.0 (https://example.com)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "parse": {
                "title": "Lista över namnsdagar i Sverige i datumordning",
                "pageid": 123,
                "text": { "*": "<table class=\"wikitable\"></table>" }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let html = fetch(&server).await.unwrap();
    assert_eq!(html, "<table class=\"wikitable\"></table>");
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_is_fetch_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = fetch(&server).await.unwrap_err();
    assert!(matches!(err, Error::FetchFailed(ref m) if m.contains("503")), "{err}");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_text_field_is_fetch_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "batchcomplete": "" })))
        .mount(&server)
        .await;

    assert!(matches!(fetch(&server).await, Err(Error::FetchFailed(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn api_error_envelope_is_fetch_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "code": "missingtitle", "info": "The page you specified doesn't exist." }
        })))
        .mount(&server)
        .await;

    let err = fetch(&server).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "fetch failed: API error missingtitle: The page you specified doesn't exist."
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn non_json_body_is_fetch_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    assert!(matches!(fetch(&server).await, Err(Error::FetchFailed(_))));
}

#[test]
fn connection_refused_is_fetch_failed() {
    // nothing listens on port 9 (discard) in the test environment
    let client = WikiClient::new(&FetchOptions {
        api_url: "http://127.0.0.1:9/w/api.php".into(),
        timeout: Duration::from_secs(2),
        ..FetchOptions::default()
    });
    assert!(matches!(client.fetch_document(TITLE), Err(Error::FetchFailed(_))));
}
