use std::time::Duration;

use pretty_assertions::assert_eq;
use search_box_engine::{
    FailureKind, ReqwestSearchClient, SearchClient, SearchHit, SearchOutcome, SearchSettings,
};
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestSearchClient {
    client_with(server, SearchSettings::default())
}

fn client_with(server: &MockServer, settings: SearchSettings) -> ReqwestSearchClient {
    ReqwestSearchClient::new(SearchSettings {
        base_url: server.uri(),
        ..settings
    })
    .expect("valid settings")
}

#[tokio::test]
async fn posts_raw_query_as_plain_text_and_decodes_pairs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .and(header("content-type", "text/plain; charset=utf-8"))
        .and(body_string("linear interpolation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([["/a/b/c.txt", "c.txt"]])))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .search("linear interpolation")
        .await
        .expect("search ok");

    assert_eq!(
        outcome,
        SearchOutcome::Matches(vec![SearchHit {
            full_identifier: "/a/b/c.txt".to_string(),
            label: "c.txt".to_string(),
        }])
    );
}

#[tokio::test]
async fn blank_query_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.search("").await, Ok(SearchOutcome::Cleared));
    assert_eq!(client.search("  \t\n").await, Ok(SearchOutcome::Cleared));
}

#[tokio::test]
async fn empty_array_is_no_matches_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let outcome = client_for(&server).search("zzz").await;

    assert_eq!(outcome, Ok(SearchOutcome::NoMatches));
}

#[tokio::test]
async fn server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("500"))
        .mount(&server)
        .await;

    let err = client_for(&server).search("abc").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("400: not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).search("abc").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([["/long/path", "path"]])))
        .mount(&server)
        .await;

    let settings = SearchSettings {
        max_response_bytes: 8,
        ..SearchSettings::default()
    };
    let err = client_with(&server, settings).search("abc").await.unwrap_err();

    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 8, .. }
    ));
}

#[tokio::test]
async fn every_row_of_the_answer_is_kept() {
    let server = MockServer::start().await;
    let rows: Vec<_> = (0..25).map(|i| json!([format!("/d/{i}"), format!("{i}")])).collect();
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(&server)
        .await;

    let outcome = client_for(&server).search("many").await.expect("search ok");

    assert_eq!(outcome.hit_count(), 25);
}

#[tokio::test]
async fn optional_request_timeout_is_enforced_when_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = SearchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..SearchSettings::default()
    };
    let err = client_with(&server, settings).search("slow").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let settings = SearchSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        ..SearchSettings::default()
    };
    let client = ReqwestSearchClient::new(settings).expect("valid settings");

    let err = client.search("abc").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
}
