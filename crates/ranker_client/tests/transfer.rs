use std::time::Duration;

use pretty_assertions::assert_eq;
use ranker_client::{
    HttpTransferClient, RankQuery, RankedEntry, TransferApi, TransferErrorKind, TransferSettings,
    UploadFile,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_files() -> Vec<UploadFile> {
    vec![
        UploadFile {
            name: "alice.pdf".to_string(),
            bytes: b"%PDF-1.4 alice".to_vec(),
        },
        UploadFile {
            name: "bob.txt".to_string(),
            bytes: b"bob, backend engineer".to_vec(),
        },
    ]
}

fn sample_query() -> RankQuery {
    RankQuery {
        job_title: "Hiring - Data engineer".to_string(),
        job_description: "Data engineer".to_string(),
        created_by: None,
    }
}

fn client_for(server: &MockServer) -> HttpTransferClient {
    HttpTransferClient::new(TransferSettings::new(&server.uri()).expect("settings"))
}

#[tokio::test]
async fn upload_posts_one_multipart_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"user_id\""))
        .and(body_string_contains("filename=\"alice.pdf\""))
        .and(body_string_contains("filename=\"bob.txt\""))
        .and(body_string_contains("%PDF-1.4 alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.upload(&sample_files(), Some("user-1")).await;

    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn upload_failure_carries_server_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "disk full"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .upload(&sample_files(), Some("user-1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, TransferErrorKind::Rejected(500));
    assert_eq!(err.server_message, Some("disk full".to_string()));
}

#[tokio::test]
async fn upload_rejection_without_error_body_has_no_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(413))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.upload(&sample_files(), None).await.unwrap_err();

    assert_eq!(err.kind, TransferErrorKind::Rejected(413));
    assert_eq!(err.server_message, None);
}

#[tokio::test]
async fn rank_sends_the_job_query_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rank"))
        .and(body_json(json!({
            "job_title": "Hiring - Data engineer",
            "job_description": "Data engineer",
            "created_by": null,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entries = client.rank(&sample_query()).await.expect("rank ok");

    assert!(entries.is_empty());
}

#[tokio::test]
async fn rank_parses_entries_in_service_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rank"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ranking_id": "rk-1",
            "results": [
                {"resume": {"id": "r9", "filename": "alice.pdf"}, "score": 0.873},
                {"resume": {"id": "r2", "filename": "bob.txt"}, "score": 0.412},
            ],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entries = client.rank(&sample_query()).await.expect("rank ok");

    assert_eq!(
        entries,
        vec![
            RankedEntry {
                resume_id: "r9".to_string(),
                filename: "alice.pdf".to_string(),
                score: 0.873,
            },
            RankedEntry {
                resume_id: "r2".to_string(),
                filename: "bob.txt".to_string(),
                score: 0.412,
            },
        ]
    );
}

#[tokio::test]
async fn rank_drops_malformed_entries_and_keeps_the_rest() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rank"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"resume": {"id": "r1", "filename": "first.pdf"}, "score": 0.9},
                {"resume": {"id": "r2"}, "score": 0.8},
                {"resume": {"id": "r3", "filename": "stringy.pdf"}, "score": "high"},
                {"resume": {"id": "r4", "filename": "big.pdf"}, "score": 1.5},
                "not an object",
                {"resume": {"id": "r5", "filename": "last.pdf"}, "score": 0.1},
            ],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entries = client.rank(&sample_query()).await.expect("rank ok");

    let survivors: Vec<_> = entries
        .iter()
        .map(|entry| entry.resume_id.as_str())
        .collect();
    assert_eq!(survivors, vec!["r1", "r5"]);
}

#[tokio::test]
async fn rank_scores_survive_the_wire_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rank"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"resume": {"id": "r1", "filename": "alice.pdf"}, "score": 0.7305}],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entries = client.rank(&sample_query()).await.expect("rank ok");

    assert_eq!(entries[0].score, 0.7305);
}

#[tokio::test]
async fn rank_maps_unparsable_body_to_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rank"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.rank(&sample_query()).await.unwrap_err();

    assert_eq!(err.kind, TransferErrorKind::Protocol);
}

#[tokio::test]
async fn rank_maps_http_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rank"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.rank(&sample_query()).await.unwrap_err();

    assert_eq!(err.kind, TransferErrorKind::Rejected(503));
    assert_eq!(err.server_message, None);
}

#[tokio::test]
async fn rank_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rank"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"results": []})),
        )
        .mount(&server)
        .await;

    let mut settings = TransferSettings::new(&server.uri()).expect("settings");
    settings.request_timeout = Duration::from_millis(50);
    let client = HttpTransferClient::new(settings);

    let err = client.rank(&sample_query()).await.unwrap_err();
    assert_eq!(err.kind, TransferErrorKind::Timeout);
}
