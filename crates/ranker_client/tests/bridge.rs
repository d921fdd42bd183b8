use std::time::{Duration, Instant};

use ranker_client::{ClientEvent, ClientHandle, RankQuery, TransferSettings, UploadFile};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn wait_for_event(handle: &ClientHandle) -> ClientEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no client event within 5s");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn bridge_reports_upload_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let handle = ClientHandle::new(TransferSettings::new(&server.uri()).expect("settings"));
    handle.start_upload(
        vec![UploadFile {
            name: "alice.pdf".to_string(),
            bytes: b"%PDF-1.4 alice".to_vec(),
        }],
        Some("user-1".to_string()),
    );

    let event = wait_for_event(&handle).await;
    assert_eq!(event, ClientEvent::UploadCompleted { result: Ok(()) });
}

#[tokio::test]
async fn bridge_reports_rank_entries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rank"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"resume": {"id": "r1", "filename": "alice.pdf"}, "score": 0.873}],
        })))
        .mount(&server)
        .await;

    let handle = ClientHandle::new(TransferSettings::new(&server.uri()).expect("settings"));
    handle.start_rank(RankQuery {
        job_title: "Hiring - Data engineer".to_string(),
        job_description: "Data engineer".to_string(),
        created_by: None,
    });

    let event = wait_for_event(&handle).await;
    match event {
        ClientEvent::RankCompleted { result } => {
            let entries = result.expect("rank ok");
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].filename, "alice.pdf");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
