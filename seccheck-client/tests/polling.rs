//! End-to-end polling against a mock SecurityCheck API

use std::time::Duration;

use seccheck_client::{ClientError, JobHandle, PollConfig, SecurityCheckClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seccheck_client=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

fn fast(max_attempts: u32) -> PollConfig {
    PollConfig::new(Duration::from_millis(10), max_attempts)
}

fn status(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

async fn status_requests(server: &MockServer, status_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|req| req.url.path() == status_path)
        .count()
}

#[tokio::test]
async fn test_wait_for_web_scan_completes() {
    init_tracing();
    let server = MockServer::start().await;
    let client = SecurityCheckClient::new(server.uri());

    Mock::given(method("GET"))
        .and(path("/api/web-scans/7/status"))
        .respond_with(status(json!({"success": true, "status": "pending", "progress": 0})))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/web-scans/7/status"))
        .respond_with(status(json!({"success": true, "status": "running", "progress": 60})))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/web-scans/7/status"))
        .respond_with(status(json!({"status": "completed", "result": {"score": 92}})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .wait_for_web_scan(JobHandle::new(7), fast(3))
        .await
        .unwrap();

    assert_eq!(result, json!({"score": 92}));
}

#[tokio::test]
async fn test_wait_times_out() {
    let server = MockServer::start().await;
    let client = SecurityCheckClient::new(server.uri());

    Mock::given(method("GET"))
        .and(path("/api/web-scans/7/status"))
        .respond_with(status(json!({"status": "pending"})))
        .expect(2)
        .mount(&server)
        .await;

    let err = client
        .wait_for_web_scan(JobHandle::new(7), fast(2))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::PollTimeout { attempts: 2 }));
    assert!(err.is_job_outcome());
}

#[tokio::test]
async fn test_failed_job() {
    let server = MockServer::start().await;
    let client = SecurityCheckClient::new(server.uri());

    Mock::given(method("GET"))
        .and(path("/api/file-analysis/4/status"))
        .respond_with(status(json!({"status": "failed", "error": "scan engine crashed"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .wait_for_file_analysis(JobHandle::new(4), fast(60))
        .await
        .unwrap_err();

    match err {
        ClientError::JobFailed(reason) => assert_eq!(reason, "scan engine crashed"),
        other => panic!("expected job failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_status_error_stops_polling() {
    init_tracing();
    let server = MockServer::start().await;
    let client = SecurityCheckClient::new(server.uri());

    Mock::given(method("GET"))
        .and(path("/api/web-scans/7/status"))
        .respond_with(status(json!({"status": "pending"})))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/web-scans/7/status"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "database unavailable"})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/web-scans/7/status"))
        .respond_with(status(json!({"status": "completed"})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .wait_for_web_scan(JobHandle::new(7), fast(60))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Api { status: 500, ref message } if message == "database unavailable"
    ));
    assert!(!err.is_job_outcome());
}

#[tokio::test]
async fn test_invalid_config_sends_nothing() {
    let server = MockServer::start().await;
    let client = SecurityCheckClient::new(server.uri());

    let err = client
        .wait_for_web_scan(JobHandle::new(7), PollConfig::new(Duration::ZERO, 5))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Config(_)));
    assert_eq!(status_requests(&server, "/api/web-scans/7/status").await, 0);
}

#[tokio::test]
async fn test_scan_and_wait_fetches_record() {
    let server = MockServer::start().await;
    let client = SecurityCheckClient::new(server.uri());

    Mock::given(method("POST"))
        .and(path("/api/web-scans/start"))
        .respond_with(status(json!({"success": true, "scan_id": 11})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/web-scans/11/status"))
        .respond_with(status(json!({"status": "completed", "progress": 100})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/web-scans/11"))
        .respond_with(status(json!({
            "success": true,
            "scan": {
                "id": 11,
                "target_url": "https://example.com",
                "target_domain": "example.com",
                "status": "completed",
                "security_score": 92,
                "results": []
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let scan = client
        .scan_and_wait("https://example.com", fast(5))
        .await
        .unwrap();

    assert_eq!(scan.id, JobHandle::new(11));
    assert_eq!(scan.security_score, Some(92));
}

#[tokio::test]
async fn test_spawned_watch_can_be_cancelled() {
    init_tracing();
    let server = MockServer::start().await;
    let client = SecurityCheckClient::new(server.uri());

    Mock::given(method("GET"))
        .and(path("/api/web-scans/3/status"))
        .respond_with(status(json!({"status": "running", "progress": 10})))
        .mount(&server)
        .await;

    let handle = client
        .spawn_web_scan_watch(JobHandle::new(3), PollConfig::new(Duration::from_millis(200), 60))
        .unwrap();
    let mut progress = handle.progress();
    progress.changed().await.unwrap();
    assert_eq!(progress.borrow().progress, Some(10));

    handle.cancel();
    let seen = status_requests(&server, "/api/web-scans/3/status").await;
    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(status_requests(&server, "/api/web-scans/3/status").await, seen);
    assert!(handle.outcome().await.is_none());
}

#[tokio::test]
async fn test_spawned_file_watch_settles() {
    let server = MockServer::start().await;
    let client = SecurityCheckClient::new(server.uri());

    Mock::given(method("GET"))
        .and(path("/api/file-analysis/9/status"))
        .respond_with(status(json!({"status": "completed", "result": {"verdict": "clean"}})))
        .expect(1)
        .mount(&server)
        .await;

    let handle = client
        .spawn_file_analysis_watch(JobHandle::new(9), fast(5))
        .unwrap();

    let result = handle.outcome().await.unwrap().unwrap();
    assert_eq!(result, json!({"verdict": "clean"}));
}

#[tokio::test]
async fn test_unreachable_api_stops_polling() {
    init_tracing();
    let client = SecurityCheckClient::new("http://127.0.0.1:1");

    let err = client
        .wait_for_web_scan(JobHandle::new(7), fast(5))
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert!(!err.is_job_outcome());

    let handle = client
        .spawn_web_scan_watch(JobHandle::new(7), fast(5))
        .unwrap();
    let progress = handle.progress();

    let err = handle.outcome().await.unwrap().unwrap_err();
    assert!(err.is_transport());
    assert_eq!(progress.borrow().attempts, 1);
    assert!(progress.borrow().finished);
}
