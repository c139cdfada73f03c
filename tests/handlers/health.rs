use crate::fixtures::{UpstreamBehavior, create_test_app, get_request, send, spawn_upstream};
use axum::http::StatusCode;

#[tokio::test]
async fn health_lists_endpoints() {
    let upstream = spawn_upstream(UpstreamBehavior::default()).await;
    let app = create_test_app(&upstream, None);

    let (status, body) = send(app, get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "RapGame Backend");
    assert_eq!(body["endpoints"]["search"], "/api/search");
    assert_eq!(body["endpoints"]["validate"], "/api/validate");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn root_reports_running() {
    let upstream = spawn_upstream(UpstreamBehavior::default()).await;
    let app = create_test_app(&upstream, None);

    let (status, body) = send(app, get_request("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
