use crate::fixtures::{
    UpstreamBehavior, create_test_app, get_request, send, spawn_upstream, test_credentials,
};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn search_returns_normalized_artists() {
    let upstream = spawn_upstream(UpstreamBehavior::default()).await;
    let app = create_test_app(&upstream, Some(test_credentials()));

    let (status, body) = send(app, get_request("/api/search?q=Drake")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
    assert_eq!(body["query"], "Drake");
    assert!(body["timestamp"].is_string());
    assert_eq!(
        body["artists"][0]["imageUrl"],
        "https://i.scdn.co/image/drake-640"
    );
    assert_eq!(
        body["artists"][1],
        json!({
            "id": "a1",
            "name": "X",
            "imageUrl": null,
            "followers": 5,
            "genres": [],
            "popularity": 0
        })
    );
}

#[tokio::test]
async fn search_trims_query() {
    let upstream = spawn_upstream(UpstreamBehavior::default()).await;
    let app = create_test_app(&upstream, Some(test_credentials()));

    let (status, body) = send(app, get_request("/api/search?q=%20%20Drake%20")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "Drake");
    assert_eq!(
        upstream.search_requests()[0].raw_query.as_deref(),
        Some("q=Drake&type=artist&limit=10")
    );
}

#[tokio::test]
async fn short_query_is_rejected_without_upstream_calls() {
    let upstream = spawn_upstream(UpstreamBehavior::default()).await;

    for uri in ["/api/search", "/api/search?q=", "/api/search?q=a", "/api/search?q=%20b%20"] {
        let app = create_test_app(&upstream, Some(test_credentials()));
        let (status, body) = send(app, get_request(uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
        assert_eq!(body["success"], false);
        assert_eq!(body["example"], "/api/search?q=Drake");
    }

    assert_eq!(upstream.token_calls(), 0);
    assert_eq!(upstream.search_calls(), 0);
}

#[tokio::test]
async fn upstream_failure_is_structured_error() {
    let upstream = spawn_upstream(UpstreamBehavior {
        search_status: StatusCode::INTERNAL_SERVER_ERROR,
        search_body: json!({}),
        ..Default::default()
    })
    .await;
    let app = create_test_app(&upstream, Some(test_credentials()));

    let (status, body) = send(app, get_request("/api/search?q=Drake")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to search artists");
    assert_eq!(body["details"], "upstream status 500");
    assert_eq!(body["kind"], "search");
}

#[tokio::test]
async fn missing_artists_is_empty_success() {
    let upstream = spawn_upstream(UpstreamBehavior {
        search_body: json!({}),
        ..Default::default()
    })
    .await;
    let app = create_test_app(&upstream, Some(test_credentials()));

    let (status, body) = send(app, get_request("/api/search?q=zzzz")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["artists"], json!([]));
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn unconfigured_credentials_report_config_error() {
    let upstream = spawn_upstream(UpstreamBehavior::default()).await;
    let app = create_test_app(&upstream, None);

    let (status, body) = send(app, get_request("/api/search?q=Drake")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "config");
    assert_eq!(upstream.token_calls(), 0);
}

#[tokio::test]
async fn auth_failure_does_not_leak_secret() {
    let upstream = spawn_upstream(UpstreamBehavior {
        token_body: Some(json!({ "error": "invalid_client" })),
        ..Default::default()
    })
    .await;
    let app = create_test_app(&upstream, Some(test_credentials()));

    let (status, body) = send(app, get_request("/api/search?q=Drake")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "auth");
    assert_eq!(body["details"], "could not authenticate: missing credentials");
    assert!(!body.to_string().contains(crate::fixtures::CLIENT_SECRET));
    assert_eq!(upstream.search_calls(), 0);
}

#[tokio::test]
async fn repeated_query_parameter_is_structured_error() {
    let upstream = spawn_upstream(UpstreamBehavior::default()).await;
    let app = create_test_app(&upstream, Some(test_credentials()));

    let (status, body) = send(app, get_request("/api/search?q=Drake&q=Future")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid request");
    assert!(body["details"].as_str().unwrap().contains("q"));
    assert_eq!(upstream.token_calls(), 0);
    assert_eq!(upstream.search_calls(), 0);
}
