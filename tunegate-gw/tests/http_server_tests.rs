//! HTTP surface integration tests
//!
//! Router-level tests via `tower::ServiceExt::oneshot`: route
//! registration, envelope serialization, and failure-kind to status-code
//! mapping.

mod helpers;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use tunegate_gw::mediator::RequestMediator;
use tunegate_gw::services::{UpstreamClient, UpstreamConfig};
use tunegate_gw::{build_router, AppState};

use helpers::{dead_upstream, spawn_upstream};

fn app_for(base_url: &str) -> Router {
    let config = UpstreamConfig::new(base_url).with_timeout_secs(5);
    let mediator = RequestMediator::new(UpstreamClient::new(&config).unwrap());
    build_router(AppState::new(mediator))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_for(&dead_upstream().await);

    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["module"], json!("tunegate-gw"));
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_missing_query_maps_to_400_with_envelope() {
    // Validation never reaches the upstream, so a dead one is fine
    let app = app_for(&dead_upstream().await);

    let (status, body) = get_json(app, "/api/search/songs").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["kind"], json!("validation"));
    assert_eq!(body["error"]["message"], json!("query is required"));
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_successful_fetch_serializes_envelope() {
    let upstream = Router::new().route(
        "/songs/abc123",
        get(|| async { Json(json!({"success": true, "data": {"id": "abc123", "title": "X"}})) }),
    );
    let app = app_for(&spawn_upstream(upstream).await);

    let (status, body) = get_json(app, "/api/songs/abc123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["id"], json!("abc123"));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_upstream_absence_maps_to_404() {
    let upstream = Router::new().route(
        "/albums/missing",
        get(|| async { Json(json!({"success": false, "message": "Album not found"})) }),
    );
    let app = app_for(&spawn_upstream(upstream).await);

    let (status, body) = get_json(app, "/api/albums/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["kind"], json!("not_found"));
}

#[tokio::test]
async fn test_upstream_error_status_maps_to_502() {
    let upstream = Router::new().route(
        "/modules",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let app = app_for(&spawn_upstream(upstream).await);

    let (status, body) = get_json(app, "/api/modules").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["kind"], json!("transport"));
}

#[tokio::test]
async fn test_all_search_routes_are_registered() {
    for route in [
        "/api/search/all",
        "/api/search/songs",
        "/api/search/albums",
        "/api/search/artists",
        "/api/search/playlists",
    ] {
        let app = app_for(&dead_upstream().await);
        let (status, body) = get_json(app, route).await;

        // Registered routes reject the missing query, they do not 404
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", route);
        assert_eq!(body["error"]["kind"], json!("validation"), "{}", route);
    }
}

#[tokio::test]
async fn test_browse_routes_proxy_their_upstream_paths() {
    let upstream = Router::new()
        .route(
            "/trending",
            get(|| async { Json(json!({"success": true, "data": {"songs": []}})) }),
        )
        .route(
            "/charts",
            get(|| async { Json(json!({"success": true, "data": {"charts": []}})) }),
        );
    let base = spawn_upstream(upstream).await;

    let (status, body) = get_json(app_for(&base), "/api/trending").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["songs"], json!([]));

    let (status, body) = get_json(app_for(&base), "/api/charts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["charts"], json!([]));
}

#[tokio::test]
async fn test_lyrics_route_is_registered() {
    let upstream = Router::new().route(
        "/songs/s1/lyrics",
        get(|| async { Json(json!({"success": true, "data": {"lyrics": "words"}})) }),
    );
    let app = app_for(&spawn_upstream(upstream).await);

    let (status, body) = get_json(app, "/api/lyrics/s1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["lyrics"], json!("words"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = app_for(&dead_upstream().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/videos/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_headers_present_for_browser_clients() {
    let app = app_for(&dead_upstream().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
