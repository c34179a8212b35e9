mod common;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use http_body_util::BodyExt;
use medical_doc_ai::router::{init_api_router, init_router, init_router_with_api};
use medical_doc_ai::state::AppState;
use tower::ServiceExt;

use common::test_state;

async fn get_text(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_api_prefix_has_no_routes_by_default() {
    let app = init_router(test_state("/api", "*"));

    let (status, _) = get_text(app, "/api/anything").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_route_attached_before_mount_reachable_under_prefix() {
    let api_router = init_api_router().route("/ping", get(|| async { "pong" }));
    let app = init_router_with_api(test_state("/api", "*"), api_router);

    let (status, body) = get_text(app, "/api/ping").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "pong");
}

#[tokio::test]
async fn test_custom_prefix_moves_mounted_routes() {
    let api_router = init_api_router().route("/ping", get(|| async { "pong" }));
    let app = init_router_with_api(test_state("/v2", "*"), api_router);

    let (status, body) = get_text(app.clone(), "/v2/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "pong");

    let (status, _) = get_text(app, "/api/ping").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mounted_route_can_read_state() {
    async fn app_name(State(state): State<AppState>) -> String {
        state.app_config.name
    }

    let api_router = init_api_router().route("/app-name", get(app_name));
    let app = init_router_with_api(test_state("/api", "*"), api_router);

    let (status, body) = get_text(app, "/api/app-name").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "MedicalDocAI");
}
