//! Metrics integration tests
//!
//! The Prometheus registry is process-global, so this binary holds a single
//! test that owns every change to the stored-templates gauge.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;

use message_template_service::config::Settings;
use message_template_service::server::{create_app, AppState};
use message_template_service::template::MemoryTemplateStore;

async fn stored_gauge(app: &Router) -> i64 {
    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    text.lines()
        .find_map(|line| line.strip_prefix("mts_templates_stored "))
        .and_then(|value| value.trim().parse().ok())
        .expect("mts_templates_stored sample")
}

async fn create(app: &Router, id: &str) -> StatusCode {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/templates")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"id": id, "text": "body"}).to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn test_stored_gauge_tracks_creates_without_list() {
    let app = create_app(AppState::new(
        Settings::default(),
        Arc::new(MemoryTemplateStore::new()),
    ));

    let list = Request::builder().uri("/templates").body(Body::empty()).unwrap();
    assert_eq!(app.clone().oneshot(list).await.unwrap().status(), StatusCode::OK);
    assert_eq!(stored_gauge(&app).await, 0);

    assert_eq!(create(&app, "first").await, StatusCode::CREATED);
    assert_eq!(stored_gauge(&app).await, 1);

    assert_eq!(create(&app, "second").await, StatusCode::CREATED);
    assert_eq!(stored_gauge(&app).await, 2);

    // Rejected creates leave the gauge alone
    assert_eq!(create(&app, "second").await, StatusCode::BAD_REQUEST);
    assert_eq!(create(&app, " ").await, StatusCode::BAD_REQUEST);
    assert_eq!(stored_gauge(&app).await, 2);

    let list = Request::builder().uri("/templates").body(Body::empty()).unwrap();
    assert_eq!(app.clone().oneshot(list).await.unwrap().status(), StatusCode::OK);
    assert_eq!(stored_gauge(&app).await, 2);
}
