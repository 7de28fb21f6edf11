//! Storage outage tests
//!
//! Drives the router against a store whose every operation fails. The
//! production-mode check reads `RUN_MODE`, so both modes are covered by one
//! test to keep environment changes sequential.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use message_template_service::config::Settings;
use message_template_service::server::{create_app, AppState};
use message_template_service::template::{StoreError, Template, TemplateStore};

const STORE_FAILURE: &str = "connection refused by db-primary:5432";

struct UnreachableStore;

#[async_trait]
impl TemplateStore for UnreachableStore {
    fn backend_name(&self) -> &'static str {
        "unreachable"
    }

    async fn create_if_absent(&self, _template: &Template) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(STORE_FAILURE.to_string()))
    }

    async fn get(&self, _id: &str) -> Result<Option<Template>, StoreError> {
        Err(StoreError::Unavailable(STORE_FAILURE.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Template>, StoreError> {
        Err(StoreError::Unavailable(STORE_FAILURE.to_string()))
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn requests() -> Vec<Request<Body>> {
    vec![
        Request::builder().uri("/templates").body(Body::empty()).unwrap(),
        Request::builder()
            .uri("/templates/welcome/compose?name=Ann")
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .method(Method::POST)
            .uri("/templates")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"id": "welcome", "text": "Hi"}).to_string()))
            .unwrap(),
    ]
}

#[tokio::test]
async fn test_store_outage_maps_to_unavailable() {
    let app = create_app(AppState::new(Settings::default(), Arc::new(UnreachableStore)));

    std::env::remove_var("RUN_MODE");
    for request in requests() {
        let uri = request.uri().to_string();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{}", uri);
        assert_eq!(body["code"], "UNAVAILABLE", "{}", uri);
        assert!(
            body["message"].as_str().unwrap().contains(STORE_FAILURE),
            "{}: {}",
            uri,
            body["message"]
        );
    }

    std::env::set_var("RUN_MODE", "production");
    for request in requests() {
        let uri = request.uri().to_string();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{}", uri);
        assert_eq!(body["code"], "UNAVAILABLE", "{}", uri);
        assert_eq!(body["message"], "Service temporarily unavailable", "{}", uri);
    }
    std::env::remove_var("RUN_MODE");
}
