use axum::{routing::get, Router};

use crate::server::AppState;

use super::health::health;
use super::metrics::prometheus_metrics;
use super::template::{compose_template, create_template, list_templates};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Templates
        .route("/templates", get(list_templates).post(create_template))
        .route("/templates/{id}/compose", get(compose_template))
}
