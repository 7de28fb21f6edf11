//! API layer - HTTP endpoint handlers.

mod health;
mod metrics;
mod routes;
mod template;

pub use health::{health, HealthResponse, StorageHealthResponse};
pub use metrics::prometheus_metrics;
pub use routes::api_routes;
pub use template::{compose_template, create_template, list_templates, ErrorResponse};
