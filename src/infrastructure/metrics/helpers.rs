//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{
    RENDER_DURATION, STORE_ERRORS_TOTAL, STORE_OPERATION_LATENCY, TEMPLATES_STORED,
    TEMPLATE_OPERATIONS_TOTAL,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording façade operation outcomes
pub struct TemplateMetrics;

impl TemplateMetrics {
    /// Record the outcome of an operation (`"ok"` or an error code)
    pub fn record(operation: &str, outcome: &str) {
        TEMPLATE_OPERATIONS_TOTAL
            .with_label_values(&[operation, outcome])
            .inc();
    }

    /// Record how many templates a list returned
    pub fn set_stored(count: usize) {
        TEMPLATES_STORED.set(count as i64);
    }

    /// Count one newly stored template
    pub fn record_stored() {
        TEMPLATES_STORED.inc();
    }

    /// Record substitution latency
    pub fn observe_render(elapsed: Duration) {
        RENDER_DURATION.observe(elapsed.as_secs_f64());
    }
}

/// Helper struct for recording storage backend metrics
pub struct StoreMetrics;

impl StoreMetrics {
    pub fn observe(backend: &str, operation: &str, elapsed: Duration) {
        STORE_OPERATION_LATENCY
            .with_label_values(&[backend, operation])
            .observe(elapsed.as_secs_f64());
    }

    pub fn record_error(backend: &str, operation: &str) {
        STORE_ERRORS_TOTAL
            .with_label_values(&[backend, operation])
            .inc();
    }
}
