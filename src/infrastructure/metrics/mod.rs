//! Prometheus metrics for the template service.
//!
//! - Operation outcomes per façade operation (create, list, render)
//! - Number of templates stored, as last observed by a list
//! - Render and storage latency

mod helpers;

pub use helpers::{encode_metrics, StoreMetrics, TemplateMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_histogram_vec, register_int_counter_vec, register_int_gauge,
    Histogram, HistogramVec, IntCounterVec, IntGauge,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "mts";

lazy_static! {
    /// Façade operations by operation and outcome
    pub static ref TEMPLATE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_template_operations_total", METRIC_PREFIX),
        "Total template operations by outcome",
        &["operation", "outcome"]
    ).unwrap();

    /// Templates stored, refreshed on every list
    pub static ref TEMPLATES_STORED: IntGauge = register_int_gauge!(
        format!("{}_templates_stored", METRIC_PREFIX),
        "Number of stored templates, incremented on create and reset on list"
    ).unwrap();

    /// Time spent substituting parameters into a template
    pub static ref RENDER_DURATION: Histogram = register_histogram!(
        format!("{}_render_duration_seconds", METRIC_PREFIX),
        "Template substitution latency in seconds",
        vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05]
    ).unwrap();

    /// Storage backend latency by backend and operation
    pub static ref STORE_OPERATION_LATENCY: HistogramVec = register_histogram_vec!(
        format!("{}_store_operation_latency_seconds", METRIC_PREFIX),
        "Template store operation latency in seconds",
        &["backend", "operation"],
        vec![0.0001, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    ).unwrap();

    /// Storage backend failures (conflicts excluded)
    pub static ref STORE_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_store_errors_total", METRIC_PREFIX),
        "Total template store errors",
        &["backend", "operation"]
    ).unwrap();
}
