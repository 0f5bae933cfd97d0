use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "inventory_requests_total",
        "Requests handled per resource and operation",
        &["resource", "operation"]
    )
    .expect("register requests_total")
});

pub static ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "inventory_errors_total",
        "Domain errors returned to callers, by error code",
        &["code"]
    )
    .expect("register errors_total")
});

pub fn record(resource: &str, operation: &str) {
    REQUESTS_TOTAL.with_label_values(&[resource, operation]).inc();
}

pub fn record_error(code: &str) {
    ERRORS_TOTAL.with_label_values(&[code]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
