//! Adapter layer metrics

use prometheus::{register_counter_vec, register_histogram_vec, CounterVec, HistogramVec};

lazy_static::lazy_static! {
    pub static ref INTEGRATION_REQUESTS_TOTAL: CounterVec = register_counter_vec!(
        "integration_requests_total",
        "Total integration exchanges",
        &["config_id", "vendor", "status"]
    )
    .unwrap();

    pub static ref INTEGRATION_REQUEST_DURATION: HistogramVec = register_histogram_vec!(
        "integration_request_duration_seconds",
        "Integration exchange duration",
        &["config_id", "vendor"]
    )
    .unwrap();

    pub static ref INTEGRATION_RETRIES_TOTAL: CounterVec = register_counter_vec!(
        "integration_retries_total",
        "Retries performed against vendor cores",
        &["operation"]
    )
    .unwrap();

    pub static ref MAPPING_REQUIRED_SKIPPED: CounterVec = register_counter_vec!(
        "mapping_required_skipped_total",
        "Required field mappings skipped for lack of a value",
        &["config_id", "field"]
    )
    .unwrap();
}
