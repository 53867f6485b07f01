//! Prometheus metrics for the editor server.

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

// Metric names as constants for consistency
const GENERATION_RUNS_TOTAL: &str = "editor_generation_runs_total";
const DOCUMENT_MUTATIONS_TOTAL: &str = "editor_document_mutations_total";
const VALIDATION_FAILURES_TOTAL: &str = "editor_validation_failures_total";

/// Initialize metrics and return the Prometheus handle.
///
/// # Errors
///
/// Returns an error if the Prometheus recorder cannot be installed
/// (e.g., if another recorder is already installed).
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Record a generation run.
///
/// # Arguments
///
/// * `outcome` - "ok" or "validation_error"
pub fn record_generation(outcome: &str) {
    counter!(GENERATION_RUNS_TOTAL, "outcome" => outcome.to_string()).increment(1);
}

/// Record a document mutation performed over the API.
///
/// # Arguments
///
/// * `op` - mutation name, e.g. "set_elements", "undo", "clear"
pub fn record_document_mutation(op: &str) {
    counter!(DOCUMENT_MUTATIONS_TOTAL, "op" => op.to_string()).increment(1);
}

/// Record a rejected request.
pub fn record_validation_failure(kind: &str) {
    counter!(VALIDATION_FAILURES_TOTAL, "kind" => kind.to_string()).increment(1);
}
