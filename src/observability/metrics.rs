//! Metrics collection and exposition.
//!
//! # Metrics
//! - `market_refresh_total` (counter): catalog rebuilds
//! - `market_refresh_degraded_total` (counter): rebuilds that skipped ids
//! - `market_catalog_items` (gauge): items in the current catalog
//! - `market_mutations_total` (counter): mutations by kind and outcome
//! - `market_rpc_errors_total` (counter): failed node queries by operation
//!
//! # Design Decisions
//! - Recording is always on; exposition is optional
//! - Low-overhead metric updates (atomic operations)

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failure is logged, not fatal: the client is usable without exposition.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed catalog rebuild.
pub fn record_refresh(items: usize, skipped: usize) {
    metrics::counter!("market_refresh_total").increment(1);
    if skipped > 0 {
        metrics::counter!("market_refresh_degraded_total").increment(1);
    }
    metrics::gauge!("market_catalog_items").set(items as f64);
}

/// Record a mutation flow outcome.
pub fn record_mutation(kind: &'static str, outcome: &'static str) {
    metrics::counter!("market_mutations_total", "kind" => kind, "outcome" => outcome).increment(1);
}

/// Record a failed node query.
pub fn record_rpc_error(op: &'static str) {
    metrics::counter!("market_rpc_errors_total", "op" => op).increment(1);
}
