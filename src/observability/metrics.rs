//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_navigations_total` (counter): navigations by route and outcome
//! - `router_view_loads_total` (counter): loader invocations by module and outcome
//! - `router_view_load_duration_seconds` (histogram): loader latency
//! - `router_http_requests_total` (counter): dev server responses by status
//! - `router_http_request_duration_seconds` (histogram): dev server latency
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr`. Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_navigation(route: &str, outcome: &'static str) {
    metrics::counter!(
        "router_navigations_total",
        "route" => route.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_view_load(module: &str, ok: bool, start: Instant) {
    let outcome = if ok { "ok" } else { "error" };
    metrics::counter!(
        "router_view_loads_total",
        "module" => module.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("router_view_load_duration_seconds", "module" => module.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_http_request(status: u16, start: Instant) {
    metrics::counter!("router_http_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("router_http_request_duration_seconds").record(start.elapsed().as_secs_f64());
}
