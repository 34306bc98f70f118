use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

use crate::models::EventsPayload;

/// Build a Prometheus recorder and install it as the global recorder.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    register();
    Ok(handle)
}

/// A recorder that is not installed globally. Tests use this so several
/// routers can coexist in one process.
pub fn detached_handle() -> PrometheusHandle {
    let recorder: PrometheusRecorder = PrometheusBuilder::new().build_recorder();
    recorder.handle()
}

fn register() {
    // Pre-register counters so they appear even before the first increment.
    counter!("api_requests_total").absolute(0);
    counter!("api_not_found_total").absolute(0);

    gauge!("dataset_events").set(0.0);
    gauge!("dataset_bouts").set(0.0);
}

/// Publish the size of the dataset being served.
pub fn record_dataset(payload: &EventsPayload) {
    gauge!("dataset_events").set(payload.events.len() as f64);
    gauge!("dataset_bouts").set(payload.bout_count() as f64);
}

/// Count one request against `route` (the matched pattern, not the raw path).
pub fn record_request(route: &'static str) {
    counter!("api_requests_total", "route" => route).increment(1);
}
