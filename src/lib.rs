pub mod api;
pub mod config;
pub mod data;
pub mod errors;
pub mod metrics;
pub mod models;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::EventsPayload;

pub use crate::data::{latest_event, load_events};

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventsPayload>,
    pub config: AppConfig,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
