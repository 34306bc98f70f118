use std::sync::Arc;

use forge_site::api::router::create_router;
use forge_site::config::{AppConfig, LogFormat};
use forge_site::data::diagnostics::{confidence_distribution, log_distribution};
use forge_site::models::EventsPayload;
use forge_site::{load_events, metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    let addr = format!("{}:{}", config.host, config.port);
    let metrics_handle = metrics::init_metrics()?;

    // --- Dataset: bundled export unless EVENTS_JSON_PATH points elsewhere ---
    let events: EventsPayload = match &config.events_json_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading events from file");
            EventsPayload::from_path(path)?
        }
        None => load_events().clone(),
    };

    tracing::info!(
        events = events.events.len(),
        bouts = events.bout_count(),
        external = config.uses_external_events(),
        "Dataset loaded"
    );

    match events.latest() {
        Some(latest) => tracing::info!(
            slug = %latest.slug,
            date = %latest.event_date_utc,
            bouts = latest.bouts.len(),
            "Latest event"
        ),
        None => tracing::warn!("Dataset has no events — latest event pages will be empty"),
    }

    if !events.is_sorted_newest_first() {
        tracing::warn!("Events are not ordered newest first; the latest event is taken by position");
    }

    log_distribution(&confidence_distribution(&events));
    metrics::record_dataset(&events);

    let state = AppState {
        events: Arc::new(events),
        config,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Preview API listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let json = format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(|| fmt::layer()))
        .init();
}
