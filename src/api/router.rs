use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    let ops = Router::new()
        .route("/health", get(handlers::ops::health_check))
        .route("/metrics", get(handlers::ops::render_metrics));

    // Read-only data and configuration
    let api = Router::new()
        // Events (the static `latest` segment wins over the slug capture)
        .route("/api/events", get(handlers::events::list))
        .route("/api/events/latest", get(handlers::events::latest))
        .route("/api/events/:slug", get(handlers::events::detail))
        .route("/api/diagnostics/confidence", get(handlers::events::confidence))
        // Plans and gating
        .route("/api/plans", get(handlers::plans::list))
        .route("/api/plans/:tier", get(handlers::plans::detail))
        .route("/api/features/:tier", get(handlers::features::detail))
        .route("/api/affiliate", get(handlers::affiliate::get))
        // Site
        .route("/api/site", get(handlers::site::get));

    // Page templates are served from another origin during preview
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Trace wraps CORS so preflight responses are logged too
    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    ops.merge(api).layer(layers).with_state(state)
}
