use axum::extract::State;
use axum::Json;

use crate::config::site::SiteConfig;
use crate::metrics::record_request;
use crate::AppState;

use super::ApiResponse;

pub async fn get(State(state): State<AppState>) -> Json<ApiResponse<SiteConfig>> {
    record_request("/api/site");
    ApiResponse::ok(state.config.site.clone())
}
