use axum::extract::{Path, State};
use axum::Json;

use crate::data::diagnostics::{confidence_distribution, ConfidenceDistribution};
use crate::errors::AppError;
use crate::metrics::record_request;
use crate::models::{Event, EventsPayload};
use crate::AppState;

use super::ApiResponse;

pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<EventsPayload>> {
    record_request("/api/events");
    ApiResponse::ok(state.events.as_ref().clone())
}

pub async fn latest(State(state): State<AppState>) -> Result<Json<ApiResponse<Event>>, AppError> {
    record_request("/api/events/latest");
    let event = state
        .events
        .latest()
        .ok_or_else(|| AppError::NotFound("no events in dataset".into()))?;
    Ok(ApiResponse::ok(event.clone()))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    record_request("/api/events/:slug");
    let event = state
        .events
        .find_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("event '{slug}'")))?;
    Ok(ApiResponse::ok(event.clone()))
}

pub async fn confidence(State(state): State<AppState>) -> Json<ApiResponse<ConfidenceDistribution>> {
    record_request("/api/diagnostics/confidence");
    ApiResponse::ok(confidence_distribution(&state.events))
}
