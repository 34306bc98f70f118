use axum::extract::Path;
use axum::Json;

use crate::config::features::{features_for, FeatureFlags};
use crate::config::plans::PlanTier;
use crate::errors::AppError;
use crate::metrics::record_request;

use super::ApiResponse;

pub async fn detail(
    Path(tier): Path<String>,
) -> Result<Json<ApiResponse<&'static FeatureFlags>>, AppError> {
    record_request("/api/features/:tier");
    let tier: PlanTier = tier.parse()?;
    Ok(ApiResponse::ok(features_for(tier)))
}
