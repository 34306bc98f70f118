use axum::extract::Path;
use axum::Json;

use crate::config::plans::{all_plans, plan, PlanDefinition, PlanTier};
use crate::errors::AppError;
use crate::metrics::record_request;

use super::ApiResponse;

pub async fn list() -> Json<ApiResponse<Vec<&'static PlanDefinition>>> {
    record_request("/api/plans");
    ApiResponse::ok(all_plans())
}

pub async fn detail(
    Path(tier): Path<String>,
) -> Result<Json<ApiResponse<&'static PlanDefinition>>, AppError> {
    record_request("/api/plans/:tier");
    let tier: PlanTier = tier.parse()?;
    Ok(ApiResponse::ok(plan(tier)))
}
