use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::affiliate::{affiliate_config, affiliate_cta, AffiliateConfig};
use crate::config::plans::PlanTier;
use crate::errors::AppError;
use crate::metrics::record_request;

use super::ApiResponse;

#[derive(Deserialize)]
pub struct AffiliateQuery {
    pub tier: Option<String>,
}

#[derive(Serialize)]
pub struct AffiliateView {
    pub config: &'static AffiliateConfig,
    /// Whether the call-to-action renders for the requested tier.
    pub cta_visible: bool,
}

pub async fn get(
    Query(query): Query<AffiliateQuery>,
) -> Result<Json<ApiResponse<AffiliateView>>, AppError> {
    record_request("/api/affiliate");
    let tier = match query.tier.as_deref() {
        Some(raw) => raw.parse()?,
        None => PlanTier::Free,
    };

    Ok(ApiResponse::ok(AffiliateView {
        config: affiliate_config(),
        cta_visible: affiliate_cta(tier).is_some(),
    }))
}
