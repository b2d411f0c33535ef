//! Route handlers.

use axum::Json;
use chrono::Local;

use crate::http::error::ApiError;
use crate::http::extract::CampaignBody;
use crate::marketing::engine;
use crate::marketing::{
    Campaign, HealthStatus, LeadScore, OptimizationSummary, RevenueForecast, ServiceInfo,
};

pub async fn root() -> Json<ServiceInfo> {
    Json(engine::service_info())
}

pub async fn health() -> Json<HealthStatus> {
    Json(engine::health_status(&Local::now()))
}

pub async fn generate_campaign(CampaignBody(request): CampaignBody) -> Json<Campaign> {
    let campaign = engine::generate_campaign(&request, &Local::now());
    tracing::debug!(
        campaign_id = %campaign.campaign_id,
        campaign_type = %request.campaign_type,
        product = %request.product,
        "Campaign generated"
    );
    Json(campaign)
}

pub async fn revenue_forecast() -> Json<RevenueForecast> {
    Json(engine::revenue_forecast())
}

/// Any request body is ignored.
pub async fn score_lead() -> Json<LeadScore> {
    Json(engine::score_lead())
}

pub async fn optimize() -> Json<OptimizationSummary> {
    Json(engine::optimization_summary())
}

/// Fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for known paths called with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
