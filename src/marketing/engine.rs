//! Canned payload generation.
//!
//! Each function builds a fresh payload for one endpoint. Time-derived
//! fields take the current instant as a parameter; everything else is a
//! literal.

use chrono::{DateTime, TimeZone, Timelike};

use crate::marketing::types::{
    Campaign, CampaignRequest, HealthStatus, LeadScore, OptimizationSummary, RevenueForecast,
    ServiceInfo,
};

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "turbomark-ai-engine";

/// API version reported by `/health`.
pub const API_VERSION: &str = "1.0.0";

/// Models advertised by `/health`.
pub const AI_MODELS: [&str; 3] = ["GPT-4", "Claude", "Gemini"];

const CAPABILITIES: [&str; 4] = [
    "Campaign Generation",
    "Revenue Forecasting",
    "Lead Scoring",
    "Performance Optimization",
];

const FORECAST_RECOMMENDATIONS: [&str; 3] = [
    "Increase email frequency by 20%",
    "Target high-value customer segments",
    "Launch premium AI features",
];

const OPTIMIZATIONS: [&str; 3] = [
    "Increased open rates by 23%",
    "Boosted click-through by 31%",
    "Enhanced conversion by 18%",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Format an instant as ISO-8601 without offset.
///
/// Microseconds are appended only when non-zero, so a whole second renders
/// as `2024-03-15T09:30:00`.
pub fn iso_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let local = now.naive_local();
    let micros = local.nanosecond() / 1_000;
    let seconds = local.format("%Y-%m-%dT%H:%M:%S");
    if micros == 0 {
        seconds.to_string()
    } else {
        format!("{seconds}.{micros:06}")
    }
}

/// Payload for `GET /`.
pub fn service_info() -> ServiceInfo {
    ServiceInfo {
        message: "🚀 TURBOMARK AI Engine - Ready to Generate Revenue!".to_string(),
        status: "active".to_string(),
        capabilities: owned(&CAPABILITIES),
    }
}

/// Payload for `GET /health`.
pub fn health_status<Tz: TimeZone>(now: &DateTime<Tz>) -> HealthStatus {
    HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: iso_timestamp(now),
        version: API_VERSION.to_string(),
        ai_models: owned(&AI_MODELS),
    }
}

/// Payload for `POST /ai/generate-campaign`.
pub fn generate_campaign<Tz: TimeZone>(request: &CampaignRequest, now: &DateTime<Tz>) -> Campaign {
    Campaign {
        campaign_id: format!("camp_{}", now.timestamp()),
        subject: format!("🚀 Boost Your {} Revenue by 300%", request.product),
        content: format!(
            "Transform your {} business with AI automation. Our {} campaigns help {} generate massive revenue.",
            request.product, request.campaign_type, request.target_audience
        ),
        estimated_conversion: "15.8%".to_string(),
        projected_revenue: "$47,500".to_string(),
        ai_confidence: "94%".to_string(),
    }
}

/// Payload for `GET /ai/revenue-forecast`.
pub fn revenue_forecast() -> RevenueForecast {
    RevenueForecast {
        next_30_days: "$125,000".to_string(),
        next_90_days: "$380,000".to_string(),
        next_year: "$1,500,000".to_string(),
        growth_rate: "45%".to_string(),
        ai_recommendations: owned(&FORECAST_RECOMMENDATIONS),
    }
}

/// Payload for `POST /ai/score-lead`.
///
/// The score is a placeholder and does not depend on any lead data.
pub fn score_lead() -> LeadScore {
    LeadScore {
        lead_score: 89,
        quality: "HIGH".to_string(),
        conversion_probability: "73%".to_string(),
        recommended_action: "Immediate follow-up".to_string(),
        estimated_value: "$2,500".to_string(),
    }
}

/// Payload for `GET /ai/optimize`.
pub fn optimization_summary() -> OptimizationSummary {
    OptimizationSummary {
        optimizations: owned(&OPTIMIZATIONS),
        revenue_impact: "+$15,000/month".to_string(),
        next_optimization: "A/B test subject lines".to_string(),
    }
}
