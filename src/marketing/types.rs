//! Request and response payload types.

use serde::{Deserialize, Serialize};

/// Request payload for campaign generation.
///
/// All fields are optional on the wire. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignRequest {
    /// Channel of the campaign (e.g., "email", "sms").
    pub campaign_type: String,
    /// Audience the copy is written for.
    pub target_audience: String,
    /// Product named in the subject and content.
    pub product: String,
}

impl Default for CampaignRequest {
    fn default() -> Self {
        Self {
            campaign_type: "email".to_string(),
            target_audience: "entrepreneurs".to_string(),
            product: "AI automation".to_string(),
        }
    }
}

/// A generated campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// `camp_` followed by the unix time in seconds.
    pub campaign_id: String,
    pub subject: String,
    pub content: String,
    pub estimated_conversion: String,
    pub projected_revenue: String,
    pub ai_confidence: String,
}

/// Revenue forecast summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueForecast {
    pub next_30_days: String,
    pub next_90_days: String,
    pub next_year: String,
    pub growth_rate: String,
    pub ai_recommendations: Vec<String>,
}

/// Lead quality score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadScore {
    pub lead_score: u32,
    pub quality: String,
    pub conversion_probability: String,
    pub recommended_action: String,
    pub estimated_value: String,
}

/// Campaign optimization summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationSummary {
    pub optimizations: Vec<String>,
    pub revenue_impact: String,
    pub next_optimization: String,
}

/// Service description returned at the root path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub capabilities: Vec<String>,
}

/// Liveness report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    /// ISO-8601 local time, microsecond precision, no offset.
    pub timestamp: String,
    pub version: String,
    pub ai_models: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_request_defaults_fill_missing_fields() {
        let request: CampaignRequest = serde_json::from_str(r#"{"product": "SaaS"}"#).unwrap();
        assert_eq!(request.product, "SaaS");
        assert_eq!(request.campaign_type, "email");
        assert_eq!(request.target_audience, "entrepreneurs");
    }

    #[test]
    fn test_campaign_request_ignores_unknown_fields() {
        let request: CampaignRequest =
            serde_json::from_str(r#"{"budget": 100, "campaign_type": "sms"}"#).unwrap();
        assert_eq!(request.campaign_type, "sms");
        assert_eq!(request.product, "AI automation");
    }

    #[test]
    fn test_campaign_request_rejects_non_string_fields() {
        assert!(serde_json::from_str::<CampaignRequest>(r#"{"product": 42}"#).is_err());
        assert!(serde_json::from_str::<CampaignRequest>(r#"{"product": null}"#).is_err());
    }
}
