//! Marketing payload module.
//!
//! Every endpoint of the engine answers with a canned payload built here.
//! Nothing is persisted and no model is invoked: the only inputs are the
//! campaign request fields and the wall clock.

pub mod engine;
pub mod types;

pub use types::{
    Campaign, CampaignRequest, HealthStatus, LeadScore, OptimizationSummary, RevenueForecast,
    ServiceInfo,
};
