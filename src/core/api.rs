// src/core/api.rs
//! The analytics backend as seen by the dashboard workflows

use crate::error::ApiError;
use crate::types::{
    Candidate, ColumnMapping, CsvUpload, DebugInfo, MarketDataReply, MatchRequest, SalaryRequest,
    SkillGapReport, SkillGapRequest,
};

/// Operations exposed by the analytics backend.
///
/// Workflows take `&impl AnalyticsApi` so they can run against the HTTP
/// client or an in-memory stand-in.
#[allow(async_fn_in_trait)]
pub trait AnalyticsApi {
    /// Store the raw CSV as the backend's working dataset.
    async fn upload_csv(&self, upload: &CsvUpload) -> Result<(), ApiError>;

    /// Analyze the stored dataset, optionally with a user-confirmed mapping.
    async fn market_data(&self, mapping: Option<&ColumnMapping>)
        -> Result<MarketDataReply, ApiError>;

    /// Rank candidates against a skill set. Order is the backend's.
    async fn match_candidates(&self, request: &MatchRequest) -> Result<Vec<Candidate>, ApiError>;

    async fn predict_salary(&self, request: &SalaryRequest) -> Result<f64, ApiError>;

    async fn recommend_skills(&self, request: &SkillGapRequest)
        -> Result<SkillGapReport, ApiError>;

    /// Most frequent skills for a role.
    async fn role_skills(&self, target_role: &str) -> Result<Vec<String>, ApiError>;

    async fn debug_info(&self) -> Result<DebugInfo, ApiError>;
}
