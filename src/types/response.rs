use serde::{Deserialize, Serialize};

// ===== Request Bodies =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRequest {
    pub role: String,
    pub location: String,
    pub experience_years: u32,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapRequest {
    pub target_role: String,
    pub current_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleSkillsRequest<'a> {
    pub target_role: &'a str,
}

// ===== Service Response Types =====

#[derive(Debug, Serialize, Deserialize)]
pub struct SalaryPrediction {
    pub predicted_salary: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub match_percentage: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoleSkillsResponse {
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Free-form diagnostics reported by the backend deployment.
pub type DebugInfo = serde_json::Map<String, serde_json::Value>;
