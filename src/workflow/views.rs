// src/workflow/views.rs
//! Single-shot form views. Each owns its inputs and its last result.

use tracing::{error, info};

use crate::catalog::{
    self, DEFAULT_EXPERIENCE_YEARS, DEFAULT_LOCATION, DEFAULT_ROLE, DEFAULT_TOP_N,
    MAX_EXPERIENCE_YEARS, MAX_TOP_N, MIN_TOP_N,
};
use crate::core::AnalyticsApi;
use crate::types::{Candidate, MatchRequest, SalaryRequest, SkillGapReport, SkillGapRequest};

/// Salary prediction form.
#[derive(Debug)]
pub struct SalaryView {
    pub form: SalaryRequest,
    prediction: Option<f64>,
    error: Option<String>,
}

impl Default for SalaryView {
    fn default() -> Self {
        Self {
            form: SalaryRequest {
                role: DEFAULT_ROLE.to_string(),
                location: DEFAULT_LOCATION.to_string(),
                experience_years: DEFAULT_EXPERIENCE_YEARS,
                skills: Vec::new(),
            },
            prediction: None,
            error: None,
        }
    }
}

impl SalaryView {
    pub fn set_experience(&mut self, years: u32) {
        self.form.experience_years = years.min(MAX_EXPERIENCE_YEARS);
    }

    pub fn toggle_skill(&mut self, skill: &str) {
        catalog::toggle_in(&mut self.form.skills, skill);
    }

    pub fn prediction(&self) -> Option<f64> {
        self.prediction
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit<A: AnalyticsApi>(&mut self, api: &A) {
        self.prediction = None;
        self.error = None;

        match api.predict_salary(&self.form).await {
            Ok(value) => {
                info!("Predicted salary for {}: {}", self.form.role, value);
                self.prediction = Some(value);
            }
            Err(e) => {
                error!("Salary prediction failed: {}", e);
                self.error = Some(e.detail());
            }
        }
    }
}

/// Skill-gap analysis against a target role.
#[derive(Debug)]
pub struct SkillGapView {
    target_role: String,
    current_skills: Vec<String>,
    report: Option<SkillGapReport>,
    suggestions: Vec<String>,
    error: Option<String>,
}

impl Default for SkillGapView {
    fn default() -> Self {
        Self {
            target_role: DEFAULT_ROLE.to_string(),
            current_skills: Vec::new(),
            report: None,
            suggestions: Vec::new(),
            error: None,
        }
    }
}

impl SkillGapView {
    pub fn target_role(&self) -> &str {
        &self.target_role
    }

    pub fn current_skills(&self) -> &[String] {
        &self.current_skills
    }

    pub fn report(&self) -> Option<&SkillGapReport> {
        self.report.as_ref()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Changing the role starts a fresh assessment.
    pub fn set_target_role(&mut self, role: &str) {
        self.target_role = role.to_string();
        self.current_skills.clear();
        self.report = None;
        self.suggestions.clear();
    }

    pub fn toggle_skill(&mut self, skill: &str) {
        catalog::toggle_in(&mut self.current_skills, skill);
        self.report = None;
    }

    pub async fn analyze<A: AnalyticsApi>(&mut self, api: &A) {
        self.report = None;
        self.error = None;

        let request = SkillGapRequest {
            target_role: self.target_role.clone(),
            current_skills: self.current_skills.clone(),
        };

        match api.recommend_skills(&request).await {
            Ok(report) => {
                info!(
                    "{} matches {}% of {}",
                    request.current_skills.len(),
                    report.match_percentage,
                    request.target_role
                );
                self.report = Some(report);
            }
            Err(e) => {
                error!("Skill gap analysis failed: {}", e);
                self.error = Some(e.detail());
            }
        }
    }

    /// Load the role's most frequent skills to choose from.
    pub async fn suggest_skills<A: AnalyticsApi>(&mut self, api: &A) {
        self.error = None;
        match api.role_skills(&self.target_role).await {
            Ok(skills) => self.suggestions = skills,
            Err(e) => {
                error!("Role skill lookup failed: {}", e);
                self.error = Some(e.detail());
            }
        }
    }
}

/// Recruiter candidate search.
#[derive(Debug)]
pub struct RecruiterView {
    required_skills: Vec<String>,
    top_n: u32,
    candidates: Vec<Candidate>,
    loading: bool,
    error: Option<String>,
}

impl Default for RecruiterView {
    fn default() -> Self {
        Self {
            required_skills: Vec::new(),
            top_n: DEFAULT_TOP_N,
            candidates: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl RecruiterView {
    pub fn required_skills(&self) -> &[String] {
        &self.required_skills
    }

    pub fn top_n(&self) -> u32 {
        self.top_n
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn toggle_skill(&mut self, skill: &str) {
        catalog::toggle_in(&mut self.required_skills, skill);
    }

    pub fn set_top_n(&mut self, top_n: u32) {
        self.top_n = top_n.clamp(MIN_TOP_N, MAX_TOP_N);
    }

    /// Search with the selected skills as-is; no default substitution here.
    pub async fn search<A: AnalyticsApi>(&mut self, api: &A) {
        self.loading = true;
        self.error = None;
        self.candidates.clear();

        let request = MatchRequest {
            skills_required: self.required_skills.clone(),
            top_n: self.top_n,
        };

        match api.match_candidates(&request).await {
            Ok(candidates) => {
                info!("Recruiter search returned {} candidates", candidates.len());
                self.candidates = candidates;
            }
            Err(e) => {
                error!("Candidate search failed: {}", e);
                self.error = Some(e.detail());
            }
        }

        self.loading = false;
    }
}
