//! In-memory analytics backend for workflow tests

#![allow(dead_code)]

use hr_analytics::core::AnalyticsApi;
use hr_analytics::types::{
    Candidate, ColumnMapping, CsvUpload, DebugInfo, ExperienceLevel, MarketData, MarketDataReply,
    MatchRequest, SalaryRequest, SkillDemand, SkillGapReport, SkillGapRequest,
};
use hr_analytics::ApiError;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One backend call as the stub saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Upload(String),
    MarketData(Option<ColumnMapping>),
    Match(MatchRequest),
    Predict(SalaryRequest),
    Recommend(SkillGapRequest),
    RoleSkills(String),
    Debug,
}

/// Scripted replies are consumed in order; an empty queue falls back to a
/// harmless success.
#[derive(Default)]
pub struct StubApi {
    calls: Mutex<Vec<Call>>,
    pub upload_replies: Mutex<VecDeque<Result<(), ApiError>>>,
    pub market_replies: Mutex<VecDeque<Result<MarketDataReply, ApiError>>>,
    pub match_replies: Mutex<VecDeque<Result<Vec<Candidate>, ApiError>>>,
    pub salary_replies: Mutex<VecDeque<Result<f64, ApiError>>>,
    pub gap_replies: Mutex<VecDeque<Result<SkillGapReport, ApiError>>>,
    pub role_skill_replies: Mutex<VecDeque<Result<Vec<String>, ApiError>>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_market(&self, reply: Result<MarketDataReply, ApiError>) {
        self.market_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_match(&self, reply: Result<Vec<Candidate>, ApiError>) {
        self.match_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_upload(&self, reply: Result<(), ApiError>) {
        self.upload_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_salary(&self, reply: Result<f64, ApiError>) {
        self.salary_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_gap(&self, reply: Result<SkillGapReport, ApiError>) {
        self.gap_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_role_skills(&self, reply: Result<Vec<String>, ApiError>) {
        self.role_skill_replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn match_calls(&self) -> Vec<MatchRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Match(req) => Some(req),
                _ => None,
            })
            .collect()
    }

    pub fn upload_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Upload(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl AnalyticsApi for StubApi {
    async fn upload_csv(&self, upload: &CsvUpload) -> Result<(), ApiError> {
        self.record(Call::Upload(upload.file_name.clone()));
        self.upload_replies.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn market_data(
        &self,
        mapping: Option<&ColumnMapping>,
    ) -> Result<MarketDataReply, ApiError> {
        self.record(Call::MarketData(mapping.cloned()));
        self.market_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(MarketDataReply::Ready(market())))
    }

    async fn match_candidates(&self, request: &MatchRequest) -> Result<Vec<Candidate>, ApiError> {
        self.record(Call::Match(request.clone()));
        self.match_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn predict_salary(&self, request: &SalaryRequest) -> Result<f64, ApiError> {
        self.record(Call::Predict(request.clone()));
        self.salary_replies.lock().unwrap().pop_front().unwrap_or(Ok(0.0))
    }

    async fn recommend_skills(
        &self,
        request: &SkillGapRequest,
    ) -> Result<SkillGapReport, ApiError> {
        self.record(Call::Recommend(request.clone()));
        self.gap_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SkillGapReport::default()))
    }

    async fn role_skills(&self, target_role: &str) -> Result<Vec<String>, ApiError> {
        self.record(Call::RoleSkills(target_role.to_string()));
        self.role_skill_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn debug_info(&self) -> Result<DebugInfo, ApiError> {
        self.record(Call::Debug);
        Ok(DebugInfo::new())
    }
}

pub fn csv_upload() -> CsvUpload {
    CsvUpload::new(
        "jobs.csv",
        b"Position,Pay,Stack\nData Scientist,120000,Python\n".to_vec(),
    )
    .expect("csv upload")
}

pub fn market() -> MarketData {
    MarketData {
        skill_demand: vec![
            SkillDemand { skill: "Python".into(), count: 40 },
            SkillDemand { skill: "SQL".into(), count: 31 },
        ],
        total_records: 120,
        ..Default::default()
    }
}

pub fn candidate(name: &str, score: f64) -> Candidate {
    Candidate {
        candidate_id: None,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        experience_level: ExperienceLevel::Years(4.0),
        skills: Some("Python, SQL".to_string()),
        score,
    }
}

pub fn mapping_required() -> MarketDataReply {
    MarketDataReply::MappingRequired {
        columns: vec!["Position".into(), "Pay".into(), "Stack".into()],
        detected: ColumnMapping::default(),
    }
}
