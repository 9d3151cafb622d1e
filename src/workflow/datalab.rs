// src/workflow/datalab.rs
//! The data lab: upload a CSV, resolve its columns, then browse the market
//! snapshot and a skill-filtered candidate ranking.

use tracing::{error, info, warn};

use crate::catalog::{self, DEFAULT_TOP_N};
use crate::core::AnalyticsApi;
use crate::error::{ApiError, WorkflowError};
use crate::types::{
    Candidate, ColumnMapping, CsvUpload, MappingField, MarketData, MarketDataReply, SkillDemand,
};
use crate::workflow::filters::{CandidateBoard, CandidateQuery, FilterState};
use crate::workflow::upload::{UploadSession, UploadStatus};

const DEMAND_MIX_SIZE: usize = 5;

#[derive(Debug, Default)]
pub struct DataLab {
    session: UploadSession,
    filters: FilterState,
    board: CandidateBoard,
    market: Option<MarketData>,
}

impl DataLab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &UploadSession {
        &self.session
    }

    pub fn status(&self) -> UploadStatus {
        self.session.status()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn market(&self) -> Option<&MarketData> {
        self.market.as_ref()
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.board.top(DEFAULT_TOP_N as usize)
    }

    pub fn is_loaded(&self) -> bool {
        self.session.status() == UploadStatus::Success
    }

    pub fn select_file(&mut self, file: CsvUpload) {
        self.session.select_file(file);
        self.market = None;
        self.board.clear();
    }

    pub fn set_mapping_field(
        &mut self,
        field: MappingField,
        column: &str,
    ) -> Result<(), WorkflowError> {
        self.session.set_mapping_field(field, column)
    }

    pub fn cancel_mapping(&mut self) -> Result<(), WorkflowError> {
        self.session.cancel()
    }

    /// Upload the selected file and request the first analysis.
    pub async fn analyze<A: AnalyticsApi>(
        &mut self,
        api: &A,
    ) -> Result<UploadStatus, WorkflowError> {
        self.session.begin_analysis()?;
        self.market = None;
        self.board.clear();

        self.run_analysis(api, None).await;
        Ok(self.session.status())
    }

    /// Repeat the analysis with the user-completed mapping. The file is not re-sent.
    pub async fn confirm_mapping<A: AnalyticsApi>(
        &mut self,
        api: &A,
    ) -> Result<UploadStatus, WorkflowError> {
        let mapping = self.session.begin_remap()?;
        info!("Re-analyzing with role column '{}'", mapping.role);

        self.run_analysis(api, Some(mapping)).await;
        Ok(self.session.status())
    }

    async fn run_analysis<A: AnalyticsApi>(&mut self, api: &A, mapping: Option<ColumnMapping>) {
        if let Err(e) = self.try_analysis(api, mapping.as_ref()).await {
            let message = e.analysis_message();
            error!("Analysis failure: {} ({})", message, e);
            self.session.fail(message);
        }
    }

    async fn try_analysis<A: AnalyticsApi>(
        &mut self,
        api: &A,
        mapping: Option<&ColumnMapping>,
    ) -> Result<(), ApiError> {
        if let Some(file) = self.session.pending_upload() {
            api.upload_csv(file).await?;
            self.session.mark_uploaded();
        }

        match api.market_data(mapping).await? {
            MarketDataReply::MappingRequired { columns, detected } => {
                warn!("Column mapping required");
                self.session.require_mapping(columns, detected);
            }
            MarketDataReply::Ready(data) => {
                info!(
                    "Market snapshot: {} records, {} skills in demand",
                    data.total_records,
                    data.skill_demand.len()
                );
                self.market = Some(data);

                let query = self.board.issue(self.filters.match_skills());
                let candidates = api.match_candidates(&query.request).await?;
                self.board.apply(query.seq, candidates);
                self.session.succeed();
            }
        }
        Ok(())
    }

    /// Flip a required skill. Yields the one refresh to run when the lab is loaded.
    #[must_use = "the ranking only follows the selection once the query is refreshed"]
    pub fn toggle_skill(&mut self, skill: &str) -> Option<CandidateQuery> {
        self.filters.toggle_skill(skill);
        self.next_query()
    }

    #[must_use = "the ranking only follows the selection once the query is refreshed"]
    pub fn reset_filters(&mut self) -> Option<CandidateQuery> {
        self.filters.reset();
        self.next_query()
    }

    /// Toggle a skill and run the resulting refresh. False when nothing was applied.
    pub async fn toggle_and_refresh<A: AnalyticsApi>(&mut self, api: &A, skill: &str) -> bool {
        match self.toggle_skill(skill) {
            Some(query) => self.refresh(api, query).await,
            None => false,
        }
    }

    /// Preselect skills before any file is analyzed; the first analysis uses them.
    pub fn preselect_skills(&mut self, skills: &[String]) {
        for skill in skills {
            if !self.filters.is_selected(skill) {
                self.filters.toggle_skill(skill);
            }
        }
    }

    pub fn set_role(&mut self, role: &str) {
        self.filters.role = role.to_string();
    }

    pub fn set_experience(&mut self, years: u32) {
        self.filters.experience = years;
    }

    fn next_query(&mut self) -> Option<CandidateQuery> {
        if self.is_loaded() {
            Some(self.board.issue(self.filters.match_skills()))
        } else {
            None
        }
    }

    pub async fn refresh<A: AnalyticsApi>(&mut self, api: &A, query: CandidateQuery) -> bool {
        let result = api.match_candidates(&query.request).await;
        self.complete_refresh(query.seq, result)
    }

    /// Apply a refresh result. Failures keep the current ranking.
    pub fn complete_refresh(
        &mut self,
        seq: u64,
        result: Result<Vec<Candidate>, ApiError>,
    ) -> bool {
        match result {
            Ok(candidates) => self.board.apply(seq, candidates),
            Err(e) => {
                error!("Candidate refresh #{} failed: {}", seq, e.detail());
                false
            }
        }
    }

    /// Top skills by demand, as charted in the overview.
    pub fn demand_mix(&self) -> &[SkillDemand] {
        match &self.market {
            Some(m) => &m.skill_demand[..m.skill_demand.len().min(DEMAND_MIX_SIZE)],
            None => &[],
        }
    }

    /// Roles offered by the filter panel: the dataset's own, else the catalog.
    pub fn role_options(&self) -> Vec<String> {
        match &self.market {
            Some(m) if !m.filters.roles.is_empty() => m.filters.roles.clone(),
            _ => catalog::JOB_ROLES.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn skill_options(&self) -> Vec<String> {
        match &self.market {
            Some(m) if !m.filters.skills.is_empty() => m.filters.skills.clone(),
            _ => catalog::all_skills().into_iter().map(String::from).collect(),
        }
    }

    /// Experience thresholds reported by the dataset; empty means a free 0..=25 range.
    pub fn experience_options(&self) -> Vec<u32> {
        self.market
            .as_ref()
            .map(|m| {
                m.filters
                    .experience
                    .iter()
                    .filter(|y| **y >= 0.0)
                    .map(|y| *y as u32)
                    .collect()
            })
            .unwrap_or_default()
    }
}
