// src/workflow/filters.rs
//! Filter panel state and the candidate ranking it keeps in sync

use tracing::{debug, warn};

use crate::catalog::{self, DEFAULT_TOP_N};
use crate::types::{Candidate, MatchRequest};

pub const ALL_ROLES: &str = "All";
pub const DEFAULT_MIN_EXPERIENCE: u32 = 5;

/// Role and experience are kept for display only; the candidate
/// query is driven by `selected_skills` alone.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub role: String,
    pub experience: u32,
    selected_skills: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            role: ALL_ROLES.to_string(),
            experience: DEFAULT_MIN_EXPERIENCE,
            selected_skills: Vec::new(),
        }
    }
}

impl FilterState {
    pub fn selected_skills(&self) -> &[String] {
        &self.selected_skills
    }

    pub fn is_selected(&self, skill: &str) -> bool {
        self.selected_skills.iter().any(|s| s == skill)
    }

    pub fn toggle_skill(&mut self, skill: &str) {
        catalog::toggle_in(&mut self.selected_skills, skill);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Skills to send: the selection, or the default pair when nothing is selected.
    pub fn match_skills(&self) -> Vec<String> {
        if self.selected_skills.is_empty() {
            catalog::default_match_skills()
        } else {
            self.selected_skills.clone()
        }
    }
}

/// A candidate request tagged with its issue order.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateQuery {
    pub seq: u64,
    pub request: MatchRequest,
}

/// Current ranking plus the sequence bookkeeping for in-flight refreshes.
#[derive(Debug, Default)]
pub struct CandidateBoard {
    last_issued: u64,
    candidates: Vec<Candidate>,
}

impl CandidateBoard {
    pub fn issue(&mut self, skills: Vec<String>) -> CandidateQuery {
        self.last_issued += 1;
        debug!("Issuing candidate query #{} for {:?}", self.last_issued, skills);
        CandidateQuery {
            seq: self.last_issued,
            request: MatchRequest {
                skills_required: skills,
                top_n: DEFAULT_TOP_N,
            },
        }
    }

    /// Replace the ranking unless a newer query has been issued since `seq`.
    pub fn apply(&mut self, seq: u64, candidates: Vec<Candidate>) -> bool {
        if seq < self.last_issued {
            warn!(
                "Discarding stale candidate response #{} (latest is #{})",
                seq, self.last_issued
            );
            return false;
        }
        self.candidates = candidates;
        true
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn top(&self, n: usize) -> &[Candidate] {
        &self.candidates[..self.candidates.len().min(n)]
    }

    pub fn clear(&mut self) {
        self.candidates.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExperienceLevel;

    fn candidate(name: &str, score: f64) -> Candidate {
        Candidate {
            candidate_id: None,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            experience_level: ExperienceLevel::Label("Mid".into()),
            skills: None,
            score,
        }
    }

    #[test]
    fn test_empty_selection_uses_default_pair() {
        let filters = FilterState::default();
        assert_eq!(filters.match_skills(), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_selection_is_sent_in_full() {
        let mut filters = FilterState::default();
        filters.toggle_skill("Rust");
        filters.toggle_skill("Docker");
        assert_eq!(filters.match_skills(), vec!["Rust", "Docker"]);
        filters.toggle_skill("Rust");
        assert_eq!(filters.match_skills(), vec!["Docker"]);
        filters.toggle_skill("Docker");
        assert_eq!(filters.match_skills(), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filters = FilterState::default();
        filters.role = "ML Engineer".into();
        filters.experience = 12;
        filters.toggle_skill("Go");
        filters.reset();
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut board = CandidateBoard::default();
        let first = board.issue(vec!["Go".into()]);
        let second = board.issue(vec!["Go".into(), "Rust".into()]);
        assert_eq!(second.seq, first.seq + 1);

        assert!(board.apply(second.seq, vec![candidate("Newer", 90.0)]));
        assert!(!board.apply(first.seq, vec![candidate("Older", 40.0)]));
        assert_eq!(board.candidates()[0].name, "Newer");
    }

    #[test]
    fn test_top_caps_at_length() {
        let mut board = CandidateBoard::default();
        let q = board.issue(vec!["SQL".into()]);
        board.apply(q.seq, vec![candidate("A", 80.0), candidate("B", 70.0)]);
        assert_eq!(board.top(10).len(), 2);
        assert_eq!(board.top(1)[0].name, "A");
    }
}
