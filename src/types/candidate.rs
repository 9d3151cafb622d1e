// src/types/candidate.rs
use serde::{Deserialize, Serialize};

/// Backend-reported experience: a number of years or a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExperienceLevel {
    Years(f64),
    Label(String),
}

impl Default for ExperienceLevel {
    fn default() -> Self {
        Self::Label(String::new())
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Years(y) => write!(f, "{}", y),
            Self::Label(l) => f.write_str(l),
        }
    }
}

/// One ranked candidate. Field names follow the backend's CSV headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "Candidate ID", default, skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<serde_json::Value>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Experience Level", default)]
    pub experience_level: ExperienceLevel,
    #[serde(rename = "Skills", default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    /// Fit score in 0..=100, computed by the backend.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub skills_required: Vec<String>,
    pub top_n: u32,
}

#[derive(Debug, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidate_parses_backend_record() {
        let response: MatchResponse = serde_json::from_value(json!({
            "candidates": [{
                "Candidate ID": 1042,
                "Name": "Asha Rao",
                "Email": "asha@example.com",
                "Experience Level": "Senior",
                "Skills": "Python, SQL, Spark",
                "score": 87.3
            }, {
                "Name": "Lee Kim",
                "Email": "lee@example.com",
                "Experience Level": 4,
                "score": 51.0
            }]
        }))
        .unwrap();

        assert_eq!(response.candidates.len(), 2);
        let first = &response.candidates[0];
        assert_eq!(first.name, "Asha Rao");
        assert_eq!(first.experience_level.to_string(), "Senior");
        assert_eq!(first.score, 87.3);
        assert_eq!(response.candidates[1].experience_level, ExperienceLevel::Years(4.0));
        assert_eq!(response.candidates[1].experience_level.to_string(), "4");
    }
}
