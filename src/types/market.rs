// src/types/market.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ErrorPayload};

const MAPPING_REQUIRED: &str = "mapping_required";

/// Association between the semantic fields and actual CSV headers.
/// Empty strings mean "not mapped".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub salary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingField {
    Role,
    Salary,
    Skills,
    Experience,
}

impl MappingField {
    pub const ALL: [MappingField; 4] = [
        MappingField::Role,
        MappingField::Skills,
        MappingField::Experience,
        MappingField::Salary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Role => "Job Role / Title (Required)",
            Self::Skills => "Skills / Tools (Recommended)",
            Self::Experience => "Years of Experience (Optional)",
            Self::Salary => "Salary / Compensation (Optional)",
        }
    }
}

impl ColumnMapping {
    pub fn get(&self, field: MappingField) -> &str {
        match field {
            MappingField::Role => &self.role,
            MappingField::Salary => &self.salary,
            MappingField::Skills => &self.skills,
            MappingField::Experience => &self.experience,
        }
    }

    pub fn set(&mut self, field: MappingField, column: String) {
        match field {
            MappingField::Role => self.role = column,
            MappingField::Salary => self.salary = column,
            MappingField::Skills => self.skills = column,
            MappingField::Experience => self.experience = column,
        }
    }

    pub fn has_role(&self) -> bool {
        !self.role.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDemand {
    pub skill: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSalary {
    pub level: f64,
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSalary {
    pub title: String,
    pub salary: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketFilters {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub experience: Vec<f64>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Aggregate snapshot returned by a successful analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub skill_demand: Vec<SkillDemand>,
    #[serde(default)]
    pub exp_salary: Vec<ExperienceSalary>,
    #[serde(default)]
    pub job_salary: Vec<RoleSalary>,
    #[serde(default)]
    pub total_records: u64,
    #[serde(default)]
    pub filters: MarketFilters,
    #[serde(default)]
    pub mapping: Option<ColumnMapping>,
}

#[derive(Debug, Serialize)]
pub struct MarketDataRequest<'a> {
    pub mapping: Option<&'a ColumnMapping>,
}

/// Outcome of a `market_data` call.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketDataReply {
    MappingRequired {
        columns: Vec<String>,
        detected: ColumnMapping,
    },
    Ready(MarketData),
}

#[derive(Deserialize)]
struct MappingRequiredBody {
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    detected: Option<ColumnMapping>,
}

impl MarketDataReply {
    /// Classify a successful (2xx) `market_data` body.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        let is_mapping_signal = value
            .get("error")
            .and_then(Value::as_str)
            .map(|e| e == MAPPING_REQUIRED)
            .unwrap_or(false);

        if is_mapping_signal {
            let body: MappingRequiredBody = serde_json::from_value(value)
                .map_err(|e| ApiError::decode("market_data", e))?;
            return Ok(Self::MappingRequired {
                columns: body.columns,
                detected: body.detected.unwrap_or_default(),
            });
        }

        match ErrorPayload::from_body(Some(&value)) {
            ErrorPayload::Absent => {}
            payload => return Err(ApiError::Rejected(payload)),
        }

        serde_json::from_value(value)
            .map(Self::Ready)
            .map_err(|e| ApiError::decode("market_data", e))
    }
}
