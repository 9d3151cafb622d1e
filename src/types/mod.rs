pub mod candidate;
pub mod market;
pub mod response;
pub mod upload;

pub use candidate::{Candidate, ExperienceLevel, MatchRequest, MatchResponse};
pub use market::{
    ColumnMapping, ExperienceSalary, MappingField, MarketData, MarketDataReply, MarketDataRequest,
    MarketFilters, RoleSalary, SkillDemand,
};
pub use response::{
    DebugInfo, RoleSkillsRequest, RoleSkillsResponse, SalaryPrediction, SalaryRequest,
    SkillGapReport, SkillGapRequest,
};
pub use upload::CsvUpload;
