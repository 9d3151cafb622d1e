//! Per-view state containers driven by the analytics backend

pub mod datalab;
pub mod filters;
pub mod upload;
pub mod views;

pub use datalab::DataLab;
pub use filters::{CandidateBoard, CandidateQuery, FilterState};
pub use upload::{UploadSession, UploadStatus};
pub use views::{RecruiterView, SalaryView, SkillGapView};
