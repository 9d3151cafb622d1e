//! Client library for the HR analytics backend: CSV ingestion with column
//! mapping, market snapshots, candidate matching, salary prediction and
//! skill-gap analysis.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod preferences;
pub mod report;
pub mod types;
pub mod utils;
pub mod workflow;

pub use crate::config::{AppConfig, ConfigManager};
pub use crate::core::{AnalyticsApi, ServiceClient};
pub use crate::error::{ApiError, ErrorPayload, WorkflowError};
pub use crate::workflow::{DataLab, RecruiterView, SalaryView, SkillGapView, UploadStatus};
