// src/workflow/upload.rs
//! Upload session state: file selection, column mapping and analysis status

use tracing::{debug, info};

use crate::error::WorkflowError;
use crate::types::{ColumnMapping, CsvUpload, MappingField};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Analyzing,
    MappingNeeded,
    Success,
    Error,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Analyzing => "analyzing",
            Self::MappingNeeded => "mapping_needed",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One CSV file's trip through upload, optional mapping, and analysis.
#[derive(Debug, Default)]
pub struct UploadSession {
    file: Option<CsvUpload>,
    status: UploadStatus,
    error_message: Option<String>,
    uploaded: bool,
    available_columns: Vec<String>,
    mapping: ColumnMapping,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over with a new file. Allowed from any state.
    pub fn select_file(&mut self, file: CsvUpload) {
        info!("Selected {} ({} bytes)", file.file_name, file.len());
        *self = Self {
            file: Some(file),
            ..Self::default()
        };
    }

    pub fn file(&self) -> Option<&CsvUpload> {
        self.file.as_ref()
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn available_columns(&self) -> &[String] {
        &self.available_columns
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    pub fn is_uploaded(&self) -> bool {
        self.uploaded
    }

    /// Confirmation stays disabled until the role column is chosen.
    pub fn can_confirm(&self) -> bool {
        self.status == UploadStatus::MappingNeeded && self.mapping.has_role()
    }

    /// Point one semantic field at a reported column ("" clears it).
    pub fn set_mapping_field(
        &mut self,
        field: MappingField,
        column: &str,
    ) -> Result<(), WorkflowError> {
        if self.status != UploadStatus::MappingNeeded {
            return Err(self.invalid("edit the column mapping"));
        }
        if !column.is_empty() && !self.available_columns.iter().any(|c| c == column) {
            return Err(WorkflowError::UnknownColumn(column.to_string()));
        }
        self.mapping.set(field, column.to_string());
        Ok(())
    }

    /// Abandon mapping entry, dropping the file and partial mapping.
    pub fn cancel(&mut self) -> Result<(), WorkflowError> {
        if self.status != UploadStatus::MappingNeeded {
            return Err(self.invalid("cancel mapping"));
        }
        info!("Mapping cancelled, returning to upload prompt");
        *self = Self::default();
        Ok(())
    }

    pub(crate) fn begin_analysis(&mut self) -> Result<(), WorkflowError> {
        if self.file.is_none() {
            return Err(WorkflowError::NoFile);
        }
        if self.status != UploadStatus::Idle {
            return Err(self.invalid("start an analysis"));
        }
        self.status = UploadStatus::Analyzing;
        self.error_message = None;
        Ok(())
    }

    /// Move to `Analyzing` with the confirmed mapping.
    pub(crate) fn begin_remap(&mut self) -> Result<ColumnMapping, WorkflowError> {
        if self.status != UploadStatus::MappingNeeded {
            return Err(self.invalid("confirm a mapping"));
        }
        if !self.mapping.has_role() {
            return Err(WorkflowError::MappingIncomplete);
        }
        self.status = UploadStatus::Analyzing;
        Ok(self.mapping.clone())
    }

    /// The file, if it still has to be sent to the backend.
    pub(crate) fn pending_upload(&self) -> Option<&CsvUpload> {
        if self.uploaded {
            None
        } else {
            self.file.as_ref()
        }
    }

    pub(crate) fn mark_uploaded(&mut self) {
        self.uploaded = true;
    }

    pub(crate) fn require_mapping(&mut self, columns: Vec<String>, detected: ColumnMapping) {
        debug!("Backend needs a mapping over {} columns", columns.len());
        self.available_columns = columns;
        self.mapping = detected;
        self.status = UploadStatus::MappingNeeded;
    }

    pub(crate) fn succeed(&mut self) {
        self.status = UploadStatus::Success;
        self.error_message = None;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.status = UploadStatus::Error;
        self.error_message = Some(message);
    }

    fn invalid(&self, action: &'static str) -> WorkflowError {
        WorkflowError::InvalidTransition {
            from: self.status.to_string(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv() -> CsvUpload {
        CsvUpload::new("jobs.csv", b"Position,Pay\nAnalyst,10\n".to_vec()).unwrap()
    }

    fn mapping_needed() -> UploadSession {
        let mut session = UploadSession::new();
        session.select_file(csv());
        session.begin_analysis().unwrap();
        session.mark_uploaded();
        session.require_mapping(
            vec!["Position".into(), "Pay".into()],
            ColumnMapping {
                salary: "Pay".into(),
                ..Default::default()
            },
        );
        session
    }

    #[test]
    fn test_analysis_requires_a_file() {
        let mut session = UploadSession::new();
        assert_eq!(session.begin_analysis(), Err(WorkflowError::NoFile));
        assert_eq!(session.status(), UploadStatus::Idle);
    }

    #[test]
    fn test_confirm_disabled_until_role_mapped() {
        let mut session = mapping_needed();
        assert!(!session.can_confirm());
        assert_eq!(session.begin_remap(), Err(WorkflowError::MappingIncomplete));
        assert_eq!(session.status(), UploadStatus::MappingNeeded);

        session.set_mapping_field(MappingField::Role, "Position").unwrap();
        assert!(session.can_confirm());
        let mapping = session.begin_remap().unwrap();
        assert_eq!(mapping.role, "Position");
        assert_eq!(mapping.salary, "Pay");
        assert_eq!(session.status(), UploadStatus::Analyzing);
    }

    #[test]
    fn test_mapping_rejects_unknown_columns() {
        let mut session = mapping_needed();
        assert_eq!(
            session.set_mapping_field(MappingField::Role, "Title"),
            Err(WorkflowError::UnknownColumn("Title".into()))
        );
        session.set_mapping_field(MappingField::Salary, "").unwrap();
        assert_eq!(session.mapping().salary, "");
    }

    #[test]
    fn test_cancel_discards_file_and_mapping() {
        let mut session = mapping_needed();
        session.set_mapping_field(MappingField::Role, "Position").unwrap();
        session.cancel().unwrap();

        assert_eq!(session.status(), UploadStatus::Idle);
        assert!(session.file().is_none());
        assert_eq!(session.mapping(), &ColumnMapping::default());
        assert!(session.available_columns().is_empty());
    }

    #[test]
    fn test_error_is_terminal_until_new_file() {
        let mut session = UploadSession::new();
        session.select_file(csv());
        session.begin_analysis().unwrap();
        session.fail("Dataset not found".into());

        assert!(matches!(
            session.begin_analysis(),
            Err(WorkflowError::InvalidTransition { .. })
        ));
        assert_eq!(session.error_message(), Some("Dataset not found"));

        session.select_file(csv());
        assert_eq!(session.status(), UploadStatus::Idle);
        assert_eq!(session.error_message(), None);
        assert!(!session.is_uploaded());
        session.begin_analysis().unwrap();
    }

    #[test]
    fn test_cancel_only_from_mapping_state() {
        let mut session = UploadSession::new();
        assert!(session.cancel().is_err());
    }

    #[test]
    fn test_status_names() {
        assert_eq!(UploadStatus::MappingNeeded.to_string(), "mapping_needed");
        assert_eq!(UploadStatus::default(), UploadStatus::Idle);
    }
}
