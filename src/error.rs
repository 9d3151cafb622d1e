// src/error.rs
//! Error types shared by the backend client and the dashboard workflows

use serde_json::{Map, Value};
use thiserror::Error;

/// Shown when an analysis fails without a usable `error` field.
pub const GENERIC_ANALYSIS_FAILURE: &str = "Connection failure or incompatible CSV.";

/// The `error` field of a backend response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload {
    Message(String),
    Structured(Map<String, Value>),
    Absent,
}

impl ErrorPayload {
    /// Extract the `error` field from a response body, if any.
    pub fn from_body(body: Option<&Value>) -> Self {
        match body.and_then(|b| b.get("error")) {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(s)) => Self::Message(s.clone()),
            Some(Value::Object(map)) => Self::Structured(map.clone()),
            Some(other) => Self::Message(other.to_string()),
        }
    }

    /// Human-readable form: strings as-is, objects serialized to JSON.
    pub fn humanize(&self) -> Option<String> {
        match self {
            Self::Message(s) => Some(s.clone()),
            Self::Structured(map) => {
                Some(serde_json::to_string(map).unwrap_or_else(|_| format!("{:?}", map)))
            }
            Self::Absent => None,
        }
    }
}

impl std::fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.humanize() {
            Some(text) => f.write_str(&text),
            None => f.write_str("unknown backend error"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    #[error("Request failed with status code {status}")]
    Status { status: u16, body: Option<Value> },

    #[error("Backend rejected the request: {0}")]
    Rejected(ErrorPayload),

    #[error("Failed to decode {endpoint} response: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(endpoint: &str, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        }
    }

    /// Response body attached to the failure, when the backend sent one.
    pub fn body(&self) -> Option<Value> {
        match self {
            Self::Status { body, .. } => body.clone(),
            Self::Rejected(payload) => match payload {
                ErrorPayload::Message(s) => Some(serde_json::json!({ "error": s })),
                ErrorPayload::Structured(map) => {
                    Some(serde_json::json!({ "error": Value::Object(map.clone()) }))
                }
                ErrorPayload::Absent => None,
            },
            _ => None,
        }
    }

    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload::from_body(self.body().as_ref())
    }

    /// Message used by the upload workflow's error state.
    pub fn analysis_message(&self) -> String {
        self.payload()
            .humanize()
            .unwrap_or_else(|| GENERIC_ANALYSIS_FAILURE.to_string())
    }

    /// Flat message used by the form views: transport text plus the JSON body.
    pub fn detail(&self) -> String {
        match self {
            Self::Status { body: Some(body), .. } => format!("{}: {}", self, body),
            _ => self.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    #[error("No CSV file selected")]
    NoFile,

    #[error("The role column must be mapped before confirming")]
    MappingIncomplete,

    #[error("Cannot {action} while {from}")]
    InvalidTransition { from: String, action: &'static str },

    #[error("Column '{0}' is not present in the uploaded file")]
    UnknownColumn(String),
}
