// src/core/service_client.rs
//! HTTP client for the analytics backend - JSON for everything but the CSV upload

use anyhow::Context;
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, info_span, trace, warn, Instrument};
use uuid::Uuid;

use crate::core::api::AnalyticsApi;
use crate::error::{ApiError, ErrorPayload};
use crate::types::{
    Candidate, ColumnMapping, CsvUpload, DebugInfo, MarketDataReply, MarketDataRequest,
    MatchRequest, MatchResponse, RoleSkillsRequest, RoleSkillsResponse, SalaryPrediction,
    SalaryRequest, SkillGapReport, SkillGapRequest,
};

const UPLOAD_CSV_ENDPOINT: &str = "/upload_csv";
const MARKET_DATA_ENDPOINT: &str = "/market_data";
const MATCH_CANDIDATES_ENDPOINT: &str = "/match_candidates";
const PREDICT_SALARY_ENDPOINT: &str = "/predict_salary";
const RECOMMEND_SKILLS_ENDPOINT: &str = "/recommend_skills";
const ROLE_SKILLS_ENDPOINT: &str = "/get_role_skills";
const DEBUG_ENDPOINT: &str = "/debug";

const REQUEST_ID_HEADER: &str = "X-Request-Id";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(base_url: &str, timeout_seconds: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Send a request and return its JSON body, mapping non-2xx replies to errors.
    async fn fetch_value(&self, endpoint: &str, request: RequestBuilder) -> Result<Value, ApiError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("backend_call", endpoint, request_id = %request_id);

        async move {
            info!("Calling analytics backend");

            let response = request
                .header(REQUEST_ID_HEADER, request_id.to_string())
                .send()
                .await
                .map_err(|e| {
                    error!("Transport failure: {}", e);
                    ApiError::transport(e)
                })?;

            let status = response.status();
            trace!("Response status: {}", status);

            let text = response.text().await.map_err(ApiError::transport)?;
            let body = parse_body(&text);

            if status.is_success() {
                debug!("Backend replied with {} bytes", text.len());
                body.ok_or_else(|| ApiError::decode(endpoint, "response body is not JSON"))
            } else {
                warn!("Backend error status {}: {}", status, text);
                Err(ApiError::Status {
                    status: status.as_u16(),
                    body: body.or_else(|| raw_body(&text)),
                })
            }
        }
        .instrument(span)
        .await
    }

    async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R, ApiError>
    where
        T: serde::Serialize,
        R: DeserializeOwned,
    {
        let request = self.client.post(self.endpoint_url(endpoint)).json(payload);
        let value = self.fetch_value(endpoint, request).await?;
        decode(endpoint, value)
    }
}

fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        None
    } else {
        serde_json::from_str(text).ok()
    }
}

/// Non-JSON error bodies (proxy HTML, plain text) are kept as a JSON string.
fn raw_body(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(Value::String(trimmed.to_string()))
    }
}

/// Decode a 2xx body, treating an `error` field as a rejection.
pub fn decode<R: DeserializeOwned>(endpoint: &str, value: Value) -> Result<R, ApiError> {
    match ErrorPayload::from_body(Some(&value)) {
        ErrorPayload::Absent => {}
        payload => return Err(ApiError::Rejected(payload)),
    }
    serde_json::from_value(value).map_err(|e| ApiError::decode(endpoint, e))
}

impl AnalyticsApi for ServiceClient {
    async fn upload_csv(&self, upload: &CsvUpload) -> Result<(), ApiError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str("text/csv")
            .map_err(|e| ApiError::transport(format!("Failed to create multipart: {}", e)))?;
        let form = Form::new().part("file", part);

        info!(
            "Uploading {} ({} bytes) to {}",
            upload.file_name,
            upload.len(),
            self.endpoint_url(UPLOAD_CSV_ENDPOINT)
        );

        let request = self
            .client
            .post(self.endpoint_url(UPLOAD_CSV_ENDPOINT))
            .multipart(form);

        // Only success or failure matters; the body is informational.
        match self.fetch_value(UPLOAD_CSV_ENDPOINT, request).await {
            Ok(_) | Err(ApiError::Decode { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn market_data(
        &self,
        mapping: Option<&ColumnMapping>,
    ) -> Result<MarketDataReply, ApiError> {
        let request = self
            .client
            .post(self.endpoint_url(MARKET_DATA_ENDPOINT))
            .json(&MarketDataRequest { mapping });
        let value = self.fetch_value(MARKET_DATA_ENDPOINT, request).await?;
        MarketDataReply::from_value(value)
    }

    async fn match_candidates(&self, request: &MatchRequest) -> Result<Vec<Candidate>, ApiError> {
        let response: MatchResponse = self.post_json(MATCH_CANDIDATES_ENDPOINT, request).await?;
        Ok(response.candidates)
    }

    async fn predict_salary(&self, request: &SalaryRequest) -> Result<f64, ApiError> {
        let response: SalaryPrediction = self.post_json(PREDICT_SALARY_ENDPOINT, request).await?;
        Ok(response.predicted_salary)
    }

    async fn recommend_skills(
        &self,
        request: &SkillGapRequest,
    ) -> Result<SkillGapReport, ApiError> {
        self.post_json(RECOMMEND_SKILLS_ENDPOINT, request).await
    }

    async fn role_skills(&self, target_role: &str) -> Result<Vec<String>, ApiError> {
        let response: RoleSkillsResponse = self
            .post_json(ROLE_SKILLS_ENDPOINT, &RoleSkillsRequest { target_role })
            .await?;
        Ok(response.skills)
    }

    async fn debug_info(&self) -> Result<DebugInfo, ApiError> {
        let request = self.client.get(self.endpoint_url(DEBUG_ENDPOINT));
        let value = self.fetch_value(DEBUG_ENDPOINT, request).await?;
        decode(DEBUG_ENDPOINT, value)
    }
}
