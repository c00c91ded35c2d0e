use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

use crate::config::AppConfig;
use crate::RawCounts;

/// Errors from the external prediction call. The service owns the model;
/// failures are surfaced to the caller as-is, never retried, and never
/// handed to the scorer.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("failed to build prediction client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("prediction request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("prediction service error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("prediction response parse failed: {0}")]
    Malformed(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct PredictClient {
    endpoint: String,
    client: reqwest::Client,
}

/// Draft-tweet features sent to the prediction service.
#[derive(Debug, Clone, Serialize)]
pub struct TweetFeatures {
    pub text: String,
    pub has_image: bool,
    pub has_video: bool,
    pub has_link: bool,
    pub has_mention: bool,
    pub has_crypto_mention: bool,
    pub is_quoting: bool,
    pub has_poll: bool,
    pub time_posted: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl TweetFeatures {
    pub fn new(text: String, time_posted: DateTime<Utc>) -> Self {
        let length = text.chars().count();
        Self {
            text,
            has_image: false,
            has_video: false,
            has_link: false,
            has_mention: false,
            has_crypto_mention: false,
            is_quoting: false,
            has_poll: false,
            time_posted,
            follower_count: None,
            view_count: None,
            length: Some(length),
        }
    }
}

impl PredictClient {
    pub fn from_config(config: &AppConfig) -> Result<Self, PredictError> {
        let timeout = Duration::from_millis(config.predictor.timeout_ms);
        PredictClient::new(config.predictor.endpoint.clone(), timeout)
    }

    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, PredictError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PredictError::Client)?;
        Ok(Self { endpoint, client })
    }

    /// POSTs the draft features and decodes the counts strictly; a missing,
    /// negative or non-integer field in the response is an error, not a
    /// garbage score.
    pub async fn predict(&self, features: &TweetFeatures) -> Result<RawCounts, PredictError> {
        let url = format!("{}/predict", self.endpoint.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .json(features)
            .send()
            .await
            .map_err(PredictError::Request)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PredictError::Status { status, body });
        }

        response
            .json::<RawCounts>()
            .await
            .map_err(PredictError::Malformed)
    }
}
