use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Shown when a habit has no completions yet; the generator is not called.
pub const NO_DATA_MESSAGE: &str =
    "Not enough data to generate insights. Keep tracking your habit!";

/// Shown for any generator failure; the underlying error is only logged.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate insights. Please try again later.";

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("no insight endpoint configured")]
    Unconfigured,
    #[error("insight request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("insight service returned status {0}")]
    Status(StatusCode),
    #[error("insight service returned no tips")]
    EmptyTips,
}

/// Turns a habit name and its comma-joined completion dates into a short
/// coaching tip. Failures stay opaque to callers.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn generate(
        &self,
        habit_name: &str,
        completion_data: &str,
    ) -> Result<String, InsightError>;
}

// Wire contract of the insight service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsightRequest<'a> {
    habit_name: &'a str,
    completion_data: &'a str,
}

#[derive(Debug, Deserialize)]
struct InsightReply {
    tips: String,
}

/// Client for an HTTP insight service (`INSIGHTS_URL`). With no endpoint
/// configured every request fails, which the handler turns into the generic
/// failure message.
pub struct HttpInsightGenerator {
    client: Client,
    endpoint: Option<String>,
}

impl HttpInsightGenerator {
    pub fn from_env() -> Self {
        Self::new(env::var("INSIGHTS_URL").ok())
    }

    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl InsightGenerator for HttpInsightGenerator {
    async fn generate(
        &self,
        habit_name: &str,
        completion_data: &str,
    ) -> Result<String, InsightError> {
        let endpoint = self.endpoint.as_deref().ok_or(InsightError::Unconfigured)?;

        let response = self
            .client
            .post(endpoint)
            .json(&InsightRequest {
                habit_name,
                completion_data,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(InsightError::Status(response.status()));
        }

        let reply: InsightReply = response.json().await?;
        let tips = reply.tips.trim();
        if tips.is_empty() {
            return Err(InsightError::EmptyTips);
        }
        Ok(tips.to_string())
    }
}
