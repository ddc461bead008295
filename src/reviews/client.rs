//! Review API client

use std::time::Duration;

use crate::config::ReviewsConfig;
use crate::error::{AppError, Result};

use super::types::{ReviewEnvelope, ReviewFeed};

/// Deadline for one upstream call. The call stays at-most-once with no
/// retry; expiry surfaces as an upstream error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the external review API
#[derive(Clone)]
pub struct ReviewClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ReviewClient {
    pub fn new(config: &ReviewsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Upstream(format!("Failed to build review client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch reviews for a title.
    ///
    /// The API key goes out as-is, empty string included; an unset key
    /// is the upstream's rejection to make.
    pub async fn fetch_reviews(&self, title: &str) -> Result<ReviewFeed> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("title", title), ("api-key", &self.api_key)])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!("Upstream returned {}", status)));
        }

        let envelope: ReviewEnvelope = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse body: {}", e)))?;

        Ok(envelope.into())
    }
}
