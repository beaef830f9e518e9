//! HTTP client for the monitoring backend.
//!
//! Wraps a [`reqwest::Client`] with the backend base URL and request
//! timeout from configuration. Every method fetches one upstream endpoint
//! and returns its body as loose JSON for the normalization layer; non-2xx
//! responses map to [`DashboardError::Backend`] so the proxy can propagate
//! the upstream status.

use std::time::Duration;

use serde_json::Value;

use crate::error::{DashboardError, Result};

/// Client for the monitoring backend's v1 API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: reqwest::Client,
}

impl BackendClient {
    /// Create a client for the given base URL with a per-request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/v1/events/summary`
    pub async fn events_summary(&self, start: &str, end: &str) -> Result<Value> {
        self.get_json("/api/v1/events/summary", &[("start", start), ("end", end)])
            .await
    }

    /// `GET /api/v1/events/analytics`
    pub async fn events_analytics(&self, start: &str, end: &str, severity: &str) -> Result<Value> {
        self.get_json(
            "/api/v1/events/analytics",
            &[("start", start), ("end", end), ("severity", severity)],
        )
        .await
    }

    /// `GET /api/v1/channels`
    pub async fn channels(&self, start: &str, end: &str, severity: &str) -> Result<Value> {
        self.get_json(
            "/api/v1/channels",
            &[("start", start), ("end", end), ("severity", severity)],
        )
        .await
    }

    /// `GET /api/v1/channels/{id}`
    pub async fn channel_detail(
        &self,
        channel_id: &str,
        start: &str,
        end: &str,
        severity: &str,
    ) -> Result<Value> {
        self.get_json(
            &format!("/api/v1/channels/{channel_id}"),
            &[("start", start), ("end", end), ("severity", severity)],
        )
        .await
    }

    /// `GET /api/v1/date-range`
    pub async fn date_range(&self) -> Result<Value> {
        self.get_json("/api/v1/date-range", &[]).await
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Backend { status: status.as_u16() });
        }

        Ok(response.json().await?)
    }
}
