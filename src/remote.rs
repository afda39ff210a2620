//! Client for the external analytics service.
//!
//! Pain and dysautonomia entries can be sent to
//! `POST {base}/api/analytics/{endpoint}` as `{"entries": [...], "dateRange": days}`.
//! The service answers with a JSON object whose shape is its own business; only
//! the entry total, the insight list and an optional `error` are interpreted.

use crate::models::Entry;
use crate::trackers::Tracker;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

/// A tracker whose entries the analytics service understands.
pub trait RemoteAnalytics: Tracker {
    /// Last path segment of the service route.
    const ENDPOINT: &'static str;
    type Payload: Serialize + Send;

    fn payload(entry: &Entry<Self::Fields>) -> Self::Payload;
}

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("analytics service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("analytics service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("analytics service could not analyse the entries: {0}")]
    Service(String),
    #[error("analytics service sent an unreadable answer: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The service's answer, kept verbatim apart from the few fields we read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteReport {
    #[serde(default, alias = "total_episodes")]
    pub total_entries: u64,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub analysis: Map<String, Value>,
}

impl RemoteReport {
    /// Answer for an empty window; the service is not asked.
    pub fn no_data() -> Self {
        Self {
            total_entries: 0,
            insights: vec!["No entries in this time range yet.".to_string()],
            error: None,
            analysis: Map::new(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsRequest<P> {
    entries: Vec<P>,
    date_range: u32,
}

#[derive(Debug, Clone)]
pub struct RemoteAnalyticsClient {
    base_url: String,
    client: Client,
}

impl RemoteAnalyticsClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RemoteError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn endpoint<T: RemoteAnalytics>(&self) -> String {
        format!("{}/api/analytics/{}", self.base_url, T::ENDPOINT)
    }

    pub async fn analyze<T: RemoteAnalytics>(
        &self,
        entries: &[Entry<T::Fields>],
        days: u32,
    ) -> Result<RemoteReport, RemoteError> {
        if entries.is_empty() {
            return Ok(RemoteReport::no_data());
        }

        let url = self.endpoint::<T>();
        let request = AnalyticsRequest {
            entries: entries.iter().map(T::payload).collect(),
            date_range: days,
        };
        info!(tracker = T::SLUG, entries = entries.len(), "requesting remote analytics");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                error!("analytics request to {url} failed: {err}");
                RemoteError::Transport(err)
            })?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!("analytics service error: {status} - {body}");
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let report: RemoteReport = serde_json::from_str(&body).map_err(|err| {
            error!("failed to parse analytics response: {err}");
            RemoteError::Decode(err)
        })?;
        match report.error {
            Some(message) => {
                error!("analytics service reported: {message}");
                Err(RemoteError::Service(message))
            }
            None => Ok(report),
        }
    }
}
