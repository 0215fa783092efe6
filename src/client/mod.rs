//! HTTP client for the contact form backend.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The backend exposes two endpoints under a
//! base URL: `GET <base>/get` for the submission list and `POST <base>/post`
//! for a new entry.

mod async_wrapper;
pub use async_wrapper::{AsyncContactClient, ContactApi};

use crate::config::Config;
use crate::error::{ContactApiError, ContactApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::ContactRecord;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Path of the list endpoint, relative to the base URL.
pub const LIST_PATH: &str = "/get";

/// Path of the submit endpoint, relative to the base URL.
pub const SUBMIT_PATH: &str = "/post";

/// Response envelope of the list endpoint: `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
pub struct SubmissionsResponse {
    #[serde(default)]
    pub data: Vec<ContactRecord>,
}

/// HTTP client for the contact form backend.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactApiClient {
    /// Base URL of the form backend
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactApiClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::build(base_url, Duration::from_secs(10))
    }

    fn build(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request.
    fn get(&self, path: &str) -> ContactApiResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(_) => timer.complete(),
            Err(e) => {
                tracing::error!("GET {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Execute a POST request with a JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> ContactApiResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a ContactApiError.
    fn map_error(&self, error: ureq::Error) -> ContactApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    400 | 422 => ContactApiError::InvalidRequest(message),
                    404 => ContactApiError::NotFound(message),
                    _ => ContactApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ContactApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ContactApiError::Timeout
                } else {
                    ContactApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Fetch every submission stored by the backend.
    pub fn list_submissions(&self) -> ContactApiResult<Vec<ContactRecord>> {
        let response = self.get(LIST_PATH)?;
        let body = response
            .into_string()
            .map_err(|e| ContactApiError::HttpError(e.to_string()))?;

        let submissions: SubmissionsResponse =
            serde_json::from_str(&body).map_err(ContactApiError::JsonError)?;

        self.metrics.record_records_fetched(submissions.data.len());
        Ok(submissions.data)
    }

    /// Send one entry to the backend.
    ///
    /// Any 2xx status counts as accepted; the response body is ignored.
    pub fn submit(&self, record: &ContactRecord) -> ContactApiResult<()> {
        let body = serde_json::to_value(record).map_err(ContactApiError::JsonError)?;
        self.post(SUBMIT_PATH, &body)?;

        tracing::info!("Submission accepted for {}", record.full_name());
        self.metrics.record_submission();
        Ok(())
    }
}
