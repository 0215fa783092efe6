//! Async wrapper around the synchronous ContactApiClient.
//!
//! HTTP calls run on tokio's blocking pool via `tokio::task::spawn_blocking`,
//! so awaiting a submit or refresh never stalls the runtime.

use crate::client::ContactApiClient;
use crate::error::{ContactApiError, ContactApiResult};
use crate::metrics::Metrics;
use crate::models::ContactRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// The two backend operations the form controller depends on.
///
/// Implemented by [`AsyncContactClient`] for real traffic and by test doubles.
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// `GET <base>/get`
    async fn list_submissions(&self) -> ContactApiResult<Vec<ContactRecord>>;

    /// `POST <base>/post`
    async fn submit(&self, record: &ContactRecord) -> ContactApiResult<()>;
}

/// Async wrapper around the synchronous ContactApiClient.
#[derive(Clone)]
pub struct AsyncContactClient {
    client: Arc<ContactApiClient>,
}

impl AsyncContactClient {
    pub fn new(client: ContactApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Counters of the wrapped client.
    pub fn metrics(&self) -> &Metrics {
        self.client.metrics()
    }
}

#[async_trait]
impl ContactApi for AsyncContactClient {
    async fn list_submissions(&self) -> ContactApiResult<Vec<ContactRecord>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_submissions())
            .await
            .map_err(|e| ContactApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn submit(&self, record: &ContactRecord) -> ContactApiResult<()> {
        let client = self.client.clone();
        let record = record.clone();

        tokio::task::spawn_blocking(move || client.submit(&record))
            .await
            .map_err(|e| ContactApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
