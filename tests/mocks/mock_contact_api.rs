use async_trait::async_trait;
use contact_form_client::error::{ContactApiError, ContactApiResult};
use contact_form_client::{ContactApi, ContactRecord};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the form backend.
///
/// Accepted submissions are appended to the stored list, so a refresh after a
/// submit sees the new entry. Either endpoint can be switched to fail, and
/// every call is counted for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactApi {
    records: Arc<Mutex<Vec<ContactRecord>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_list: Arc<Mutex<bool>>,
    fail_submit: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactApi {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that already holds `records`.
    pub fn with_records(records: Vec<ContactRecord>) -> Self {
        let api = Self::new();
        *api.records.lock().unwrap() = records;
        api
    }

    /// Make `list_submissions` fail (or succeed again).
    pub fn set_fail_list(&self, fail: bool) {
        *self.fail_list.lock().unwrap() = fail;
    }

    /// Make `submit` fail (or succeed again).
    pub fn set_fail_submit(&self, fail: bool) {
        *self.fail_submit.lock().unwrap() = fail;
    }

    /// Records currently stored.
    pub fn stored(&self) -> Vec<ContactRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl ContactApi for MockContactApi {
    async fn list_submissions(&self) -> ContactApiResult<Vec<ContactRecord>> {
        self.track_call("list_submissions");

        if *self.fail_list.lock().unwrap() {
            return Err(ContactApiError::HttpError("Connection failed".to_string()));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn submit(&self, record: &ContactRecord) -> ContactApiResult<()> {
        self.track_call("submit");

        if *self.fail_submit.lock().unwrap() {
            return Err(ContactApiError::ApiError {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }

        let mut records = self.records.lock().unwrap();
        let mut stored = record.clone();
        stored.id = Some((records.len() + 1).to_string());
        records.push(stored);
        Ok(())
    }
}
