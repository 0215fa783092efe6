//! The contact form controller.
//!
//! Owns the draft, its inline errors and the list of prior submissions, and
//! drives submit and refresh against a [`ContactApi`].

use crate::client::ContactApi;
use crate::domain::{Field, ValidationError};
use crate::error::{FetchError, SubmitError};
use crate::form::{self, FieldErrors, FormState};
use crate::models::ContactRecord;
use crate::notifier::{Notification, Notifier};
use std::sync::Arc;

/// Shown after the backend accepts a submission.
pub const SUBMITTED_MESSAGE: &str = "Form data submitted";

/// Shown for any backend failure during submit.
pub const GENERIC_ERROR_MESSAGE: &str = "Error";

/// Where the controller is in its submit cycle.
///
/// `Idle -> Validating -> (Submitting -> Idle | Error) | (Invalid -> Idle)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
    /// Last submit was blocked by validation errors.
    Invalid,
    /// Last submit reached the backend and failed.
    Error,
}

/// Form state, validation state and fetched submissions for one form.
pub struct ContactFormController {
    api: Arc<dyn ContactApi>,
    notifier: Arc<dyn Notifier>,
    form: FormState,
    records: Vec<ContactRecord>,
    phase: Phase,
    loading: bool,
    fetch_failed: bool,
}

impl ContactFormController {
    /// Create a controller with an empty draft and no records.
    ///
    /// `is_loading()` stays true until the first refresh finishes.
    pub fn new(api: Arc<dyn ContactApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            form: FormState::new(),
            records: Vec::new(),
            phase: Phase::Idle,
            loading: true,
            fetch_failed: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn draft(&self) -> &ContactRecord {
        self.form.draft()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.form.errors()
    }

    /// Submissions from the last successful refresh.
    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True until the first refresh completes.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True when the most recent refresh failed.
    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    /// Set one draft field from raw input.
    ///
    /// `name` may be a form input name (`fname`) or a record key
    /// (`firstName`, `first_name`). Phone input is reduced to its digits and
    /// re-validated on the spot.
    pub fn update_field(&mut self, name: &str, raw_value: &str) -> Result<(), ValidationError> {
        let field: Field = name.parse()?;
        self.form.update(field, raw_value);

        if matches!(self.phase, Phase::Invalid | Phase::Error) {
            self.phase = Phase::Idle;
        }
        Ok(())
    }

    /// Validate a draft without touching controller state.
    pub fn validate(draft: &ContactRecord) -> FieldErrors {
        form::validate(draft)
    }

    /// Validate the draft and, if it is clean, post it to the backend.
    ///
    /// Validation failures are stored on the form and returned without any
    /// network call. On success the draft is cleared and the list refreshed.
    /// On a backend failure the draft and errors are left as they were and
    /// the user gets a generic error notification.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        self.phase = Phase::Validating;
        let errors = Self::validate(self.form.draft());
        self.form.set_errors(errors.clone());

        if !errors.is_empty() {
            tracing::debug!("Submit blocked: {} invalid field(s)", errors.len());
            self.phase = Phase::Invalid;
            return Err(SubmitError::Invalid(errors));
        }

        self.phase = Phase::Submitting;
        let draft = self.form.draft().clone();

        match self.api.submit(&draft).await {
            Ok(()) => {
                tracing::info!("Form data submitted for {}", draft.full_name());
                self.form.reset();
                self.phase = Phase::Idle;
                self.notifier.notify(Notification::success(SUBMITTED_MESSAGE));

                if let Err(e) = self.refresh().await {
                    tracing::warn!("Refresh after submit failed: {}", e);
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!("Form submission failed: {}", e);
                self.phase = Phase::Error;
                self.notifier.notify(Notification::error(GENERIC_ERROR_MESSAGE));
                Err(SubmitError::Api(e))
            }
        }
    }

    /// Reload the submission list.
    ///
    /// On failure the previous list is kept and `fetch_failed()` turns true.
    pub async fn refresh(&mut self) -> Result<Vec<ContactRecord>, FetchError> {
        let result = self.api.list_submissions().await;
        self.loading = false;

        match result {
            Ok(records) => {
                tracing::debug!("Fetched {} submission(s)", records.len());
                self.records = records.clone();
                self.fetch_failed = false;
                Ok(records)
            }
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                self.fetch_failed = true;
                Err(FetchError(e))
            }
        }
    }
}
