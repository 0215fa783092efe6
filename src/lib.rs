//! Contact form client - validates contact entries, submits them to a form
//! backend and lists what has been submitted so far.
//!
//! # Architecture
//!
//! - **domain**: Form fields and the phone/email value objects
//! - **models**: The `ContactRecord` wire model
//! - **form**: Draft state and client-side validation
//! - **client**: HTTP client for the form backend, sync and async
//! - **controller**: `ContactFormController`, the submit/refresh cycle
//! - **notifier**: Injected user notifications
//! - **view**: Text rendering of the form and submission list
//! - **metrics**: Request counters
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod client;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod notifier;
pub mod view;

pub use client::{AsyncContactClient, ContactApi, ContactApiClient};
pub use config::Config;
pub use controller::{ContactFormController, Phase};
pub use domain::{EmailAddress, Field, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactApiError, FetchError, SubmitError};
pub use form::{FieldErrors, FormState};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::ContactRecord;
pub use notifier::{ConsoleNotifier, Notification, NotificationLevel, Notifier, TracingNotifier};
pub use view::{FormView, RecordCard, SubmissionListView};
