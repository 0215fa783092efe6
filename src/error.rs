//! Error types for the contact form client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::form::FieldErrors;
use thiserror::Error;

/// Errors that can occur when talking to the form backend.
#[derive(Error, Debug)]
pub enum ContactApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Backend returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse or build a JSON body
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Endpoint not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Backend rejected the request body
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Why a form submission did not go through.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Validation failed; nothing was sent.
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    /// The backend call failed.
    #[error("Submission failed: {0}")]
    Api(#[from] ContactApiError),
}

/// Failure to load the submission list.
#[derive(Error, Debug)]
#[error("Failed to fetch submissions: {0}")]
pub struct FetchError(#[from] pub ContactApiError);

/// Convenience type alias for Results with ContactApiError
pub type ContactApiResult<T> = Result<T, ContactApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    #[test]
    fn test_error_display() {
        let err = ContactApiError::NotFound("/form/get".to_string());
        assert_eq!(err.to_string(), "Resource not found: /form/get");

        let err = ConfigError::MissingVar("CONTACT_API_BASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: CONTACT_API_BASE_URL"
        );

        let err = FetchError(ContactApiError::Timeout);
        assert_eq!(err.to_string(), "Failed to fetch submissions: Request timeout");
    }

    #[test]
    fn test_api_error_variants() {
        let err = ContactApiError::ApiError {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[test]
    fn test_submit_error_counts_fields() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::FirstName, "First name is required.".to_string());
        errors.insert(Field::Email, "Email is required.".to_string());

        let err = SubmitError::Invalid(errors);
        assert_eq!(err.to_string(), "Form has 2 invalid field(s)");

        let err: SubmitError = ContactApiError::Timeout.into();
        assert!(matches!(err, SubmitError::Api(ContactApiError::Timeout)));
    }
}
