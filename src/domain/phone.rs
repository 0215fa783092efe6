//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in an accepted phone number.
pub const PHONE_DIGITS: usize = 10;

/// Digits a mobile number may start with.
pub const ALLOWED_LEADING_DIGITS: [char; 4] = ['6', '7', '8', '9'];

/// Reason a phone value was rejected, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRejection {
    /// Nothing was entered.
    Missing,
    /// Not exactly ten ASCII digits.
    WrongLength,
    /// Ten digits, but the first one is not 6, 7, 8 or 9.
    InvalidPrefix,
}

impl PhoneRejection {
    /// Inline message shown under the phone input.
    pub fn message(self) -> &'static str {
        match self {
            PhoneRejection::Missing => "Phone number is required.",
            PhoneRejection::WrongLength => "Phone number must be 10 digits.",
            PhoneRejection::InvalidPrefix => "Phone number must start with 6, 7, 8, or 9.",
        }
    }
}

/// A ten-digit mobile number with a valid leading digit.
///
/// # Example
///
/// ```
/// use contact_form_client::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("91234 56789").unwrap();
/// assert_eq!(phone.as_str(), "9123456789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from user input.
    ///
    /// Formatting characters are stripped first, so `"(912) 345-6789"` is
    /// accepted as `9123456789`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the digits do not form an
    /// acceptable number.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let digits = Self::sanitize(&phone);

        match Self::check(&digits) {
            Ok(()) => Ok(Self(digits)),
            Err(_) => Err(ValidationError::InvalidPhone(phone)),
        }
    }

    /// Keep only the ASCII digits of `raw`.
    pub fn sanitize(raw: &str) -> String {
        raw.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Check a stored phone value without sanitizing it.
    pub fn check(value: &str) -> Result<(), PhoneRejection> {
        if value.trim().is_empty() {
            return Err(PhoneRejection::Missing);
        }

        if value.len() != PHONE_DIGITS || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneRejection::WrongLength);
        }

        match value.chars().next() {
            Some(first) if ALLOWED_LEADING_DIGITS.contains(&first) => Ok(()),
            _ => Err(PhoneRejection::InvalidPrefix),
        }
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
