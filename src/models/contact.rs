//! Contact record exchanged with the form backend.

use crate::domain::Field;
use serde::{Deserialize, Deserializer, Serialize};

/// Accepts a string, a number, or null for the backend-assigned id.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Treats an explicit null like a missing value.
fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One contact-form submission.
///
/// Serialized as `{firstName,lastName,address,phone,email}`. On read the
/// snake_case keys (`first_name`) and the short form-input names (`fname`)
/// are accepted as well, since backends echo whichever shape they stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRecord {
    /// Backend-assigned identifier, absent on drafts
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_id")]
    pub id: Option<String>,

    #[serde(
        alias = "first_name",
        alias = "fname",
        deserialize_with = "deserialize_nullable_string"
    )]
    pub first_name: String,

    #[serde(
        alias = "last_name",
        alias = "lname",
        deserialize_with = "deserialize_nullable_string"
    )]
    pub last_name: String,

    #[serde(deserialize_with = "deserialize_nullable_string")]
    pub address: String,

    /// Ten digits once accepted by validation
    #[serde(deserialize_with = "deserialize_nullable_string")]
    pub phone: String,

    #[serde(deserialize_with = "deserialize_nullable_string")]
    pub email: String,
}

impl ContactRecord {
    /// Create a record from its five form values.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Value of a single form field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Address => &self.address,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
        }
    }

    /// Overwrite a single form field.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Address => &mut self.address,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
        };
        *slot = value;
    }

    /// `"First Last"`, trimmed when either part is empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// True when every form field is empty.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Same form values, ignoring the backend id.
    pub fn same_entry(&self, other: &ContactRecord) -> bool {
        Field::ALL
            .iter()
            .all(|field| self.get(*field) == other.get(*field))
    }
}
