//! Client-side validation of a contact draft.

use crate::domain::{EmailAddress, Field, PhoneNumber};
use crate::models::ContactRecord;
use std::collections::BTreeMap;

/// Inline error message per invalid field, in display order.
pub type FieldErrors = BTreeMap<Field, String>;

/// Validate every field of `draft`.
///
/// An empty map means the draft may be submitted.
pub fn validate(draft: &ContactRecord) -> FieldErrors {
    Field::ALL
        .iter()
        .filter_map(|&field| validate_field(draft, field).map(|message| (field, message)))
        .collect()
}

/// Validate a single field of `draft`, returning its error message if any.
pub fn validate_field(draft: &ContactRecord, field: Field) -> Option<String> {
    let value = draft.get(field);
    let message = match field {
        Field::FirstName => required(value, "First name is required."),
        Field::LastName => required(value, "Last name is required."),
        Field::Address => required(value, "Address is required."),
        Field::Phone => PhoneNumber::check(value).err().map(|r| r.message()),
        Field::Email => {
            if is_missing(value) {
                Some("Email is required.")
            } else if !EmailAddress::is_valid(value) {
                Some("Invalid email format.")
            } else {
                None
            }
        }
    };
    message.map(str::to_string)
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    is_missing(value).then_some(message)
}

fn is_missing(value: &str) -> bool {
    value.trim().is_empty()
}
