//! Mutable draft plus its inline errors.

use super::validation::{validate_field, FieldErrors};
use crate::domain::{Field, PhoneNumber};
use crate::models::ContactRecord;

/// The in-progress form: draft values and the error shown under each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    draft: ContactRecord,
    errors: FieldErrors,
}

impl FormState {
    /// An empty form with no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft values.
    pub fn draft(&self) -> &ContactRecord {
        &self.draft
    }

    /// Current inline errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error message for one field, if it has one.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Apply a keystroke-level change to `field`.
    ///
    /// Phone input keeps digits only and is re-validated immediately, so the
    /// phone error always reflects what is stored. Other fields keep whatever
    /// error the last submit left on them.
    pub fn update(&mut self, field: Field, raw_value: &str) {
        if field == Field::Phone {
            self.draft.phone = PhoneNumber::sanitize(raw_value);
            match validate_field(&self.draft, Field::Phone) {
                Some(message) => self.errors.insert(Field::Phone, message),
                None => self.errors.remove(&Field::Phone),
            };
        } else {
            self.draft.set(field, raw_value.to_string());
        }
    }

    /// Replace all inline errors.
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Back to an empty draft with no errors.
    pub fn reset(&mut self) {
        self.draft = ContactRecord::default();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_plain_field() {
        let mut form = FormState::new();
        form.update(Field::FirstName, "Asha");
        assert_eq!(form.draft().first_name, "Asha");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_update_phone_strips_and_revalidates() {
        let mut form = FormState::new();

        form.update(Field::Phone, "(912) 34");
        assert_eq!(form.draft().phone, "91234");
        assert_eq!(form.error(Field::Phone), Some("Phone number must be 10 digits."));

        form.update(Field::Phone, "(912) 345-6789");
        assert_eq!(form.draft().phone, "9123456789");
        assert_eq!(form.error(Field::Phone), None);

        form.update(Field::Phone, "123-456-7890");
        assert_eq!(
            form.error(Field::Phone),
            Some("Phone number must start with 6, 7, 8, or 9.")
        );
    }

    #[test]
    fn test_update_keeps_other_errors() {
        let mut form = FormState::new();
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "Email is required.".to_string());
        form.set_errors(errors);

        form.update(Field::Email, "a@b.com");
        assert_eq!(form.error(Field::Email), Some("Email is required."));
    }

    #[test]
    fn test_reset() {
        let mut form = FormState::new();
        form.update(Field::Address, "12 MG Road");
        form.update(Field::Phone, "1");
        form.reset();
        assert_eq!(form, FormState::new());
    }
}
