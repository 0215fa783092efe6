//! Form draft state and client-side validation.

pub mod state;
pub mod validation;

pub use state::FormState;
pub use validation::{validate, validate_field, FieldErrors};
