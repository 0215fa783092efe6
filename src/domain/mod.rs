//! Domain value objects and types.
//!
//! This module contains the form field enumeration and type-safe wrappers for
//! phone numbers and email addresses. The value objects validate at
//! construction time, so an accepted phone or email always satisfies the
//! form's rules.

pub mod email;
pub mod errors;
pub mod field;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::Field;
pub use phone::{PhoneNumber, PhoneRejection};
