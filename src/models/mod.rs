//! Data models for contact-form submissions.
//!
//! This module contains the record structure sent to and read back from the
//! form backend.

pub mod contact;

pub use contact::ContactRecord;
