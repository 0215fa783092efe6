//! Form field identifiers.

use super::errors::ValidationError;
use std::fmt;
use std::str::FromStr;

/// One of the five inputs on the contact form.
///
/// Ordering follows the on-screen order, so maps keyed by `Field` iterate
/// top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Address,
    Phone,
    Email,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Address,
        Field::Phone,
        Field::Email,
    ];

    /// The input name used by the form (`fname`, `lname`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "fname",
            Field::LastName => "lname",
            Field::Address => "address",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Address => "Address",
            Field::Phone => "Phone",
            Field::Email => "Email",
        }
    }

    /// Placeholder shown while the input is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Address => "Address",
            Field::Phone => "Phone",
            Field::Email => "Email",
        }
    }

    /// Whether the input takes several lines (the address textarea).
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Address)
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    /// Accepts the form input names as well as the camelCase and snake_case
    /// record keys, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fname" | "firstname" | "first_name" => Ok(Field::FirstName),
            "lname" | "lastname" | "last_name" => Ok(Field::LastName),
            "address" => Ok(Field::Address),
            "phone" => Ok(Field::Phone),
            "email" => Ok(Field::Email),
            _ => Err(ValidationError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
