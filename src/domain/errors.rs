//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is malformed or not a calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty."),
            Self::InvalidPhone(_) => write!(f, "Phone number must contain 10 digits."),
            Self::InvalidBirthday(_) => write!(f, "Invalid birthday format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// The raw input that failed validation, if any.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::EmptyName => None,
            Self::InvalidPhone(raw) | Self::InvalidBirthday(raw) => Some(raw),
        }
    }
}
