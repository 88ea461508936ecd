//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by the contact store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No contact is stored under the given name
    #[error("Contact {0} not found.")]
    NotFound(String),
}

/// Errors a single command can end with.
///
/// None of these are fatal; the dispatcher turns each into one line of output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// An argument failed value-object validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact does not exist
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The command was given too few arguments
    #[error("{0}")]
    Usage(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
