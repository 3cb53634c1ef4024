//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when looking things up in the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record under the given name
    #[error("Record not found in the address book: {0}")]
    RecordNotFound(String),

    /// The record exists but does not hold the given phone number
    #[error("Phone number not found in the record: {0}")]
    PhoneNotFound(String),
}

/// Errors a command handler can produce.
///
/// Every handler returns `Result<String, CommandError>`; the REPL translates
/// these into fixed user-facing strings at one central point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed input value (phone or birthday format)
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Referenced name or phone absent from the store
    #[error("{0}")]
    NotFound(#[from] BookError),

    /// Wrong number of positional arguments
    #[error("Expected {expected} argument(s), got {got}")]
    Arity { expected: usize, got: usize },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for command handler results
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
