//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactId, ValidationError};
use thiserror::Error;

/// Errors returned by contact store mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No contact with the given id is in the collection
    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    /// The draft failed the store's validation policy
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while fetching the initial contact list.
#[derive(Error, Debug)]
pub enum LoadError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Source returned an error status code
    #[error("Source error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Source endpoint not found
    #[error("Resource not found: {0}")]
    NotFound(String),
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

/// Convenience type alias for Results with LoadError
pub type LoadResult<T> = Result<T, LoadError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
