//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Corrupted storage is not an error here: the store recovers from it on load.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting the contact collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the snapshot
    #[error("JSON serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Rejections produced when a name/phone/email triple is checked as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is blank after trimming
    #[error("Name cannot be empty")]
    EmptyName,

    /// Email does not have the `local@domain.tld` shape
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Phone has disallowed characters or a digit count outside 7-15
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
