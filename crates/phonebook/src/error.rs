//! Error types for phonebook.
//!
//! This module defines all error types used throughout the phonebook crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::contact::FieldKind;

/// The main error type for phonebook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to open or write the backing store for an append.
    #[error("failed to write to {path}: {source}")]
    StoreWrite {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to open or read the backing store during a scan.
    #[error("failed to read {path}: {source}")]
    StoreRead {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Input Errors ===
    /// A contact field did not pass validation.
    #[error("invalid {kind} '{value}': {}", .kind.rejection_message())]
    InvalidField {
        /// Which field was rejected.
        kind: FieldKind,
        /// The offending (trimmed) value.
        value: String,
    },

    /// The input stream ended while a prompt was waiting for a line.
    #[error("input closed before a valid answer was given")]
    InputClosed,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Console or other file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for phonebook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid field error.
    #[must_use]
    pub fn invalid_field(kind: FieldKind, value: impl Into<String>) -> Self {
        Self::InvalidField {
            kind,
            value: value.into(),
        }
    }

    /// The underlying I/O cause, without the path prefix.
    ///
    /// Console diagnostics print only the cause, the way the store reports
    /// failures to the user.
    #[must_use]
    pub fn io_cause(&self) -> Option<&std::io::Error> {
        match self {
            Self::StoreWrite { source, .. } | Self::StoreRead { source, .. } => Some(source),
            Self::Io(source) => Some(source),
            _ => None,
        }
    }
}
