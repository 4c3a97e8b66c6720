// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error taxonomy for client operations
//!
//! Every failure surfaced by the client carries exactly one [`ErrorKind`].
//! The kind decides whether the retry executor may try the operation again.

use std::fmt;

use thiserror::Error;

/// Boxed underlying cause attached to an error
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// Closed set of failure classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A mandatory field was absent from a wire object
    FieldMissing,
    /// The caller supplied an invalid parameter
    BadArgument,
    /// An internal invariant was violated
    Bug,
    /// The remote side did not answer in time
    Timeout,
    /// The identified resource does not exist
    NotFound,
    /// Generic transport or engine-side failure
    RemoteFailure,
}

impl ErrorKind {
    /// Whether an operation failing with this kind may be attempted again
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::Timeout | ErrorKind::RemoteFailure)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::FieldMissing => "field missing",
            ErrorKind::BadArgument => "bad argument",
            ErrorKind::Bug => "bug",
            ErrorKind::Timeout => "timeout",
            ErrorKind::NotFound => "not found",
            ErrorKind::RemoteFailure => "remote failure",
        };
        f.write_str(name)
    }
}

/// Errors that can occur in client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// A mandatory field was absent during conversion
    #[error("field missing: {resource} has no {field}")]
    FieldMissing { resource: String, field: String },

    /// Invalid caller-supplied argument
    #[error("bad argument: {0}")]
    BadArgument(String),

    /// Internal invariant violated
    #[error("bug: {message}")]
    Bug {
        message: String,
        #[source]
        source: Option<BoxedCause>,
    },

    /// Remote call timed out
    #[error("timeout: {message}")]
    Timeout {
        message: String,
        #[source]
        source: Option<BoxedCause>,
    },

    /// Resource does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport or engine-side failure
    #[error("remote failure: {message}")]
    RemoteFailure {
        message: String,
        #[source]
        source: Option<BoxedCause>,
    },

    /// The retry strategies gave up; wraps the last observed error
    #[error("{operation}: giving up after {attempts} attempts: {source}")]
    RetriesExhausted {
        operation: String,
        attempts: u32,
        #[source]
        source: Box<ClientError>,
    },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn field_missing(resource: impl Into<String>, field: impl Into<String>) -> Self {
        ClientError::FieldMissing {
            resource: resource.into(),
            field: field.into(),
        }
    }

    pub fn bad_argument(message: impl Into<String>) -> Self {
        ClientError::BadArgument(message.into())
    }

    pub fn bug(message: impl Into<String>) -> Self {
        ClientError::Bug {
            message: message.into(),
            source: None,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        ClientError::Timeout {
            message: message.into(),
            source: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ClientError::NotFound(message.into())
    }

    pub fn remote(message: impl Into<String>) -> Self {
        ClientError::RemoteFailure {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an error as a `Bug`, keeping it as the cause
    pub fn wrap_bug(message: impl Into<String>, cause: impl Into<BoxedCause>) -> Self {
        ClientError::Bug {
            message: message.into(),
            source: Some(cause.into()),
        }
    }

    /// Wrap an error as a `RemoteFailure`, keeping it as the cause
    pub fn wrap_remote(message: impl Into<String>, cause: impl Into<BoxedCause>) -> Self {
        ClientError::RemoteFailure {
            message: message.into(),
            source: Some(cause.into()),
        }
    }

    /// The failure class; exhausted retries report the class of the last error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::FieldMissing { .. } => ErrorKind::FieldMissing,
            ClientError::BadArgument(_) => ErrorKind::BadArgument,
            ClientError::Bug { .. } => ErrorKind::Bug,
            ClientError::Timeout { .. } => ErrorKind::Timeout,
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::RemoteFailure { .. } => ErrorKind::RemoteFailure,
            ClientError::RetriesExhausted { source, .. } => source.kind(),
        }
    }

    /// Whether the executor may retry after this error.
    ///
    /// An error that already exhausted its retries is never retried again.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::RetriesExhausted { .. } => false,
            other => other.kind().is_retryable(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, ClientError::RetriesExhausted { .. })
    }

    /// Number of attempts made before giving up, if retries were exhausted
    pub fn attempts(&self) -> Option<u32> {
        match self {
            ClientError::RetriesExhausted { attempts, .. } => Some(*attempts),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::wrap_bug("failed to encode request body", err)
    }
}
