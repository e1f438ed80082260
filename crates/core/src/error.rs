// Central Error Type for the Application

use crate::domain::{ContactId, DomainError};
use crate::port::{PoolError, StoreError};
use serde::Serialize;
use thiserror::Error;

/// Application-level error type
///
/// Closed set of failure kinds a service call can end with. Every variant
/// keeps its context as fields so the RPC layer can render it without
/// re-parsing messages.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("divide by zero: {dividend} / 0")]
    DivisionByZero { dividend: i64 },

    #[error(
        "unsupported API version: service implements API version '{supported}', but asked for '{requested}'"
    )]
    Unimplemented { supported: String, requested: String },

    #[error("failed to connect to database: {0}")]
    Unavailable(#[source] PoolError),

    #[error("{context}: {source}")]
    Unknown {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("contact with ID='{id}' is not found")]
    NotFound { id: ContactId },

    #[error("call cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,
}

/// Discriminant of [`AppError`], stable across releases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    DivisionByZero,
    Unimplemented,
    Unavailable,
    Unknown,
    NotFound,
    Cancelled,
    DeadlineExceeded,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::DivisionByZero => "DIVISION_BY_ZERO",
            ErrorKind::Unimplemented => "UNIMPLEMENTED",
            ErrorKind::Unavailable => "UNAVAILABLE",
            ErrorKind::Unknown => "UNKNOWN",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Cancelled => "CANCELLED",
            ErrorKind::DeadlineExceeded => "DEADLINE_EXCEEDED",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            AppError::Unimplemented { .. } => ErrorKind::Unimplemented,
            AppError::Unavailable(_) => ErrorKind::Unavailable,
            AppError::Unknown { .. } => ErrorKind::Unknown,
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::Cancelled => ErrorKind::Cancelled,
            AppError::DeadlineExceeded => ErrorKind::DeadlineExceeded,
        }
    }

    /// Only infrastructure failures are worth retrying; the backoff policy
    /// belongs to the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Unavailable(_))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DivisionByZero { dividend } => AppError::DivisionByZero { dividend },
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unimplemented_message_names_both_versions() {
        let err = AppError::Unimplemented {
            supported: "v1".to_string(),
            requested: "v2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'v1'"));
        assert!(msg.contains("'v2'"));
        assert_eq!(err.kind(), ErrorKind::Unimplemented);
    }

    #[test]
    fn test_unknown_keeps_source() {
        use std::error::Error as _;

        let err = AppError::Unknown {
            context: "failed to select from Contacts",
            source: StoreError::Query("no such table: Contacts".to_string()),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to select from Contacts"));
    }

    #[test]
    fn test_only_unavailable_is_retryable() {
        assert!(AppError::Unavailable(PoolError::Timeout).is_retryable());
        assert!(!AppError::NotFound { id: 1 }.is_retryable());
        assert!(!AppError::DeadlineExceeded.is_retryable());
    }

    #[test]
    fn test_kind_serializes_screaming_snake_case() {
        assert_eq!(ErrorKind::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorKind::DeadlineExceeded.to_string(), "DEADLINE_EXCEEDED");
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: AppError = DomainError::DivisionByZero { dividend: 9 }.into();
        assert!(matches!(err, AppError::DivisionByZero { dividend: 9 }));
    }
}
