//! The error type shared by every StaffHub crate.
//!
//! Failures are terminal typed outcomes: each carries an [`ErrorKind`] that
//! the HTTP layer maps to a status code, plus a message safe to show callers.

use std::fmt;
use thiserror::Error;

/// Message returned for every credential or token failure, whatever the cause.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Could not validate credentials";

/// Failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Unknown user or compensation record.
    NotFound,
    /// Bad credentials or an unusable bearer token.
    Authentication,
    /// The access decision engine said no.
    Authorization,
    /// Malformed or empty input.
    Validation,
    /// A request that is never allowed, such as self-promotion.
    BadRequest,
    /// The target's state forbids the action.
    Conflict,
    /// The record store failed; includes uniqueness violations.
    Database,
    /// Unusable configuration detected at startup.
    Configuration,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    /// Stable upper-case tag used in logs and `Display`.
    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Authentication => "AUTHENTICATION",
            Self::Authorization => "AUTHORIZATION",
            Self::Validation => "VALIDATION",
            Self::BadRequest => "BAD_REQUEST",
            Self::Conflict => "CONFLICT",
            Self::Database => "DATABASE",
            Self::Configuration => "CONFIGURATION",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A categorized failure with an optional underlying cause.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// Category, drives the HTTP status.
    pub kind: ErrorKind,
    /// Caller-facing text.
    pub message: String,
    /// Underlying cause, kept for logs only.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Build an error of `kind` without a cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Build an error of `kind` that remembers what caused it.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Authentication failure with a specific message, e.g. a missing header.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// The one opaque credential failure. Never says which check failed.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::Authentication, INVALID_CREDENTIALS_MESSAGE)
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Permission denied by the access decision engine.
    pub fn forbidden() -> Self {
        Self::new(ErrorKind::Authorization, "Forbidden.")
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// True for any authentication failure.
    pub fn is_invalid_credentials(&self) -> bool {
        self.kind == ErrorKind::Authentication
    }
}

// The boxed cause is not `Clone`; copies keep kind and message only.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self::new(self.kind, self.message.clone())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
