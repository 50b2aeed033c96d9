//! # ForumError
//!
//! Centralized error handling for the Rusty-Forum core.
//! Every failure a use case can surface is one of three kinds; the HTTP
//! layer maps each kind to a status code.

use std::fmt;
use thiserror::Error;

/// The primary error type for all rf-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForumError {
    /// Payload missing a required field, or a field of the wrong type.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Thread, comment, reply or like does not exist (or is soft-deleted).
    #[error("not found: {0}")]
    NotFound(String),

    /// Resource exists but the acting owner does not own it.
    #[error("forbidden: {0}")]
    Authorization(String),
}

impl ForumError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization(message.into())
    }
}

/// Which payload check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    MissingProperty,
    DataTypeMismatch,
}

impl ValidationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::MissingProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            ValidationKind::DataTypeMismatch => "NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised at value-object construction, before any I/O.
///
/// Displays as the machine-readable code, e.g. `NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{entity}.{kind}")]
pub struct ValidationError {
    pub entity: &'static str,
    pub kind: ValidationKind,
}

impl ValidationError {
    pub fn missing(entity: &'static str) -> Self {
        Self { entity, kind: ValidationKind::MissingProperty }
    }

    pub fn mismatch(entity: &'static str) -> Self {
        Self { entity, kind: ValidationKind::DataTypeMismatch }
    }

    pub fn code(&self) -> String {
        self.to_string()
    }
}

/// A specialized Result type for Rusty-Forum logic.
pub type Result<T> = std::result::Result<T, ForumError>;
