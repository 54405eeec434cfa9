//! Domain-level errors.
//!
//! These errors represent rule violations detected before any store access.
//! They are independent of infrastructure concerns (database, transport).

use thiserror::Error;

/// Domain-specific errors for input rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier did not parse to a usable integer key
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(raw: impl Into<String>) -> Self {
        DomainError::InvalidIdentifier(raw.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
