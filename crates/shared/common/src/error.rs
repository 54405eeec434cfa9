//! Unified error handling.
//!
//! Every failure leaving the service carries an [`ErrorKind`] so a routing
//! layer can map it to its own responses without string matching.

use domain::DomainError;
use thiserror::Error;

/// Coarse classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Identifier did not parse to a usable key
    InvalidIdentifier,
    /// Input rejected before reaching the store
    Validation,
    /// No record matched the identifier
    NotFound,
    /// Any other persistence failure
    StoreFailure,
}

impl ErrorKind {
    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidIdentifier => "INVALID_IDENTIFIER",
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::StoreFailure => "STORE_FAILURE",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Store errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Store error: {0}")]
    Store(String),
}

impl AppError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidIdentifier(_) => ErrorKind::InvalidIdentifier,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NotFound => ErrorKind::NotFound,
            #[cfg(feature = "database")]
            AppError::Database(_) => ErrorKind::StoreFailure,
            AppError::Store(_) => ErrorKind::StoreFailure,
        }
    }

    /// Get error code for client
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),

            // Hide details for store errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Store(msg) => {
                tracing::error!("Store error: {}", msg);
                "A database error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidIdentifier(raw) => AppError::InvalidIdentifier(raw),
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        AppError::Store(msg.into())
    }
}
