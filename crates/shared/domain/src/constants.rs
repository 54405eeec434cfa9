//! Domain-level constants.

// =============================================================================
// Persistence
// =============================================================================

/// Maximum stored length of an email address
pub const MAX_EMAIL_LENGTH: u32 = 255;

/// Maximum stored length of a display name
pub const MAX_NAME_LENGTH: u32 = 255;

// =============================================================================
// Validation
// =============================================================================

/// Fallback message when a validator reports no text
pub const DEFAULT_VALIDATION_MESSAGE: &str = "Validation failed";
