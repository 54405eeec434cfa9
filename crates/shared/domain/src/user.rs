//! User record entity and the inputs that create or change it.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::DEFAULT_VALIDATION_MESSAGE;
use crate::error::{DomainError, DomainResult};
use crate::identifier::UserId;

/// Persisted user record.
///
/// The `id` is assigned by the store on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRecord {
    /// Store-assigned identifier
    pub id: UserId,
    /// User email address
    pub email: String,
    /// User display name
    pub name: String,
}

/// Fields required to create a user record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUserInput {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// User display name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

impl CreateUserInput {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

/// Partial update of a user record.
///
/// `None` means "leave the stored value as it is"; only `Some` fields are
/// written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUserInput {
    /// New email address
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// New display name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
}

impl UpdateUserInput {
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True when the patch names no field at all
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none()
    }
}

/// Run the declarative checks on an input and report the first failure.
///
/// Meant for the request-parsing layer in front of the service; the service
/// itself assumes inputs arrive already validated.
pub fn validate_input<T: Validate>(input: &T) -> DomainResult<()> {
    input.validate().map_err(|e| {
        let message = e
            .field_errors()
            .values()
            .next()
            .and_then(|errors| errors.first())
            .and_then(|error| error.message.as_ref())
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| DEFAULT_VALIDATION_MESSAGE.to_string());
        DomainError::validation(message)
    })
}
