//! Domain layer - User record types and identifier rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Persistence lives in the user service; error transport lives in `common`.

pub mod constants;
pub mod error;
pub mod identifier;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use identifier::{parse_identifier, UserId};
pub use user::{validate_input, CreateUserInput, UpdateUserInput, UserRecord};
