//! Repository layer for data access.

pub mod entities;
mod user_store;

pub use user_store::{DbUserStore, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_store::MockUserStore;
