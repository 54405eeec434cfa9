//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling with a stable error kind for callers
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, ErrorKind, OptionExt};
