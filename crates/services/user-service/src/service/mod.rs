//! Service layer - user record use cases.

mod user_service;

pub use user_service::{UserRecordManager, UserRecordService};
