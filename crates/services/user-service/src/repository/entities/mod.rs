//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain records.

pub mod user;
