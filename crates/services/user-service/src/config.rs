//! User record service configuration.

use std::env;
use std::str::FromStr;

use common::DatabaseConfig;

/// User record service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env_or("USER_SERVICE_DB_MAX_CONNECTIONS", defaults.max_connections),
                min_connections: env_or("USER_SERVICE_DB_MIN_CONNECTIONS", defaults.min_connections),
                connect_timeout_secs: env_or(
                    "USER_SERVICE_DB_CONNECT_TIMEOUT_SECS",
                    defaults.connect_timeout_secs,
                ),
                acquire_timeout_secs: env_or(
                    "USER_SERVICE_DB_ACQUIRE_TIMEOUT_SECS",
                    defaults.acquire_timeout_secs,
                ),
            },
        }
    }
}

/// Read and parse an env var, falling back when missing or malformed.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
