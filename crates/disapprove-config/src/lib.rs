//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{DatabaseDriver, DriverError};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database driver.
    pub driver: DatabaseDriver,
    /// Postgres options.
    pub pg: DatabasePgConfig,
}

#[derive(Debug, Clone)]
pub struct DatabasePgConfig {
    /// Database URL.
    pub url: String,
    /// Database pool size.
    pub pool_size: u32,
    /// Database connection timeout (in seconds)
    pub connection_timeout: u32,
}

#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Absolute base URL of the code hosting platform.
    pub base_url: String,
    /// Permission granted to every user by the null host driver.
    pub null_permission: String,
}

#[derive(Debug, Clone)]
pub struct DefaultsConfig {
    /// Is the merge check enabled on newly seen repositories?
    pub enabled: bool,
    /// Disapproval mode applied to newly seen repositories.
    pub mode: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application name.
    pub name: String,
    /// Database options.
    pub database: DatabaseConfig,
    /// Host platform options.
    pub host: HostConfig,
    /// Defaults for provisioned repository configurations.
    pub defaults: DefaultsConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            name: env_to_str("DISAPPROVE_NAME", "disapprove"),
            database: DatabaseConfig {
                driver: DatabaseDriver::from_str(&env_to_str(
                    "DISAPPROVE_DATABASE_DRIVER",
                    "memory",
                ))?,
                pg: DatabasePgConfig {
                    url: env_to_str("DISAPPROVE_DATABASE_PG_URL", ""),
                    pool_size: env_to_u32("DISAPPROVE_DATABASE_PG_POOL_SIZE", 20),
                    connection_timeout: env_to_u32("DISAPPROVE_DATABASE_PG_CONNECTION_TIMEOUT", 5),
                },
            },
            host: HostConfig {
                base_url: env_to_str("DISAPPROVE_HOST_BASE_URL", "http://localhost:7990"),
                null_permission: env_to_str("DISAPPROVE_HOST_NULL_PERMISSION", "read"),
            },
            defaults: DefaultsConfig {
                enabled: env_to_bool("DISAPPROVE_DEFAULT_ENABLED", false),
                mode: env_to_str("DISAPPROVE_DEFAULT_MODE", "standard"),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("DISAPPROVE_LOGGING_USE_BUNYAN", false),
            },
            version,
        })
    }

    /// Create configuration from environment, with a placeholder version.
    ///
    /// Falls back on default values when the driver variable is invalid.
    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into()).unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: "disapprove".into(),
            database: DatabaseConfig {
                driver: DatabaseDriver::Memory,
                pg: DatabasePgConfig {
                    url: String::new(),
                    pool_size: 20,
                    connection_timeout: 5,
                },
            },
            host: HostConfig {
                base_url: "http://localhost:7990".into(),
                null_permission: "read".into(),
            },
            defaults: DefaultsConfig {
                enabled: false,
                mode: "standard".into(),
            },
            logging: LoggingConfig { use_bunyan: false },
            version: "0.0.0".into(),
        }
    }
}

fn env_to_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
