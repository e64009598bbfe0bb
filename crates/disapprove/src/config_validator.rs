//! Validation utilities.

use std::fmt::Write;

use disapprove_config::{Config, DatabaseDriver};
use disapprove_host_interface::types::UserPermission;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        // Writing to a String cannot fail
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {}", name);
    }

    let mut error = String::new();

    if config.name.is_empty() {
        _missing(&mut error, "DISAPPROVE_NAME");
    }

    // Check PG configuration
    if config.database.driver == DatabaseDriver::Postgres && config.database.pg.url.is_empty() {
        _missing(&mut error, "DISAPPROVE_DATABASE_PG_URL");
    }

    // Check null host permission
    if UserPermission::try_from(&config.host.null_permission[..]).is_err() {
        _invalid(&mut error, "DISAPPROVE_HOST_NULL_PERMISSION");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn valid_memory_configuration() {
        let mut config = Config::from_env_no_version();
        config.name = "disapprove".into();
        config.database.driver = DatabaseDriver::Memory;

        assert!(validate_configuration(&config).is_ok());
    }

    #[test]
    fn missing_variables() {
        let mut config = Config::from_env_no_version();
        config.name = String::new();
        config.database.driver = DatabaseDriver::Postgres;
        config.database.pg.url = String::new();
        config.host.null_permission = "owner".into();

        let Err(ValidationError::EnvVarsError { errors }) = validate_configuration(&config) else {
            panic!("configuration should be invalid");
        };

        assert_eq!(
            errors,
            concat!(
                "\n  - Missing env. var.: DISAPPROVE_NAME",
                "\n  - Missing env. var.: DISAPPROVE_DATABASE_PG_URL",
                "\n  - Invalid env. var.: DISAPPROVE_HOST_NULL_PERMISSION"
            )
        );
    }
}
