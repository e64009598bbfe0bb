//! Domain errors.

use disapprove_host_interface::types::UserPermission;
use disapprove_models::{DisapprovalModeError, PullRequestHandle, UsernameError};
use thiserror::Error;

/// Expected format for transition parameters.
pub const TRANSITION_PARAMETERS_FORMAT: &str =
    "repository_id(int), pull_request_id(int), disapproved(true|false)";

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`disapprove_host_interface::HostError`].
    #[error("Host error: {source}")]
    HostError {
        source: disapprove_host_interface::HostError,
    },

    /// Wraps [`disapprove_database_interface::DatabaseError`].
    #[error("Database error: {source}")]
    DatabaseError {
        source: disapprove_database_interface::DatabaseError,
    },

    #[error("Authorization error: {source}")]
    AuthorizationError { source: AuthorizationError },

    #[error("Validation error: {source}")]
    ValidationError { source: ValidationError },
}

/// The acting user is not allowed to perform an action.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("User '{username}' needs {permission} permission on repository {repository_id}")]
    MissingPermission {
        username: String,
        repository_id: u64,
        permission: UserPermission,
    },

    #[error(
        "User '{username}' cannot remove the disapproval on {handle}, only the user who set it or a repository admin can"
    )]
    NotDisapproverOrAdmin {
        username: String,
        handle: PullRequestHandle,
    },
}

/// Malformed input, rejected before any lookup.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Missing parameter '{name}', the required parameters are: {expected}",
        expected = TRANSITION_PARAMETERS_FORMAT
    )]
    MissingParameter { name: &'static str },

    #[error(
        "Invalid value '{value}' for parameter '{name}', the required parameters are: {expected}",
        expected = TRANSITION_PARAMETERS_FORMAT
    )]
    InvalidIdentifier { name: &'static str, value: String },

    #[error("Invalid disapproval flag '{value}', expected 'true' or 'false'")]
    InvalidDisapprovalFlag { value: String },

    #[error("Invalid mode: {source}")]
    InvalidMode { source: DisapprovalModeError },

    #[error("No authenticated user")]
    Unauthenticated,

    #[error("Invalid username '{username}'")]
    InvalidUsername { username: String },
}

impl From<DisapprovalModeError> for ValidationError {
    fn from(e: DisapprovalModeError) -> Self {
        Self::InvalidMode { source: e }
    }
}

impl From<UsernameError> for ValidationError {
    fn from(e: UsernameError) -> Self {
        match e {
            UsernameError::Unauthenticated => Self::Unauthenticated,
            UsernameError::InvalidUsername { username } => Self::InvalidUsername { username },
        }
    }
}

impl From<disapprove_host_interface::HostError> for DomainError {
    fn from(e: disapprove_host_interface::HostError) -> Self {
        Self::HostError { source: e }
    }
}

impl From<disapprove_database_interface::DatabaseError> for DomainError {
    fn from(e: disapprove_database_interface::DatabaseError) -> Self {
        Self::DatabaseError { source: e }
    }
}

impl From<AuthorizationError> for DomainError {
    fn from(e: AuthorizationError) -> Self {
        Self::AuthorizationError { source: e }
    }
}

impl From<ValidationError> for DomainError {
    fn from(e: ValidationError) -> Self {
        Self::ValidationError { source: e }
    }
}

impl From<UsernameError> for DomainError {
    fn from(e: UsernameError) -> Self {
        Self::ValidationError { source: e.into() }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
