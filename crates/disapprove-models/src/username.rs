use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::NO_DISAPPROVER;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsernameError {
    /// No user is attached to the request.
    #[error("No authenticated user, please log in")]
    Unauthenticated,

    /// Username cannot be used as an identity.
    #[error("Invalid username: '{}'", username)]
    InvalidUsername { username: String },
}

/// Identity of a user on the host platform.
///
/// Never empty, and never equal to the placeholder used when no disapproval is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(value: &str) -> Result<Self, UsernameError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_DISAPPROVER) {
            return Err(UsernameError::InvalidUsername {
                username: value.into(),
            });
        }

        Ok(Self(trimmed.into()))
    }

    /// Build the acting user from the identity resolved by the host.
    pub fn from_current_user(current_user: Option<&str>) -> Result<Self, UsernameError> {
        match current_user {
            Some(u) => Self::new(u),
            None => Err(UsernameError::Unauthenticated),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Host usernames are compared case-insensitively.
    pub fn is_same_user(&self, other: &Username) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Username {
    type Error = UsernameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_placeholder_and_empty() {
        assert!(Username::new("").is_err());
        assert!(Username::new("  ").is_err());
        assert!(Username::new("none").is_err());
        assert!(Username::new("None").is_err());
        assert_eq!(Username::new(" alice ").unwrap().as_str(), "alice");
    }

    #[test]
    fn from_current_user() {
        assert_eq!(
            Username::from_current_user(None),
            Err(UsernameError::Unauthenticated)
        );
        assert_eq!(
            Username::from_current_user(Some("bob")).unwrap().as_str(),
            "bob"
        );
    }

    #[test]
    fn same_user_ignores_case() {
        let a = Username::new("Alice").unwrap();
        let b = Username::new("alice").unwrap();
        assert!(a.is_same_user(&b));
        assert!(!a.is_same_user(&Username::new("bob").unwrap()));
    }
}
