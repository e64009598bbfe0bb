use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission parsing error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserPermissionError {
    /// Unknown permission.
    #[error(
        "Unknown permission: {}, expected 'admin', 'write', 'read' or 'none'",
        permission
    )]
    UnknownPermission {
        /// Unparsed value.
        permission: String,
    },
}

/// User permission on a repository.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserPermission {
    /// Admin.
    Admin,
    /// Write.
    Write,
    /// Read.
    Read,
    /// None.
    None,
}

impl UserPermission {
    /// Can read?
    pub fn can_read(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Is admin?
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn to_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Write => "write",
            Self::Read => "read",
            Self::None => "none",
        }
    }
}

impl TryFrom<&str> for UserPermission {
    type Error = UserPermissionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match &value.to_lowercase()[..] {
            "admin" => Ok(Self::Admin),
            "write" => Ok(Self::Write),
            "read" => Ok(Self::Read),
            "none" => Ok(Self::None),
            _ => Err(UserPermissionError::UnknownPermission {
                permission: value.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for UserPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{UserPermission, UserPermissionError};

    #[test]
    fn levels() {
        assert!(UserPermission::Admin.can_read());
        assert!(UserPermission::Write.can_read());
        assert!(UserPermission::Read.can_read());
        assert!(!UserPermission::None.can_read());

        assert!(UserPermission::Admin.is_admin());
        assert!(!UserPermission::Write.is_admin());
        assert!(!UserPermission::Read.is_admin());
    }

    #[test]
    fn parse() {
        assert_eq!(UserPermission::try_from("ADMIN"), Ok(UserPermission::Admin));
        assert_eq!(UserPermission::try_from("read"), Ok(UserPermission::Read));
        assert_eq!(
            UserPermission::try_from("owner"),
            Err(UserPermissionError::UnknownPermission {
                permission: "owner".into()
            })
        );
    }
}
