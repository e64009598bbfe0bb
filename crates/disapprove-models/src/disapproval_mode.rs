use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisapprovalModeError {
    /// Unknown disapproval mode.
    #[error("Unknown disapproval mode: {}, expected 'standard' or 'strict'", mode)]
    UnknownDisapprovalMode { mode: String },
}

/// Disapproval mode.
///
/// The value is only stored here; the merge check decides what it means.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Copy, Clone, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DisapprovalMode {
    /// Standard.
    #[default]
    Standard,
    /// Strict.
    Strict,
}

impl DisapprovalMode {
    /// Convert disapproval mode to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl Display for DisapprovalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for DisapprovalMode {
    type Err = DisapprovalModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl TryFrom<&str> for DisapprovalMode {
    type Error = DisapprovalModeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match &value.to_lowercase()[..] {
            "standard" => Ok(Self::Standard),
            "strict" => Ok(Self::Strict),
            _ => Err(DisapprovalModeError::UnknownDisapprovalMode {
                mode: value.to_string(),
            }),
        }
    }
}

impl TryFrom<&String> for DisapprovalMode {
    type Error = DisapprovalModeError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::try_from(&value[..])
    }
}

impl From<DisapprovalMode> for &'static str {
    fn from(mode: DisapprovalMode) -> Self {
        match mode {
            DisapprovalMode::Standard => "standard",
            DisapprovalMode::Strict => "strict",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(
            DisapprovalMode::try_from("STRICT").unwrap(),
            DisapprovalMode::Strict
        );
        assert_eq!(
            "standard".parse::<DisapprovalMode>().unwrap(),
            DisapprovalMode::Standard
        );
        assert!("lenient".parse::<DisapprovalMode>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(DisapprovalMode::Strict.to_string(), "strict");
    }
}
