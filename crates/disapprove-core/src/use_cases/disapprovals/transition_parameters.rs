use disapprove_models::PullRequestHandle;

use crate::errors::ValidationError;

/// Validated transition request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionParameters {
    pub handle: PullRequestHandle,
    pub disapproved: bool,
}

impl TransitionParameters {
    /// Parse raw request parameters.
    ///
    /// Identifiers are positive integers, and the flag is `true` or `false` in any case.
    pub fn parse(
        repository_id: Option<&str>,
        pull_request_id: Option<&str>,
        disapproved: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let repository_id = Self::parse_identifier("repository_id", repository_id)?;
        let pull_request_id = Self::parse_identifier("pull_request_id", pull_request_id)?;
        let disapproved = Self::parse_flag(disapproved)?;

        Ok(Self {
            handle: PullRequestHandle::new(repository_id, pull_request_id),
            disapproved,
        })
    }

    fn parse_identifier(name: &'static str, value: Option<&str>) -> Result<u64, ValidationError> {
        let value = value.ok_or(ValidationError::MissingParameter { name })?;
        match value.trim().parse::<u64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(ValidationError::InvalidIdentifier {
                name,
                value: value.into(),
            }),
        }
    }

    fn parse_flag(value: Option<&str>) -> Result<bool, ValidationError> {
        let value = value.ok_or(ValidationError::MissingParameter {
            name: "disapproved",
        })?;

        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ValidationError::InvalidDisapprovalFlag {
                value: value.into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse() {
        assert_eq!(
            TransitionParameters::parse(Some("1"), Some("2"), Some("TRUE")),
            Ok(TransitionParameters {
                handle: PullRequestHandle::new(1, 2),
                disapproved: true
            })
        );
        assert_eq!(
            TransitionParameters::parse(Some("1"), Some("2"), Some("False")),
            Ok(TransitionParameters {
                handle: PullRequestHandle::new(1, 2),
                disapproved: false
            })
        );
    }

    #[test]
    fn parse_missing() {
        assert_eq!(
            TransitionParameters::parse(None, Some("2"), Some("true")),
            Err(ValidationError::MissingParameter {
                name: "repository_id"
            })
        );
        assert_eq!(
            TransitionParameters::parse(Some("1"), Some("2"), None),
            Err(ValidationError::MissingParameter {
                name: "disapproved"
            })
        );
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            TransitionParameters::parse(Some("abc"), Some("2"), Some("true")),
            Err(ValidationError::InvalidIdentifier {
                name: "repository_id",
                value: "abc".into()
            })
        );
        assert_eq!(
            TransitionParameters::parse(Some("1"), Some("0"), Some("true")),
            Err(ValidationError::InvalidIdentifier {
                name: "pull_request_id",
                value: "0".into()
            })
        );
        assert_eq!(
            TransitionParameters::parse(Some("1"), Some("2"), Some("yes")),
            Err(ValidationError::InvalidDisapprovalFlag {
                value: "yes".into()
            })
        );
    }

    #[test]
    fn error_message_lists_parameters() {
        let err = TransitionParameters::parse(Some("1"), None, Some("true")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing parameter 'pull_request_id', the required parameters are: repository_id(int), pull_request_id(int), disapproved(true|false)"
        );
    }
}
