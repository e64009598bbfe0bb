use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DisapprovalState, PullRequestHandle, Username, UsernameError, NO_DISAPPROVER};

#[derive(Debug, Error)]
pub enum PullRequestDisapprovalError {
    /// Stored disapproval flag and disapprover disagree.
    #[error(
        "Inconsistent disapproval record: disapproved={}, disapproved_by='{}'",
        disapproved,
        disapproved_by
    )]
    InconsistentRecord {
        disapproved: bool,
        disapproved_by: String,
    },

    #[error("Invalid disapprover: {source}")]
    InvalidDisapprover { source: UsernameError },
}

/// Disapproval record of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "PullRequestDisapprovalFields",
    into = "PullRequestDisapprovalFields"
)]
pub struct PullRequestDisapproval {
    pub repository_id: u64,
    pub pull_request_id: u64,
    pub state: DisapprovalState,
}

impl PullRequestDisapproval {
    /// Record without disapproval for a pull request.
    pub fn new_default(handle: PullRequestHandle) -> Self {
        Self {
            repository_id: handle.repository_id(),
            pull_request_id: handle.pull_request_id(),
            state: DisapprovalState::NotDisapproved,
        }
    }

    /// Rebuild a record from its stored columns.
    pub fn from_fields(
        repository_id: u64,
        pull_request_id: u64,
        disapproved: bool,
        disapproved_by: &str,
    ) -> Result<Self, PullRequestDisapprovalError> {
        let state = match (disapproved, disapproved_by == NO_DISAPPROVER) {
            (false, true) => DisapprovalState::NotDisapproved,
            (true, false) => DisapprovalState::Disapproved {
                by: Username::new(disapproved_by)
                    .map_err(|e| PullRequestDisapprovalError::InvalidDisapprover { source: e })?,
            },
            _ => {
                return Err(PullRequestDisapprovalError::InconsistentRecord {
                    disapproved,
                    disapproved_by: disapproved_by.into(),
                })
            }
        };

        Ok(Self {
            repository_id,
            pull_request_id,
            state,
        })
    }

    pub fn handle(&self) -> PullRequestHandle {
        PullRequestHandle::new(self.repository_id, self.pull_request_id)
    }

    pub fn is_disapproved(&self) -> bool {
        self.state.is_disapproved()
    }

    pub fn disapproved_by(&self) -> &str {
        self.state.disapproved_by()
    }

    pub fn with_state(mut self, state: DisapprovalState) -> Self {
        self.state = state;
        self
    }
}

/// Flat storage form, as exchanged in JSON.
#[derive(Serialize, Deserialize)]
struct PullRequestDisapprovalFields {
    repository_id: u64,
    pull_request_id: u64,
    disapproved: bool,
    disapproved_by: String,
}

impl TryFrom<PullRequestDisapprovalFields> for PullRequestDisapproval {
    type Error = PullRequestDisapprovalError;

    fn try_from(value: PullRequestDisapprovalFields) -> Result<Self, Self::Error> {
        Self::from_fields(
            value.repository_id,
            value.pull_request_id,
            value.disapproved,
            &value.disapproved_by,
        )
    }
}

impl From<PullRequestDisapproval> for PullRequestDisapprovalFields {
    fn from(value: PullRequestDisapproval) -> Self {
        Self {
            repository_id: value.repository_id,
            pull_request_id: value.pull_request_id,
            disapproved: value.is_disapproved(),
            disapproved_by: value.disapproved_by().into(),
        }
    }
}
