use disapprove_models::PullRequestHandle;
use serde::{Deserialize, Serialize};

use super::PullRequestAction;

/// Pull request lifecycle event.
///
/// Very early events can be emitted before the host assigns an identifier to the
/// pull request, in which case `pull_request_id` is `0`.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Eq, PartialEq)]
pub struct PullRequestEvent {
    /// Action.
    pub action: PullRequestAction,
    /// Repository ID.
    pub repository_id: u64,
    /// Pull request ID.
    pub pull_request_id: u64,
}

impl PullRequestEvent {
    /// Get the pull request handle, if the pull request is materialized.
    pub fn handle(&self) -> Option<PullRequestHandle> {
        if self.pull_request_id == 0 {
            None
        } else {
            Some(PullRequestHandle::new(
                self.repository_id,
                self.pull_request_id,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unmaterialized() {
        let event = PullRequestEvent {
            action: PullRequestAction::Opened,
            repository_id: 42,
            pull_request_id: 0,
        };
        assert_eq!(event.handle(), None);
    }

    #[test]
    fn deserialize() {
        let event: PullRequestEvent = serde_json::from_str(
            r#"{"action": "reopened", "repository_id": 42, "pull_request_id": 7}"#,
        )
        .unwrap();
        assert_eq!(event.action, PullRequestAction::Reopened);
        assert_eq!(event.handle(), Some(PullRequestHandle::new(42, 7)));
    }
}
