use serde::{Deserialize, Serialize};

/// Pull request lifecycle action.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestAction {
    /// Opened.
    #[default]
    Opened,
    /// Updated (new commits or description change).
    Updated,
    /// Reviewer activity.
    Reviewed,
    /// Reopened.
    Reopened,
    /// Declined.
    Declined,
    /// Merged.
    Merged,
    /// Deleted.
    Deleted,
}
