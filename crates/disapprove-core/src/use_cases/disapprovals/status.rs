use disapprove_models::{PullRequestDisapproval, RepositoryConfiguration};

/// Disapproval state of a pull request, as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisapprovalStatus {
    pub disapproved: bool,
    pub disapproved_by: String,
    pub enabled_for_repo: bool,
}

impl DisapprovalStatus {
    pub fn from_records(
        disapproval: &PullRequestDisapproval,
        configuration: &RepositoryConfiguration,
    ) -> Self {
        Self {
            disapproved: disapproval.is_disapproved(),
            disapproved_by: disapproval.disapproved_by().into(),
            enabled_for_repo: configuration.enabled,
        }
    }
}
