use async_trait::async_trait;
use disapprove_models::{PullRequestHandle, Username};

use crate::{types::UserPermission, Result};

/// Host platform services consumed by the disapproval core.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HostService: Send + Sync {
    /// Get the permission level of a user on a repository.
    async fn user_permission_get(
        &self,
        repository_id: u64,
        username: &Username,
    ) -> Result<UserPermission>;
    /// Post a comment on a pull request, returning the comment ID.
    async fn comments_post(&self, handle: PullRequestHandle, body: &str) -> Result<u64>;
}
