use async_trait::async_trait;
use disapprove_models::{
    DisapprovalState, PullRequestDisapproval, PullRequestHandle, RepositoryConfiguration,
};

use crate::{DatabaseError, Result};

/// Record store.
///
/// Records are only created through the `*_get_or_create` operations, which must be
/// atomic: concurrent calls for the same key produce a single record, and an
/// existing record is returned untouched.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DbService: Send + Sync {
    async fn health_check(&self) -> Result<()>;
    async fn pull_request_disapprovals_all(&self) -> Result<Vec<PullRequestDisapproval>>;
    /// Writes `instance` only if the stored state still equals `expected`.
    ///
    /// Fails with [`DatabaseError::ConcurrentModification`] otherwise.
    async fn pull_request_disapprovals_compare_and_set(
        &self,
        expected: &DisapprovalState,
        instance: PullRequestDisapproval,
    ) -> Result<PullRequestDisapproval>;
    async fn pull_request_disapprovals_get(
        &self,
        handle: PullRequestHandle,
    ) -> Result<Option<PullRequestDisapproval>>;
    async fn pull_request_disapprovals_get_expect(
        &self,
        handle: PullRequestHandle,
    ) -> Result<PullRequestDisapproval> {
        self.pull_request_disapprovals_get(handle)
            .await?
            .ok_or(DatabaseError::UnknownPullRequestDisapproval(handle))
    }
    async fn pull_request_disapprovals_get_or_create(
        &self,
        instance: PullRequestDisapproval,
    ) -> Result<PullRequestDisapproval>;
    async fn pull_request_disapprovals_list(
        &self,
        repository_id: u64,
    ) -> Result<Vec<PullRequestDisapproval>>;
    async fn repository_configurations_all(&self) -> Result<Vec<RepositoryConfiguration>>;
    async fn repository_configurations_get(
        &self,
        repository_id: u64,
    ) -> Result<Option<RepositoryConfiguration>>;
    async fn repository_configurations_get_expect(
        &self,
        repository_id: u64,
    ) -> Result<RepositoryConfiguration> {
        self.repository_configurations_get(repository_id)
            .await?
            .ok_or(DatabaseError::UnknownRepositoryConfiguration(repository_id))
    }
    async fn repository_configurations_get_or_create(
        &self,
        instance: RepositoryConfiguration,
    ) -> Result<RepositoryConfiguration>;
    async fn repository_configurations_update(
        &self,
        instance: RepositoryConfiguration,
    ) -> Result<RepositoryConfiguration>;
}
