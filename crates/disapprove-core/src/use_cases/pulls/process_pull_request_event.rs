use async_trait::async_trait;
use disapprove_host_interface::types::PullRequestEvent;
use disapprove_models::PullRequestHandle;
use shaku::{Component, HasComponent, Interface};
use tracing::{debug, error};

use super::GetOrCreatePullRequestDisapprovalInterface;
use crate::{
    use_cases::repositories::GetOrCreateRepositoryConfigurationInterface, CoreContext, Result,
};

/// Make sure records exist for the repository and pull request of a lifecycle event.
///
/// Never fails: errors are logged, and the next event for the same pull request
/// will try again.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessPullRequestEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: PullRequestEvent);
}

#[derive(Component)]
#[shaku(interface = ProcessPullRequestEventInterface)]
pub(crate) struct ProcessPullRequestEvent;

#[async_trait]
impl ProcessPullRequestEventInterface for ProcessPullRequestEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            action = ?event.action,
            repository_id = event.repository_id,
            pull_request_id = event.pull_request_id
        )
    )]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: PullRequestEvent) {
        let Some(handle) = event.handle() else {
            debug!(message = "Pull request is not materialized yet, skipping");
            return;
        };

        if let Err(e) = self.provision(ctx, handle).await {
            error!(
                handle = %handle,
                error = %e,
                message = "Could not provision disapproval records"
            );
        }
    }
}

impl ProcessPullRequestEvent {
    async fn provision(&self, ctx: &CoreContext<'_>, handle: PullRequestHandle) -> Result<()> {
        let get_or_create_repository_configuration: &dyn GetOrCreateRepositoryConfigurationInterface =
            ctx.core_module.resolve_ref();
        get_or_create_repository_configuration
            .run(ctx, handle.repository_id())
            .await?;

        let get_or_create_pull_request_disapproval: &dyn GetOrCreatePullRequestDisapprovalInterface =
            ctx.core_module.resolve_ref();
        get_or_create_pull_request_disapproval
            .run(ctx, handle)
            .await?;

        Ok(())
    }
}
