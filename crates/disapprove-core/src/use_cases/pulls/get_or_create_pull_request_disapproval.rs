use async_trait::async_trait;
use disapprove_models::{PullRequestDisapproval, PullRequestHandle};
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetOrCreatePullRequestDisapprovalInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        handle: PullRequestHandle,
    ) -> Result<PullRequestDisapproval>;
}

#[derive(Component)]
#[shaku(interface = GetOrCreatePullRequestDisapprovalInterface)]
pub(crate) struct GetOrCreatePullRequestDisapproval;

#[async_trait]
impl GetOrCreatePullRequestDisapprovalInterface for GetOrCreatePullRequestDisapproval {
    #[tracing::instrument(skip(self, ctx), fields(handle = %handle))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        handle: PullRequestHandle,
    ) -> Result<PullRequestDisapproval> {
        Ok(ctx
            .db_service
            .pull_request_disapprovals_get_or_create(PullRequestDisapproval::new_default(handle))
            .await?)
    }
}
