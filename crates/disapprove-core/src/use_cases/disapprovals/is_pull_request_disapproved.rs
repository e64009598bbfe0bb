use async_trait::async_trait;
use disapprove_models::PullRequestHandle;
use shaku::{Component, Interface};
use tracing::error;

use crate::CoreContext;

/// Display condition: is the pull request currently disapproved?
///
/// Any store failure answers `false`, hiding the disapproved marker.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait IsPullRequestDisapprovedInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, handle: PullRequestHandle) -> bool;
}

#[derive(Component)]
#[shaku(interface = IsPullRequestDisapprovedInterface)]
pub(crate) struct IsPullRequestDisapproved;

#[async_trait]
impl IsPullRequestDisapprovedInterface for IsPullRequestDisapproved {
    #[tracing::instrument(skip(self, ctx), fields(handle = %handle), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, handle: PullRequestHandle) -> bool {
        match ctx
            .db_service
            .pull_request_disapprovals_get_expect(handle)
            .await
        {
            Ok(disapproval) => disapproval.is_disapproved(),
            Err(e) => {
                error!(
                    handle = %handle,
                    error = %e,
                    message = "Unable to get disapproval metadata"
                );
                false
            }
        }
    }
}
