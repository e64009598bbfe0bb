use async_trait::async_trait;
use disapprove_models::{PullRequestHandle, Username};
use shaku::{Component, Interface};
use tracing::error;

use crate::{use_cases::auth::can_transition, CoreContext, Result};

/// Visibility condition: would the user be allowed to flip the mark right now?
///
/// Fails closed: any error answers `false`.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CanUserDisapproveInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        handle: PullRequestHandle,
        acting_user: &Username,
    ) -> bool;
}

#[derive(Component)]
#[shaku(interface = CanUserDisapproveInterface)]
pub(crate) struct CanUserDisapprove;

#[async_trait]
impl CanUserDisapproveInterface for CanUserDisapprove {
    #[tracing::instrument(skip(self, ctx, acting_user), fields(handle = %handle, acting_user = %acting_user), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        handle: PullRequestHandle,
        acting_user: &Username,
    ) -> bool {
        match self.can_flip(ctx, handle, acting_user).await {
            Ok(allowed) => allowed,
            Err(e) => {
                error!(
                    handle = %handle,
                    error = %e,
                    message = "Unable to check disapproval permissions"
                );
                false
            }
        }
    }
}

impl CanUserDisapprove {
    async fn can_flip(
        &self,
        ctx: &CoreContext<'_>,
        handle: PullRequestHandle,
        acting_user: &Username,
    ) -> Result<bool> {
        let disapproval = ctx
            .db_service
            .pull_request_disapprovals_get_expect(handle)
            .await?;
        let permission = ctx
            .host_service
            .user_permission_get(handle.repository_id(), acting_user)
            .await?;

        Ok(can_transition(
            &disapproval.state,
            !disapproval.is_disapproved(),
            acting_user,
            permission,
        )
        .is_allowed())
    }
}
