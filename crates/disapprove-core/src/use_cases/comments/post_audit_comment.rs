use async_trait::async_trait;
use disapprove_models::{DisapprovalChange, PullRequestHandle};
use shaku::{Component, Interface};
use tracing::error;

use super::{disapproval_comment, disapproval_removed_comment};
use crate::CoreContext;

/// Post the audit comment matching a disapproval change.
///
/// Best-effort: a failure is logged and the change stays committed.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PostAuditCommentInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        handle: PullRequestHandle,
        change: &DisapprovalChange,
    );
}

#[derive(Component)]
#[shaku(interface = PostAuditCommentInterface)]
pub(crate) struct PostAuditComment;

#[async_trait]
impl PostAuditCommentInterface for PostAuditComment {
    #[tracing::instrument(skip(self, ctx), fields(handle = %handle))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        handle: PullRequestHandle,
        change: &DisapprovalChange,
    ) {
        let base_url = &ctx.config.host.base_url;
        let body = match change {
            DisapprovalChange::Set { .. } => disapproval_comment(base_url),
            DisapprovalChange::Clear => disapproval_removed_comment(base_url),
        };

        if let Err(e) = ctx.host_service.comments_post(handle, &body).await {
            error!(
                handle = %handle,
                error = %e,
                message = "Could not post audit comment"
            );
        }
    }
}
