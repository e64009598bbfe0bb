use async_trait::async_trait;
use disapprove_database_interface::DatabaseError;
use disapprove_models::{PullRequestHandle, Username};
use shaku::{Component, HasComponent, Interface};
use tracing::{info, warn};

use super::DisapprovalStatus;
use crate::{
    use_cases::{
        auth::{can_transition, TransitionDecision},
        comments::PostAuditCommentInterface,
    },
    CoreContext, Result,
};

/// Result of a transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub status: DisapprovalStatus,
    /// `false` when the request was a no-op.
    pub changed: bool,
}

/// Set or clear the disapproval mark of a pull request on behalf of a user.
///
/// The stored state is fetched, authorized, then written with a compare-and-set.
/// When the write loses against a concurrent request, the record is read once more:
/// if it already holds the requested state the call is a no-op, otherwise it fails
/// with a concurrent modification error. Comments are only posted by the winner.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RequestDisapprovalTransitionInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        handle: PullRequestHandle,
        acting_user: &Username,
        disapproved: bool,
    ) -> Result<TransitionOutcome>;
}

#[derive(Component)]
#[shaku(interface = RequestDisapprovalTransitionInterface)]
pub(crate) struct RequestDisapprovalTransition;

#[async_trait]
impl RequestDisapprovalTransitionInterface for RequestDisapprovalTransition {
    #[tracing::instrument(
        skip(self, ctx, acting_user),
        fields(handle = %handle, acting_user = %acting_user, disapproved)
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        handle: PullRequestHandle,
        acting_user: &Username,
        disapproved: bool,
    ) -> Result<TransitionOutcome> {
        let current = ctx
            .db_service
            .pull_request_disapprovals_get_expect(handle)
            .await?;
        let configuration = ctx
            .db_service
            .repository_configurations_get_expect(handle.repository_id())
            .await?;
        let permission = ctx
            .host_service
            .user_permission_get(handle.repository_id(), acting_user)
            .await?;

        let change = match can_transition(&current.state, disapproved, acting_user, permission) {
            TransitionDecision::Allowed(change) => change,
            TransitionDecision::Denied(reason) => {
                if let Some(error) = reason.to_error(handle, acting_user) {
                    return Err(error.into());
                }

                warn!(
                    handle = %handle,
                    disapproved_by = current.disapproved_by(),
                    reason = ?reason,
                    message = "Ignoring redundant disapproval request"
                );

                return Ok(TransitionOutcome {
                    status: DisapprovalStatus::from_records(&current, &configuration),
                    changed: false,
                });
            }
        };

        let Some(new_state) = current.state.apply(&change) else {
            return Ok(TransitionOutcome {
                status: DisapprovalStatus::from_records(&current, &configuration),
                changed: false,
            });
        };

        let updated = match ctx
            .db_service
            .pull_request_disapprovals_compare_and_set(
                &current.state,
                current.clone().with_state(new_state),
            )
            .await
        {
            Ok(updated) => updated,
            Err(DatabaseError::ConcurrentModification(_)) => {
                // Single re-check: a concurrent request may have made the same flip.
                let refreshed = ctx
                    .db_service
                    .pull_request_disapprovals_get_expect(handle)
                    .await?;
                if refreshed.is_disapproved() != disapproved {
                    return Err(DatabaseError::ConcurrentModification(handle).into());
                }

                warn!(
                    handle = %handle,
                    disapproved_by = refreshed.disapproved_by(),
                    message = "Disapproval changed concurrently to the requested state"
                );

                return Ok(TransitionOutcome {
                    status: DisapprovalStatus::from_records(&refreshed, &configuration),
                    changed: false,
                });
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            handle = %handle,
            acting_user = %acting_user,
            disapproved = updated.is_disapproved(),
            message = "Disapproval changed"
        );

        let post_audit_comment: &dyn PostAuditCommentInterface = ctx.core_module.resolve_ref();
        post_audit_comment.run(ctx, handle, &change).await;

        Ok(TransitionOutcome {
            status: DisapprovalStatus::from_records(&updated, &configuration),
            changed: true,
        })
    }
}
