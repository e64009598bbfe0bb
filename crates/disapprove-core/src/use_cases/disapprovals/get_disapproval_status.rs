use async_trait::async_trait;
use disapprove_models::PullRequestHandle;
use shaku::{Component, Interface};

use super::DisapprovalStatus;
use crate::{CoreContext, Result};

/// Read the disapproval status of a pull request.
///
/// Store failures are returned as is, never replaced by a default status.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetDisapprovalStatusInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        handle: PullRequestHandle,
    ) -> Result<DisapprovalStatus>;
}

#[derive(Component)]
#[shaku(interface = GetDisapprovalStatusInterface)]
pub(crate) struct GetDisapprovalStatus;

#[async_trait]
impl GetDisapprovalStatusInterface for GetDisapprovalStatus {
    #[tracing::instrument(skip(self, ctx), fields(handle = %handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        handle: PullRequestHandle,
    ) -> Result<DisapprovalStatus> {
        let disapproval = ctx
            .db_service
            .pull_request_disapprovals_get_expect(handle)
            .await?;
        let configuration = ctx
            .db_service
            .repository_configurations_get_expect(handle.repository_id())
            .await?;

        Ok(DisapprovalStatus::from_records(&disapproval, &configuration))
    }
}

#[cfg(test)]
mod tests {
    use disapprove_database_interface::{DatabaseError, DbService};
    use disapprove_models::{
        DisapprovalState, PullRequestDisapproval, RepositoryConfiguration, Username,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::{CoreContextMockDbTest, CoreContextTest},
        DomainError,
    };

    #[tokio::test]
    async fn run() {
        let ctx = CoreContextTest::new();
        ctx.db_service
            .repository_configurations_get_or_create(RepositoryConfiguration {
                repository_id: 1,
                enabled: true,
                ..Default::default()
            })
            .await
            .unwrap();
        ctx.db_service
            .pull_request_disapprovals_get_or_create(
                PullRequestDisapproval::new_default((1, 2).into()).with_state(
                    DisapprovalState::Disapproved {
                        by: Username::new("alice").unwrap(),
                    },
                ),
            )
            .await
            .unwrap();

        let status = GetDisapprovalStatus
            .run(&ctx.as_context(), (1, 2).into())
            .await
            .unwrap();
        assert_eq!(
            status,
            DisapprovalStatus {
                disapproved: true,
                disapproved_by: "alice".into(),
                enabled_for_repo: true
            }
        );
    }

    #[tokio::test]
    async fn not_provisioned() {
        let ctx = CoreContextTest::new();

        let result = GetDisapprovalStatus
            .run(&ctx.as_context(), (1, 2).into())
            .await;
        assert!(matches!(
            result,
            Err(DomainError::DatabaseError {
                source: DatabaseError::UnknownPullRequestDisapproval(_)
            })
        ));
    }

    #[tokio::test]
    async fn store_outage() {
        let mut ctx = CoreContextMockDbTest::new();
        ctx.db_service
            .expect_pull_request_disapprovals_get_expect()
            .once()
            .return_once(|_| {
                Err(DatabaseError::ImplementationError {
                    source: "connection refused".into(),
                })
            });

        let result = GetDisapprovalStatus
            .run(&ctx.as_context(), (1, 2).into())
            .await;
        assert!(matches!(
            result,
            Err(DomainError::DatabaseError {
                source: DatabaseError::ImplementationError { .. }
            })
        ));
    }
}
