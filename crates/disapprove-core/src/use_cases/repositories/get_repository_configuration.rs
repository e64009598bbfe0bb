use async_trait::async_trait;
use disapprove_models::{RepositoryConfiguration, Username};
use shaku::{Component, Interface};

use crate::{use_cases::auth::CheckIsAdmin, CoreContext, Result};

/// Read a repository configuration on behalf of a repository admin.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetRepositoryConfigurationInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_id: u64,
        acting_user: &Username,
    ) -> Result<RepositoryConfiguration>;
}

#[derive(Component)]
#[shaku(interface = GetRepositoryConfigurationInterface)]
pub(crate) struct GetRepositoryConfiguration;

#[async_trait]
impl GetRepositoryConfigurationInterface for GetRepositoryConfiguration {
    #[tracing::instrument(skip(self, ctx, acting_user), fields(repository_id, acting_user = %acting_user))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_id: u64,
        acting_user: &Username,
    ) -> Result<RepositoryConfiguration> {
        CheckIsAdmin.ensure(ctx, repository_id, acting_user).await?;

        Ok(ctx
            .db_service
            .repository_configurations_get_expect(repository_id)
            .await?)
    }
}
