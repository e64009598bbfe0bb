use async_trait::async_trait;
use disapprove_models::RepositoryConfiguration;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetOrCreateRepositoryConfigurationInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_id: u64,
    ) -> Result<RepositoryConfiguration>;
}

#[derive(Component)]
#[shaku(interface = GetOrCreateRepositoryConfigurationInterface)]
pub(crate) struct GetOrCreateRepositoryConfiguration;

#[async_trait]
impl GetOrCreateRepositoryConfigurationInterface for GetOrCreateRepositoryConfiguration {
    #[tracing::instrument(skip(self, ctx), fields(repository_id))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_id: u64,
    ) -> Result<RepositoryConfiguration> {
        Ok(ctx
            .db_service
            .repository_configurations_get_or_create(RepositoryConfiguration::new_default(
                repository_id,
                ctx.config,
            ))
            .await?)
    }
}
