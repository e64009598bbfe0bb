use async_trait::async_trait;
use disapprove_models::{DisapprovalMode, RepositoryConfiguration, Username};
use shaku::{Component, Interface};
use tracing::info;

use crate::{use_cases::auth::CheckIsAdmin, CoreContext, Result};

/// Overwrite the settings of an existing repository configuration.
///
/// Only repository admins can do it, and the record must already exist.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait UpdateRepositoryConfigurationInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_id: u64,
        acting_user: &Username,
        enabled: bool,
        mode: DisapprovalMode,
    ) -> Result<RepositoryConfiguration>;
}

#[derive(Component)]
#[shaku(interface = UpdateRepositoryConfigurationInterface)]
pub(crate) struct UpdateRepositoryConfiguration;

#[async_trait]
impl UpdateRepositoryConfigurationInterface for UpdateRepositoryConfiguration {
    #[tracing::instrument(skip(self, ctx, acting_user), fields(repository_id, acting_user = %acting_user, enabled, mode = %mode))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_id: u64,
        acting_user: &Username,
        enabled: bool,
        mode: DisapprovalMode,
    ) -> Result<RepositoryConfiguration> {
        CheckIsAdmin.ensure(ctx, repository_id, acting_user).await?;

        let configuration = ctx
            .db_service
            .repository_configurations_update(RepositoryConfiguration {
                repository_id,
                enabled,
                mode,
            })
            .await?;

        info!(
            repository_id = repository_id,
            enabled = enabled,
            mode = %mode,
            message = "Repository configuration updated"
        );

        Ok(configuration)
    }
}
