use async_trait::async_trait;
use clap::Parser;
use disapprove_core::use_cases::repositories::UpdateRepositoryConfigurationInterface;
use disapprove_models::{DisapprovalMode, Username};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Update a repository configuration on behalf of a repository admin
///
/// The acting user must be a repository admin for the host driver. With the null host
/// driver, set DISAPPROVE_HOST_NULL_PERMISSION=admin.
#[derive(Parser)]
pub(crate) struct RepositoryConfigureCommand {
    /// Repository ID
    repository_id: u64,
    /// Enable disapprovals
    #[clap(long, action = clap::ArgAction::Set)]
    enabled: bool,
    /// Mode (`standard` or `strict`)
    #[clap(long, default_value = "standard")]
    mode: DisapprovalMode,
    /// Acting user
    #[clap(long)]
    user: String,
}

#[async_trait]
impl Command for RepositoryConfigureCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let acting_user = Username::new(&self.user)?;
        let update_repository_configuration: &dyn UpdateRepositoryConfigurationInterface =
            ctx.core_module.resolve_ref();
        let configuration = update_repository_configuration
            .run(
                &ctx.as_core_context(),
                self.repository_id,
                &acting_user,
                self.enabled,
                self.mode,
            )
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Repository {} configured (enabled: {}, mode: {}).",
            configuration.repository_id,
            configuration.enabled,
            configuration.mode
        )?;

        Ok(())
    }
}
