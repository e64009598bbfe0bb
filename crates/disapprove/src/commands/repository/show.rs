use async_trait::async_trait;
use clap::Parser;
use disapprove_core::use_cases::repositories::GetRepositoryConfigurationInterface;
use disapprove_models::Username;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show repository configuration on behalf of a repository admin
#[derive(Parser)]
pub(crate) struct RepositoryShowCommand {
    /// Repository ID
    repository_id: u64,
    /// Acting user
    #[clap(long)]
    user: String,
}

#[async_trait]
impl Command for RepositoryShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let acting_user = Username::new(&self.user)?;
        let get_repository_configuration: &dyn GetRepositoryConfigurationInterface =
            ctx.core_module.resolve_ref();
        let configuration = get_repository_configuration
            .run(&ctx.as_core_context(), self.repository_id, &acting_user)
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Accessing repository {}",
            self.repository_id
        )?;
        writeln!(ctx.writer.write().await, "{:#?}", configuration)?;

        Ok(())
    }
}
