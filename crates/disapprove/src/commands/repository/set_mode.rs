use async_trait::async_trait;
use clap::Parser;
use disapprove_models::{DisapprovalMode, RepositoryConfiguration};

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Set the disapproval mode of a repository, without permission checks
#[derive(Parser)]
pub(crate) struct RepositorySetModeCommand {
    /// Repository ID
    repository_id: u64,
    /// Mode (`standard` or `strict`)
    mode: DisapprovalMode,
}

#[async_trait]
impl Command for RepositorySetModeCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let configuration = ctx
            .db_service
            .repository_configurations_get_expect(self.repository_id)
            .await?;

        ctx.db_service
            .repository_configurations_update(RepositoryConfiguration {
                mode: self.mode,
                ..configuration
            })
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Mode set to '{}' for repository {}.",
            self.mode,
            self.repository_id
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use disapprove_database_interface::DbService;
    use disapprove_models::RepositoryConfiguration;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();
        ctx.db_service
            .repository_configurations_get_or_create(RepositoryConfiguration {
                repository_id: 1,
                ..Default::default()
            })
            .await?;

        assert_eq!(
            test_command(ctx, &["repositories", "set-mode", "1", "STRICT"]).await,
            "Mode set to 'strict' for repository 1.\n"
        );

        Ok(())
    }
}
