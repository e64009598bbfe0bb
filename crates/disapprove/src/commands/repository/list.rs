use async_trait::async_trait;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List known repository configurations
#[derive(Parser)]
pub(crate) struct RepositoryListCommand;

#[async_trait]
impl Command for RepositoryListCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let configurations = ctx.db_service.repository_configurations_all().await?;
        if configurations.is_empty() {
            writeln!(ctx.writer.write().await, "No repository known.")?;
        } else {
            for configuration in configurations {
                writeln!(
                    ctx.writer.write().await,
                    "- {} (enabled: {}, mode: {})",
                    configuration.repository_id,
                    configuration.enabled,
                    configuration.mode
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use disapprove_database_interface::DbService;
    use disapprove_models::{DisapprovalMode, RepositoryConfiguration};

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run_no_repositories() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();

        assert_eq!(
            test_command(ctx, &["repositories", "list"]).await,
            "No repository known.\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();
        ctx.db_service
            .repository_configurations_get_or_create(RepositoryConfiguration {
                repository_id: 2,
                enabled: true,
                mode: DisapprovalMode::Strict,
            })
            .await?;
        ctx.db_service
            .repository_configurations_get_or_create(RepositoryConfiguration {
                repository_id: 1,
                ..Default::default()
            })
            .await?;

        assert_eq!(
            test_command(ctx, &["repositories", "list"]).await,
            "- 1 (enabled: false, mode: standard)\n- 2 (enabled: true, mode: strict)\n"
        );

        Ok(())
    }
}
